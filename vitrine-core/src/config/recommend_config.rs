use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Maximum products per recommendation response.
    pub max_results: usize,
    /// When true, a non-empty query that matches products replaces the
    /// category-affinity result. When false, affinity results are kept
    /// and the query only fills the fallback path.
    pub query_override: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_results: defaults::DEFAULT_MAX_RECOMMENDATIONS,
            query_override: true,
        }
    }
}
