use serde::{Deserialize, Serialize};

use super::defaults;

/// Catalog engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Autosuggest result cap.
    pub max_suggestions: usize,
    /// Default page size for listing.
    pub default_per_page: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_suggestions: defaults::DEFAULT_MAX_SUGGESTIONS,
            default_per_page: defaults::DEFAULT_PER_PAGE,
        }
    }
}
