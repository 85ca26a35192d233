use serde::{Deserialize, Serialize};

use super::defaults;

/// Identity verification configuration. The signing secret is injected
/// here by the embedding application, never read from the environment
/// inside the workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC signing secret for HS256 tokens.
    pub secret: String,
    /// Issued-token lifetime in hours.
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_ttl_hours: defaults::DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}
