//! Configuration structs. Everything is dependency-injected at
//! construction time; nothing in the workspace reads the process
//! environment at call time.

pub mod auth_config;
pub mod catalog_config;
pub mod recommend_config;

pub use auth_config::AuthConfig;
pub use catalog_config::CatalogConfig;
pub use recommend_config::RecommendConfig;

use serde::{Deserialize, Serialize};

/// Default values shared across config structs.
pub mod defaults {
    pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 8;
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
    pub const DEFAULT_PER_PAGE: usize = 100;
    pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24 * 7;
}

/// Top-level configuration, one section per subsystem.
/// Loadable from TOML; missing sections fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VitrineConfig {
    pub recommend: RecommendConfig,
    pub catalog: CatalogConfig,
    pub auth: AuthConfig,
}

impl VitrineConfig {
    /// Parse a TOML document into a config, filling defaults for
    /// anything absent.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = VitrineConfig::from_toml("").unwrap();
        assert_eq!(config.recommend.max_results, 8);
        assert!(config.recommend.query_override);
        assert_eq!(config.catalog.max_suggestions, 5);
    }

    #[test]
    fn partial_toml_overrides_one_field() {
        let config = VitrineConfig::from_toml(
            "[recommend]\nmax_results = 4\nquery_override = false\n",
        )
        .unwrap();
        assert_eq!(config.recommend.max_results, 4);
        assert!(!config.recommend.query_override);
        assert_eq!(config.catalog.max_suggestions, 5);
    }
}
