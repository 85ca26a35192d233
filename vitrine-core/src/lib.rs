//! # vitrine-core
//!
//! Foundation crate for the Vitrine storefront system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AuthConfig, CatalogConfig, RecommendConfig, VitrineConfig};
pub use errors::{AuthError, CatalogError, StorageError, VitrineError, VitrineResult};
pub use models::{
    CatalogFilter, CatalogPage, CatalogSort, PageRequest, Product, ProductId, Rating,
    RecommendationResult, Review, SearchEvent, UserId, UserProfile, ViewEvent,
};
