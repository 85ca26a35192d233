//! Data model: products, profiles, reviews, recommendation results,
//! catalog filter/pagination types.

pub mod catalog;
pub mod product;
pub mod profile;
pub mod recommendation;
pub mod review;

pub use catalog::{CatalogFilter, CatalogPage, CatalogSort, PageRequest};
pub use product::{Product, ProductId, Rating};
pub use profile::{SearchEvent, UserId, UserProfile, ViewEvent};
pub use recommendation::RecommendationResult;
pub use review::Review;
