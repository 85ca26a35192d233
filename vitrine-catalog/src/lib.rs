//! # vitrine-catalog
//!
//! Catalog browsing engine: filtered/paginated listing, single-product
//! fetch, autosuggest search, and review intake (which recomputes the
//! product's displayed rating as the mean of all its reviews).

pub mod engine;

pub use engine::CatalogEngine;
