//! SQL for each trait surface, one module per concern.

pub mod product_ops;
pub mod product_query;
pub mod product_search;
pub mod profile_ops;
pub mod review_ops;
