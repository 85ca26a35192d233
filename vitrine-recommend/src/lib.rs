//! # vitrine-recommend
//!
//! The recommendation engine: a short, priority-ordered decision
//! procedure over the product and profile stores.
//!
//! 1. Category affinity (authenticated callers with history)
//! 2. Query override (non-empty query with matches replaces step 1)
//! 3. Top-rated fallback

pub mod affinity;
pub mod engine;

pub use engine::RecommendationEngine;
