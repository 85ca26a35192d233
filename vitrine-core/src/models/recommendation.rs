use serde::{Deserialize, Serialize};

use super::product::Product;

/// Ordered recommendation output, at most
/// [`MAX_RECOMMENDATIONS`](crate::constants::MAX_RECOMMENDATIONS) products.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub products: Vec<Product>,
    /// True when the list was derived from this caller's own behavior
    /// (category affinity, or an authenticated query match) rather than
    /// global popularity.
    pub personalized: bool,
}

impl RecommendationResult {
    pub fn personalized(products: Vec<Product>) -> Self {
        Self {
            products,
            personalized: true,
        }
    }

    pub fn general(products: Vec<Product>) -> Self {
        Self {
            products,
            personalized: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
