use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::ProductId;
use super::profile::UserId;

/// A product review. Ratings are whole stars, 1 through 5; the product's
/// displayed rating is the mean over all of its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub product_id: ProductId,
    pub user_id: UserId,
    /// Whole-star rating in [1, 5].
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(product_id: ProductId, user_id: UserId, rating: u8, comment: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            product_id,
            user_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}
