use crate::errors::VitrineResult;
use crate::models::{ProductId, Review};

/// Review persistence. Rating recompute happens in the catalog engine,
/// which reads `ratings_for` and writes the mean back through
/// [`IProductRepository::update_rating`](super::IProductRepository::update_rating).
pub trait IReviewStore: Send + Sync {
    fn add(&self, review: &Review) -> VitrineResult<()>;

    /// All star ratings recorded for a product, insertion order.
    fn ratings_for(&self, product: &ProductId) -> VitrineResult<Vec<u8>>;
}
