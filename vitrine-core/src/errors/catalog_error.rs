/// Catalog-surface errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product not found: {id}")]
    ProductNotFound { id: String },

    #[error("review rating {given} outside 1..=5")]
    RatingOutOfRange { given: u8 },
}
