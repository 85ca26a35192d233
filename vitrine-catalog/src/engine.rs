//! CatalogEngine: the read-mostly storefront surface plus review intake.

use tracing::{debug, info};

use vitrine_core::config::CatalogConfig;
use vitrine_core::errors::{AuthError, CatalogError, VitrineResult};
use vitrine_core::models::{
    CatalogFilter, CatalogPage, PageRequest, Product, ProductId, Rating, Review,
};
use vitrine_core::traits::{IIdentityVerifier, IProductRepository, IReviewStore};

/// Catalog browsing and review intake over the product repository and
/// review store.
pub struct CatalogEngine<'a> {
    products: &'a dyn IProductRepository,
    reviews: &'a dyn IReviewStore,
    identity: &'a dyn IIdentityVerifier,
    config: CatalogConfig,
}

impl<'a> CatalogEngine<'a> {
    pub fn new(
        products: &'a dyn IProductRepository,
        reviews: &'a dyn IReviewStore,
        identity: &'a dyn IIdentityVerifier,
        config: CatalogConfig,
    ) -> Self {
        Self {
            products,
            reviews,
            identity,
            config,
        }
    }

    /// Filtered, sorted, paginated catalog listing.
    pub fn list(&self, filter: &CatalogFilter, page: PageRequest) -> VitrineResult<CatalogPage> {
        let page = self.products.list(filter, page)?;
        debug!(
            total = page.total,
            page = page.page,
            returned = page.products.len(),
            "catalog listing"
        );
        Ok(page)
    }

    /// Single product fetch. `Ok(None)` when the id is unknown.
    pub fn product(&self, id: &ProductId) -> VitrineResult<Option<Product>> {
        self.products.get(id)
    }

    /// Autosuggest: case-insensitive substring search, capped small.
    /// An empty or whitespace-only term yields an empty list, not an error.
    pub fn suggest(&self, term: &str) -> VitrineResult<Vec<Product>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        self.products.search_text(term, self.config.max_suggestions)
    }

    /// Record a review and recompute the product's rating as the mean of
    /// all its review ratings. Requires a valid token.
    pub fn add_review(
        &self,
        token: Option<&str>,
        product_id: &ProductId,
        rating: u8,
        comment: &str,
    ) -> VitrineResult<Review> {
        let token = token.ok_or(AuthError::MissingToken)?;
        let user = self.identity.verify(token)?;

        if !(1..=5).contains(&rating) {
            return Err(CatalogError::RatingOutOfRange { given: rating }.into());
        }
        if self.products.get(product_id)?.is_none() {
            return Err(CatalogError::ProductNotFound {
                id: product_id.to_string(),
            }
            .into());
        }

        let review = Review::new(product_id.clone(), user, rating, comment.to_string());
        self.reviews.add(&review)?;

        let ratings = self.reviews.ratings_for(product_id)?;
        let mean = ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64;
        self.products.update_rating(product_id, Rating::new(mean))?;

        info!(
            product = %product_id,
            reviews = ratings.len(),
            rating = %Rating::new(mean),
            "review recorded"
        );
        Ok(review)
    }
}
