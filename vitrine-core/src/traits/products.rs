use std::collections::HashSet;

use crate::errors::VitrineResult;
use crate::models::{CatalogFilter, CatalogPage, PageRequest, Product, ProductId, Rating};

/// Product catalog access: CRUD + the three ranked queries the
/// recommendation engine composes over.
///
/// Ordering contract: every ranked query sorts by rating descending and
/// breaks ties by the store's stable natural order (insertion order for
/// the SQLite adapter). Callers never re-sort.
pub trait IProductRepository: Send + Sync {
    // --- CRUD ---
    fn create(&self, product: &Product) -> VitrineResult<()>;
    fn get(&self, id: &ProductId) -> VitrineResult<Option<Product>>;
    fn get_bulk(&self, ids: &[ProductId]) -> VitrineResult<Vec<Product>>;
    fn update_rating(&self, id: &ProductId, rating: Rating) -> VitrineResult<()>;

    // --- Ranked queries ---
    /// Products whose category is in `categories`, excluding the given
    /// ids, rating descending, at most `limit`.
    fn find_by_categories(
        &self,
        categories: &HashSet<String>,
        excluding: &HashSet<ProductId>,
        limit: usize,
    ) -> VitrineResult<Vec<Product>>;

    /// Case-insensitive substring match over name, category, and
    /// description; rating descending, at most `limit`.
    fn search_text(&self, query: &str, limit: usize) -> VitrineResult<Vec<Product>>;

    /// Globally top-rated products, at most `limit`.
    fn top_rated(&self, limit: usize) -> VitrineResult<Vec<Product>>;

    // --- Catalog listing ---
    fn list(&self, filter: &CatalogFilter, page: PageRequest) -> VitrineResult<CatalogPage>;
}
