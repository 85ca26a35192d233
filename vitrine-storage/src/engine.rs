//! StoreEngine — owns the ConnectionPool, implements IProductRepository,
//! IProfileStore, and IReviewStore; runs migrations at open.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use vitrine_core::errors::VitrineResult;
use vitrine_core::models::{
    CatalogFilter, CatalogPage, PageRequest, Product, ProductId, Rating, Review, UserId,
    UserProfile,
};
use vitrine_core::traits::{IProductRepository, IProfileStore, IReviewStore};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{product_ops, product_query, product_search, profile_ops, review_ops};

/// The SQLite storage engine behind all three storage traits.
pub struct StoreEngine {
    pool: ConnectionPool,
}

impl StoreEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> VitrineResult<Self> {
        let pool = ConnectionPool::open(path, 4)?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing). All reads route
    /// through the writer; in-memory read connections would be isolated
    /// databases.
    pub fn open_in_memory() -> VitrineResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> VitrineResult<()> {
        self.pool
            .writer
            .with_conn_sync(migrations::run_migrations)?;
        debug!(version = migrations::SCHEMA_VERSION, "storage ready");
        Ok(())
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> VitrineResult<T>
    where
        F: FnOnce(&Connection) -> VitrineResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn_sync(f),
        }
    }
}

impl IProductRepository for StoreEngine {
    fn create(&self, product: &Product) -> VitrineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| product_ops::insert_product(conn, product))
    }

    fn get(&self, id: &ProductId) -> VitrineResult<Option<Product>> {
        self.with_reader(|conn| product_ops::get_product(conn, id))
    }

    fn get_bulk(&self, ids: &[ProductId]) -> VitrineResult<Vec<Product>> {
        self.with_reader(|conn| product_ops::get_products_bulk(conn, ids))
    }

    fn update_rating(&self, id: &ProductId, rating: Rating) -> VitrineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| product_ops::update_rating(conn, id, rating))
    }

    fn find_by_categories(
        &self,
        categories: &HashSet<String>,
        excluding: &HashSet<ProductId>,
        limit: usize,
    ) -> VitrineResult<Vec<Product>> {
        self.with_reader(|conn| product_query::find_by_categories(conn, categories, excluding, limit))
    }

    fn search_text(&self, query: &str, limit: usize) -> VitrineResult<Vec<Product>> {
        self.with_reader(|conn| product_search::search_text(conn, query, limit))
    }

    fn top_rated(&self, limit: usize) -> VitrineResult<Vec<Product>> {
        self.with_reader(|conn| product_query::top_rated(conn, limit))
    }

    fn list(&self, filter: &CatalogFilter, page: PageRequest) -> VitrineResult<CatalogPage> {
        self.with_reader(|conn| product_query::list_products(conn, filter, page))
    }
}

impl IProfileStore for StoreEngine {
    fn get(&self, user: &UserId) -> VitrineResult<Option<UserProfile>> {
        self.with_reader(|conn| profile_ops::get_profile(conn, user))
    }

    fn append_view(&self, user: &UserId, product: &ProductId) -> VitrineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| profile_ops::append_view(conn, user, product))
    }

    fn append_search(&self, user: &UserId, term: &str) -> VitrineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| profile_ops::append_search(conn, user, term))
    }

    fn toggle_favorite(&self, user: &UserId, product: &ProductId) -> VitrineResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| profile_ops::toggle_favorite(conn, user, product))
    }
}

impl IReviewStore for StoreEngine {
    fn add(&self, review: &Review) -> VitrineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| review_ops::insert_review(conn, review))
    }

    fn ratings_for(&self, product: &ProductId) -> VitrineResult<Vec<u8>> {
        self.with_reader(|conn| review_ops::ratings_for(conn, product))
    }
}
