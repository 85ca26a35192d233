//! In-memory implementations of the Vitrine storage and identity traits,
//! plus sample catalog builders. Shared by tests across crates.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use chrono::Utc;
use dashmap::DashMap;

use vitrine_core::errors::{AuthError, StorageError, VitrineError, VitrineResult};
use vitrine_core::models::{
    CatalogFilter, CatalogPage, CatalogSort, PageRequest, Product, ProductId, Rating, Review,
    UserId, UserProfile,
};
use vitrine_core::traits::{IIdentityVerifier, IProductRepository, IProfileStore, IReviewStore};

/// Build a product with the fields tests care about; everything else
/// gets a placeholder.
pub fn product(id: &str, name: &str, category: &str, rating: f64) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        category: category.to_string(),
        price: 19.99,
        rating: Rating::new(rating),
        image: format!("https://img.example/{id}.jpg"),
        description: format!("{name} ({category})"),
        created_at: Utc::now(),
    }
}

/// A small cross-category catalog with distinct ratings.
pub fn sample_products() -> Vec<Product> {
    vec![
        product("p1", "Wireless Headphones", "Electronics", 4.8),
        product("p2", "Smart Watch", "Electronics", 4.5),
        product("p3", "Bluetooth Speaker", "Electronics", 4.1),
        product("p4", "Yoga Mat", "Sports", 4.7),
        product("p5", "Running Shoes", "Sports", 4.3),
        product("p6", "Ceramic Mug", "Home", 4.6),
        product("p7", "Desk Lamp", "Home", 3.9),
        product("p8", "Notebook Set", "Office", 4.2),
        product("p9", "Standing Desk", "Office", 4.4),
        product("p10", "Espresso Maker", "Home", 4.9),
    ]
}

fn unavailable() -> VitrineError {
    VitrineError::Storage(StorageError::Sqlite {
        message: "injected failure".to_string(),
    })
}

/// In-memory product repository. Keeps insertion order so rating ties
/// break the same way the SQLite adapter's rowid does.
#[derive(Default)]
pub struct MemoryCatalog {
    products: RwLock<Vec<Product>>,
    fail: AtomicBool,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a storage error.
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> VitrineResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(unavailable())
        } else {
            Ok(())
        }
    }

    fn snapshot(&self) -> Vec<Product> {
        self.products.read().expect("lock poisoned").clone()
    }
}

fn by_rating_desc(products: &mut Vec<Product>) {
    // Stable sort: equal ratings keep insertion order.
    products.sort_by(|a, b| a.rating.cmp_desc(b.rating));
}

impl IProductRepository for MemoryCatalog {
    fn create(&self, product: &Product) -> VitrineResult<()> {
        self.check()?;
        self.products
            .write()
            .expect("lock poisoned")
            .push(product.clone());
        Ok(())
    }

    fn get(&self, id: &ProductId) -> VitrineResult<Option<Product>> {
        self.check()?;
        Ok(self.snapshot().into_iter().find(|p| &p.id == id))
    }

    fn get_bulk(&self, ids: &[ProductId]) -> VitrineResult<Vec<Product>> {
        self.check()?;
        let wanted: HashSet<&ProductId> = ids.iter().collect();
        let mut found: Vec<Product> = self
            .snapshot()
            .into_iter()
            .filter(|p| wanted.contains(&p.id))
            .collect();
        by_rating_desc(&mut found);
        Ok(found)
    }

    fn update_rating(&self, id: &ProductId, rating: Rating) -> VitrineResult<()> {
        self.check()?;
        let mut products = self.products.write().expect("lock poisoned");
        if let Some(p) = products.iter_mut().find(|p| &p.id == id) {
            p.rating = rating;
        }
        Ok(())
    }

    fn find_by_categories(
        &self,
        categories: &HashSet<String>,
        excluding: &HashSet<ProductId>,
        limit: usize,
    ) -> VitrineResult<Vec<Product>> {
        self.check()?;
        let mut matches: Vec<Product> = self
            .snapshot()
            .into_iter()
            .filter(|p| categories.contains(&p.category) && !excluding.contains(&p.id))
            .collect();
        by_rating_desc(&mut matches);
        matches.truncate(limit);
        Ok(matches)
    }

    fn search_text(&self, query: &str, limit: usize) -> VitrineResult<Vec<Product>> {
        self.check()?;
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let mut matches: Vec<Product> = self
            .snapshot()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .collect();
        by_rating_desc(&mut matches);
        matches.truncate(limit);
        Ok(matches)
    }

    fn top_rated(&self, limit: usize) -> VitrineResult<Vec<Product>> {
        self.check()?;
        let mut all = self.snapshot();
        by_rating_desc(&mut all);
        all.truncate(limit);
        Ok(all)
    }

    fn list(&self, filter: &CatalogFilter, page: PageRequest) -> VitrineResult<CatalogPage> {
        self.check()?;
        let mut matches: Vec<Product> = self
            .snapshot()
            .into_iter()
            .filter(|p| {
                filter.category.as_ref().map_or(true, |c| &p.category == c)
                    && filter.min_price.map_or(true, |min| p.price >= min)
                    && filter.max_price.map_or(true, |max| p.price <= max)
                    && filter.min_rating.map_or(true, |min| p.rating.value() >= min)
            })
            .collect();

        match filter.sort {
            CatalogSort::Newest => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            CatalogSort::PriceAsc => {
                matches.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap())
            }
            CatalogSort::PriceDesc => {
                matches.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap())
            }
            CatalogSort::RatingDesc => by_rating_desc(&mut matches),
            CatalogSort::NameAsc => matches.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        let total = matches.len();
        let products: Vec<Product> = matches
            .into_iter()
            .skip(page.offset())
            .take(page.per_page)
            .collect();

        Ok(CatalogPage {
            products,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

/// In-memory profile store over DashMap.
#[derive(Default)]
pub struct MemoryProfiles {
    profiles: DashMap<UserId, UserProfile>,
    fail: AtomicBool,
}

impl MemoryProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> VitrineResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(unavailable())
        } else {
            Ok(())
        }
    }

    /// Seed a profile directly (bypassing the capped-append path).
    pub fn insert(&self, profile: UserProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }
}

impl IProfileStore for MemoryProfiles {
    fn get(&self, user: &UserId) -> VitrineResult<Option<UserProfile>> {
        self.check()?;
        Ok(self.profiles.get(user).map(|r| r.clone()))
    }

    fn append_view(&self, user: &UserId, product: &ProductId) -> VitrineResult<()> {
        self.check()?;
        let mut entry = self
            .profiles
            .entry(user.clone())
            .or_insert_with(|| UserProfile::new(user.clone()));
        entry.record_view(product.clone(), Utc::now());
        Ok(())
    }

    fn append_search(&self, user: &UserId, term: &str) -> VitrineResult<()> {
        self.check()?;
        let mut entry = self
            .profiles
            .entry(user.clone())
            .or_insert_with(|| UserProfile::new(user.clone()));
        entry.record_search(term, Utc::now());
        Ok(())
    }

    fn toggle_favorite(&self, user: &UserId, product: &ProductId) -> VitrineResult<bool> {
        self.check()?;
        let mut entry = self
            .profiles
            .entry(user.clone())
            .or_insert_with(|| UserProfile::new(user.clone()));
        Ok(entry.toggle_favorite(product))
    }
}

/// In-memory review store.
#[derive(Default)]
pub struct MemoryReviews {
    reviews: DashMap<ProductId, Vec<Review>>,
}

impl MemoryReviews {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IReviewStore for MemoryReviews {
    fn add(&self, review: &Review) -> VitrineResult<()> {
        self.reviews
            .entry(review.product_id.clone())
            .or_default()
            .push(review.clone());
        Ok(())
    }

    fn ratings_for(&self, product: &ProductId) -> VitrineResult<Vec<u8>> {
        Ok(self
            .reviews
            .get(product)
            .map(|r| r.iter().map(|rev| rev.rating).collect())
            .unwrap_or_default())
    }
}

/// Token table verifier: a token string maps straight to a user id.
#[derive(Default)]
pub struct StaticVerifier {
    tokens: DashMap<String, UserId>,
}

impl StaticVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for a user and return it.
    pub fn grant(&self, user: &UserId) -> String {
        let token = format!("token-{}", uuid::Uuid::new_v4());
        self.tokens.insert(token.clone(), user.clone());
        token
    }
}

impl IIdentityVerifier for StaticVerifier {
    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        self.tokens
            .get(token)
            .map(|r| r.clone())
            .ok_or(AuthError::InvalidToken)
    }
}
