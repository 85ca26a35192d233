use serde::{Deserialize, Serialize};

use super::product::Product;

/// Sort orders for catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogSort {
    /// Newest first (creation time descending).
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    NameAsc,
}

/// Optional filters applied to catalog listing. All bounds are inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub sort: CatalogSort,
}

/// Skip/limit pagination request. Pages are 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
        }
    }
}

/// One page of catalog results plus pagination totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub page: usize,
    pub per_page: usize,
    /// Total rows matching the filter, across all pages.
    pub total: usize,
}

impl CatalogPage {
    /// Total number of pages for this filter.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_is_one_based() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        // Page 0 is coerced to page 1.
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
    }

    #[test]
    fn page_count_rounds_up() {
        let page = CatalogPage {
            products: Vec::new(),
            page: 1,
            per_page: 10,
            total: 25,
        };
        assert_eq!(page.page_count(), 3);
    }
}
