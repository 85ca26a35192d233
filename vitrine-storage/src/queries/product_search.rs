//! Case-insensitive substring search over name, category, description.
//!
//! Uses `instr(lower(col), lower(term))` rather than LIKE so that `%`
//! and `_` in user input stay literal.

use rusqlite::Connection;

use vitrine_core::errors::VitrineResult;
use vitrine_core::models::Product;

use super::product_ops::PRODUCT_COLUMNS;
use super::product_query::collect_products;

/// Substring search, rating descending, at most `limit`.
/// An empty or whitespace-only term matches nothing.
pub fn search_text(conn: &Connection, query: &str, limit: usize) -> VitrineResult<Vec<Product>> {
    let term = query.trim();
    if term.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products
         WHERE instr(lower(name), lower(?1)) > 0
            OR instr(lower(category), lower(?1)) > 0
            OR instr(lower(description), lower(?1)) > 0
         ORDER BY rating DESC, rowid ASC LIMIT {limit}"
    );

    collect_products(conn, &sql, rusqlite::params![term])
}
