//! Insert, get, bulk get, rating update for products.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use vitrine_core::errors::VitrineResult;
use vitrine_core::models::{Product, ProductId, Rating};

use crate::to_storage_err;

/// Column list shared by every product SELECT. Order matters:
/// `parse_product_row` indexes into it.
pub(crate) const PRODUCT_COLUMNS: &str =
    "id, name, category, price, rating, image, description, created_at";

/// Parse one row of `PRODUCT_COLUMNS` into a Product.
pub(crate) fn parse_product_row(row: &Row) -> VitrineResult<Product> {
    let created_at: String = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| to_storage_err(format!("bad created_at: {e}")))?
        .with_timezone(&Utc);

    Ok(Product {
        id: ProductId(row.get(0).map_err(|e| to_storage_err(e.to_string()))?),
        name: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        category: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        price: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        rating: Rating::new(row.get(4).map_err(|e| to_storage_err(e.to_string()))?),
        image: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        description: row.get(6).map_err(|e| to_storage_err(e.to_string()))?,
        created_at,
    })
}

/// Insert a single product.
pub fn insert_product(conn: &Connection, product: &Product) -> VitrineResult<()> {
    conn.execute(
        "INSERT INTO products (id, name, category, price, rating, image, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            product.id.0,
            product.name,
            product.category,
            product.price,
            product.rating.value(),
            product.image,
            product.description,
            product.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Fetch a product by id, `Ok(None)` when absent.
pub fn get_product(conn: &Connection, id: &ProductId) -> VitrineResult<Option<Product>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![id.0], |row| Ok(parse_product_row(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => Ok(Some(row.map_err(|e| to_storage_err(e.to_string()))??)),
        None => Ok(None),
    }
}

/// Fetch products by id set, rating descending. Missing ids are skipped.
pub fn get_products_bulk(conn: &Connection, ids: &[ProductId]) -> VitrineResult<Vec<Product>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let marks = vec!["?"; ids.len()].join(", ");
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE id IN ({marks})
             ORDER BY rating DESC, rowid ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let binds = ids.iter().map(|id| id.as_str());
    let rows = stmt
        .query_map(rusqlite::params_from_iter(binds), |row| {
            Ok(parse_product_row(row))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(results)
}

/// Overwrite a product's rating (review intake recomputes the mean).
pub fn update_rating(conn: &Connection, id: &ProductId, rating: Rating) -> VitrineResult<()> {
    conn.execute(
        "UPDATE products SET rating = ?1 WHERE id = ?2",
        params![rating.value(), id.0],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
