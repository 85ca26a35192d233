//! Review persistence.

use rusqlite::{params, Connection};

use vitrine_core::errors::VitrineResult;
use vitrine_core::models::{ProductId, Review};

use crate::to_storage_err;

/// Insert a single review.
pub fn insert_review(conn: &Connection, review: &Review) -> VitrineResult<()> {
    conn.execute(
        "INSERT INTO reviews (id, product_id, user_id, rating, comment, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            review.id,
            review.product_id.0,
            review.user_id.0,
            review.rating,
            review.comment,
            review.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All star ratings for a product, insertion order.
pub fn ratings_for(conn: &Connection, product: &ProductId) -> VitrineResult<Vec<u8>> {
    let mut stmt = conn
        .prepare("SELECT rating FROM reviews WHERE product_id = ?1 ORDER BY rowid ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![product.0], |row| row.get::<_, u8>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut ratings = Vec::new();
    for row in rows {
        ratings.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(ratings)
}
