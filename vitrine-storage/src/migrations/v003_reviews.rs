//! v003: reviews table.

use rusqlite::Connection;

use vitrine_core::errors::VitrineResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VitrineResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reviews (
            id          TEXT PRIMARY KEY,
            product_id  TEXT NOT NULL REFERENCES products(id) ON DELETE CASCADE,
            user_id     TEXT NOT NULL,
            rating      INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            comment     TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_reviews_product ON reviews(product_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
