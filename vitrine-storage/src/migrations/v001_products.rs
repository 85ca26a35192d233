//! v001: products table + rating/category indexes.

use rusqlite::Connection;

use vitrine_core::errors::VitrineResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VitrineResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS products (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            category    TEXT NOT NULL,
            price       REAL NOT NULL,
            rating      REAL NOT NULL DEFAULT 0.0,
            image       TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_products_rating ON products(rating DESC);
        CREATE INDEX IF NOT EXISTS idx_products_category ON products(category);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
