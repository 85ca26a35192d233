//! v002: profiles, profile_views, profile_searches, profile_favorites.
//!
//! History rows carry a monotone rowid; most-recent-first reads are
//! `ORDER BY id DESC`, and the FIFO cap is enforced by a trim DELETE in
//! the same transaction as each insert.

use rusqlite::Connection;

use vitrine_core::errors::VitrineResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VitrineResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS profiles (
            user_id     TEXT PRIMARY KEY,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS profile_views (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL REFERENCES profiles(user_id) ON DELETE CASCADE,
            product_id  TEXT NOT NULL,
            at          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_views_user ON profile_views(user_id, id DESC);

        CREATE TABLE IF NOT EXISTS profile_searches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL REFERENCES profiles(user_id) ON DELETE CASCADE,
            term        TEXT NOT NULL,
            at          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_searches_user ON profile_searches(user_id, id DESC);

        CREATE TABLE IF NOT EXISTS profile_favorites (
            user_id     TEXT NOT NULL REFERENCES profiles(user_id) ON DELETE CASCADE,
            product_id  TEXT NOT NULL,
            added_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (user_id, product_id)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
