//! Versioned schema migrations, tracked via `PRAGMA user_version`.

pub mod v001_products;
pub mod v002_profiles;
pub mod v003_reviews;

use rusqlite::Connection;
use tracing::info;

use vitrine_core::errors::{StorageError, VitrineError, VitrineResult};

use crate::to_storage_err;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 3;

/// Run all pending migrations in order.
pub fn run_migrations(conn: &Connection) -> VitrineResult<()> {
    let current = user_version(conn)?;

    let steps: &[(u32, fn(&Connection) -> VitrineResult<()>)] = &[
        (1, v001_products::migrate),
        (2, v002_profiles::migrate),
        (3, v003_reviews::migrate),
    ];

    for (version, migrate) in steps {
        if current >= *version {
            continue;
        }
        migrate(conn).map_err(|e| {
            VitrineError::Storage(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;
        set_user_version(conn, *version)?;
        info!(version, "applied migration");
    }

    Ok(())
}

fn user_version(conn: &Connection) -> VitrineResult<u32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn set_user_version(conn: &Connection, version: u32) -> VitrineResult<()> {
    // PRAGMA does not support bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {version}"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
