//! The single write connection. SQLite allows one writer at a time;
//! serializing writes behind a mutex avoids SQLITE_BUSY churn.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use vitrine_core::errors::{StorageError, VitrineError, VitrineResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Mutex-guarded writer connection.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the writer for the given database file.
    pub fn open(path: &Path) -> VitrineResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory writer (for testing).
    pub fn open_in_memory() -> VitrineResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the writer.
    pub fn with_conn_sync<F, T>(&self, f: F) -> VitrineResult<T>
    where
        F: FnOnce(&Connection) -> VitrineResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| VitrineError::Storage(StorageError::PoolPoisoned))?;
        f(&guard)
    }
}
