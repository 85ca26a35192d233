//! # vitrine-storage
//!
//! SQLite-backed implementations of `IProductRepository`, `IProfileStore`,
//! and `IReviewStore`. One mutex-guarded write connection, a round-robin
//! read pool, WAL pragmas, versioned migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StoreEngine;

use vitrine_core::errors::{StorageError, VitrineError};

/// Wrap a rusqlite failure message into the workspace error type.
pub fn to_storage_err(message: String) -> VitrineError {
    VitrineError::Storage(StorageError::Sqlite { message })
}
