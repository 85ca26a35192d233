//! Error taxonomy. Each subsystem gets its own enum; `VitrineError`
//! unifies them for callers that cross crate boundaries.

pub mod auth_error;
pub mod catalog_error;
pub mod storage_error;

pub use auth_error::AuthError;
pub use catalog_error::CatalogError;
pub use storage_error::StorageError;

/// Workspace-wide result alias.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Top-level error for the Vitrine system.
#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl VitrineError {
    /// True when the caller should render a login prompt.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// True when the backing store failed and the caller may retry.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
