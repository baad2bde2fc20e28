//! Core error types for the album catalog
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the album catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Album not found
    #[error("album not found")]
    AlbumNotFound,

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error is the not-found signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AlbumNotFound)
    }
}
