//! Storage trait for the album catalog

use crate::error::Result;
use crate::types::{Album, AlbumId};
use async_trait::async_trait;

/// Album storage operations
///
/// This trait abstracts storage so handlers depend on an interface rather
/// than a concrete database. The catalog-storage crate provides the `SQLite`
/// implementation.
#[async_trait]
pub trait AlbumStorage: Send + Sync {
    /// Insert a new album.
    async fn insert(&self, album: &Album) -> Result<()>;

    /// Find albums within `offset` and `limit`, ordered by title
    /// (case-insensitive, ascending).
    ///
    /// Returns `CatalogError::AlbumNotFound` if no album falls within
    /// `offset` and `limit`.
    async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Album>>;

    /// Find the album with the given id.
    ///
    /// Returns `CatalogError::AlbumNotFound` if there is no such album.
    async fn find_one(&self, id: AlbumId) -> Result<Album>;

    /// Overwrite the stored album whose id equals `album.id`.
    ///
    /// Returns `CatalogError::AlbumNotFound` if there is no such album.
    async fn update(&self, album: &Album) -> Result<()>;

    /// Remove the album with the given id.
    ///
    /// Returns `CatalogError::AlbumNotFound` if there is no such album.
    async fn remove(&self, id: AlbumId) -> Result<()>;
}
