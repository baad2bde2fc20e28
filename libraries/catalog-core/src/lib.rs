//! Album Catalog Core
//!
//! Domain types, validation, and error handling for the album catalog.
//!
//! This crate defines:
//! - **Domain Types**: `Album` and the `AlbumDraft` request payload
//! - **Storage Trait**: `AlbumStorage`, implemented by the storage crate
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use catalog_core::types::{Album, AlbumDraft};
//!
//! let draft = AlbumDraft {
//!     title: "Blue Train".to_string(),
//!     artist: "John Coltrane".to_string(),
//!     price: 5699,
//! };
//! assert!(catalog_core::validate::problems(&draft).is_empty());
//!
//! let album = Album::new(draft);
//! assert_eq!(album.created_at, album.updated_at);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use storage::AlbumStorage;
pub use types::{Album, AlbumDraft, AlbumId};
