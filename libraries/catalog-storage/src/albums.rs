//! Albums vertical slice
//!
//! Every operation is a single round-trip SQL statement. Ids are stored as
//! hyphenated UUID text, timestamps go through sqlx's chrono support so they
//! round-trip with full precision.

use async_trait::async_trait;
use catalog_core::{Album, AlbumId, AlbumStorage, CatalogError, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

/// `SQLite`-backed album storage
pub struct SqliteAlbumStorage {
    pool: SqlitePool,
}

impl SqliteAlbumStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStorage for SqliteAlbumStorage {
    async fn insert(&self, album: &Album) -> Result<()> {
        sqlx::query(
            "INSERT INTO albums (id, title, artist, price, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(album.id.to_string())
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .bind(album.created_at)
        .bind(album.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogError::storage(e.to_string()))?;

        Ok(())
    }

    async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Album>> {
        let rows = sqlx::query(
            "SELECT id, title, artist, price, created_at, updated_at
             FROM albums
             ORDER BY title COLLATE NOCASE ASC
             LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::storage(e.to_string()))?;

        if rows.is_empty() {
            return Err(CatalogError::AlbumNotFound);
        }

        rows.iter().map(row_to_album).collect()
    }

    async fn find_one(&self, id: AlbumId) -> Result<Album> {
        let row = sqlx::query(
            "SELECT id, title, artist, price, created_at, updated_at
             FROM albums WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::storage(e.to_string()))?
        .ok_or(CatalogError::AlbumNotFound)?;

        row_to_album(&row)
    }

    async fn update(&self, album: &Album) -> Result<()> {
        let result = sqlx::query(
            "UPDATE albums
             SET title = ?, artist = ?, price = ?, created_at = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .bind(album.created_at)
        .bind(album.updated_at)
        .bind(album.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogError::storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::AlbumNotFound);
        }

        Ok(())
    }

    async fn remove(&self, id: AlbumId) -> Result<()> {
        let result = sqlx::query("DELETE FROM albums WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::AlbumNotFound);
        }

        Ok(())
    }
}

fn row_to_album(row: &SqliteRow) -> Result<Album> {
    let id = Uuid::parse_str(&row.get::<String, _>("id"))
        .map_err(|e| CatalogError::storage(format!("Invalid album id: {e}")))?;

    Ok(Album {
        id,
        title: row.get("title"),
        artist: row.get("artist"),
        price: row.get("price"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
    })
}
