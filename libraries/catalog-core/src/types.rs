//! Album types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type AlbumId = Uuid;

/// A record in the album catalog.
///
/// `price` is expressed in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating or updating an album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDraft {
    pub title: String,
    pub artist: String,
    pub price: i64,
}

impl Album {
    /// Build a new album from a draft with a fresh id and timestamps.
    pub fn new(draft: AlbumDraft) -> Self {
        Self::with_timestamp(draft, Utc::now())
    }

    /// Build a new album from a draft at an explicit creation time.
    pub fn with_timestamp(draft: AlbumDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            artist: draft.artist,
            price: draft.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a draft to an existing album, refreshing `updated_at`.
    ///
    /// `created_at` and the id are preserved.
    pub fn apply(&mut self, draft: AlbumDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.artist = draft.artist;
        self.price = draft.price;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AlbumDraft {
        AlbumDraft {
            title: "Kind of Blue".to_string(),
            artist: "Miles Davis".to_string(),
            price: 4999,
        }
    }

    #[test]
    fn new_album_has_equal_timestamps() {
        let album = Album::new(draft());
        assert_eq!(album.created_at, album.updated_at);
    }

    #[test]
    fn apply_preserves_id_and_created_at() {
        let mut album = Album::new(draft());
        let id = album.id;
        let created_at = album.created_at;

        let later = created_at + chrono::Duration::seconds(60);
        album.apply(
            AlbumDraft {
                title: "Sketches of Spain".to_string(),
                artist: "Miles Davis".to_string(),
                price: 5499,
            },
            later,
        );

        assert_eq!(album.id, id);
        assert_eq!(album.created_at, created_at);
        assert_eq!(album.updated_at, later);
        assert_eq!(album.title, "Sketches of Spain");
    }

    #[test]
    fn album_serializes_with_flat_field_names() {
        let album = Album::new(draft());
        let value = serde_json::to_value(&album).unwrap();
        assert_eq!(value["title"], "Kind of Blue");
        assert_eq!(value["price"], 4999);
        assert!(value["id"].is_string());
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());
    }
}
