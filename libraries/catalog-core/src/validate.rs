//! Draft validation
//!
//! Pure field checks with no state and no side effects. An empty problems
//! map means the draft is valid.

use crate::types::AlbumDraft;
use std::collections::BTreeMap;

/// Field-name to problem-description mapping for an invalid draft.
pub type Problems = BTreeMap<String, String>;

/// Check an album draft and report every invalid field.
pub fn problems(draft: &AlbumDraft) -> Problems {
    let mut problems = Problems::new();
    if draft.title.is_empty() {
        problems.insert("title".to_string(), "is empty".to_string());
    }
    if draft.artist.is_empty() {
        problems.insert("artist".to_string(), "is empty".to_string());
    }
    if draft.price <= 0 {
        problems.insert("price".to_string(), "is not greater than zero".to_string());
    }
    problems
}
