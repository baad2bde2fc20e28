/// Shared application state
use catalog_core::AlbumStorage;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn AlbumStorage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn AlbumStorage>) -> Self {
        Self { storage }
    }
}
