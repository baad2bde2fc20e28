//! Catalog Server Library
//!
//! REST API over the album catalog: five CRUD endpoints plus a health check.
//!
//! This library exposes the router and core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with middleware applied.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        // Albums
        .route("/albums", post(api::albums::create_album))
        .route("/albums", get(api::albums::list_albums))
        .route("/albums/:album_id", get(api::albums::get_album))
        .route("/albums/:album_id", put(api::albums::update_album))
        .route("/albums/:album_id", delete(api::albums::delete_album))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
