//! Shared helpers for server integration tests

use axum::Router;
use catalog_core::AlbumStorage;
use catalog_server::AppState;
use catalog_storage::SqliteAlbumStorage;
use std::sync::Arc;
use tempfile::TempDir;

/// Build the full application router over a fresh temp-file database.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub async fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = catalog_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    catalog_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let storage: Arc<dyn AlbumStorage> = Arc::new(SqliteAlbumStorage::new(pool));
    let app = catalog_server::router(AppState::new(storage));

    (app, temp_dir)
}
