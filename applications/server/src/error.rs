/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{validate::Problems, CatalogError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("invalid request body")]
    Validation(Problems),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::AlbumNotFound => ServerError::NotFound("album not found".to_string()),
            other => ServerError::Storage(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Only unexpected failures are logged; 4xx responses are the
        // client's problem.
        let (status, body) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            ServerError::Validation(problems) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "invalid request body", "problems": problems }),
            ),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            ServerError::Storage(ref e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "internal error" }),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!(error = %msg, "configuration failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "internal error" }),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!(error = %msg, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
