use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Route construction found nothing to build from. Always recoverable: the
/// caller keeps whatever route it had before.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyMatchError {
    #[error("No tags selected")]
    NoTagsSelected,

    #[error("No places found matching the selected criteria")]
    NoMatchingPlaces,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    EmptyMatch(#[from] EmptyMatchError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Catalog seed error: {0}")]
    Seed(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal database error".to_string())
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::EmptyMatch(e) => {
                tracing::info!("Route not built: {}", e);
                let status = match e {
                    EmptyMatchError::NoTagsSelected => StatusCode::BAD_REQUEST,
                    EmptyMatchError::NoMatchingPlaces => StatusCode::NOT_FOUND,
                };
                (status, e.to_string())
            }
            AppError::NotFound(ref e) => (StatusCode::NOT_FOUND, e.clone()),
            AppError::Conflict(ref e) => (StatusCode::CONFLICT, e.clone()),
            AppError::Seed(ref e) => {
                tracing::error!("Catalog seed error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Catalog seed error".to_string())
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
