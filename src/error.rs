//! Error types for the recipes API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the recipes API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No record matched the given identifier or filter
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request payload or duplicate username
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bad credentials or no refreshable session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Mutating operation attempted without a session token
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Failed to serialize or deserialize a cached snapshot
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A store, cache, or session adapter failed
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::Serialization(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Infrastructure(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the recipes API.
pub type Result<T> = std::result::Result<T, ApiError>;
