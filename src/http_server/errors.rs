//! # API Errors
//!
//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::registry::ValidationErrors;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the HTTP API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body could not be decoded into a candidate record.
    /// Reported as a single generic failure, never itemized per field.
    #[error("invalid request body")]
    InvalidBody,

    /// The candidate record failed field validation
    #[error("{0}")]
    Validation(ValidationErrors),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    /// Validation failures render one `field: message` entry per line.
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
