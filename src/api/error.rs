//! API error types
//!
//! Defines error types for the API layer and implements conversion to HTTP
//! responses. Clients receive a flat `{"error": "..."}` body; the full error
//! chain goes to the logs keyed by a generated request id.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::foodlog::FoodLogError;
use crate::llm::ParseError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Empty or whitespace-only food input
    #[error("No input provided")]
    EmptyInput,

    /// Food extraction failed (malformed reply or service failure)
    #[error("Failed to extract food items: {0}")]
    Parse(#[from] ParseError),

    /// Deletion index missing or out of range
    #[error("Invalid food index")]
    InvalidIndex(#[source] Option<FoodLogError>),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::EmptyInput => (StatusCode::BAD_REQUEST, "EMPTY_INPUT"),
            ApiError::Parse(ParseError::MalformedResponse(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PARSE_MALFORMED")
            }
            ApiError::Parse(ParseError::ServiceUnavailable(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PARSE_SERVICE_ERROR")
            }
            ApiError::InvalidIndex(_) => (StatusCode::BAD_REQUEST, "INVALID_INDEX"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
