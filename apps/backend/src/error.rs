//! Error handling for the converter API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use cbt_core::ConvertError;

use crate::services::docx::DocxError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    #[error("No questions found in document")]
    NoQuestionsFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::NoQuestionsFound => Self::NoQuestionsFound,
        }
    }
}

impl From<DocxError> for ApiError {
    fn from(err: DocxError) -> Self {
        match err {
            // Output serialization failures are internal; everything else
            // means the upload was not a readable container.
            DocxError::Assemble(message) => Self::Internal(message),
            other => Self::MalformedContainer(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::UnsupportedFormat(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_format")
            }
            ApiError::MalformedContainer(_) => (StatusCode::BAD_REQUEST, "malformed_container"),
            ApiError::NoQuestionsFound => (StatusCode::UNPROCESSABLE_ENTITY, "no_questions_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
