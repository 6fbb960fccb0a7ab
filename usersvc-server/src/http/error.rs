//! API error types with IntoResponse
//!
//! Errors become plain-text responses with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ValidationError;
use crate::store::StoreError;

/// Message returned for every unknown or unparseable user id
pub const USER_NOT_FOUND: &str = "The user with the given ID was not found.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Referenced user does not exist (404)
    NotFound,

    /// Payload missing required fields or not valid JSON (400)
    BadRequest(String),

    /// Body larger than the configured limit (413)
    PayloadTooLarge,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound => USER_NOT_FOUND,
            Self::BadRequest(msg) => msg,
            Self::PayloadTooLarge => "request entity too large",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), "request rejected: {}", self.message());
        (self.status(), self.message().to_owned()).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        tracing::debug!(missing = ?e.fields(), "payload failed validation");
        Self::BadRequest(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound,
        }
    }
}
