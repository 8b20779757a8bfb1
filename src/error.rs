//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! The `Display` text of a variant is exactly what the client sees; the
//! payload carried by the variant is for logging only.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "'title' is required"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ApiError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field was absent, `null`, or empty.
    #[error("'{0}' is required")]
    MissingField(&'static str),

    /// `rating` was not an integer in `[0, 5]`. Carries the offending value.
    #[error("'rating' must be a number between 0 and 5")]
    InvalidRating(serde_json::Value),

    /// `url` was not an absolute http(s) URL. Carries the offending value.
    #[error("'url' must be a valid URL")]
    InvalidUrl(String),

    /// A PATCH body provided none of the mutable fields.
    #[error("Request body must contain at least one of 'title', 'url', 'rating' or 'description'")]
    EmptyUpdate,

    /// The request body could not be decoded.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// No bookmark matches the requested id. Carries the raw id.
    #[error("Bookmark Not Found")]
    NotFound(String),

    /// Persistence layer failure.
    #[error("internal server error")]
    Persistence(String),

    /// Internal server error.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MissingField(_) => 1001,
            Self::InvalidRating(_) => 1002,
            Self::InvalidUrl(_) => 1003,
            Self::EmptyUpdate => 1004,
            Self::MalformedBody(_) => 1005,
            Self::NotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::InvalidRating(_)
            | Self::InvalidUrl(_)
            | Self::EmptyUpdate
            | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Persistence(detail) | Self::Internal(detail) => {
                tracing::error!(code = self.error_code(), %detail, "request failed");
            }
            _ => {}
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
