//! # API Error Type
//!
//! Unified error type for the JSON commands, plus the startup error for the
//! server itself.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shelf                                  │
//! │                                                                         │
//! │  POST /api/books/update                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  →  Result<Json<T>, ApiError>                  │  │
//! │  │         │                                                        │  │
//! │  │  CoreError::Validation ──► 400 { code: VALIDATION_ERROR, ... }   │  │
//! │  │  CoreError::InvalidField ► 400 { code: VALIDATION_ERROR, ... }   │  │
//! │  │  Bad JSON body         ──► 400 { code: VALIDATION_ERROR, ... }   │  │
//! │  │  CoreError::NotFound   ──► 404 { code: NOT_FOUND, ... }          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The HTML forms don't see ApiError: their failures go to the status    │
//! │  line instead.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shelf_core::CoreError;

/// API error returned from JSON commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Book with title \"Dune\" not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No book with the given title (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts registry errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(_) | CoreError::InvalidField(_) => {
                ApiError::validation(err.to_string())
            }
            CoreError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
        }
    }
}

/// Converts body decoding failures to API errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Server Error
// =============================================================================

/// Failures while starting or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(CoreError::not_found("Dune"));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Book with title \"Dune\" not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let core = shelf_core::BookRegistry::seeded()
            .remove(" ")
            .unwrap_err();
        let err = ApiError::from(core);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Title cannot be blank");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_json_rejection_maps_to_400() {
        let rejection = axum::Json::<shelf_core::BookRemoval>::from_bytes(b"{")
            .unwrap_err();
        let err = ApiError::from(rejection);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("Title cannot be blank");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Title cannot be blank");
    }
}
