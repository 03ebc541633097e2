//! Error handling for the API layer.
//!
//! Transforms [`LedgerError`] outcomes into HTTP responses. The mapping is
//! a pure function from the error's category: invalid input is a 400, a
//! missing entity a 404, and a violated invariant a 500.
//!
//! # Example JSON
//!
//! ```json
//! {
//!     "code": "INVALID_INPUT",
//!     "message": "Invalid first name",
//!     "details": { "field": "first name" }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::errors::{ApiErrorKind, LedgerError};

/// API error body, serialized to JSON for error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// A machine-readable error code.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
    /// Optional additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a new `ApiError` without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new `ApiError` with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Response wrapper that includes the HTTP status code with [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Converts a ledger error into a status code and API error body.
#[must_use]
pub fn ledger_error_to_api_error(error: &LedgerError) -> (StatusCode, ApiError) {
    let status = match error.to_api_error() {
        ApiErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ApiErrorKind::NotFound => StatusCode::NOT_FOUND,
        ApiErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let api_error = match error {
        LedgerError::InvalidInput(field) => ApiError::with_details(
            "INVALID_INPUT",
            error.to_string(),
            serde_json::json!({ "field": field }),
        ),
        LedgerError::NotFound(entity) => ApiError::with_details(
            "NOT_FOUND",
            error.to_string(),
            serde_json::json!({ "entity": entity }),
        ),
        LedgerError::InvariantViolation(reason) => ApiError::with_details(
            "INVARIANT_VIOLATION",
            "A ledger invariant was violated",
            serde_json::json!({ "reason": reason }),
        ),
    };

    (status, api_error)
}

/// Converts a ledger error into a ready-to-send response, logging the
/// unreachable invariant case.
#[must_use]
pub fn ledger_error_to_response(error: &LedgerError) -> ApiErrorResponse {
    if let LedgerError::InvariantViolation(reason) = error {
        tracing::error!(%reason, "ledger invariant violated");
    }
    let (status, api_error) = ledger_error_to_api_error(error);
    ApiErrorResponse::new(status, api_error)
}
