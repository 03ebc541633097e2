//! Domain errors for ledger operations.
//!
//! All errors are represented as algebraic data types and flow through the
//! [`Pipeline`](crate::pipeline::Pipeline) failure channel; no operation
//! panics or throws past the pipeline boundary.
//!
//! # Examples
//!
//! ```rust
//! use cashbook::domain::errors::{LedgerError, LedgerResult};
//!
//! fn require_positive(value: i64) -> LedgerResult<i64> {
//!     if value > 0 {
//!         Ok(value)
//!     } else {
//!         Err(LedgerError::InvalidInput("amount"))
//!     }
//! }
//! ```

use std::fmt;

/// Errors that can be raised by parsing and ledger operations.
///
/// Each variant carries the context needed for a short human-readable
/// message and for the API layer's status-code mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An input failed its shape check (wrong form, too short, missing
    /// `@`, unparseable number). Carries the offending field's label.
    InvalidInput(&'static str),

    /// A referenced entity does not exist. Carries the entity's label.
    NotFound(&'static str),

    /// A ledger invariant was violated. Defensive; unreachable through the
    /// public operations.
    InvariantViolation(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(field) => {
                write!(formatter, "Invalid {field}")
            }
            Self::NotFound(entity) => {
                write!(formatter, "{entity} not found")
            }
            Self::InvariantViolation(reason) => {
                write!(formatter, "Invariant violation: {reason}")
            }
        }
    }
}

impl std::error::Error for LedgerError {}

/// HTTP-level error categories for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Resource not found (HTTP 404).
    NotFound,
    /// Bad request due to invalid input (HTTP 400).
    BadRequest,
    /// Internal server error (HTTP 500).
    InternalError,
}

impl LedgerError {
    /// Maps this error to an HTTP-appropriate category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cashbook::domain::errors::{ApiErrorKind, LedgerError};
    ///
    /// assert_eq!(LedgerError::NotFound("user").to_api_error(), ApiErrorKind::NotFound);
    /// ```
    #[must_use]
    pub const fn to_api_error(&self) -> ApiErrorKind {
        match self {
            Self::InvalidInput(_) => ApiErrorKind::BadRequest,
            Self::NotFound(_) => ApiErrorKind::NotFound,
            Self::InvariantViolation(_) => ApiErrorKind::InternalError,
        }
    }
}

/// A type alias for fallible domain computations.
pub type LedgerResult<T> = Result<T, LedgerError>;
