//! Request DTOs for the ledger API.
//!
//! These DTOs represent incoming HTTP request bodies. Every value-carrying
//! field is a string; validation and normalization happen in the domain's
//! parsing functions, never during deserialization.

use serde::Deserialize;

/// Request DTO for creating a new user.
///
/// # Example JSON
///
/// ```json
/// {
///     "first_name": "john",
///     "last_name": "doe",
///     "email": "John.Doe@email.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    /// The user's first name, in any casing.
    pub first_name: String,
    /// The user's last name, in any casing.
    pub last_name: String,
    /// The user's email address.
    pub email: String,
}

/// Request DTO for deposits and withdrawals.
///
/// Uses a string amount to avoid floating-point precision issues in JSON
/// parsing.
///
/// # Example JSON
///
/// ```json
/// {
///     "amount": "10.099"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AmountRequest {
    /// The decimal amount as a string.
    pub amount: String,
}

/// Request DTO for transferring money between users.
///
/// # Example JSON
///
/// ```json
/// {
///     "to_user_id": "2",
///     "amount": "2.3"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferRequest {
    /// The receiving user's id.
    pub to_user_id: String,
    /// The decimal amount as a string.
    pub amount: String,
}
