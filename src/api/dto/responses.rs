//! Response DTOs for the ledger API.
//!
//! Domain entities are transformed into these DTOs at the handler
//! boundary; identifiers serialize as plain numbers and amounts as signed
//! integer cents.

use serde::Serialize;

use crate::domain::entities::{Transaction, Transference, User};

/// Response body for user endpoints.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": 1,
///     "first_name": "John",
///     "last_name": "Doe",
///     "email": "john.doe@email.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    /// The user's sequential id.
    pub id: u64,
    /// Title-cased first name.
    pub first_name: String,
    /// Title-cased last name.
    pub last_name: String,
    /// Normalized email address.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Response body for deposit/withdraw endpoints and transaction lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionResponse {
    /// The transaction's sequential id.
    pub id: u64,
    /// The owning user's id.
    pub user_id: u64,
    /// Signed amount in integer cents.
    pub amount_in_cents: i64,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id.value(),
            user_id: transaction.user_id.value(),
            amount_in_cents: transaction.amount_in_cents,
        }
    }
}

/// Response body for the transfer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferenceResponse {
    /// The transference's sequential id.
    pub id: u64,
    /// Id of the sending leg.
    pub from_transaction_id: u64,
    /// Id of the receiving leg.
    pub to_transaction_id: u64,
    /// Transferred amount in integer cents.
    pub amount_in_cents: i64,
}

impl From<Transference> for TransferenceResponse {
    fn from(transference: Transference) -> Self {
        Self {
            id: transference.id.value(),
            from_transaction_id: transference.from_transaction_id.value(),
            to_transaction_id: transference.to_transaction_id.value(),
            amount_in_cents: transference.amount_in_cents,
        }
    }
}

/// Response body for the balance endpoint.
///
/// # Example JSON
///
/// ```json
/// {
///     "balance_in_cents": 1009
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceResponse {
    /// Sum of the user's transactions in integer cents.
    pub balance_in_cents: i64,
}

impl BalanceResponse {
    /// Wraps a computed balance.
    #[must_use]
    pub const fn new(balance_in_cents: i64) -> Self {
        Self { balance_in_cents }
    }
}
