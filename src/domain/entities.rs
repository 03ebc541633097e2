//! Ledger entities and their identifier value objects.
//!
//! Identifiers are sequential integers starting at 1, assigned by the store
//! at creation time and unique within their collection. Entities are
//! immutable after creation; the store only ever hands out copies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{LedgerError, LedgerResult};

/// Identifier of a [`User`]. Sequential, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(u64);

/// Identifier of a [`Transaction`]. Sequential across all transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionId(u64);

/// Identifier of a [`Transference`]. Sequential, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransferenceId(u64);

macro_rules! identifier_impls {
    ($name:ident, $label:literal) => {
        impl $name {
            /// Wraps a raw identifier value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }

            /// Parses an identifier from its decimal string form.
            ///
            /// # Errors
            ///
            /// Fails with `InvalidInput` when the string is not a positive
            /// integer.
            pub fn parse(value: &str) -> LedgerResult<Self> {
                value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|id| *id >= 1)
                    .map(Self)
                    .ok_or(LedgerError::InvalidInput($label))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

identifier_impls!(UserId, "user id");
identifier_impls!(TransactionId, "transaction id");
identifier_impls!(TransferenceId, "transference id");

/// An account holder.
///
/// Names are stored title-cased per word; the email is stored trimmed and
/// lower-cased. Normalization happens in
/// [`parsing`](crate::domain::parsing) before a `User` is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Sequential identifier assigned at creation.
    pub id: UserId,
    /// Title-cased first name.
    pub first_name: String,
    /// Title-cased last name.
    pub last_name: String,
    /// Trimmed, lower-cased email address.
    pub email: String,
}

/// Validated input for creating a [`User`], before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Title-cased first name.
    pub first_name: String,
    /// Title-cased last name.
    pub last_name: String,
    /// Trimmed, lower-cased email address.
    pub email: String,
}

/// A single ledger movement for one user.
///
/// A positive amount is a deposit; a negative amount is a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential identifier, unique across all transactions.
    pub id: TransactionId,
    /// The user this movement belongs to.
    pub user_id: UserId,
    /// Signed amount in integer cents.
    pub amount_in_cents: i64,
}

/// A transfer between two users, recorded as a linked pair of
/// [`Transaction`]s whose amounts are exact negations of each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transference {
    /// Sequential identifier assigned at creation.
    pub id: TransferenceId,
    /// The sending leg (negative amount).
    pub from_transaction_id: TransactionId,
    /// The receiving leg (positive amount).
    pub to_transaction_id: TransactionId,
    /// The transferred amount in integer cents (as received by `to`).
    pub amount_in_cents: i64,
}
