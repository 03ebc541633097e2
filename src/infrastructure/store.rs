//! Ledger store abstraction and its in-memory implementation.
//!
//! # Design
//!
//! - **Trait-based abstraction**: `LedgerStore` allows different
//!   implementations (the in-memory store here, mocks in tests).
//! - **Pipeline integration**: every operation returns a deferred
//!   [`Pipeline`]; nothing touches the collections until the pipeline is
//!   run.
//! - **Mutual exclusion**: identifiers are assigned as `len + 1`, so each
//!   "read length, assign id, append" sequence holds one mutex for its
//!   whole duration. Transference creation (two transaction inserts plus
//!   the linking record) is a single critical section; readers can never
//!   observe one leg without the other.
//!
//! The store is reset only by [`LedgerStore::drop_all`] and never persists
//! across restarts.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::entities::{
    NewUser, Transaction, TransactionId, Transference, TransferenceId, User, UserId,
};
use crate::domain::errors::LedgerError;
use crate::pipeline::Pipeline;

/// Interface for ledger storage.
///
/// Implementations must be thread-safe (`Send + Sync`); they are shared
/// across request handlers behind an `Arc`.
pub trait LedgerStore: Send + Sync {
    /// Assigns the next sequential user id and appends the user.
    fn create_user(&self, new_user: NewUser) -> Pipeline<User, LedgerError>;

    /// Returns copies of all users in insertion order.
    fn users(&self) -> Pipeline<Vec<User>, LedgerError>;

    /// Returns a copy of the user with the given id, if any.
    fn find_user(&self, user_id: UserId) -> Pipeline<Option<User>, LedgerError>;

    /// Assigns the next sequential transaction id and appends a movement
    /// of `amount_in_cents` for the given user.
    fn create_transaction(
        &self,
        user_id: UserId,
        amount_in_cents: i64,
    ) -> Pipeline<Transaction, LedgerError>;

    /// Returns a copy of the transaction with the given id, if any.
    fn find_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Pipeline<Option<Transaction>, LedgerError>;

    /// Returns copies of the user's transactions in insertion order.
    fn transactions_for_user(&self, user_id: UserId) -> Pipeline<Vec<Transaction>, LedgerError>;

    /// Atomically records the two legs of a transfer (`-amount` for
    /// `from`, `+amount` for `to`) and the transference linking them.
    fn create_transference(
        &self,
        from_user_id: UserId,
        to_user_id: UserId,
        amount_in_cents: i64,
    ) -> Pipeline<Transference, LedgerError>;

    /// Administrative reset: empties every collection.
    fn drop_all(&self) -> Pipeline<(), LedgerError>;
}

/// The three ledger collections, guarded together by one lock.
#[derive(Debug, Default)]
struct LedgerCollections {
    users: Vec<User>,
    transactions: Vec<Transaction>,
    transferences: Vec<Transference>,
}

impl LedgerCollections {
    /// Appends a transaction, assigning the next sequential id. Callers
    /// must already hold the collection lock.
    fn push_transaction(&mut self, user_id: UserId, amount_in_cents: i64) -> Transaction {
        let transaction = Transaction {
            id: TransactionId::new(self.transactions.len() as u64 + 1),
            user_id,
            amount_in_cents,
        };
        self.transactions.push(transaction.clone());
        transaction
    }
}

/// In-memory [`LedgerStore`], initialized empty at process start.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    collections: Arc<Mutex<LedgerCollections>>,
}

impl InMemoryLedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn create_user(&self, new_user: NewUser) -> Pipeline<User, LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move {
            let mut guard = collections.lock();
            let user = User {
                id: UserId::new(guard.users.len() as u64 + 1),
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                email: new_user.email,
            };
            guard.users.push(user.clone());
            Ok(user)
        })
    }

    fn users(&self) -> Pipeline<Vec<User>, LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move { Ok(collections.lock().users.clone()) })
    }

    fn find_user(&self, user_id: UserId) -> Pipeline<Option<User>, LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move {
            let guard = collections.lock();
            Ok(guard.users.iter().find(|user| user.id == user_id).cloned())
        })
    }

    fn create_transaction(
        &self,
        user_id: UserId,
        amount_in_cents: i64,
    ) -> Pipeline<Transaction, LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move {
            let mut guard = collections.lock();
            Ok(guard.push_transaction(user_id, amount_in_cents))
        })
    }

    fn find_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Pipeline<Option<Transaction>, LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move {
            let guard = collections.lock();
            Ok(guard
                .transactions
                .iter()
                .find(|transaction| transaction.id == transaction_id)
                .cloned())
        })
    }

    fn transactions_for_user(&self, user_id: UserId) -> Pipeline<Vec<Transaction>, LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move {
            let guard = collections.lock();
            Ok(guard
                .transactions
                .iter()
                .filter(|transaction| transaction.user_id == user_id)
                .cloned()
                .collect())
        })
    }

    fn create_transference(
        &self,
        from_user_id: UserId,
        to_user_id: UserId,
        amount_in_cents: i64,
    ) -> Pipeline<Transference, LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move {
            let negated = amount_in_cents.checked_neg().ok_or_else(|| {
                LedgerError::InvariantViolation(format!(
                    "transference amount {amount_in_cents} cannot be negated"
                ))
            })?;

            let mut guard = collections.lock();

            let from_leg = Transaction {
                id: TransactionId::new(guard.transactions.len() as u64 + 1),
                user_id: from_user_id,
                amount_in_cents: negated,
            };
            let to_leg = Transaction {
                id: TransactionId::new(guard.transactions.len() as u64 + 2),
                user_id: to_user_id,
                amount_in_cents,
            };

            // Unreachable through the construction above; kept as the
            // invariant's executable statement.
            if from_leg.amount_in_cents + to_leg.amount_in_cents != 0 {
                return Err(LedgerError::InvariantViolation(format!(
                    "transference legs {} and {} are not exact negations",
                    from_leg.amount_in_cents, to_leg.amount_in_cents
                )));
            }

            guard.transactions.push(from_leg.clone());
            guard.transactions.push(to_leg.clone());

            let transference = Transference {
                id: TransferenceId::new(guard.transferences.len() as u64 + 1),
                from_transaction_id: from_leg.id,
                to_transaction_id: to_leg.id,
                amount_in_cents,
            };
            guard.transferences.push(transference.clone());
            Ok(transference)
        })
    }

    fn drop_all(&self) -> Pipeline<(), LedgerError> {
        let collections = Arc::clone(&self.collections);
        Pipeline::new(move || async move {
            let mut guard = collections.lock();
            guard.users.clear();
            guard.transactions.clear();
            guard.transferences.clear();
            Ok(())
        })
    }
}
