//! Ledger operations, built by composing [`Pipeline`] steps over the
//! store.
//!
//! Every operation takes raw string arguments exactly as the HTTP layer
//! received them, returns a deferred pipeline, and performs no work until
//! the caller runs it. Failures at any step (parsing, lookup, bookkeeping)
//! short-circuit all downstream steps.
//!
//! # Evaluation Order
//!
//! The composition order is part of the contract:
//!
//! - `create_user` checks first name, then last name, then email; the
//!   first failing field wins.
//! - `deposit`/`withdraw`/`transfer_amount` parse the amount before any
//!   user lookup, so an invalid amount is reported even when the user does
//!   not exist either.
//! - `transfer_amount` looks up the sender before the receiver.

use std::sync::Arc;

use crate::domain::entities::{
    NewUser, Transaction, TransactionId, Transference, User, UserId,
};
use crate::domain::errors::LedgerError;
use crate::domain::parsing::{
    parse_amount, parse_email, parse_first_name, parse_last_name,
};
use crate::infrastructure::store::LedgerStore;
use crate::pipeline::Pipeline;

/// Sums a slice of transactions into a balance in cents.
///
/// An empty slice sums to 0.
#[must_use]
pub fn calculate_balance(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .map(|transaction| transaction.amount_in_cents)
        .sum()
}

/// Parses, normalizes, and stores a new user, assigning the next
/// sequential id.
pub fn create_user(
    store: Arc<dyn LedgerStore>,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Pipeline<User, LedgerError> {
    let parsed = parse_first_name(first_name).and_then(|first_name| {
        parse_last_name(last_name).and_then(|last_name| {
            parse_email(email).map(|email| NewUser {
                first_name,
                last_name,
                email,
            })
        })
    });

    Pipeline::from_result(parsed)
        .tap(|new_user| tracing::debug!(email = %new_user.email, "creating user"))
        .flat_map(move |new_user| store.create_user(new_user))
}

/// Looks up a user by its textual id.
pub fn get_user(store: Arc<dyn LedgerStore>, user_id: &str) -> Pipeline<User, LedgerError> {
    Pipeline::from_result(UserId::parse(user_id))
        .flat_map(move |id| store.find_user(id))
        .try_map(|found| found.ok_or(LedgerError::NotFound("user")))
}

/// Returns all users in insertion order.
pub fn get_users(store: Arc<dyn LedgerStore>) -> Pipeline<Vec<User>, LedgerError> {
    store.users()
}

/// Lifts an amount parse into the pipeline's success/failure channel.
pub fn get_amount(amount: &str) -> Pipeline<i64, LedgerError> {
    Pipeline::from_result(parse_amount(amount))
}

/// Records a signed movement for a user.
///
/// The amount is parsed first and the user looked up second, so an amount
/// failure short-circuits before the lookup runs.
pub fn deposit(
    store: Arc<dyn LedgerStore>,
    user_id: &str,
    amount: &str,
) -> Pipeline<Transaction, LedgerError> {
    let lookup = get_user(Arc::clone(&store), user_id);

    get_amount(amount)
        .zip(lookup, |amount_in_cents, user| (user, amount_in_cents))
        .tap(|(user, amount_in_cents)| {
            tracing::debug!(user_id = %user.id, amount_in_cents, "recording movement");
        })
        .flat_map(move |(user, amount_in_cents)| store.create_transaction(user.id, amount_in_cents))
}

/// Records a withdrawal: a deposit of the sign-flipped amount.
///
/// Withdrawal amounts must be unsigned; a leading `-` or `+` fails with
/// `InvalidInput("amount")` rather than producing a double-signed string.
pub fn withdraw(
    store: Arc<dyn LedgerStore>,
    user_id: &str,
    amount: &str,
) -> Pipeline<Transaction, LedgerError> {
    let trimmed = amount.trim();
    if trimmed.starts_with(['-', '+']) {
        return Pipeline::raise(LedgerError::InvalidInput("amount"));
    }
    deposit(store, user_id, &format!("-{trimmed}"))
}

/// Sums a user's transactions, in insertion order, into a balance.
pub fn get_balance(store: Arc<dyn LedgerStore>, user_id: &str) -> Pipeline<i64, LedgerError> {
    let transactions_store = Arc::clone(&store);

    get_user(store, user_id)
        .flat_map(move |user| transactions_store.transactions_for_user(user.id))
        .map(|transactions| calculate_balance(&transactions))
}

/// Looks up a single transaction by its textual id.
pub fn get_transaction(
    store: Arc<dyn LedgerStore>,
    transaction_id: &str,
) -> Pipeline<Transaction, LedgerError> {
    Pipeline::from_result(TransactionId::parse(transaction_id))
        .flat_map(move |id| store.find_transaction(id))
        .try_map(|found| found.ok_or(LedgerError::NotFound("transaction")))
}

/// Returns a user's transactions in insertion order.
pub fn get_transactions(
    store: Arc<dyn LedgerStore>,
    user_id: &str,
) -> Pipeline<Vec<Transaction>, LedgerError> {
    let transactions_store = Arc::clone(&store);

    get_user(store, user_id).flat_map(move |user| transactions_store.transactions_for_user(user.id))
}

/// Atomically moves an amount between two users.
///
/// The amount is parsed once; the sender is looked up before the
/// receiver; the paired transactions and the linking transference are
/// recorded in one critical section.
pub fn transfer_amount(
    store: Arc<dyn LedgerStore>,
    from_user_id: &str,
    to_user_id: &str,
    amount: &str,
) -> Pipeline<Transference, LedgerError> {
    let from_lookup = get_user(Arc::clone(&store), from_user_id);
    let to_lookup = get_user(Arc::clone(&store), to_user_id);

    get_amount(amount)
        .zip(from_lookup, |amount_in_cents, from_user| {
            (amount_in_cents, from_user)
        })
        .zip(to_lookup, |(amount_in_cents, from_user), to_user| {
            (amount_in_cents, from_user, to_user)
        })
        .flat_map(move |(amount_in_cents, from_user, to_user)| {
            store.create_transference(from_user.id, to_user.id, amount_in_cents)
        })
}

/// Administrative reset used by test harnesses; never exposed over the
/// network.
pub fn drop_store(store: Arc<dyn LedgerStore>) -> Pipeline<(), LedgerError> {
    store.drop_all()
}
