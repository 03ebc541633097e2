//! Transaction-related HTTP handlers.
//!
//! Deposits, withdrawals, transfers, and transaction lookups. Amount
//! strings travel untouched from the request body into the domain's
//! parser; evaluation order (amount before lookup, sender before
//! receiver) is fixed by the operations layer.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::{AmountRequest, TransferRequest};
use crate::api::dto::responses::{TransactionResponse, TransferenceResponse};
use crate::api::middleware::error_handler::{ApiErrorResponse, ledger_error_to_response};
use crate::application::operations;
use crate::infrastructure::AppDependencies;

/// POST /users/{id}/deposit - Deposit money for a user.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 for an unparseable amount
/// or user id, and 404 when the user does not exist. The amount is
/// checked first.
pub async fn deposit(
    State(dependencies): State<AppDependencies>,
    Path(user_id): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiErrorResponse> {
    operations::deposit(Arc::clone(dependencies.store()), &user_id, &request.amount)
        .run()
        .await
        .map(|transaction| (StatusCode::CREATED, Json(TransactionResponse::from(transaction))))
        .map_err(|error| ledger_error_to_response(&error))
}

/// POST /users/{id}/withdraw - Withdraw money for a user.
///
/// The amount must be unsigned; pre-signed amounts are rejected with
/// status 400.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 for an unparseable or
/// pre-signed amount or a malformed user id, and 404 when the user does
/// not exist.
pub async fn withdraw(
    State(dependencies): State<AppDependencies>,
    Path(user_id): Path<String>,
    Json(request): Json<AmountRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiErrorResponse> {
    operations::withdraw(Arc::clone(dependencies.store()), &user_id, &request.amount)
        .run()
        .await
        .map(|transaction| (StatusCode::CREATED, Json(TransactionResponse::from(transaction))))
        .map_err(|error| ledger_error_to_response(&error))
}

/// POST /users/{id}/transfer - Transfer money to another user.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 for an unparseable amount
/// or id, and 404 when either user does not exist (sender checked
/// first).
pub async fn transfer(
    State(dependencies): State<AppDependencies>,
    Path(from_user_id): Path<String>,
    Json(request): Json<TransferRequest>,
) -> Result<(StatusCode, Json<TransferenceResponse>), ApiErrorResponse> {
    operations::transfer_amount(
        Arc::clone(dependencies.store()),
        &from_user_id,
        &request.to_user_id,
        &request.amount,
    )
    .run()
    .await
    .map(|transference| {
        (
            StatusCode::CREATED,
            Json(TransferenceResponse::from(transference)),
        )
    })
    .map_err(|error| ledger_error_to_response(&error))
}

/// GET /transactions/{id} - Get a single transaction.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 for a malformed id and 404
/// when no transaction has the given id.
pub async fn get_transaction(
    State(dependencies): State<AppDependencies>,
    Path(transaction_id): Path<String>,
) -> Result<Json<TransactionResponse>, ApiErrorResponse> {
    operations::get_transaction(Arc::clone(dependencies.store()), &transaction_id)
        .run()
        .await
        .map(|transaction| Json(TransactionResponse::from(transaction)))
        .map_err(|error| ledger_error_to_response(&error))
}

/// GET /users/{id}/transactions - List a user's transactions.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 for a malformed id and 404
/// when the user does not exist.
pub async fn get_transactions(
    State(dependencies): State<AppDependencies>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, ApiErrorResponse> {
    operations::get_transactions(Arc::clone(dependencies.store()), &user_id)
        .run()
        .await
        .map(|transactions| {
            Json(
                transactions
                    .into_iter()
                    .map(TransactionResponse::from)
                    .collect(),
            )
        })
        .map_err(|error| ledger_error_to_response(&error))
}
