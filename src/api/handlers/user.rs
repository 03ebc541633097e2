//! User-related HTTP handlers.
//!
//! Each handler builds the operation's pipeline from the raw request
//! strings, runs it, and maps the outcome: success to a JSON body,
//! failure through the error middleware.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::CreateUserRequest;
use crate::api::dto::responses::{BalanceResponse, UserResponse};
use crate::api::middleware::error_handler::{ApiErrorResponse, ledger_error_to_response};
use crate::application::operations;
use crate::infrastructure::AppDependencies;

/// POST /users - Create a new user.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 if any field fails its
/// shape check (first name, last name, then email, in that order).
pub async fn create_user(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiErrorResponse> {
    operations::create_user(
        Arc::clone(dependencies.store()),
        &request.first_name,
        &request.last_name,
        &request.email,
    )
    .run()
    .await
    .map(|user| (StatusCode::CREATED, Json(UserResponse::from(user))))
    .map_err(|error| ledger_error_to_response(&error))
}

/// GET /users - List all users.
///
/// # Errors
///
/// Never fails for the in-memory store; the signature matches the other
/// handlers so store implementations may report failures.
pub async fn get_users(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<UserResponse>>, ApiErrorResponse> {
    operations::get_users(Arc::clone(dependencies.store()))
        .run()
        .await
        .map(|users| Json(users.into_iter().map(UserResponse::from).collect()))
        .map_err(|error| ledger_error_to_response(&error))
}

/// GET /users/{id} - Get a single user.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 for a malformed id and 404
/// when no user has the given id.
pub async fn get_user(
    State(dependencies): State<AppDependencies>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiErrorResponse> {
    operations::get_user(Arc::clone(dependencies.store()), &user_id)
        .run()
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|error| ledger_error_to_response(&error))
}

/// GET /users/{id}/balance - Get a user's balance in cents.
///
/// # Errors
///
/// Returns `ApiErrorResponse` with status 400 for a malformed id and 404
/// when no user has the given id.
pub async fn get_balance(
    State(dependencies): State<AppDependencies>,
    Path(user_id): Path<String>,
) -> Result<Json<BalanceResponse>, ApiErrorResponse> {
    operations::get_balance(Arc::clone(dependencies.store()), &user_id)
        .map(BalanceResponse::new)
        .run()
        .await
        .map(Json)
        .map_err(|error| ledger_error_to_response(&error))
}
