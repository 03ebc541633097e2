//! Route configuration for the ledger API.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | POST | /users | `create_user` | Create a new user |
//! | GET | /users | `get_users` | List all users |
//! | GET | /users/{id} | `get_user` | Get a single user |
//! | GET | /users/{id}/balance | `get_balance` | Get a user's balance |
//! | GET | /users/{id}/transactions | `get_transactions` | List a user's transactions |
//! | POST | /users/{id}/deposit | `deposit` | Deposit money |
//! | POST | /users/{id}/withdraw | `withdraw` | Withdraw money |
//! | POST | /users/{id}/transfer | `transfer` | Transfer money |
//! | GET | /transactions/{id} | `get_transaction` | Get a single transaction |
//! | GET | /health | `health_check` | Health check endpoint |
//!
//! The administrative store reset is deliberately not routed; it exists
//! for test harnesses only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::api::handlers::transaction::{
    deposit, get_transaction, get_transactions, transfer, withdraw,
};
use crate::api::handlers::user::{create_user, get_balance, get_user, get_users};
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status ("healthy" or "unhealthy").
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Health check endpoint.
///
/// # Example Response
///
/// ```json
/// {
///     "status": "healthy",
///     "version": "0.1.0"
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes.
///
/// # Arguments
///
/// * `dependencies` - The application dependencies (config and store)
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // User routes
        .route("/users", post(create_user).get(get_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/balance", get(get_balance))
        .route("/users/{id}/transactions", get(get_transactions))
        // Transaction routes
        .route("/users/{id}/deposit", post(deposit))
        .route("/users/{id}/withdraw", post(withdraw))
        .route("/users/{id}/transfer", post(transfer))
        .route("/transactions/{id}", get(get_transaction))
        // Health check
        .route("/health", get(health_check))
        // Add state
        .with_state(dependencies)
}
