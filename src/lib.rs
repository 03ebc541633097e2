//! Cashbook - a toy account ledger behind a small HTTP API.
//!
//! Create users, deposit, withdraw, check balances, and transfer between
//! users, against a non-persistent in-memory store.
//!
//! # Architecture
//!
//! The application follows the Onion Architecture:
//!
//! - **Pipeline**: a deferred, composable success-or-failure computation
//!   type; the backbone every operation is built from
//! - **Domain Layer**: entities, errors, and pure parsing/normalization
//! - **Application Layer**: the ledger operations, composed as pipelines
//! - **Infrastructure Layer**: configuration, the in-memory store, wiring
//! - **API Layer**: HTTP handlers, DTOs, error middleware
//!
//! Any step failing - parsing, lookup, bookkeeping - short-circuits the
//! rest of its pipeline; handlers only ever inspect the final outcome.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod pipeline;
