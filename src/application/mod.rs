//! Application layer: the ledger operations exposed to the HTTP handlers.

pub mod operations;
