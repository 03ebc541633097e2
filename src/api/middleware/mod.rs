//! HTTP middleware and error transformation.

pub mod error_handler;
