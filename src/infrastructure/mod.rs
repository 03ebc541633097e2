//! Infrastructure layer: configuration, storage, and dependency wiring.

pub mod config;
pub mod dependencies;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use store::{InMemoryLedgerStore, LedgerStore};
