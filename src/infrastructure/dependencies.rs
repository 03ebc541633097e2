//! Dependency injection container for the ledger application.
//!
//! The store is held behind a trait object so handlers and tests can be
//! wired against any [`LedgerStore`] implementation.

use std::sync::Arc;

use super::config::AppConfig;
use super::store::LedgerStore;

/// Application dependency container.
///
/// Cloneable and `Send + Sync`, so it serves as the axum router state.
#[derive(Clone)]
pub struct AppDependencies {
    /// Application configuration.
    config: AppConfig,
    /// The ledger store.
    store: Arc<dyn LedgerStore>,
}

impl AppDependencies {
    /// Creates a new `AppDependencies` container.
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn LedgerStore>) -> Self {
        Self { config, store }
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a reference to the ledger store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn LedgerStore> {
        &self.store
    }

    /// Returns the application host from configuration.
    #[must_use]
    pub fn app_host(&self) -> &str {
        &self.config.app_host
    }

    /// Returns the application port from configuration.
    #[must_use]
    pub const fn app_port(&self) -> u16 {
        self.config.app_port
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("store", &"<dyn LedgerStore>")
            .finish()
    }
}
