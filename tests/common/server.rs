//! In-process application server for integration tests.

use std::sync::Arc;

use cashbook::api::routes::create_router;
use cashbook::infrastructure::{AppConfig, AppDependencies, InMemoryLedgerStore};

use super::client::LedgerApiClient;

/// Boots the full application on an ephemeral local port with a fresh,
/// empty store, and returns a client pointed at it.
pub async fn spawn_app() -> LedgerApiClient {
    let store = Arc::new(InMemoryLedgerStore::new());
    let dependencies = AppDependencies::new(AppConfig::new("127.0.0.1".to_string(), 0), store);
    let router = create_router(dependencies);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server stopped unexpectedly");
    });

    LedgerApiClient::new(&format!("http://{address}"))
}
