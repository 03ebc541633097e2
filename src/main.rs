//! Cashbook application entry point.

use std::sync::Arc;

use cashbook::api::routes::create_router;
use cashbook::infrastructure::{AppConfig, AppDependencies, InMemoryLedgerStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cashbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cashbook...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}",
                config.app_host,
                config.app_port
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    // The store lives for the whole process and starts empty
    let store = Arc::new(InMemoryLedgerStore::new());
    let deps = AppDependencies::new(config, store);

    // Create router with middleware
    let app = create_router(deps).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(&bind_address).await.unwrap();
    tracing::info!("cashbook started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  POST /users                    - Create user");
    tracing::info!("  GET  /users                    - List users");
    tracing::info!("  GET  /users/:id                - Get user");
    tracing::info!("  GET  /users/:id/balance        - Get balance");
    tracing::info!("  GET  /users/:id/transactions   - Transaction history");
    tracing::info!("  POST /users/:id/deposit        - Deposit");
    tracing::info!("  POST /users/:id/withdraw       - Withdraw");
    tracing::info!("  POST /users/:id/transfer       - Transfer");
    tracing::info!("  GET  /transactions/:id         - Get transaction");
    tracing::info!("  GET  /health                   - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("cashbook stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
