//! Banksync API Server
//!
//! Main entry point for the movement validation service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banksync_api::{AppState, create_router};
use banksync_core::movements::{MovementValidator, ValidationOptions};
use banksync_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banksync=debug,banksync_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Create validator
    let validator = MovementValidator::new(ValidationOptions {
        parallel_threshold: config.validation.parallel_threshold,
    });
    info!(
        parallel_threshold = config.validation.parallel_threshold,
        body_limit_bytes = config.server.body_limit_bytes,
        "Validator configured"
    );

    // Create router
    let app = create_router(AppState::new(validator, config.server.body_limit_bytes));

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
