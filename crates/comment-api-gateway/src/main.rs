//! Comment API - HTTP service entry point.
//!
//! Reads configuration from the environment, opens the SQLite store and
//! serves the comment API until SIGINT or SIGTERM.
//!
//! # Environment
//!
//! | Variable | Default |
//! |---|---|
//! | `JWT_SECRET` | required |
//! | `LISTEN_ADDR` | `0.0.0.0:8080` |
//! | `DATABASE_PATH` | `comments.db` |
//! | `REQUEST_TIMEOUT_SECONDS` | `15` |
//! | `SHUTDOWN_GRACE_SECONDS` | `15` |
//! | `MAX_BODY_BYTES` | `1048576` |
//!
//! Log verbosity follows `RUST_LOG`.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comment_api_auth::HmacValidator;
use comment_api_gateway::{create_router, serve, shutdown_signal, GatewayConfig, GatewayState};
use comment_api_service::StoreCommentService;
use comment_api_store::SqliteStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,comment_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Comment API");

    let config = GatewayConfig::from_env()?;
    tracing::info!(config = ?config, "Configuration loaded");

    let store = Arc::new(SqliteStore::open(&config.database_path)?);
    let service = Arc::new(StoreCommentService::new(store));
    let validator = Arc::new(HmacValidator::new(&config.auth_config()));

    let listen_addr = config.listen_addr.clone();
    let grace = config.shutdown_grace();
    let app = create_router(GatewayState::new(service, validator, config));

    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    serve(listener, app, shutdown_signal(), grace).await?;

    tracing::info!("Comment API stopped");
    Ok(())
}
