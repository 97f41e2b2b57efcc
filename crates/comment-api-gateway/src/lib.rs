//! HTTP gateway for the comment-api service.
//!
//! This crate is the transport tier. It handles:
//!
//! - JSON decoding and encoding of comments
//! - Mapping routes and path parameters onto [`CommentService`] operations
//! - Bearer token gating of the mutating routes
//! - Translating service errors into status codes
//! - Serving with a bounded graceful-shutdown period
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Clients                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    comment-api-gateway                       │
//! │  ┌───────────────┐ ┌────────────────┐ ┌─────────────────┐  │
//! │  │ Authenticated │ │ Router         │ │ Graceful        │  │
//! │  │ extractor     │ │ + Handlers     │ │ shutdown        │  │
//! │  └───────────────┘ └────────────────┘ └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┴─────────────┐
//!                ▼                           ▼
//!         ┌──────────────┐           ┌──────────────┐
//!         │ Comment      │           │ Token        │
//!         │ Service      │           │ Validator    │
//!         └──────────────┘           └──────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use comment_api_auth::HmacValidator;
//! use comment_api_gateway::{create_router, GatewayConfig, GatewayState};
//! use comment_api_service::StoreCommentService;
//! use comment_api_store::SqliteStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::from_env()?;
//!
//! let store = Arc::new(SqliteStore::open(&config.database_path)?);
//! let service = Arc::new(StoreCommentService::new(store));
//! let validator = Arc::new(HmacValidator::new(&config.auth_config()));
//!
//! let listen_addr = config.listen_addr.clone();
//! let app = create_router(GatewayState::new(service, validator, config));
//!
//! let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`CommentService`]: comment_api_service::CommentService

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, GatewayConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use server::{serve, shutdown_signal};
pub use state::GatewayState;

// Re-export key types for convenience
pub use auth::Authenticated;
