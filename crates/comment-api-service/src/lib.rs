//! Orchestration layer for comment-api.
//!
//! This crate is the single seam between the HTTP transport and the storage
//! layer. It holds no state of its own besides a handle to its store and
//! adds no business rules: every operation delegates to the [`Store`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Gateway (HTTP)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  CommentService (trait)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   StoreCommentService                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Store (trait)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SqliteStore                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Errors
//!
//! Reads of a single comment are normalized: any store failure becomes
//! [`ServiceError::NotFetchable`] and the detail only reaches the log.
//! Every other operation passes the store error through unchanged as
//! [`ServiceError::Store`].
//!
//! Store calls are synchronous and run on tokio's blocking pool. A call that
//! panics surfaces as [`ServiceError::Internal`].
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use comment_api_core::Comment;
//! use comment_api_service::{CommentService, StoreCommentService};
//! use comment_api_store::SqliteStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(SqliteStore::open("/tmp/comments.db")?);
//! let service = StoreCommentService::new(store);
//!
//! let created = service
//!     .create_comment(Comment::draft("/", "alice", "hello"))
//!     .await?;
//! println!("Created comment: {}", created.id);
//! # Ok(())
//! # }
//! ```
//!
//! [`Store`]: comment_api_store::Store

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod service;

pub use error::{Result, ServiceError};
pub use service::{CommentService, StoreCommentService};

// Re-export commonly used types from dependencies for convenience
pub use comment_api_core::{Comment, CommentId};
pub use comment_api_store::StoreError;
