//! Domain types for comment-api.
//!
//! This crate provides the types shared by every tier of the service:
//!
//! - **[`Comment`]**: the single entity the service manages
//! - **[`CommentId`]**: the opaque identifier assigned at creation time
//!
//! # Example
//!
//! ```
//! use comment_api_core::{Comment, CommentId};
//!
//! let draft = Comment::draft("/", "alice", "first!");
//! assert!(draft.id.is_empty());
//!
//! let stored = draft.with_id(CommentId::generate());
//! assert!(!stored.id.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod comment;
pub mod ids;

pub use comment::Comment;
pub use ids::CommentId;
