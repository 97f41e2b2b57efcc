//! SQLite storage layer for comment-api.
//!
//! This crate is the persistence adapter: it translates comment operations
//! into parameterized SQL and maps rows back into [`Comment`] values.
//!
//! # Schema
//!
//! A single `comments` table with a text primary key and three nullable
//! content columns. NULL columns are read back as empty strings.
//!
//! # Example
//!
//! ```no_run
//! use comment_api_core::Comment;
//! use comment_api_store::{SqliteStore, Store};
//!
//! let store = SqliteStore::open("/tmp/comments.db").unwrap();
//!
//! let created = store
//!     .insert_comment(Comment::draft("/", "alice", "hello"))
//!     .unwrap();
//! let fetched = store.get_comment(&created.id).unwrap();
//! assert_eq!(fetched, created);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod row;
pub mod schema;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use row::CommentRow;
pub use sqlite::SqliteStore;

use comment_api_core::{Comment, CommentId};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer so the service tier can be built
/// and tested against any implementation.
pub trait Store: Send + Sync {
    /// Get a comment by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches, or
    /// `StoreError::Query` if the database operation fails.
    fn get_comment(&self, id: &CommentId) -> Result<Comment>;

    /// List every stored comment.
    ///
    /// An empty table yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Query` if the query or any row scan fails.
    fn list_comments(&self) -> Result<Vec<Comment>>;

    /// Insert a new comment.
    ///
    /// A fresh identifier is generated and overwrites whatever `candidate.id`
    /// held. The candidate is returned carrying the new identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the insert fails.
    fn insert_comment(&self, candidate: Comment) -> Result<Comment>;

    /// Overwrite the slug, author and body of the comment with the given ID.
    ///
    /// The row is not re-read: the returned value is `patch` carrying `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the update fails.
    fn update_comment(&self, id: &CommentId, patch: Comment) -> Result<Comment>;

    /// Delete the comment with the given ID.
    ///
    /// Deleting an ID that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the delete fails.
    fn delete_comment(&self, id: &CommentId) -> Result<()>;
}
