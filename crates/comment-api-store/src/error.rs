//! Error types for the storage layer.

use thiserror::Error;

/// A result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the requested identifier.
    #[error("record not found")]
    NotFound,

    /// A read statement failed or a row could not be scanned.
    #[error("query error: {0}")]
    Query(String),

    /// An insert, update or delete statement failed.
    #[error("write error: {0}")]
    Write(String),

    /// The database could not be opened or configured.
    #[error("open error: {0}")]
    Open(String),

    /// The database was written by a newer schema than this binary knows.
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    Schema {
        /// Version recorded in the database file.
        db_version: u32,
        /// Latest version this binary can migrate to.
        latest_supported: u32,
    },
}

impl StoreError {
    /// Build a `Query` error with the failing operation as context.
    pub(crate) fn query(context: &str, err: &rusqlite::Error) -> Self {
        Self::Query(format!("{context}: {err}"))
    }

    /// Build a `Write` error with the failing operation as context.
    pub(crate) fn write(context: &str, err: &rusqlite::Error) -> Self {
        Self::Write(format!("{context}: {err}"))
    }
}
