//! Error types for the orchestration layer.

use thiserror::Error;

/// A result type using `ServiceError`.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur in service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A single comment could not be read. The store's reason is not kept.
    #[error("failed to fetch comment by id")]
    NotFetchable,

    /// Storage layer error, passed through unchanged.
    #[error("storage error: {0}")]
    Store(#[from] comment_api_store::StoreError),

    /// The store call could not be completed (for example, it panicked).
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use comment_api_store::StoreError;

    #[test]
    fn not_fetchable_hides_detail() {
        assert_eq!(
            ServiceError::NotFetchable.to_string(),
            "failed to fetch comment by id"
        );
    }

    #[test]
    fn store_errors_convert() {
        let err = ServiceError::from(StoreError::Write("disk full".into()));
        assert!(matches!(err, ServiceError::Store(StoreError::Write(_))));
        assert!(err.to_string().contains("disk full"));
    }
}
