//! Comment service implementation.
//!
//! This module provides the `CommentService` trait consumed by the transport
//! layer and `StoreCommentService`, its store-backed implementation.

use std::sync::Arc;

use async_trait::async_trait;
use comment_api_core::{Comment, CommentId};
use comment_api_store::Store;

use crate::error::{Result, ServiceError};

/// Trait defining the comment operations exposed to the transport layer.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Get a comment by ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFetchable` on any store failure, including
    /// an unknown ID.
    async fn get_comment(&self, id: &CommentId) -> Result<Comment>;

    /// List every comment.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store fails.
    async fn list_comments(&self) -> Result<Vec<Comment>>;

    /// Create a comment. The returned value carries the generated ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store fails.
    async fn create_comment(&self, candidate: Comment) -> Result<Comment>;

    /// Overwrite the slug, author and body of a comment.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store fails.
    async fn update_comment(&self, id: &CommentId, patch: Comment) -> Result<Comment>;

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store fails.
    async fn delete_comment(&self, id: &CommentId) -> Result<()>;
}

/// The store-backed comment service.
///
/// Field validation, when it is introduced, belongs at the top of
/// `create_comment` and `update_comment`.
pub struct StoreCommentService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> StoreCommentService<S> {
    /// Create a new service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: Store + 'static> StoreCommentService<S> {
    /// Run a store call on the blocking pool so SQLite never stalls a
    /// runtime worker.
    async fn blocking<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&S) -> comment_api_store::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);

        tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| ServiceError::Internal(format!("store task failed: {e}")))?
            .map_err(ServiceError::from)
    }
}

#[async_trait]
impl<S: Store + 'static> CommentService for StoreCommentService<S> {
    async fn get_comment(&self, id: &CommentId) -> Result<Comment> {
        tracing::debug!(comment_id = %id, "Retrieving comment");

        let target = id.clone();
        self.blocking(move |store| store.get_comment(&target))
            .await
            .map_err(|err| {
                tracing::warn!(comment_id = %id, error = %err, "Failed to fetch comment");
                ServiceError::NotFetchable
            })
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        let comments = self.blocking(S::list_comments).await.inspect_err(|err| {
            tracing::warn!(error = %err, "Failed to list comments");
        })?;

        tracing::debug!(count = comments.len(), "Listed comments");
        Ok(comments)
    }

    async fn create_comment(&self, candidate: Comment) -> Result<Comment> {
        let comment = self
            .blocking(move |store| store.insert_comment(candidate))
            .await
            .inspect_err(|err| {
                tracing::warn!(error = %err, "Failed to create comment");
            })?;

        tracing::info!(comment_id = %comment.id, "Created comment");
        Ok(comment)
    }

    async fn update_comment(&self, id: &CommentId, patch: Comment) -> Result<Comment> {
        let target = id.clone();
        let comment = self
            .blocking(move |store| store.update_comment(&target, patch))
            .await
            .inspect_err(|err| {
                tracing::warn!(comment_id = %id, error = %err, "Failed to update comment");
            })?;

        tracing::info!(comment_id = %id, "Updated comment");
        Ok(comment)
    }

    async fn delete_comment(&self, id: &CommentId) -> Result<()> {
        let target = id.clone();
        self.blocking(move |store| store.delete_comment(&target))
            .await
            .inspect_err(|err| {
                tracing::warn!(comment_id = %id, error = %err, "Failed to delete comment");
            })?;

        tracing::info!(comment_id = %id, "Deleted comment");
        Ok(())
    }
}
