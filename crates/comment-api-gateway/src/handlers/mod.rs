//! HTTP request handlers.
//!
//! This module contains all the endpoint handlers for the comment API.

pub mod comments;
pub mod health;

use crate::error::ApiError;

/// Fallback for requests that match no route.
pub async fn path_not_found() -> ApiError {
    ApiError::PathNotFound
}
