//! Comment endpoints.
//!
//! Request bodies are read as raw bytes and decoded with `serde_json`, so a
//! missing or wrong `Content-Type` header does not reject a well-formed body.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use comment_api_auth::TokenValidator;
use comment_api_core::{Comment, CommentId};
use comment_api_service::CommentService;

use crate::auth::Authenticated;
use crate::error::ApiError;
use crate::state::GatewayState;

/// Confirmation body for a successful delete.
pub const DELETED: &str = "deleted comment successfully";

/// Response for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Fixed confirmation message.
    pub result: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a comment. Requires a bearer token.
///
/// # Errors
///
/// Returns 400 if the body is not a comment, or 500 if the service fails.
pub async fn create_comment<C, V>(
    State(state): State<Arc<GatewayState<C, V>>>,
    _auth: Authenticated,
    body: Bytes,
) -> Result<Response, ApiError>
where
    C: CommentService + 'static,
    V: TokenValidator + 'static,
{
    let candidate: Comment = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected create body");
        ApiError::BadRequest
    })?;

    let comment = state.service.create_comment(candidate).await?;
    encode(&comment)
}

/// Get a single comment.
///
/// # Errors
///
/// Returns 500 with a "not found" body if the comment cannot be read for any
/// reason.
pub async fn get_comment<C, V>(
    State(state): State<Arc<GatewayState<C, V>>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError>
where
    C: CommentService + 'static,
    V: TokenValidator + 'static,
{
    let id = require_id(id)?;

    let comment = state.service.get_comment(&id).await?;
    encode(&comment)
}

/// List every comment.
///
/// # Errors
///
/// Returns 500 if the service fails.
pub async fn list_comments<C, V>(
    State(state): State<Arc<GatewayState<C, V>>>,
) -> Result<Response, ApiError>
where
    C: CommentService + 'static,
    V: TokenValidator + 'static,
{
    let comments = state.service.list_comments().await?;
    encode(&comments)
}

/// Update a comment's slug, author and body. Requires a bearer token.
///
/// # Errors
///
/// Returns 422 if the body is not a comment, or 500 if the service fails.
pub async fn update_comment<C, V>(
    State(state): State<Arc<GatewayState<C, V>>>,
    _auth: Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    C: CommentService + 'static,
    V: TokenValidator + 'static,
{
    let patch: Comment = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected update body");
        ApiError::UnprocessableEntity
    })?;
    let id = require_id(id)?;

    let comment = state.service.update_comment(&id, patch).await?;
    encode(&comment)
}

/// Delete a comment. Requires a bearer token.
///
/// # Errors
///
/// Returns 500 if the service fails.
pub async fn delete_comment<C, V>(
    State(state): State<Arc<GatewayState<C, V>>>,
    _auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Response, ApiError>
where
    C: CommentService + 'static,
    V: TokenValidator + 'static,
{
    let id = require_id(id)?;

    state.service.delete_comment(&id).await?;
    encode(&DeleteResponse { result: DELETED })
}

// =============================================================================
// Helpers
// =============================================================================

/// Empty ids never reach the store. Through the router, an empty `:id`
/// segment matches no route and lands on the fallback instead.
fn require_id(id: String) -> Result<CommentId, ApiError> {
    if id.is_empty() {
        return Err(ApiError::PathNotFound);
    }
    Ok(CommentId::from(id))
}

/// Encode a 200 JSON response. An encoding failure answers 500.
fn encode<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode response");
        ApiError::Internal
    })?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn empty_id_is_path_not_found() {
        assert!(matches!(
            require_id(String::new()),
            Err(ApiError::PathNotFound)
        ));
        assert_eq!(require_id("abc".into()).unwrap().as_str(), "abc");
    }

    #[test]
    fn encode_sets_json_content_type() {
        let response = encode(&DeleteResponse { result: DELETED }).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn encode_failure_is_internal() {
        // JSON object keys must be strings.
        let mut unencodable = BTreeMap::new();
        unencodable.insert(vec![1u8], "x");

        assert!(matches!(encode(&unencodable), Err(ApiError::Internal)));
    }
}
