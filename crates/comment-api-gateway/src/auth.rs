//! Authentication gate.
//!
//! Protected handlers take an [`Authenticated`] argument. Axum resolves it
//! before the handler body runs, so a rejected request answers 401 and the
//! handler is never invoked; an accepted one invokes it exactly once.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use comment_api_auth::{parse_bearer, TokenValidator, ValidatedToken};
use comment_api_service::CommentService;

use crate::error::ApiError;
use crate::state::GatewayState;

/// Proof that the request carried a correctly signed bearer token.
///
/// This extractor validates the `Authorization: Bearer <token>` header.
/// The scheme word is matched case-insensitively. Claims are not checked.
#[derive(Debug, Clone)]
pub struct Authenticated {
    /// The verified token.
    pub token: ValidatedToken,
}

#[async_trait]
impl<C, V> FromRequestParts<Arc<GatewayState<C, V>>> for Authenticated
where
    C: CommentService + 'static,
    V: TokenValidator + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<GatewayState<C, V>>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .map(|v| v.to_str())
            .transpose()
            .map_err(|_| ApiError::Unauthorized)?;

        let token = parse_bearer(header)?;
        let token = state.validator.validate(token).await?;

        Ok(Self { token })
    }
}
