//! API error types and responses.
//!
//! Every status code and error body the gateway produces is decided here.
//! Several pairings are kept exactly as clients already observe them, most
//! notably a failed single-comment read answering 500 with a "not found"
//! body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use comment_api_auth::AuthError;
use comment_api_service::ServiceError;

/// API error type that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid bearer token.
    #[error("unauthorized")]
    Unauthorized,

    /// The request path lacks a required identifier or matches no route.
    #[error("path not found")]
    PathNotFound,

    /// A single comment could not be read.
    #[error("not found for the given id")]
    CommentNotFound,

    /// The create request body could not be decoded.
    #[error("bad request")]
    BadRequest,

    /// The update request body could not be decoded.
    #[error("unprocessable entity")]
    UnprocessableEntity,

    /// Any other failure.
    #[error("internal server error")]
    Internal,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

impl ApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::PathNotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::CommentNotFound | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn details(&self) -> Option<&'static str> {
        match self {
            Self::BadRequest => Some("Server could not decode the comment, check the request body"),
            Self::UnprocessableEntity => {
                Some("Server could not process the entity, check the request body")
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Authentication failures carry a bare string, never JSON detail.
        if matches!(self, Self::Unauthorized) {
            return (status, self.to_string()).into_response();
        }

        let body = ErrorResponse {
            error: self.to_string(),
            details: self.details(),
            status_code: matches!(self, Self::UnprocessableEntity).then_some(status.as_u16()),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingHeader
            | AuthError::MalformedHeader
            | AuthError::InvalidSignature
            | AuthError::InvalidToken(_) => {
                tracing::debug!(error = %err, "Rejected bearer token");
                Self::Unauthorized
            }
            AuthError::Internal(_) => {
                tracing::error!(error = %err, "Auth internal error");
                Self::Internal
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFetchable => Self::CommentNotFound,
            ServiceError::Store(store_err) => {
                tracing::error!(error = %store_err, "Store error");
                Self::Internal
            }
            ServiceError::Internal(reason) => {
                tracing::error!(error = %reason, "Service internal error");
                Self::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use comment_api_store::StoreError;

    async fn body_of(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn error_status_codes() {
        assert_eq!(
            ApiError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::PathNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::CommentNotFound.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UnprocessableEntity.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn read_failure_body() {
        let (status, body) = body_of(ApiError::CommentNotFound).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"not found for the given id"}"#);
    }

    #[tokio::test]
    async fn unprocessable_body() {
        let (status, body) = body_of(ApiError::UnprocessableEntity).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"], "unprocessable entity");
        assert_eq!(
            value["details"],
            "Server could not process the entity, check the request body"
        );
        assert_eq!(value["status_code"], 422);
    }

    #[tokio::test]
    async fn unauthorized_is_plain_text() {
        let (status, body) = body_of(ApiError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "unauthorized");
    }

    #[test]
    fn service_errors_map_per_kind() {
        assert!(matches!(
            ApiError::from(ServiceError::NotFetchable),
            ApiError::CommentNotFound
        ));
        assert!(matches!(
            ApiError::from(ServiceError::Store(StoreError::Write("disk full".into()))),
            ApiError::Internal
        ));
        assert!(matches!(
            ApiError::from(ServiceError::Internal("store task failed".into())),
            ApiError::Internal
        ));
    }

    #[test]
    fn auth_errors_are_unauthorized() {
        assert!(matches!(
            ApiError::from(AuthError::MissingHeader),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidSignature),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from(AuthError::Internal("x".into())),
            ApiError::Internal
        ));
    }
}
