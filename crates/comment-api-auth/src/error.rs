//! Authentication error types.

use thiserror::Error;

/// A result type using `AuthError`.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request carries no `Authorization` header.
    #[error("missing authorization header")]
    MissingHeader,

    /// The header is not of the form `Bearer <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,

    /// The token signature does not match the shared secret.
    #[error("invalid signature")]
    InvalidSignature,

    /// The token could not be parsed or uses an unsupported algorithm.
    #[error("invalid token format: {0}")]
    InvalidToken(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Returns the appropriate HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingHeader
            | Self::MalformedHeader
            | Self::InvalidSignature
            | Self::InvalidToken(_) => 401,
            Self::Internal(_) => 500,
        }
    }
}
