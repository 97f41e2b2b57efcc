//! Bearer token authentication for comment-api.
//!
//! Authentication is binary: a request either carries a token signed with
//! the shared secret or it is rejected. No claim is inspected, so expired
//! tokens and tokens without any claims are accepted as long as the
//! signature verifies.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │   Gateway        │────▶│  parse_bearer    │  Authorization header
//! │   (extractor)    │     └────────┬─────────┘
//! └──────────────────┘              │ token
//!                          ┌────────▼─────────┐
//!                          │  TokenValidator  │
//!                          │  (trait)         │
//!                          └────────┬─────────┘
//!                          ┌────────▼─────────┐
//!                          │  HmacValidator   │  shared secret
//!                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use comment_api_auth::{issue_token, parse_bearer, AuthConfig, HmacValidator, TokenValidator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::new("missionimpossible");
//! let validator = HmacValidator::new(&config);
//!
//! let token = issue_token(&config.secret, &serde_json::json!({}))?;
//! let header = format!("Bearer {token}");
//!
//! let token = parse_bearer(Some(header.as_str()))?;
//! validator.validate(token).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bearer;
pub mod error;
pub mod jwt;

use std::fmt;

pub use bearer::parse_bearer;
pub use error::{AuthError, Result};
pub use jwt::{issue_token, HmacValidator, TokenValidator, ValidatedToken};

/// Configuration for bearer token validation.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret used to sign and verify tokens.
    pub secret: String,
}

impl AuthConfig {
    /// Create a configuration with the given shared secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}
