//! JWT signature validation.
//!
//! Tokens are verified against a single shared secret with an HMAC
//! algorithm. Claims are decoded but never checked: there is no expiry,
//! issuer, audience or subject enforcement.

use std::collections::HashSet;

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;

use crate::error::{AuthError, Result};
use crate::AuthConfig;

/// A token whose signature has been verified.
#[derive(Debug, Clone)]
pub struct ValidatedToken {
    /// The algorithm named in the token header.
    pub algorithm: Algorithm,
    /// The decoded claims, unchecked.
    pub claims: serde_json::Value,
}

/// Trait for validating bearer tokens.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Verify a token and return its decoded contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed or its signature does not
    /// verify.
    async fn validate(&self, token: &str) -> Result<ValidatedToken>;
}

/// Shared-secret validator accepting the HMAC family (HS256, HS384, HS512).
pub struct HmacValidator {
    key: DecodingKey,
    validation: Validation,
}

impl HmacValidator {
    /// Create a validator for the configured secret.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenValidator for HmacValidator {
    async fn validate(&self, token: &str) -> Result<ValidatedToken> {
        let token_data = decode::<serde_json::Value>(token, &self.key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        tracing::trace!(alg = ?token_data.header.alg, "Token signature verified");

        Ok(ValidatedToken {
            algorithm: token_data.header.alg,
            claims: token_data.claims,
        })
    }
}

/// Sign `claims` with the shared secret using HS256.
///
/// # Errors
///
/// Returns `AuthError::Internal` if the claims cannot be serialized.
pub fn issue_token<C: Serialize>(secret: &str, claims: &C) -> Result<String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("error signing token: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use serde_json::json;

    const SECRET: &str = "missionimpossible";

    fn validator() -> HmacValidator {
        HmacValidator::new(&AuthConfig::new(SECRET))
    }

    #[tokio::test]
    async fn accepts_token_without_claims() {
        let token = issue_token(SECRET, &json!({})).unwrap();

        let validated = validator().validate(&token).await.unwrap();
        assert_eq!(validated.algorithm, Algorithm::HS256);
        assert_eq!(validated.claims, json!({}));
    }

    #[tokio::test]
    async fn accepts_expired_token() {
        let expired = Utc::now() - Duration::hours(1);
        let token = issue_token(SECRET, &json!({"sub": "e2etest", "exp": expired.timestamp()}))
            .unwrap();

        let validated = validator().validate(&token).await.unwrap();
        assert_eq!(validated.claims["sub"], "e2etest");
    }

    #[tokio::test]
    async fn accepts_foreign_issuer_and_audience() {
        let token = issue_token(
            SECRET,
            &json!({"iss": "someone-else", "aud": "another-service", "nbf": Utc::now().timestamp() + 3600}),
        )
        .unwrap();

        assert!(validator().validate(&token).await.is_ok());
    }

    #[tokio::test]
    async fn accepts_other_hmac_algorithms() {
        let token = encode(
            &Header::new(Algorithm::HS512),
            &json!({}),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let validated = validator().validate(&token).await.unwrap();
        assert_eq!(validated.algorithm, Algorithm::HS512);
    }

    #[tokio::test]
    async fn rejects_wrong_secret() {
        let token = issue_token("not-the-secret", &json!({})).unwrap();

        let result = validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[tokio::test]
    async fn rejects_tampered_payload() {
        let token = issue_token(SECRET, &json!({"sub": "alice"})).unwrap();
        let forged = issue_token(SECRET, &json!({"sub": "mallory"})).unwrap();

        // Splice the forged payload onto the original signature.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        let result = validator().validate(&spliced).await;
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[tokio::test]
    async fn rejects_garbage() {
        for token in ["", "not-a-jwt", "a.b.c"] {
            let result = validator().validate(token).await;
            assert!(
                matches!(result, Err(AuthError::InvalidToken(_))),
                "accepted {token:?}"
            );
        }
    }
}
