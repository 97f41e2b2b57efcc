//! Gateway configuration types.
//!
//! Configuration is read once at startup and passed by value into the
//! gateway state. Nothing is kept in process-wide globals.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use comment_api_auth::AuthConfig;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A variable holds a value that cannot be parsed.
    #[error("invalid value {value:?} for {var}")]
    Invalid {
        /// The variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Configuration for the gateway service.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:8080").
    pub listen_addr: String,

    /// Path of the SQLite database file.
    pub database_path: PathBuf,

    /// Shared secret used to verify bearer tokens.
    pub jwt_secret: String,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// How long in-flight requests may run after a shutdown signal.
    pub shutdown_grace_seconds: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:8080".to_string()
    }

    fn default_database_path() -> PathBuf {
        PathBuf::from("comments.db")
    }

    const fn default_request_timeout() -> u64 {
        15
    }

    const fn default_shutdown_grace() -> u64 {
        15
    }

    const fn default_max_body() -> usize {
        1024 * 1024 // 1 MB
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `LISTEN_ADDR`, `DATABASE_PATH`, `JWT_SECRET`,
    /// `REQUEST_TIMEOUT_SECONDS`, `SHUTDOWN_GRACE_SECONDS` and
    /// `MAX_BODY_BYTES`. Only `JWT_SECRET` is required.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is missing or a numeric setting does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(Self::default_listen_addr),
            database_path: lookup("DATABASE_PATH")
                .map_or_else(Self::default_database_path, PathBuf::from),
            jwt_secret,
            request_timeout_seconds: parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                Self::default_request_timeout(),
            )?,
            shutdown_grace_seconds: parse_or(
                &lookup,
                "SHUTDOWN_GRACE_SECONDS",
                Self::default_shutdown_grace(),
            )?,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", Self::default_max_body())?,
        })
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the shutdown grace period as a `Duration`.
    #[must_use]
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }

    /// Build the token validation configuration.
    #[must_use]
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::new(self.jwt_secret.clone())
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            database_path: Self::default_database_path(),
            jwt_secret: String::new(),
            request_timeout_seconds: Self::default_request_timeout(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
            max_body_bytes: Self::default_max_body(),
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("listen_addr", &self.listen_addr)
            .field("database_path", &self.database_path)
            .field("jwt_secret", &"<redacted>")
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("shutdown_grace_seconds", &self.shutdown_grace_seconds)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.database_path, PathBuf::from("comments.db"));
        assert_eq!(config.request_timeout_seconds, 15);
        assert_eq!(config.shutdown_grace_seconds, 15);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn timeout_durations() {
        let config = GatewayConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.shutdown_grace(), Duration::from_secs(15));
    }

    #[test]
    fn secret_only_uses_defaults() {
        let config = GatewayConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.shutdown_grace_seconds, 15);
    }

    #[test]
    fn overrides_are_applied() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("DATABASE_PATH", "/var/lib/comments.db"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("SHUTDOWN_GRACE_SECONDS", " 30 "),
            ("MAX_BODY_BYTES", "2048"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.database_path, PathBuf::from("/var/lib/comments.db"));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.shutdown_grace(), Duration::from_secs(30));
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn missing_secret_is_rejected() {
        let result = GatewayConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));

        let result = GatewayConfig::from_lookup(lookup_from(&[("JWT_SECRET", "")]));
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn invalid_number_is_rejected() {
        let result = GatewayConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("SHUTDOWN_GRACE_SECONDS", "soon"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                var: "SHUTDOWN_GRACE_SECONDS",
                ..
            })
        ));
    }

    #[test]
    fn debug_redacts_secret() {
        let config = GatewayConfig {
            jwt_secret: "missionimpossible".to_string(),
            ..GatewayConfig::default()
        };
        assert!(!format!("{config:?}").contains("missionimpossible"));
    }
}
