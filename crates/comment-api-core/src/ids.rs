//! Comment identifiers.
//!
//! Identifiers are opaque strings. New ones are random UUID v4 values, so they
//! are neither sequential nor sortable. Lookups accept any string, since an id
//! arriving in a request path is only meaningful to the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque comment identifier.
///
/// Serialized as a bare JSON string. The default value is the empty string,
/// which is what a decoded request body carries when the client omits `id`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
    /// Wrap an existing identifier string without validation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier (UUID v4, hyphenated).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no identifier has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommentId({})", self.0)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CommentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CommentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<CommentId> for String {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_uuid_v4() {
        let id = CommentId::generate();
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn generated_ids_are_unique() {
        let id1 = CommentId::generate();
        let id2 = CommentId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn default_is_empty() {
        assert!(CommentId::default().is_empty());
        assert!(!CommentId::new("abc").is_empty());
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = CommentId::new("abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");

        let parsed: CommentId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(parsed, id);
    }
}
