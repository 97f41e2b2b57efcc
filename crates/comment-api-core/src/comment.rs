//! The comment entity.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::CommentId;

/// A comment as seen by every tier of the service.
///
/// All fields are plain strings. Decoding is lenient:
///
/// - a missing or `null` field becomes the empty string
/// - unknown fields are ignored
/// - keys are also accepted capitalized (`Slug`) or upper-case (`SLUG`)
///
/// So a create request may omit `id` or send it as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Identifier assigned by the store at creation time.
    #[serde(alias = "Id", alias = "ID", deserialize_with = "null_as_default")]
    pub id: CommentId,
    /// Short descriptor, usually the path the comment belongs to.
    #[serde(alias = "Slug", alias = "SLUG", deserialize_with = "null_as_default")]
    pub slug: String,
    /// Free-text content.
    #[serde(alias = "Body", alias = "BODY", deserialize_with = "null_as_default")]
    pub body: String,
    /// Display name of the author.
    #[serde(alias = "Author", alias = "AUTHOR", deserialize_with = "null_as_default")]
    pub author: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Comment {
    /// Build a comment that has not been stored yet (empty `id`).
    #[must_use]
    pub fn draft(
        slug: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: CommentId::default(),
            slug: slug.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    /// Return this comment carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: CommentId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let comment = Comment::draft("/", "u", "b").with_id(CommentId::new("42"));
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "42", "slug": "/", "body": "b", "author": "u"})
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let comment: Comment = serde_json::from_str(r#"{"slug": "/"}"#).unwrap();
        assert!(comment.id.is_empty());
        assert_eq!(comment.slug, "/");
        assert_eq!(comment.body, "");
        assert_eq!(comment.author, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let comment: Comment =
            serde_json::from_str(r#"{"author": "u", "likes": 3}"#).unwrap();
        assert_eq!(comment.author, "u");
    }

    #[test]
    fn null_fields_default_to_empty() {
        let comment: Comment = serde_json::from_str(
            r#"{"id": null, "slug": null, "body": "b", "author": null}"#,
        )
        .unwrap();
        assert_eq!(comment, Comment::draft("", "", "b"));
    }

    #[test]
    fn capitalized_keys_are_accepted() {
        let comment: Comment =
            serde_json::from_str(r#"{"ID": "7", "Slug": "/", "AUTHOR": "u", "Body": "b"}"#)
                .unwrap();
        assert_eq!(comment, Comment::draft("/", "u", "b").with_id(CommentId::new("7")));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Comment>(r#"{"slug": 5}"#).is_err());
    }

    #[test]
    fn with_id_replaces_identifier() {
        let comment = Comment::draft("/", "u", "b")
            .with_id(CommentId::new("old"))
            .with_id(CommentId::new("new"));
        assert_eq!(comment.id.as_str(), "new");
    }
}
