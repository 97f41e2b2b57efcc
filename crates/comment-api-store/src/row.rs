//! Row mapping between SQLite and the domain type.
//!
//! The content columns are nullable. `CommentRow` keeps that nullability and
//! is the only place where NULL turns into the empty string.

use comment_api_core::{Comment, CommentId};
use rusqlite::Row;

/// Column list matching [`CommentRow::from_row`].
pub(crate) const COLUMNS: &str = "id, slug, body, author";

/// A raw row of the `comments` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    /// Primary key.
    pub id: String,
    /// Nullable slug column.
    pub slug: Option<String>,
    /// Nullable body column.
    pub body: Option<String>,
    /// Nullable author column.
    pub author: Option<String>,
}

impl CommentRow {
    /// Scan a row selected with [`COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns the underlying `rusqlite` error if a column has the wrong type.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            slug: row.get(1)?,
            body: row.get(2)?,
            author: row.get(3)?,
        })
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: CommentId::from(row.id),
            slug: row.slug.unwrap_or_default(),
            body: row.body.unwrap_or_default(),
            author: row.author.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_become_empty_strings() {
        let row = CommentRow {
            id: "abc".to_string(),
            slug: None,
            body: Some("body".to_string()),
            author: None,
        };

        let comment = Comment::from(row);
        assert_eq!(comment.id.as_str(), "abc");
        assert_eq!(comment.slug, "");
        assert_eq!(comment.body, "body");
        assert_eq!(comment.author, "");
    }
}
