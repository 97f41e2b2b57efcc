//! SQLite storage implementation.
//!
//! This module provides the `SqliteStore` implementation of the `Store` trait.

use std::path::Path;
use std::time::{Duration, Instant};

use comment_api_core::{Comment, CommentId};
use parking_lot::Mutex;
use rusqlite::{params, Connection};

use crate::error::{Result, StoreError};
use crate::row::{CommentRow, COLUMNS};
use crate::schema;
use crate::Store;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed storage implementation.
///
/// One connection is shared by all callers. Concurrent writers are
/// serialized by the connection mutex and by SQLite's own locking.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a SQLite database at the given path and apply pending
    /// migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let started_at = Instant::now();
        let path = path.as_ref();

        let conn = Connection::open(path)
            .map_err(|e| StoreError::Open(format!("error opening {}: {e}", path.display())))?;
        let store = Self::bootstrap(conn)?;

        tracing::info!(
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis(),
            "Opened SQLite store"
        );
        Ok(store)
    }

    /// Open a private in-memory database with migrations applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Open(format!("error opening in-memory database: {e}")))?;
        Self::bootstrap(conn)
    }

    fn bootstrap(mut conn: Connection) -> Result<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| StoreError::Open(format!("error configuring connection: {e}")))?;
        schema::apply_migrations(&mut conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl Store for SqliteStore {
    fn get_comment(&self, id: &CommentId) -> Result<Comment> {
        let conn = self.conn.lock();

        conn.query_row(
            &format!("SELECT {COLUMNS} FROM comments WHERE id = ?1"),
            params![id.as_str()],
            CommentRow::from_row,
        )
        .map(Comment::from)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
            other => StoreError::query("error fetching comment by id", &other),
        })
    }

    fn list_comments(&self) -> Result<Vec<Comment>> {
        let conn = self.conn.lock();

        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM comments ORDER BY rowid"))
            .map_err(|e| StoreError::query("error fetching comments", &e))?;

        let comments = stmt
            .query_map([], CommentRow::from_row)
            .map_err(|e| StoreError::query("error fetching comments", &e))?
            .map(|row| row.map(Comment::from))
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| StoreError::query("error scanning comments", &e))?;

        Ok(comments)
    }

    fn insert_comment(&self, candidate: Comment) -> Result<Comment> {
        let comment = candidate.with_id(CommentId::generate());
        let conn = self.conn.lock();

        conn.execute(
            "INSERT INTO comments (id, slug, author, body) VALUES (?1, ?2, ?3, ?4)",
            params![
                comment.id.as_str(),
                comment.slug,
                comment.author,
                comment.body
            ],
        )
        .map_err(|e| StoreError::write("error creating comment", &e))?;

        tracing::debug!(comment_id = %comment.id, "Inserted comment");
        Ok(comment)
    }

    fn update_comment(&self, id: &CommentId, patch: Comment) -> Result<Comment> {
        let conn = self.conn.lock();

        let changed = conn
            .execute(
                "UPDATE comments SET slug = ?2, author = ?3, body = ?4 WHERE id = ?1",
                params![id.as_str(), patch.slug, patch.author, patch.body],
            )
            .map_err(|e| StoreError::write("error updating comment", &e))?;

        tracing::debug!(comment_id = %id, rows = changed, "Updated comment");
        Ok(patch.with_id(id.clone()))
    }

    fn delete_comment(&self, id: &CommentId) -> Result<()> {
        let conn = self.conn.lock();

        let changed = conn
            .execute("DELETE FROM comments WHERE id = ?1", params![id.as_str()])
            .map_err(|e| StoreError::write("error deleting comment by id", &e))?;

        tracing::debug!(comment_id = %id, rows = changed, "Deleted comment");
        Ok(())
    }
}
