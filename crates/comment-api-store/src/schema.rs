//! Schema migrations.
//!
//! Migrations are applied in strictly increasing version order inside one
//! transaction. The applied version is mirrored to `PRAGMA user_version`.

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// The table holding comment rows.
pub const COMMENTS_TABLE: &str = "comments";

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("migrations/0001_comments.sql"),
}];

/// Returns the latest schema version known by this binary.
#[must_use]
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Apply all pending migrations on the given connection.
///
/// # Errors
///
/// Returns `StoreError::Schema` if the database is newer than this binary,
/// or `StoreError::Open` if a migration statement fails.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    let current = current_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(StoreError::Schema {
            db_version: current,
            latest_supported: latest,
        });
    }

    if current == latest {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(|e| StoreError::Open(format!("error starting migration: {e}")))?;
    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }

        tx.execute_batch(migration.sql)
            .and_then(|()| {
                tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))
            })
            .map_err(|e| {
                StoreError::Open(format!("error applying migration {}: {e}", migration.version))
            })?;

        tracing::debug!(version = migration.version, "Applied schema migration");
    }
    tx.commit()
        .map_err(|e| StoreError::Open(format!("error committing migrations: {e}")))?;

    Ok(())
}

/// Read the schema version recorded in the database.
///
/// # Errors
///
/// Returns `StoreError::Open` if the pragma cannot be read.
pub fn current_version(conn: &Connection) -> Result<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .map_err(|e| StoreError::Open(format!("error reading schema version: {e}")))
}
