//! Repository layer over the marker store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for markers and images.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories only operate on connections with the schema present and
//!   foreign keys enforced; `try_new` constructors check this.
//! - Deleting an absent row is a no-op, not an error.

use crate::db::schema::{foreign_keys_enabled, table_exists, REQUIRED_TABLES};
use crate::db::DbError;
use crate::model::marker::MarkerId;
use rusqlite::{Connection, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod image_repo;
pub mod marker_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for marker/image persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// An image referenced a marker id with no row; raised by the engine's FK check.
    MarkerNotFound(MarkerId),
    /// The connection does not enforce foreign keys, so cascades cannot be trusted.
    ForeignKeysDisabled,
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MarkerNotFound(id) => write!(f, "marker not found: {id}"),
            Self::ForeignKeysDisabled => {
                write!(f, "connection does not enforce foreign keys")
            }
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MarkerNotFound(_) | Self::ForeignKeysDisabled | Self::MissingRequiredTable(_) => {
                None
            }
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Checks that `conn` is usable by the repositories in this module.
///
/// # Errors
/// - `ForeignKeysDisabled` when `PRAGMA foreign_keys` is off.
/// - `MissingRequiredTable` when the schema was never created.
pub fn ensure_ready(conn: &Connection) -> RepoResult<()> {
    if !foreign_keys_enabled(conn)? {
        return Err(RepoError::ForeignKeysDisabled);
    }
    for table in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(*table));
        }
    }
    Ok(())
}

pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(inner, _) => {
            inner.code == ErrorCode::ConstraintViolation
                && inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
        }
        _ => false,
    }
}
