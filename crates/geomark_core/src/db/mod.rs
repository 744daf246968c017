//! SQLite storage bootstrap for the marker store.
//!
//! # Responsibility
//! - Open and configure SQLite connections for geomark core.
//! - Ensure the `Marker`/`Image` schema exists before any data access.
//!
//! # Invariants
//! - Returned connections enforce foreign keys; image rows cascade with their marker.
//! - Core code must not read/write application data before the schema is in place.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Initialization failure: the store cannot be opened or prepared.
///
/// Fatal for the application; there is no retry path.
#[derive(Debug)]
pub enum DbError {
    Io(std::io::Error),
    Sqlite(rusqlite::Error),
    /// `PRAGMA foreign_keys` did not read back as enabled, so cascades would not fire.
    ForeignKeysDisabled,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to prepare database location: {err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::ForeignKeysDisabled => {
                write!(f, "foreign key enforcement could not be enabled")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::ForeignKeysDisabled => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<std::io::Error> for DbError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
