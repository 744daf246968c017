//! Marker repository contract and SQLite implementation.
//!
//! # Invariants
//! - Listing order is insertion order (ascending surrogate id).
//! - Marker deletion relies on the `ON DELETE CASCADE` constraint to remove
//!   image rows; no separate image delete is issued.

use crate::model::marker::{Marker, MarkerId};
use crate::repo::{ensure_ready, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const MARKER_SELECT_SQL: &str = "SELECT id, latitude, longitude FROM Marker";

/// Repository interface for marker rows.
pub trait MarkerRepository {
    fn list_markers(&self) -> RepoResult<Vec<Marker>>;
    fn get_marker(&self, id: MarkerId) -> RepoResult<Option<Marker>>;
    fn create_marker(&self, latitude: f64, longitude: f64) -> RepoResult<MarkerId>;
    /// Deletes a marker and, through the cascade, its images.
    ///
    /// Returns whether a marker row existed.
    fn delete_marker(&self, id: MarkerId) -> RepoResult<bool>;
}

/// SQLite-backed marker repository.
pub struct SqliteMarkerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMarkerRepository<'conn> {
    /// Wraps a connection the caller already checked with `ensure_ready`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after checking schema and foreign key enforcement.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_ready(conn)?;
        Ok(Self::new(conn))
    }
}

impl MarkerRepository for SqliteMarkerRepository<'_> {
    fn list_markers(&self) -> RepoResult<Vec<Marker>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MARKER_SELECT_SQL} ORDER BY id ASC;"))?;
        let markers = stmt
            .query_map([], parse_marker_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(markers)
    }

    fn get_marker(&self, id: MarkerId) -> RepoResult<Option<Marker>> {
        let marker = self
            .conn
            .query_row(
                &format!("{MARKER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_marker_row,
            )
            .optional()?;
        Ok(marker)
    }

    fn create_marker(&self, latitude: f64, longitude: f64) -> RepoResult<MarkerId> {
        self.conn.execute(
            "INSERT INTO Marker (latitude, longitude) VALUES (?1, ?2);",
            params![latitude, longitude],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn delete_marker(&self, id: MarkerId) -> RepoResult<bool> {
        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute("DELETE FROM Marker WHERE id = ?1;", [id])?;
        tx.commit()?;
        Ok(changed > 0)
    }
}

fn parse_marker_row(row: &Row<'_>) -> rusqlite::Result<Marker> {
    Ok(Marker {
        id: row.get("id")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}
