//! Image repository contract and SQLite implementation.
//!
//! # Invariants
//! - Images are always scoped by `markerId` when listed.
//! - Inserting against a missing marker fails via the engine's FK check;
//!   the repository does not pre-validate.

use crate::model::image::{Image, ImageId};
use crate::model::marker::MarkerId;
use crate::repo::{ensure_ready, is_foreign_key_violation, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for image rows.
pub trait ImageRepository {
    fn list_images(&self, marker_id: MarkerId) -> RepoResult<Vec<Image>>;
    fn create_image(&self, marker_id: MarkerId, uri: &str) -> RepoResult<ImageId>;
    /// Returns whether an image row existed.
    fn delete_image(&self, id: ImageId) -> RepoResult<bool>;
}

/// SQLite-backed image repository.
pub struct SqliteImageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteImageRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_ready(conn)?;
        Ok(Self::new(conn))
    }
}

impl ImageRepository for SqliteImageRepository<'_> {
    fn list_images(&self, marker_id: MarkerId) -> RepoResult<Vec<Image>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, uri, markerId
             FROM Image
             WHERE markerId = ?1
             ORDER BY id ASC;",
        )?;
        let images = stmt
            .query_map([marker_id], parse_image_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(images)
    }

    fn create_image(&self, marker_id: MarkerId, uri: &str) -> RepoResult<ImageId> {
        match self.conn.execute(
            "INSERT INTO Image (uri, markerId) VALUES (?1, ?2);",
            params![uri, marker_id],
        ) {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_foreign_key_violation(&err) => Err(RepoError::MarkerNotFound(marker_id)),
            Err(err) => Err(err.into()),
        }
    }

    fn delete_image(&self, id: ImageId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM Image WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_image_row(row: &Row<'_>) -> rusqlite::Result<Image> {
    Ok(Image {
        id: row.get("id")?,
        uri: row.get("uri")?,
        marker_id: row.get("markerId")?,
    })
}
