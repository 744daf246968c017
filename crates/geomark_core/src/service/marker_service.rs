//! SQLite-backed implementation of [`MarkerStore`].
//!
//! # Responsibility
//! - Own the connection and run repository calls off the async executor.
//! - Log each call with its outcome and duration.
//!
//! # Invariants
//! - Statements are serialized through one mutex-guarded connection.
//! - The connection is checked for schema and foreign keys once, at construction.

use crate::model::image::{Image, ImageId};
use crate::model::marker::{Marker, MarkerId};
use crate::repo::image_repo::{ImageRepository, SqliteImageRepository};
use crate::repo::marker_repo::{MarkerRepository, SqliteMarkerRepository};
use crate::repo::{ensure_ready, RepoResult};
use crate::service::{MarkerStore, StorageError, StorageResult};
use async_trait::async_trait;
use log::{debug, error, info};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Async data access layer over one SQLite connection.
///
/// Cheap to clone; clones share the same connection.
#[derive(Clone)]
pub struct MarkerService {
    conn: Arc<Mutex<Connection>>,
}

impl MarkerService {
    /// Takes ownership of an initialized connection.
    ///
    /// # Errors
    /// - Returns `RepoError::ForeignKeysDisabled` or `MissingRequiredTable`
    ///   (wrapped) when the connection did not come from `db::open_db*`.
    pub fn try_new(conn: Connection) -> StorageResult<Self> {
        ensure_ready(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn run<T, F>(&self, op: &'static str, work: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> RepoResult<T> + Send + 'static,
    {
        let started_at = Instant::now();
        debug!("event={op} module=service status=start");

        let conn = Arc::clone(&self.conn);
        let joined = tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StorageError::LockPoisoned)?;
            work(&*guard).map_err(StorageError::from)
        })
        .await;
        let result = match joined {
            Ok(result) => result,
            Err(err) => Err(StorageError::TaskFailed(err.to_string())),
        };

        match &result {
            Ok(_) => info!(
                "event={op} module=service status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={op} module=service status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

#[async_trait]
impl MarkerStore for MarkerService {
    async fn get_markers(&self) -> StorageResult<Vec<Marker>> {
        self.run("get_markers", |conn| {
            SqliteMarkerRepository::new(conn).list_markers()
        })
        .await
    }

    async fn add_marker(&self, latitude: f64, longitude: f64) -> StorageResult<MarkerId> {
        self.run("add_marker", move |conn| {
            SqliteMarkerRepository::new(conn).create_marker(latitude, longitude)
        })
        .await
    }

    async fn delete_marker(&self, id: MarkerId) -> StorageResult<()> {
        let existed = self
            .run("delete_marker", move |conn| {
                SqliteMarkerRepository::new(conn).delete_marker(id)
            })
            .await?;
        if !existed {
            debug!("event=delete_marker module=service status=noop marker_id={id}");
        }
        Ok(())
    }

    async fn add_image(&self, marker_id: MarkerId, uri: String) -> StorageResult<ImageId> {
        self.run("add_image", move |conn| {
            SqliteImageRepository::new(conn).create_image(marker_id, &uri)
        })
        .await
    }

    async fn get_images(&self, marker_id: MarkerId) -> StorageResult<Vec<Image>> {
        self.run("get_images", move |conn| {
            SqliteImageRepository::new(conn).list_images(marker_id)
        })
        .await
    }

    async fn delete_image(&self, id: ImageId) -> StorageResult<()> {
        let existed = self
            .run("delete_image", move |conn| {
                SqliteImageRepository::new(conn).delete_image(id)
            })
            .await?;
        if !existed {
            debug!("event=delete_image module=service status=noop image_id={id}");
        }
        Ok(())
    }
}
