//! Async data access for views.
//!
//! # Responsibility
//! - Expose the six marker/image operations as async calls.
//! - Keep views decoupled from SQLite and from the blocking connection.
//!
//! # Invariants
//! - Every operation returns its own outcome; there is no shared busy/error
//!   state between calls.
//! - The service is the only owner of the open connection.

use crate::model::image::{Image, ImageId};
use crate::model::marker::{Marker, MarkerId};
use crate::repo::RepoError;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod marker_service;

pub use marker_service::MarkerService;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of a single store operation.
#[derive(Debug)]
pub enum StorageError {
    Repo(RepoError),
    /// A previous holder of the connection panicked mid-operation.
    LockPoisoned,
    /// The blocking task running the query panicked or was cancelled.
    TaskFailed(String),
}

impl StorageError {
    /// Returns whether the failure was an image insert against a missing marker.
    pub fn is_marker_not_found(&self) -> bool {
        matches!(self, Self::Repo(RepoError::MarkerNotFound(_)))
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::LockPoisoned => write!(f, "database connection lock is poisoned"),
            Self::TaskFailed(message) => write!(f, "storage task failed: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::LockPoisoned | Self::TaskFailed(_) => None,
        }
    }
}

impl From<RepoError> for StorageError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Store operations consumed by the views.
///
/// Implemented by [`MarkerService`]; tests wrap it to observe traffic.
#[async_trait]
pub trait MarkerStore: Send + Sync {
    /// All markers in insertion order.
    async fn get_markers(&self) -> StorageResult<Vec<Marker>>;
    async fn add_marker(&self, latitude: f64, longitude: f64) -> StorageResult<MarkerId>;
    /// Deletes a marker together with its images. Absent ids are a no-op.
    async fn delete_marker(&self, id: MarkerId) -> StorageResult<()>;
    async fn add_image(&self, marker_id: MarkerId, uri: String) -> StorageResult<ImageId>;
    /// Images of one marker in insertion order.
    async fn get_images(&self, marker_id: MarkerId) -> StorageResult<Vec<Image>>;
    /// Deletes one image. Absent ids are a no-op.
    async fn delete_image(&self, id: ImageId) -> StorageResult<()>;
}
