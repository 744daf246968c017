//! Core of geomark: map markers with attached photo references.
//! Owns the SQLite store and the view controllers that keep screens in sync with it.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use app::{App, LaunchError, Shell};
pub use config::CoreConfig;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::image::{Image, ImageId};
pub use model::marker::{Marker, MarkerId};
pub use repo::image_repo::{ImageRepository, SqliteImageRepository};
pub use repo::marker_repo::{MarkerRepository, SqliteMarkerRepository};
pub use repo::{RepoError, RepoResult};
pub use service::{MarkerService, MarkerStore, StorageError, StorageResult};
pub use view::collab::{
    AlertSink, ImagePicker, MapEvent, MediaKind, Navigator, PickResult, PickerError,
    PickerOptions,
};
pub use view::handoff::{DetailRoute, MarkerListSetter};
pub use view::marker_detail::{DetailState, MarkerDetailView};
pub use view::marker_list::MarkerListView;
pub use view::ViewContext;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
