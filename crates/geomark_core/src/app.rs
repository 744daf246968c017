//! Application bootstrap.
//!
//! # Responsibility
//! - Start logging, open the marker database and mount the list view.
//! - Build detail views for routes the navigator receives.
//!
//! # Invariants
//! - A database that cannot be initialized aborts launch after one blocking
//!   alert; there is no retry.

use crate::config::CoreConfig;
use crate::db::{open_db, DbError};
use crate::logging::init_logging;
use crate::service::{MarkerService, StorageError};
use crate::view::collab::{AlertSink, ImagePicker, Navigator};
use crate::view::handoff::DetailRoute;
use crate::view::marker_detail::MarkerDetailView;
use crate::view::marker_list::MarkerListView;
use crate::view::ViewContext;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub const INIT_FAILURE_MESSAGE: &str = "Database is not initialized";

#[derive(Debug)]
pub enum LaunchError {
    Logging(String),
    Db(DbError),
    Storage(StorageError),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Db(err) => write!(f, "database initialization failed: {err}"),
            Self::Storage(err) => write!(f, "database initialization failed: {err}"),
        }
    }
}

impl Error for LaunchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Db(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

/// Platform collaborators supplied by the host shell.
#[derive(Clone)]
pub struct Shell {
    pub navigator: Arc<dyn Navigator>,
    pub alerts: Arc<dyn AlertSink>,
    pub picker: Arc<dyn ImagePicker>,
}

/// A launched application: the store plus the mounted list view.
pub struct App {
    ctx: ViewContext,
    service: MarkerService,
    list: MarkerListView,
}

impl App {
    /// Launches the application against `config`.
    pub async fn launch(config: &CoreConfig, shell: Shell) -> Result<Self, LaunchError> {
        if let Some(log_dir) = &config.log_dir {
            init_logging(&config.log_level, log_dir).map_err(LaunchError::Logging)?;
        }

        let service = match open_db(&config.db_path)
            .map_err(LaunchError::Db)
            .and_then(|conn| MarkerService::try_new(conn).map_err(LaunchError::Storage))
        {
            Ok(service) => service,
            Err(err) => {
                error!(
                    "event=app_launch module=app status=error db_path={} error={err}",
                    config.db_path.display()
                );
                shell.alerts.alert(INIT_FAILURE_MESSAGE, &err.to_string());
                return Err(err);
            }
        };

        let ctx = ViewContext::new(
            Arc::new(service.clone()),
            shell.navigator,
            shell.alerts,
            shell.picker,
        );
        let list = MarkerListView::new(ctx.clone());
        list.mount().await;

        Ok(Self { ctx, service, list })
    }

    pub fn list_view(&self) -> &MarkerListView {
        &self.list
    }

    pub fn service(&self) -> &MarkerService {
        &self.service
    }

    /// Builds and mounts the detail view for a route emitted by the list view.
    pub async fn open_detail(&self, route: DetailRoute) -> MarkerDetailView {
        let mut view = MarkerDetailView::new(self.ctx.clone(), route);
        view.mount().await;
        view
    }
}
