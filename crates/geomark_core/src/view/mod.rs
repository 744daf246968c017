//! Screen-level controllers for the map and marker detail surfaces.
//!
//! # Responsibility
//! - Hold render-local copies of store data and keep them in sync explicitly.
//! - Translate map, picker and button events into store calls.
//!
//! # Invariants
//! - Views never write to SQLite directly; every mutation goes through `MarkerStore`.
//! - Failures are reported through `AlertSink` and leave the view in its
//!   last good state.

use crate::service::MarkerStore;
use std::sync::Arc;

pub mod collab;
pub mod handoff;
pub mod marker_detail;
pub mod marker_list;

use collab::{AlertSink, ImagePicker, Navigator};

/// Shared collaborators handed to every view.
#[derive(Clone)]
pub struct ViewContext {
    pub store: Arc<dyn MarkerStore>,
    pub navigator: Arc<dyn Navigator>,
    pub alerts: Arc<dyn AlertSink>,
    pub picker: Arc<dyn ImagePicker>,
}

impl ViewContext {
    pub fn new(
        store: Arc<dyn MarkerStore>,
        navigator: Arc<dyn Navigator>,
        alerts: Arc<dyn AlertSink>,
        picker: Arc<dyn ImagePicker>,
    ) -> Self {
        Self {
            store,
            navigator,
            alerts,
            picker,
        }
    }
}

pub(crate) const ALERT_TITLE: &str = "Error";
