//! Parameters carried from the list view to the detail view.
//!
//! The list travels by value. The only way back is `MarkerListSetter`, which
//! replaces the list view's state wholesale.

use crate::model::marker::Marker;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tokio::sync::watch;

/// Replaces the marker list owned by a [`MarkerListView`](super::marker_list::MarkerListView).
#[derive(Clone)]
pub struct MarkerListSetter {
    tx: Arc<watch::Sender<Vec<Marker>>>,
}

impl MarkerListSetter {
    pub(crate) fn new(tx: Arc<watch::Sender<Vec<Marker>>>) -> Self {
        Self { tx }
    }

    pub fn set(&self, markers: Vec<Marker>) {
        self.tx.send_replace(markers);
    }
}

impl Debug for MarkerListSetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerListSetter")
            .field("len", &self.tx.borrow().len())
            .finish()
    }
}

/// Route parameters for opening the detail view.
#[derive(Debug, Clone)]
pub struct DetailRoute {
    /// The tapped marker.
    pub marker: Marker,
    /// Copy of the full list as rendered when the marker was tapped.
    pub markers: Vec<Marker>,
    pub set_markers: MarkerListSetter,
}
