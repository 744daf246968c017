//! Map-backed list of all markers.
//!
//! # Responsibility
//! - Load every marker on mount and render one pin per marker.
//! - Create markers on map taps and open the detail view on pin taps.
//!
//! # Invariants
//! - After a marker is added the list is re-fetched from the store; the new
//!   id is never appended locally.
//! - The list state can be replaced by a detail view through the
//!   `MarkerListSetter` it was handed.

use crate::model::marker::{Marker, MarkerId};
use crate::service::StorageResult;
use crate::view::collab::MapEvent;
use crate::view::handoff::{DetailRoute, MarkerListSetter};
use crate::view::{ViewContext, ALERT_TITLE};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::sync::watch;

pub struct MarkerListView {
    ctx: ViewContext,
    markers: Arc<watch::Sender<Vec<Marker>>>,
}

impl MarkerListView {
    pub fn new(ctx: ViewContext) -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            ctx,
            markers: Arc::new(tx),
        }
    }

    /// Loads all markers from the store.
    pub async fn mount(&self) {
        if let Err(err) = self.reload().await {
            error!("event=list_mount module=view status=error error={err}");
            self.ctx
                .alerts
                .alert(ALERT_TITLE, &format!("Failed to load markers: {err}"));
        }
    }

    /// Markers as currently rendered.
    pub fn markers(&self) -> Vec<Marker> {
        self.markers.borrow().clone()
    }

    /// Receiver that observes every replacement of the list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Marker>> {
        self.markers.subscribe()
    }

    pub async fn handle_map_event(&self, event: MapEvent) {
        match event {
            MapEvent::Tap {
                latitude,
                longitude,
            } => self.add_marker_at(latitude, longitude).await,
            MapEvent::MarkerSelected(id) => self.select_marker(id),
        }
    }

    /// Persists a marker at the coordinate, then refreshes the whole list.
    pub async fn add_marker_at(&self, latitude: f64, longitude: f64) {
        let id = match self.ctx.store.add_marker(latitude, longitude).await {
            Ok(id) => id,
            Err(err) => {
                error!("event=marker_add module=view status=error error={err}");
                self.ctx
                    .alerts
                    .alert(ALERT_TITLE, &format!("Failed to add marker: {err}"));
                return;
            }
        };
        info!("event=marker_add module=view status=ok marker_id={id}");

        if let Err(err) = self.reload().await {
            error!("event=marker_refresh module=view status=error marker_id={id} error={err}");
            self.ctx.alerts.alert(
                ALERT_TITLE,
                &format!("Marker saved, but the list could not be refreshed: {err}"),
            );
        }
    }

    /// Opens the detail view for a rendered marker.
    ///
    /// Ids not present in the current list are ignored.
    pub fn select_marker(&self, id: MarkerId) {
        let markers = self.markers();
        let Some(marker) = markers.iter().find(|marker| marker.id == id).copied() else {
            warn!("event=marker_select module=view status=ignored marker_id={id}");
            return;
        };

        self.ctx.navigator.open_detail(DetailRoute {
            marker,
            markers,
            set_markers: MarkerListSetter::new(Arc::clone(&self.markers)),
        });
    }

    async fn reload(&self) -> StorageResult<()> {
        let markers = self.ctx.store.get_markers().await?;
        self.markers.send_replace(markers);
        Ok(())
    }
}
