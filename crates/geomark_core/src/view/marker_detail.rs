//! Detail surface for one marker and its attached images.
//!
//! # Responsibility
//! - Load and render the marker's images.
//! - Attach and remove images; delete the marker and hand the trimmed list
//!   back to the list view.
//!
//! # Invariants
//! - After an image is attached the image list is re-fetched; after an image
//!   is removed it is filtered locally.
//! - The received marker list is never re-fetched; on marker deletion it is
//!   filtered and passed to the received setter before navigating back.
//! - Once closed the view performs no further store calls.

use crate::model::image::{Image, ImageId};
use crate::model::marker::{without_marker, Marker};
use crate::view::collab::{PickResult, PickerOptions};
use crate::view::handoff::{DetailRoute, MarkerListSetter};
use crate::view::{ViewContext, ALERT_TITLE};
use log::{error, info, warn};

/// Lifecycle of one detail view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Ready,
    /// The marker was deleted and the view navigated away.
    Closed,
}

pub struct MarkerDetailView {
    ctx: ViewContext,
    marker: Marker,
    markers: Vec<Marker>,
    set_markers: MarkerListSetter,
    images: Vec<Image>,
    state: DetailState,
}

impl MarkerDetailView {
    pub fn new(ctx: ViewContext, route: DetailRoute) -> Self {
        Self {
            ctx,
            marker: route.marker,
            markers: route.markers,
            set_markers: route.set_markers,
            images: Vec::new(),
            state: DetailState::Loading,
        }
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    /// Loads the images of this marker. The view becomes `Ready` even when
    /// the load fails, so the user can still act on it.
    pub async fn mount(&mut self) {
        if self.is_closed("mount") {
            return;
        }
        match self.ctx.store.get_images(self.marker.id).await {
            Ok(images) => self.images = images,
            Err(err) => {
                error!(
                    "event=detail_mount module=view status=error marker_id={} error={err}",
                    self.marker.id
                );
                self.ctx
                    .alerts
                    .alert(ALERT_TITLE, &format!("Failed to load images: {err}"));
            }
        }
        self.state = DetailState::Ready;
    }

    /// Deletes the marker (its images cascade), updates the originating list
    /// and navigates back.
    pub async fn delete_marker(&mut self) {
        if self.is_closed("delete_marker") {
            return;
        }
        let id = self.marker.id;
        if let Err(err) = self.ctx.store.delete_marker(id).await {
            error!("event=marker_delete module=view status=error marker_id={id} error={err}");
            self.ctx
                .alerts
                .alert(ALERT_TITLE, &format!("Failed to delete marker: {err}"));
            return;
        }

        info!("event=marker_delete module=view status=ok marker_id={id}");
        self.set_markers.set(without_marker(&self.markers, id));
        self.images.clear();
        self.state = DetailState::Closed;
        self.ctx.navigator.go_back();
    }

    /// Lets the user pick an image and attaches it to this marker.
    pub async fn add_image(&mut self) {
        if self.is_closed("add_image") {
            return;
        }
        let uri = match self.ctx.picker.pick_image(&PickerOptions::default()).await {
            Ok(PickResult::Picked(uri)) => uri,
            Ok(PickResult::Cancelled) => return,
            Err(err) => {
                error!("event=image_pick module=view status=error error={err}");
                self.ctx
                    .alerts
                    .alert(ALERT_TITLE, &format!("Failed to pick image: {err}"));
                return;
            }
        };

        let store = &self.ctx.store;
        let marker_id = self.marker.id;
        if let Err(err) = store.add_image(marker_id, uri).await {
            error!("event=image_add module=view status=error marker_id={marker_id} error={err}");
            self.ctx
                .alerts
                .alert(ALERT_TITLE, &format!("Failed to add image: {err}"));
            return;
        }
        match store.get_images(marker_id).await {
            Ok(images) => self.images = images,
            Err(err) => {
                error!(
                    "event=image_refresh module=view status=error marker_id={marker_id} error={err}"
                );
                self.ctx.alerts.alert(
                    ALERT_TITLE,
                    &format!("Image saved, but the images could not be refreshed: {err}"),
                );
            }
        }
    }

    /// Removes one image from the store and from the rendered list.
    pub async fn delete_image(&mut self, id: ImageId) {
        if self.is_closed("delete_image") {
            return;
        }
        match self.ctx.store.delete_image(id).await {
            Ok(()) => self.images.retain(|image| image.id != id),
            Err(err) => {
                error!("event=image_delete module=view status=error image_id={id} error={err}");
                self.ctx
                    .alerts
                    .alert(ALERT_TITLE, &format!("Failed to delete image: {err}"));
            }
        }
    }

    fn is_closed(&self, action: &str) -> bool {
        if self.state == DetailState::Closed {
            warn!(
                "event={action} module=view status=rejected reason=closed marker_id={}",
                self.marker.id
            );
            return true;
        }
        false
    }
}
