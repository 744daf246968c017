//! Boundary contracts for platform collaborators.
//!
//! The map widget, navigation stack, image picker and alert dialogs live
//! outside core. Only the data they exchange with views is modelled here.

use crate::model::marker::MarkerId;
use crate::view::handoff::DetailRoute;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Events emitted by the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// Tap on empty map area at a coordinate.
    Tap { latitude: f64, longitude: f64 },
    /// Tap on a rendered pin.
    MarkerSelected(MarkerId),
}

/// Screen transitions requested by views.
pub trait Navigator: Send + Sync {
    fn open_detail(&self, route: DetailRoute);
    fn go_back(&self);
}

/// Blocking, user-facing error dialogs.
pub trait AlertSink: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Images,
}

/// Configuration passed to the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub media: MediaKind,
    /// Let the user crop before confirming.
    pub allow_editing: bool,
    pub aspect: (u32, u32),
    /// 0.0..=1.0 compression quality.
    pub quality: f32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            media: MediaKind::Images,
            allow_editing: true,
            aspect: (4, 3),
            quality: 1.0,
        }
    }
}

/// Outcome of one picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    Cancelled,
    /// Opaque URI of the chosen image.
    Picked(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerError(pub String);

impl Display for PickerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "image picker failed: {}", self.0)
    }
}

impl Error for PickerError {}

/// Platform image picker.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick_image(&self, options: &PickerOptions) -> Result<PickResult, PickerError>;
}
