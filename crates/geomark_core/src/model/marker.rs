//! Marker domain model.

use serde::{Deserialize, Serialize};

/// Store-generated identifier of a marker row.
pub type MarkerId = i64;

/// A persisted geographic point.
///
/// Coordinates are kept exactly as the map surface reported them; no range
/// validation or rounding is applied anywhere in core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub latitude: f64,
    pub longitude: f64,
}

impl Marker {
    pub fn new(id: MarkerId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
        }
    }

    /// Returns `(latitude, longitude)`.
    pub fn coordinate(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Returns a copy of `markers` without the marker identified by `id`.
///
/// Order of the remaining markers is preserved.
pub fn without_marker(markers: &[Marker], id: MarkerId) -> Vec<Marker> {
    markers
        .iter()
        .filter(|marker| marker.id != id)
        .copied()
        .collect()
}
