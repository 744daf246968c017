//! Domain records for markers and their attached images.
//!
//! # Responsibility
//! - Define the plain data shapes shared by store, service and views.
//!
//! # Invariants
//! - Ids are store-generated surrogate keys and never reused.
//! - An `Image` belongs to exactly one `Marker`.

pub mod image;
pub mod marker;
