//! # maplet-anchored
//!
//! Anchored popups for the maplet map engine.
//!
//! A popup anchored to a shape (usually a marker icon) is drawn next to that
//! shape rather than over it, and on the side that faces the middle of the
//! visible map, so it does not run off the nearest edge.

pub mod core;
pub mod layers;
pub mod prelude;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    config::AnchoredPopupOptions,
    geo::{LatLng, LatLngBounds, Point, Quadrant, Size},
    viewport::Viewport,
};

pub use crate::layers::marker::{Icon, Marker};

pub use crate::traits::{HasSizeAndOffset, MapProjection, Overlay};

pub use crate::ui::{
    anchor::{Anchor, AnchorDescriptor},
    anchored::{AnchoredPopup, PlacementState},
    manager::PopupManager,
    placement::RelativePosition,
    popup::{Popup, PopupElement},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid size: {0}")]
    InvalidSize(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
