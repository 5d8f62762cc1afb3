//! Prelude module for common maplet-anchored types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maplet_anchored::prelude::*;`

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
    placement::{destination_pixel, resolve_relative_position, RelativePosition},
    popup::{Popup, PopupElement},
};

pub use crate::{Error as MapError, Result};

pub use fxhash::FxHashMap as HashMap;
