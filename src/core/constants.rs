//! Core constants derived from Leaflet/OpenLayers defaults and common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Highest zoom level the viewport accepts.
pub const MAX_ZOOM: f64 = 18.0;

/// Popup size used when none is configured.
pub const DEFAULT_POPUP_SIZE: (f64, f64) = (200.0, 200.0);

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (f64, f64) = (25.0, 41.0);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (f64, f64) = (12.0, 41.0);
