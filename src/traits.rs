//! Shared trait abstractions for the seams between popups and the map
//!
//! The anchored popup never talks to a concrete map or a concrete overlay.
//! It goes through these traits, so a host can plug in its own viewport or
//! its own base overlay.

use crate::core::geo::{LatLng, LatLngBounds, Point, Quadrant, Size};

/// Coordinate transforms a host map exposes to overlays
pub trait MapProjection {
    /// Convert a layer pixel to a geographic coordinate
    fn layer_pixel_to_lat_lng(&self, pixel: &Point) -> LatLng;

    /// Convert a geographic coordinate to a layer pixel
    fn lat_lng_to_layer_pixel(&self, lat_lng: &LatLng) -> Point;

    /// The currently visible geographic extent
    fn visible_extent(&self) -> LatLngBounds;

    /// Which quadrant of the visible area a layer pixel falls in.
    ///
    /// The default splits the geographic extent at its center. Maps whose
    /// projection is not linear in latitude should split at the screen
    /// center instead.
    fn classify_quadrant(&self, pixel: &Point) -> Quadrant {
        let lat_lng = self.layer_pixel_to_lat_lng(pixel);
        self.visible_extent().determine_quadrant(&lat_lng)
    }
}

/// A positioned, sized element drawn over the map
pub trait Overlay {
    /// What `draw` hands back to the caller
    type Handle;

    fn id(&self) -> &str;

    /// The geographic coordinate the overlay is attached to, if any
    fn lat_lng(&self) -> Option<LatLng>;

    /// Current rendered size
    fn size(&self) -> Size;

    /// Draw the overlay with its top-left corner at `px`.
    ///
    /// A `None` pixel still creates the element but leaves it unpositioned.
    fn draw(&mut self, px: Option<Point>) -> Self::Handle;

    /// Whether `draw` has created the element, so moves take effect
    fn is_drawn(&self) -> bool;

    /// Move the overlay's top-left corner to `px`
    fn move_to(&mut self, px: Point);

    fn set_size(&mut self, size: Size);
}

/// Anything a popup can be anchored to: a pixel size and a pixel offset
pub trait HasSizeAndOffset {
    fn size(&self) -> Size;

    fn offset(&self) -> Point;
}
