use crate::core::constants::{MAX_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, LatLngBounds, Point, Quadrant};
use crate::traits::MapProjection;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
    /// Pixel origin for coordinate transformations (to avoid precision issues)
    pixel_origin: Option<Point>,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, MAX_ZOOM),
            size,
            min_zoom: 0.0,
            max_zoom: MAX_ZOOM,
            pixel_origin: None,
        }
    }

    /// Sets the center of the viewport, clamped to the world
    pub fn set_center(&mut self, center: LatLng) {
        self.center = Self::clamp_center(center);
        self.update_pixel_origin();
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.update_pixel_origin();
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
        self.update_pixel_origin();
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE as f64 * 2_f64.powf(z);

        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + LatLng::clamp_lat(lat_lng.lat).to_radians() / 2.0).tan().ln())
            * EARTH_RADIUS;

        // Raw Mercator metres -> pixels: scale = 0.5 / (pi * R), offset = 0.5
        let pixel_x = (x + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;
        let pixel_y = (-y + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE as f64 * 2_f64.powf(z);

        let x = (pixel.x / scale) * (2.0 * PI * EARTH_RADIUS) - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (pixel.y / scale) * (2.0 * PI * EARTH_RADIUS);

        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();

        LatLng::new(lat, lng)
    }

    /// Gets or calculates the pixel origin for this viewport
    pub fn get_pixel_origin(&self) -> Point {
        self.pixel_origin
            .unwrap_or_else(|| self.project(&self.center, None).floor())
    }

    fn update_pixel_origin(&mut self) {
        self.pixel_origin = Some(self.project(&self.center, None).floor());
    }

    /// Converts screen pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let layer_point = self.container_point_to_layer_point(pixel);
        self.layer_point_to_lat_lng(&layer_point)
    }

    /// Converts LatLng to layer point (relative to pixel origin)
    pub fn lat_lng_to_layer_point(&self, lat_lng: &LatLng) -> Point {
        let projected_point = self.project(lat_lng, None);
        projected_point.subtract(&self.get_pixel_origin())
    }

    /// Converts layer point back to LatLng
    pub fn layer_point_to_lat_lng(&self, point: &Point) -> LatLng {
        let projected_point = point.add(&self.get_pixel_origin());
        self.unproject(&projected_point, None)
    }

    /// Converts layer point to container point (screen coordinates)
    pub fn layer_point_to_container_point(&self, point: &Point) -> Point {
        Point::new(point.x + self.size.x / 2.0, point.y + self.size.y / 2.0)
    }

    /// Converts container point to layer point
    pub fn container_point_to_layer_point(&self, point: &Point) -> Point {
        Point::new(point.x - self.size.x / 2.0, point.y - self.size.y / 2.0)
    }

    /// Pans the viewport by the given pixel offset and returns the delta actually applied
    pub fn pan(&mut self, delta: Point) -> Point {
        let before = self.project(&self.center, None);
        let new_center = self.unproject(&before.add(&delta), None);
        self.set_center(new_center);

        // Clamping may have limited the move
        self.project(&self.center, None).subtract(&before)
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let nw_pixel = Point::new(0.0, 0.0);
        let se_pixel = Point::new(self.size.x, self.size.y);

        let nw = self.pixel_to_lat_lng(&nw_pixel);
        let se = self.pixel_to_lat_lng(&se_pixel);

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    fn clamp_center(center: LatLng) -> LatLng {
        LatLng::new(
            LatLng::clamp_lat(center.lat),
            center.lng.clamp(-180.0, 180.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

impl MapProjection for Viewport {
    fn layer_pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        self.layer_point_to_lat_lng(pixel)
    }

    fn lat_lng_to_layer_pixel(&self, lat_lng: &LatLng) -> Point {
        self.lat_lng_to_layer_point(lat_lng)
    }

    fn visible_extent(&self) -> LatLngBounds {
        self.bounds()
    }

    /// Splits at the screen center; Mercator latitudes are not evenly spaced
    fn classify_quadrant(&self, pixel: &Point) -> Quadrant {
        let center = self.container_point_to_layer_point(&Point::new(
            self.size.x / 2.0,
            self.size.y / 2.0,
        ));
        // Screen y grows southward, so "top" means y at or above the center
        Quadrant::from_edges(pixel.y <= center.y, pixel.x < center.x)
    }
}
