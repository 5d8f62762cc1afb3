//! Popups that sit next to an anchor shape instead of on top of it
//!
//! An [`AnchoredPopup`] wraps a base overlay. On every draw it looks at where
//! its anchor point falls in the visible extent and places the overlay in the
//! opposite quadrant, offset so it clears the anchor.

use crate::{
    core::{
        config::AnchoredPopupOptions,
        geo::{LatLng, Point, Size},
    },
    traits::{MapProjection, Overlay},
    ui::{
        anchor::{Anchor, AnchorDescriptor},
        placement::{destination_pixel, resolve_relative_position, RelativePosition},
        popup::Popup,
    },
    Result,
};

/// Whether an anchored popup has been given a pixel yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// No pixel has been resolved for the popup yet
    Undrawn,
    /// Drawn at a computed pixel
    Placed,
}

/// A base overlay kept beside its anchor, on the side facing the map center
#[derive(Debug, Clone)]
pub struct AnchoredPopup<O: Overlay = Popup> {
    overlay: O,
    anchor: Anchor,
    relative_position: Option<RelativePosition>,
    initial_relative_position: RelativePosition,
    state: PlacementState,
}

impl AnchoredPopup<Popup> {
    pub fn new(
        id: impl Into<String>,
        lat_lng: Option<LatLng>,
        size: Size,
        content: impl Into<String>,
        anchor: Option<AnchorDescriptor>,
        close_box: bool,
    ) -> Self {
        let popup = Popup::new(id, lat_lng, size, content).with_close_box(close_box);
        Self::with_overlay(popup, anchor)
    }

    pub fn from_options(id: impl Into<String>, options: AnchoredPopupOptions) -> Result<Self> {
        options.validate()?;
        let popup = Popup::new(id, options.lat_lng, options.size, options.content)
            .with_close_box(options.close_box);
        Ok(Self::with_overlay(popup, options.anchor)
            .with_initial_relative_position(options.initial_relative_position))
    }
}

impl<O: Overlay> AnchoredPopup<O> {
    pub fn with_overlay(overlay: O, anchor: Option<AnchorDescriptor>) -> Self {
        Self {
            overlay,
            anchor: Anchor::from(anchor),
            relative_position: None,
            initial_relative_position: RelativePosition::default(),
            state: PlacementState::Undrawn,
        }
    }

    /// Position used by `move_to` before any draw has resolved one
    pub fn with_initial_relative_position(mut self, position: RelativePosition) -> Self {
        self.initial_relative_position = position;
        self
    }

    pub fn id(&self) -> &str {
        self.overlay.id()
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Replace the anchor shape; `None` falls back to the zero anchor
    pub fn set_anchor(&mut self, anchor: Option<AnchorDescriptor>) {
        self.anchor = Anchor::from(anchor);
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    /// The position resolved by the last successful draw
    pub fn relative_position(&self) -> Option<RelativePosition> {
        self.relative_position
    }

    fn effective_relative_position(&self) -> RelativePosition {
        self.relative_position
            .unwrap_or(self.initial_relative_position)
    }

    /// Draw the popup anchored at `px`, or at its stored coordinate when no
    /// pixel is given.
    ///
    /// The relative position is resolved again whenever both a pixel and a
    /// map are available; otherwise the previous one is kept.
    pub fn draw(&mut self, map: Option<&dyn MapProjection>, px: Option<Point>) -> O::Handle {
        let px = px.or_else(|| self.stored_pixel(map));

        match (px, map) {
            (Some(px), Some(map)) => {
                let position = resolve_relative_position(map, &px);
                log::debug!("popup {} anchored at {:?} resolves to {}", self.id(), px, position);
                self.relative_position = Some(position);
            }
            _ => log::debug!(
                "popup {}: no pixel or map to resolve against, keeping {:?}",
                self.id(),
                self.relative_position
            ),
        }

        let destination = px.map(|px| self.calculate_destination_pixel(px));
        let handle = self.overlay.draw(destination);
        if destination.is_some() {
            self.state = PlacementState::Placed;
        }
        handle
    }

    /// Move the popup so it is anchored at `px`.
    ///
    /// Reuses the relative position from the last draw, even if the map has
    /// moved far enough since then for the anchor to change quadrant.
    pub fn move_to(&mut self, px: Point) {
        let destination = self.calculate_destination_pixel(px);
        log::trace!("popup {} moving to {:?}", self.id(), destination);
        self.overlay.move_to(destination);
        if self.overlay.is_drawn() {
            self.state = PlacementState::Placed;
        }
    }

    /// Resize the popup and, if it is attached to a coordinate on a map,
    /// move it so it stays clear of the anchor at its new size.
    pub fn set_size(&mut self, size: Size, map: Option<&dyn MapProjection>) {
        self.overlay.set_size(size);

        if let Some(px) = self.stored_pixel(map) {
            self.move_to(px);
        }
    }

    /// Re-project the stored coordinate after a view change and move there
    pub fn update_position(&mut self, map: &dyn MapProjection) {
        if let Some(px) = self.stored_pixel(Some(map)) {
            self.move_to(px);
        }
    }

    /// Top-left pixel for the overlay when anchored at `px`
    pub fn calculate_destination_pixel(&self, px: Point) -> Point {
        destination_pixel(
            px,
            &self.anchor,
            self.overlay.size(),
            self.effective_relative_position(),
        )
    }

    fn stored_pixel(&self, map: Option<&dyn MapProjection>) -> Option<Point> {
        match (self.overlay.lat_lng(), map) {
            (Some(lat_lng), Some(map)) => Some(map.lat_lng_to_layer_pixel(&lat_lng)),
            _ => None,
        }
    }
}
