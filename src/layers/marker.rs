use crate::{
    core::{
        bounds::Bounds,
        constants::{DEFAULT_POPUP_SIZE, MARKER_ICON_ANCHOR, MARKER_ICON_SIZE},
        geo::{LatLng, Point, Size},
    },
    traits::HasSizeAndOffset,
    ui::{anchor::AnchorDescriptor, anchored::AnchoredPopup},
};

/// Marker icon: its pixel size and where its top-left corner sits relative
/// to the marker's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub size: Size,
    pub offset: Point,
}

impl Icon {
    pub fn new(size: Size, offset: Point) -> Self {
        Self { size, offset }
    }

    /// Icon whose hot-spot `anchor` (in icon pixels) sits on the marker position
    pub fn with_hot_spot(size: Size, anchor: Point) -> Self {
        Self::new(size, Point::new(-anchor.x, -anchor.y))
    }

    /// Pixel rectangle the icon covers when the marker is at `px`
    pub fn bounds_at(&self, px: Point) -> Bounds {
        Bounds::from_min_size(px.add(&self.offset), self.size)
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::with_hot_spot(
            Size::from(MARKER_ICON_SIZE),
            Point::new(MARKER_ICON_ANCHOR.0, MARKER_ICON_ANCHOR.1),
        )
    }
}

impl HasSizeAndOffset for Icon {
    fn size(&self) -> Size {
        self.size
    }

    fn offset(&self) -> Point {
        self.offset
    }
}

pub struct Marker {
    id: String,
    position: LatLng,
    icon: Icon,
    popup_text: Option<String>,
    popup_size: Size,
    popup_close_box: bool,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        Self {
            id,
            position,
            icon: Icon::default(),
            popup_text: None,
            popup_size: Size::from(DEFAULT_POPUP_SIZE),
            popup_close_box: false,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    pub fn with_popup_size(mut self, size: Size) -> Self {
        self.popup_size = size;
        self
    }

    pub fn with_popup_close_box(mut self, close_box: bool) -> Self {
        self.popup_close_box = close_box;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    /// Build a popup anchored to this marker's icon
    pub fn create_popup(&self) -> AnchoredPopup {
        AnchoredPopup::new(
            format!("{}_popup", self.id),
            Some(self.position),
            self.popup_size,
            self.popup_text.clone().unwrap_or_default(),
            Some(AnchorDescriptor::from_anchor(&self.icon)),
            self.popup_close_box,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Overlay;

    #[test]
    fn test_default_icon_uses_hot_spot() {
        let icon = Icon::default();
        assert_eq!(icon.size(), Size::new(25.0, 41.0));
        assert_eq!(icon.offset(), Point::new(-12.0, -41.0));
        assert_eq!(
            icon.bounds_at(Point::new(100.0, 100.0)),
            Bounds::from_coords(88.0, 59.0, 113.0, 100.0)
        );
    }

    #[test]
    fn test_create_popup_anchors_to_icon() {
        let marker = Marker::new("cafe".to_string(), LatLng::new(48.85, 2.35))
            .with_popup("Open until 6pm".to_string())
            .with_popup_size(Size::new(120.0, 60.0))
            .with_popup_close_box(true);

        let popup = marker.create_popup();

        assert_eq!(popup.id(), "cafe_popup");
        assert_eq!(popup.overlay().lat_lng(), Some(LatLng::new(48.85, 2.35)));
        assert_eq!(popup.overlay().content, "Open until 6pm");
        assert_eq!(popup.anchor().size(), Size::new(25.0, 41.0));
        assert_eq!(popup.anchor().offset(), Point::new(-12.0, -41.0));
        assert!(popup.overlay().has_close_box());
    }
}
