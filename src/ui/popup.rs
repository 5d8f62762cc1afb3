use crate::{
    core::{
        bounds::Bounds,
        geo::{LatLng, Point, Size},
    },
    traits::Overlay,
};

/// Snapshot of a drawn popup element
#[derive(Debug, Clone, PartialEq)]
pub struct PopupElement {
    pub id: String,
    /// Top-left corner in layer pixels, `None` until the popup is positioned
    pub position: Option<Point>,
    pub size: Size,
    pub visible: bool,
    pub close_box: bool,
}

impl PopupElement {
    /// Pixel rectangle the popup covers, once positioned
    pub fn bounds(&self) -> Option<Bounds> {
        self.position
            .map(|position| Bounds::from_min_size(position, self.size))
    }
}

/// Base popup overlay: an element with an id, content and a size, attached to
/// an optional geographic coordinate.
///
/// It does no placement of its own. Whatever pixel it is handed becomes its
/// top-left corner.
#[derive(Debug, Clone)]
pub struct Popup {
    pub id: String,
    pub lat_lng: Option<LatLng>,
    pub content: String,
    size: Size,
    close_box: bool,
    visible: bool,
    drawn: bool,
    position: Option<Point>,
}

impl Popup {
    pub fn new(id: impl Into<String>, lat_lng: Option<LatLng>, size: Size, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lat_lng,
            content: content.into(),
            size,
            close_box: false,
            visible: true,
            drawn: false,
            position: None,
        }
    }

    pub fn with_close_box(mut self, close_box: bool) -> Self {
        self.close_box = close_box;
        self
    }

    pub fn has_close_box(&self) -> bool {
        self.close_box
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current top-left corner, if the popup has been positioned
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn element(&self) -> PopupElement {
        PopupElement {
            id: self.id.clone(),
            position: self.position,
            size: self.size,
            visible: self.visible,
            close_box: self.close_box,
        }
    }
}

impl Overlay for Popup {
    type Handle = PopupElement;

    fn id(&self) -> &str {
        &self.id
    }

    fn lat_lng(&self) -> Option<LatLng> {
        self.lat_lng
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, px: Option<Point>) -> PopupElement {
        self.drawn = true;
        if let Some(px) = px {
            self.move_to(px);
        }
        self.element()
    }

    fn is_drawn(&self) -> bool {
        self.drawn
    }

    fn move_to(&mut self, px: Point) {
        if !self.drawn {
            log::trace!("popup {} not drawn yet, ignoring move to {:?}", self.id, px);
            return;
        }
        self.position = Some(px);
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}
