use crate::prelude::HashMap;
use crate::{
    traits::MapProjection,
    ui::{anchored::AnchoredPopup, popup::PopupElement},
};

/// The map's set of open popups, keyed by id
pub struct PopupManager {
    popups: HashMap<String, AnchoredPopup>,
}

impl PopupManager {
    pub fn new() -> Self {
        Self {
            popups: HashMap::default(),
        }
    }

    /// Draw a popup on `map` and keep it.
    ///
    /// With `exclusive` every other popup is removed first. A popup with the
    /// same id replaces the old one.
    pub fn add_popup(
        &mut self,
        mut popup: AnchoredPopup,
        exclusive: bool,
        map: &dyn MapProjection,
    ) -> PopupElement {
        if exclusive {
            self.clear();
        }

        let element = popup.draw(Some(map), None);
        log::debug!("added popup {} at {:?}", popup.id(), element.position);
        self.popups.insert(popup.id().to_string(), popup);
        element
    }

    pub fn remove_popup(&mut self, id: &str) -> Option<AnchoredPopup> {
        self.popups.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&AnchoredPopup> {
        self.popups.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut AnchoredPopup> {
        self.popups.get_mut(id)
    }

    pub fn show_popup(&mut self, id: &str) {
        if let Some(popup) = self.popups.get_mut(id) {
            popup.overlay_mut().show();
        }
    }

    pub fn hide_popup(&mut self, id: &str) {
        if let Some(popup) = self.popups.get_mut(id) {
            popup.overlay_mut().hide();
        }
    }

    /// Re-anchor every popup after the map view changed
    pub fn update(&mut self, map: &dyn MapProjection) {
        for popup in self.popups.values_mut() {
            popup.update_position(map);
        }
    }

    pub fn clear(&mut self) {
        self.popups.clear();
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.popups
            .values()
            .filter(|p| p.overlay().is_visible())
            .count()
    }
}

impl Default for PopupManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        geo::{LatLng, Point, Size},
        viewport::Viewport,
    };
    use crate::ui::placement::RelativePosition;

    fn viewport() -> Viewport {
        Viewport::new(LatLng::new(0.0, 0.0), 3.0, Point::new(800.0, 600.0))
    }

    fn popup(id: &str, lat_lng: LatLng) -> AnchoredPopup {
        AnchoredPopup::new(id, Some(lat_lng), Size::new(100.0, 40.0), id, None, false)
    }

    #[test]
    fn test_add_draws_popup() {
        let map = viewport();
        let mut manager = PopupManager::new();

        let element = manager.add_popup(popup("a", LatLng::new(10.0, -10.0)), false, &map);

        assert!(element.position.is_some());
        let stored = manager.get("a").unwrap();
        assert_eq!(stored.relative_position(), Some(RelativePosition::BOTTOM_RIGHT));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_exclusive_add_removes_others() {
        let map = viewport();
        let mut manager = PopupManager::new();
        manager.add_popup(popup("a", LatLng::new(10.0, -10.0)), false, &map);
        manager.add_popup(popup("b", LatLng::new(-10.0, 10.0)), false, &map);
        assert_eq!(manager.len(), 2);

        manager.add_popup(popup("c", LatLng::new(5.0, 5.0)), true, &map);

        assert_eq!(manager.len(), 1);
        assert!(manager.get("c").is_some());
        assert!(manager.get("a").is_none());
    }

    #[test]
    fn test_update_follows_view_changes() {
        let mut map = viewport();
        let mut manager = PopupManager::new();
        manager.add_popup(popup("a", LatLng::new(10.0, -10.0)), false, &map);
        let before = manager.get("a").unwrap().overlay().position().unwrap();

        map.pan(Point::new(50.0, 0.0));
        manager.update(&map);

        let after = manager.get("a").unwrap().overlay().position().unwrap();
        // Pixel origins are floored, so allow a pixel of slack
        assert!((before.x - after.x - 50.0).abs() <= 1.5);
        assert!((before.y - after.y).abs() <= 1.5);
    }

    #[test]
    fn test_visibility_and_removal() {
        let map = viewport();
        let mut manager = PopupManager::default();
        manager.add_popup(popup("a", LatLng::new(10.0, -10.0)), false, &map);
        manager.add_popup(popup("b", LatLng::new(-10.0, 10.0)), false, &map);

        manager.hide_popup("a");
        assert_eq!(manager.visible_count(), 1);
        manager.show_popup("a");
        assert_eq!(manager.visible_count(), 2);

        assert!(manager.remove_popup("b").is_some());
        assert!(manager.remove_popup("b").is_none());
        manager.clear();
        assert!(manager.is_empty());
    }
}
