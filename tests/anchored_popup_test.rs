/// End-to-end placement tests against a real Web Mercator viewport
#[cfg(test)]
mod anchored_popup_tests {
    use maplet_anchored::prelude::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// High zoom keeps Mercator close to linear across the view
    fn new_york() -> Viewport {
        Viewport::new(LatLng::new(40.7128, -74.0060), 12.0, Point::new(800.0, 600.0))
    }

    fn icon_anchor() -> Option<AnchorDescriptor> {
        Some(AnchorDescriptor::new(Size::new(16.0, 16.0), Point::new(8.0, 8.0)))
    }

    fn popup(lat_lng: Option<LatLng>) -> AnchoredPopup {
        AnchoredPopup::new("popup", lat_lng, Size::new(100.0, 40.0), "hello", icon_anchor(), true)
    }

    #[test]
    fn test_scenario_bottom_right() {
        init_logger();
        let map = new_york();
        let mut popup = popup(None);

        // North-west of center resolves to bottom-right
        popup.draw(Some(&map), Some(Point::new(-100.0, -100.0)));
        assert_eq!(popup.relative_position(), Some(RelativePosition::BOTTOM_RIGHT));

        popup.move_to(Point::new(50.0, 50.0));
        assert_eq!(popup.overlay().position(), Some(Point::new(74.0, 74.0)));
    }

    #[test]
    fn test_scenario_top_left() {
        init_logger();
        let map = new_york();
        let mut popup = popup(None);

        // South-east of center resolves to top-left
        popup.draw(Some(&map), Some(Point::new(100.0, 100.0)));
        assert_eq!(popup.relative_position(), Some(RelativePosition::TOP_LEFT));

        popup.move_to(Point::new(50.0, 50.0));
        assert_eq!(popup.overlay().position(), Some(Point::new(-42.0, 18.0)));
    }

    #[test]
    fn test_all_quadrants_resolve_to_opposite() {
        init_logger();
        let map = new_york();
        let cases = [
            (Point::new(-150.0, -120.0), RelativePosition::BOTTOM_RIGHT),
            (Point::new(150.0, -120.0), RelativePosition::BOTTOM_LEFT),
            (Point::new(-150.0, 120.0), RelativePosition::TOP_RIGHT),
            (Point::new(150.0, 120.0), RelativePosition::TOP_LEFT),
        ];

        for (px, expected) in cases {
            assert_eq!(resolve_relative_position(&map, &px), expected, "pixel {:?}", px);
        }
    }

    #[test]
    fn test_scenario_resize_while_placed() {
        init_logger();
        let map = new_york();
        let coordinate = map.layer_pixel_to_lat_lng(&Point::new(120.0, 90.0));
        let mut popup = popup(Some(coordinate));

        popup.draw(Some(&map), None);
        assert_eq!(popup.state(), PlacementState::Placed);
        assert_eq!(popup.relative_position(), Some(RelativePosition::TOP_LEFT));

        let anchor_px = map.lat_lng_to_layer_pixel(&coordinate);
        popup.set_size(Size::new(250.0, 120.0), Some(&map));

        let position = popup.overlay().position().unwrap();
        assert!((position.x - (anchor_px.x + 8.0 - 250.0)).abs() < 1e-6);
        assert!((position.y - (anchor_px.y + 8.0 - 120.0)).abs() < 1e-6);
    }

    #[test]
    fn test_scenario_draw_with_nothing_to_anchor() {
        init_logger();
        let mut popup = popup(None);

        let element = popup.draw(None, None);

        assert_eq!(popup.state(), PlacementState::Undrawn);
        assert_eq!(popup.relative_position(), None);
        assert_eq!(element.position, None);
    }

    #[test]
    fn test_popup_never_covers_marker_icon() {
        init_logger();
        let map = new_york();
        let offsets = [(-200.0, -150.0), (200.0, -150.0), (-200.0, 150.0), (200.0, 150.0)];

        for (dx, dy) in offsets {
            let position = map.layer_pixel_to_lat_lng(&Point::new(dx, dy));
            let marker = Marker::new("m".to_string(), position)
                .with_popup("details".to_string())
                .with_popup_size(Size::new(160.0, 90.0));
            let mut popup = marker.create_popup();

            let element = popup.draw(Some(&map), None);

            let icon_bounds = marker.icon().bounds_at(map.lat_lng_to_layer_pixel(&position));
            let popup_bounds = element.bounds().unwrap();
            assert!(
                !popup_bounds.overlaps(&icon_bounds),
                "popup {:?} covers icon {:?}",
                popup_bounds,
                icon_bounds
            );
        }
    }

    #[test]
    fn test_move_keeps_stale_position_until_next_draw() {
        init_logger();
        let mut map = new_york();
        let coordinate = map.layer_pixel_to_lat_lng(&Point::new(-100.0, -50.0));
        let mut popup = popup(Some(coordinate));

        popup.draw(Some(&map), None);
        assert_eq!(popup.relative_position(), Some(RelativePosition::BOTTOM_RIGHT));

        // After this pan the coordinate sits south-east of the new center
        map.pan(Point::new(-200.0, -100.0));
        popup.update_position(&map);
        assert_eq!(popup.relative_position(), Some(RelativePosition::BOTTOM_RIGHT));

        popup.draw(Some(&map), None);
        assert_eq!(popup.relative_position(), Some(RelativePosition::TOP_LEFT));
    }

    #[test]
    fn test_popup_from_json_options() {
        init_logger();
        let map = new_york();
        let options = AnchoredPopupOptions::from_json(
            r#"{
                "lat_lng": {"lat": 40.72, "lng": -74.02},
                "size": {"width": 100.0, "height": 40.0},
                "content": "Hudson",
                "close_box": true
            }"#,
        )
        .unwrap();

        let mut popup = AnchoredPopup::from_options("hudson", options).unwrap();
        let element = popup.draw(Some(&map), None);

        // North-west of the view center, zero anchor: popup starts on the point
        let px = map.lat_lng_to_layer_pixel(&LatLng::new(40.72, -74.02));
        assert_eq!(popup.relative_position(), Some(RelativePosition::BOTTOM_RIGHT));
        assert_eq!(element.position, Some(px));
        assert!(element.close_box);
    }
}
