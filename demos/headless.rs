use maplet_anchored::prelude::*;

/// Places marker popups around a headless viewport and prints where they land
fn main() -> maplet_anchored::Result<()> {
    env_logger::init();

    println!("Maplet Anchored Popups");
    println!("======================");

    let mut map = Viewport::new(LatLng::new(37.7749, -122.4194), 13.0, Point::new(1024.0, 768.0));
    let mut popups = PopupManager::new();

    let places = [
        ("ferry", "Ferry Building", LatLng::new(37.7955, -122.3937)),
        ("mission", "Mission Dolores", LatLng::new(37.7599, -122.4269)),
        ("presidio", "Presidio", LatLng::new(37.7989, -122.4662)),
        ("dogpatch", "Dogpatch", LatLng::new(37.7605, -122.3889)),
    ];

    for (id, name, position) in places {
        let marker = Marker::new(id.to_string(), position)
            .with_popup(name.to_string())
            .with_popup_size(Size::new(160.0, 60.0));
        let element = popups.add_popup(marker.create_popup(), false, &map);

        let relative = popups
            .get(&element.id)
            .and_then(|p| p.relative_position())
            .unwrap_or_default();
        println!("   {:<16} -> {} at {:?}", name, relative, element.position);
    }

    println!("\nPanning east by 300px:");
    map.pan(Point::new(300.0, 0.0));
    popups.update(&map);

    for (id, name, _) in places {
        if let Some(popup) = popups.get(&format!("{}_popup", id)) {
            println!("   {:<16} -> {:?}", name, popup.overlay().position());
        }
    }

    let options = AnchoredPopupOptions::from_json(
        r#"{"lat_lng": {"lat": 37.78, "lng": -122.41}, "content": "Configured", "close_box": true}"#,
    )?;
    let element = popups.add_popup(AnchoredPopup::from_options("configured", options)?, true, &map);
    println!("\nExclusive popup {} at {:?}, {} open", element.id, element.position, popups.len());

    Ok(())
}
