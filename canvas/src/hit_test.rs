use super::*;

fn make_item(id: ItemId, x: f64, y: f64, w: f64, h: f64, rotation: f64) -> MapItem {
    MapItem {
        id,
        zone_id: 1,
        type_key: "sunbed".to_owned(),
        number: None,
        capacity: 2,
        x,
        y,
        width: w,
        height: h,
        rotation,
        fill_color: None,
    }
}

fn store_with(items: Vec<MapItem>) -> ItemStore {
    let mut store = ItemStore::new();
    for item in items {
        store.insert(item);
    }
    store
}

// =============================================================
// point_in_item
// =============================================================

#[test]
fn point_inside_axis_aligned_item() {
    let item = make_item(1, 10.0, 20.0, 100.0, 80.0, 0.0);
    assert!(point_in_item(Point::new(10.0, 20.0), &item));
    assert!(point_in_item(Point::new(110.0, 100.0), &item));
    assert!(point_in_item(Point::new(60.0, 60.0), &item));
}

#[test]
fn point_outside_axis_aligned_item() {
    let item = make_item(1, 10.0, 20.0, 100.0, 80.0, 0.0);
    assert!(!point_in_item(Point::new(9.0, 60.0), &item));
    assert!(!point_in_item(Point::new(60.0, 101.0), &item));
}

#[test]
fn rotation_moves_the_hit_footprint() {
    // A wide flat item rotated 90° around its center becomes tall and narrow.
    let item = make_item(1, 0.0, 40.0, 100.0, 20.0, 90.0);
    // Center is (50, 50). The unrotated left edge (5, 50) is no longer inside...
    assert!(!point_in_item(Point::new(5.0, 50.0), &item));
    // ...but a point 40 units above the center now is.
    assert!(point_in_item(Point::new(50.0, 10.0), &item));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_test_finds_item_under_point() {
    let store = store_with(vec![make_item(1, 0.0, 0.0, 100.0, 80.0, 0.0)]);
    assert_eq!(hit_test(Point::new(50.0, 40.0), &store), Some(1));
}

#[test]
fn hit_test_misses_empty_canvas() {
    let store = store_with(vec![make_item(1, 0.0, 0.0, 100.0, 80.0, 0.0)]);
    assert_eq!(hit_test(Point::new(500.0, 500.0), &store), None);
}

#[test]
fn hit_test_prefers_topmost_item() {
    // Higher ids draw later and therefore sit on top.
    let store = store_with(vec![
        make_item(1, 0.0, 0.0, 100.0, 80.0, 0.0),
        make_item(2, 50.0, 40.0, 100.0, 80.0, 0.0),
    ]);
    assert_eq!(hit_test(Point::new(60.0, 50.0), &store), Some(2));
    assert_eq!(hit_test(Point::new(10.0, 10.0), &store), Some(1));
}
