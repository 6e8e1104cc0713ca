#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Point validity
// =============================================================

#[test]
fn point_new_is_valid() {
    assert!(pt(0.0, 0.0).is_valid());
    assert!(pt(100.0, 250.0).is_valid());
}

#[test]
fn point_invalid_sentinel_is_not_valid() {
    assert!(!Point::INVALID.is_valid());
}

#[test]
fn point_negative_coordinates_are_valid() {
    // Only the exact sentinel is invalid; negative screen coords can occur
    // while dragging outside the element.
    assert!(pt(-5.0, 20.0).is_valid());
}

// =============================================================
// element_point_from_rect
// =============================================================

#[test]
fn element_point_subtracts_rect_origin() {
    let p = element_point_from_rect(10.0, 20.0, 800.0, 600.0, 110.0, 120.0);
    assert_eq!(p, pt(100.0, 100.0));
}

#[test]
fn element_point_zero_width_rect_is_invalid() {
    let p = element_point_from_rect(0.0, 0.0, 0.0, 600.0, 50.0, 50.0);
    assert_eq!(p, Point::INVALID);
}

#[test]
fn element_point_zero_height_rect_is_invalid() {
    let p = element_point_from_rect(0.0, 0.0, 800.0, 0.0, 50.0, 50.0);
    assert_eq!(p, Point::INVALID);
}

// =============================================================
// Coordinate conversion
// =============================================================

#[test]
fn identity_camera_maps_screen_to_canvas_unchanged() {
    let cam = Camera::default();
    assert_eq!(cam.screen_to_canvas(pt(40.0, 70.0)), pt(40.0, 70.0));
}

#[test]
fn screen_to_canvas_accounts_for_zoom_and_scroll() {
    let cam = Camera { scroll_x: 100.0, scroll_y: 50.0, zoom: 2.0 };
    assert_eq!(cam.screen_to_canvas(pt(100.0, 150.0)), pt(100.0, 100.0));
}

#[test]
fn canvas_to_screen_inverts_screen_to_canvas() {
    let cam = Camera { scroll_x: -30.0, scroll_y: 12.5, zoom: 1.5 };
    let canvas = cam.screen_to_canvas(pt(200.0, 300.0));
    assert_eq!(cam.canvas_to_screen(canvas), pt(200.0, 300.0));
}

#[test]
fn screen_dist_scales_by_zoom() {
    let cam = Camera { scroll_x: 0.0, scroll_y: 0.0, zoom: 2.0 };
    assert_eq!(cam.screen_dist_to_canvas(10.0), 5.0);
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn set_zoom_clamps_to_range() {
    let mut cam = Camera::default();
    cam.set_zoom(100.0);
    assert_eq!(cam.zoom, crate::consts::ZOOM_MAX);
    cam.set_zoom(0.0);
    assert_eq!(cam.zoom, crate::consts::ZOOM_MIN);
}

#[test]
fn zoom_in_steps_by_increment() {
    let mut cam = Camera::default();
    cam.zoom_in();
    assert_eq!(cam.zoom, 1.0 + crate::consts::ZOOM_STEP);
}

#[test]
fn zoom_out_never_goes_below_min() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.zoom_out();
    }
    assert_eq!(cam.zoom, crate::consts::ZOOM_MIN);
}

#[test]
fn zoom_at_keeps_anchor_point_fixed() {
    let mut cam = Camera { scroll_x: 37.0, scroll_y: -12.0, zoom: 1.0 };
    let anchor = pt(320.0, 240.0);
    let before = cam.screen_to_canvas(anchor);
    cam.zoom_at(anchor, 2.0);
    let after = cam.screen_to_canvas(anchor);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn zoom_at_clamps_requested_zoom() {
    let mut cam = Camera::default();
    cam.zoom_at(pt(0.0, 0.0), 99.0);
    assert_eq!(cam.zoom, crate::consts::ZOOM_MAX);
}

// =============================================================
// Panning
// =============================================================

#[test]
fn pan_by_moves_content_with_pointer() {
    let mut cam = Camera::default();
    let before = cam.screen_to_canvas(pt(100.0, 100.0));
    cam.pan_by(25.0, -10.0);
    // Content followed the pointer: the canvas point now under (125, 90)
    // is the one that was under (100, 100).
    let after = cam.screen_to_canvas(pt(125.0, 90.0));
    assert_eq!(before, after);
}
