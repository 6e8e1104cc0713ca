#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn key_is_scoped_per_zone() {
    assert_eq!(view_prefs_key(7), "map-editor:zone:7:view");
    assert_ne!(view_prefs_key(7), view_prefs_key(8));
}

#[test]
fn prefs_round_trip_through_json() {
    let prefs = ZoneViewPrefs { zoom: 1.5, scroll_x: 120.0, scroll_y: -40.0 };
    let raw = serde_json::to_string(&prefs).unwrap();
    let back: ZoneViewPrefs = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, prefs);
}

#[test]
fn default_prefs_are_identity_view() {
    let prefs = ZoneViewPrefs::default();
    assert_eq!(prefs.zoom, 1.0);
    assert_eq!(prefs.scroll_x, 0.0);
    assert_eq!(prefs.scroll_y, 0.0);
}

#[test]
fn load_off_browser_returns_none() {
    // Without a window there is no storage; the helper degrades silently.
    assert_eq!(load_view_prefs(1), None);
}
