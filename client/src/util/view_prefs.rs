//! Per-zone view preferences persisted on the device.
//!
//! Zoom and scroll are presentation state, not zone data: they are saved to
//! localStorage per zone and restored on the next visit, independent of
//! anything the server stores.

#[cfg(test)]
#[path = "view_prefs_test.rs"]
mod view_prefs_test;

use canvas::doc::ZoneId;
use serde::{Deserialize, Serialize};

use crate::util::storage::{load_json, save_json};

/// Camera state remembered for one zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneViewPrefs {
    pub zoom: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Default for ZoneViewPrefs {
    fn default() -> Self {
        Self { zoom: 1.0, scroll_x: 0.0, scroll_y: 0.0 }
    }
}

/// localStorage key for one zone's view preferences.
#[must_use]
pub fn view_prefs_key(zone_id: ZoneId) -> String {
    format!("map-editor:zone:{zone_id}:view")
}

/// Load the remembered view for a zone, if any.
#[must_use]
pub fn load_view_prefs(zone_id: ZoneId) -> Option<ZoneViewPrefs> {
    load_json(&view_prefs_key(zone_id))
}

/// Persist the view for a zone.
pub fn save_view_prefs(zone_id: ZoneId, prefs: &ZoneViewPrefs) {
    save_json(&view_prefs_key(zone_id), prefs);
}
