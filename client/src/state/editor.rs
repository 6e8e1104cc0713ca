//! Editor-session state for the active zone.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CanvasHost` owns the authoritative engine; this model is the read-side
//! projection the surrounding chrome (palette, panels, status bar) renders
//! from. It is updated exclusively from engine actions and gateway results,
//! so components never reach into the engine for display data.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use canvas::doc::{FurnitureType, ItemId, MapConfig, MapItem, ZoneId};
use leptos::prelude::RwSignal;

/// Context wrapper for the routed zone id. The editor page writes it; the
/// canvas host watches it to load and unload zones.
#[derive(Clone, Copy)]
pub struct ActiveZone(pub RwSignal<Option<ZoneId>>);

/// Zone-level editor state: which zone is open, the chrome's projection of
/// the canvas, and in-flight request accounting.
#[derive(Clone, Debug)]
pub struct EditorState {
    /// Zone currently open in the editor, from the route.
    pub zone_id: Option<ZoneId>,
    /// True while the initial zone fetch is in flight.
    pub loading: bool,
    /// Number of persistence batches currently in flight. Batches from
    /// separate gestures may race; each carries absolute positions, so no
    /// ordering is enforced here.
    pub in_flight_saves: u32,
    /// Number of items on the canvas.
    pub item_count: usize,
    /// Selected item ids, ascending — the array notification form.
    pub selection: Vec<ItemId>,
    /// Snapshot of the single selected item, when exactly one is selected —
    /// the single-item notification form the detail panel renders.
    pub selected_item: Option<MapItem>,
    /// Furniture-type registry for the open zone.
    pub furniture_types: Vec<FurnitureType>,
    /// Canvas settings for the open zone.
    pub config: MapConfig,
    /// Camera projection for the chrome (status bar, surface transform).
    pub zoom: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            zone_id: None,
            loading: false,
            in_flight_saves: 0,
            item_count: 0,
            selection: Vec::new(),
            selected_item: None,
            furniture_types: Vec::new(),
            config: MapConfig::default(),
            zoom: 1.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

impl EditorState {
    /// Reset for a newly routed zone. Everything except the id reverts to
    /// defaults; stale responses for the previous zone are discarded by
    /// comparing against this id when they land.
    pub fn open_zone(&mut self, zone_id: Option<ZoneId>) {
        *self = Self {
            zone_id,
            loading: zone_id.is_some(),
            ..Self::default()
        };
    }

    /// Look up a furniture type by key.
    #[must_use]
    pub fn furniture_type(&self, key: &str) -> Option<&FurnitureType> {
        self.furniture_types.iter().find(|t| t.key == key)
    }

    /// Resolve the fill color for an item: its own override, else its type
    /// color, else a neutral fallback.
    #[must_use]
    pub fn fill_for(&self, item: &MapItem) -> String {
        if let Some(fill) = &item.fill_color {
            return fill.clone();
        }
        self.furniture_type(&item.type_key)
            .map_or_else(|| "#9AA0A6".to_owned(), |t| t.color.clone())
    }

    /// Record a persistence batch starting.
    pub fn begin_save(&mut self) {
        self.in_flight_saves += 1;
    }

    /// Record a persistence batch finishing (either way).
    pub fn end_save(&mut self) {
        self.in_flight_saves = self.in_flight_saves.saturating_sub(1);
    }

    /// Whether any persistence request is still in flight.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.in_flight_saves > 0
    }
}
