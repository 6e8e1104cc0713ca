//! Zone document model: placeable items, the furniture-type registry, the
//! zone canvas configuration, and the in-memory item store.
//!
//! Data flows into this layer from the network (zone loads, server-issued
//! creates) and from the input engine (drags, alignment, property edits).
//! The host UI reads [`ItemStore::sorted_items`] to render the item layer in
//! a stable order. The engine holds the authoritative in-memory copy; the
//! server is the durable store, kept eventually consistent by the host's
//! persistence gateway.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_SNAP_SIZE,
};

/// Server-issued identifier for a placeable item.
pub type ItemId = i64;

/// Server-issued identifier for a zone.
pub type ZoneId = i64;

/// One placeable element (furniture or decoration) on a zone's map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapItem {
    /// Stable server-issued identifier.
    pub id: ItemId,
    /// Zone this item belongs to.
    pub zone_id: ZoneId,
    /// Lookup key into the furniture-type registry.
    pub type_key: String,
    /// Display number shown on the item, for numbered types.
    pub number: Option<i64>,
    /// Seating capacity; zero for decorations.
    pub capacity: u32,
    /// Left edge of the footprint in canvas units.
    pub x: f64,
    /// Top edge of the footprint in canvas units.
    pub y: f64,
    /// Footprint width in canvas units.
    pub width: f64,
    /// Footprint height in canvas units.
    pub height: f64,
    /// Clockwise rotation in degrees around the item center.
    pub rotation: f64,
    /// Per-item fill override; `None` falls back to the type color.
    pub fill_color: Option<String>,
}

impl MapItem {
    /// Center of the item footprint, ignoring rotation (the center is the
    /// rotation pivot, so it is rotation-invariant).
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Registry entry describing one furniture type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureType {
    /// Registry key referenced by [`MapItem::type_key`].
    pub key: String,
    /// Human-readable name shown in the palette.
    pub label: String,
    /// Footprint width assigned to newly placed items.
    pub default_width: f64,
    /// Footprint height assigned to newly placed items.
    pub default_height: f64,
    /// Capacity assigned to newly placed items.
    pub default_capacity: u32,
    /// Base fill color for items of this type.
    pub color: String,
}

/// Zone-level canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Canvas width in canvas units.
    pub width: f64,
    /// Canvas height in canvas units.
    pub height: f64,
    /// Canvas background fill.
    pub background_color: String,
    /// Active snap-grid size. Changing it affects future moves only; existing
    /// positions are never re-snapped.
    pub snap_size: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background_color: DEFAULT_BACKGROUND_COLOR.to_owned(),
            snap_size: DEFAULT_SNAP_SIZE,
        }
    }
}

impl MapConfig {
    /// Round `value` to the nearest multiple of the active snap size.
    /// A non-positive snap size disables snapping.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if self.snap_size <= 0.0 {
            return value;
        }
        (value / self.snap_size).round() * self.snap_size
    }

    /// Clamp a left edge so an item of `extent` width stays inside the canvas.
    #[must_use]
    pub fn clamp_x(&self, x: f64, extent: f64) -> f64 {
        x.clamp(0.0, (self.width - extent).max(0.0))
    }

    /// Clamp a top edge so an item of `extent` height stays inside the canvas.
    #[must_use]
    pub fn clamp_y(&self, y: f64, extent: f64) -> f64 {
        y.clamp(0.0, (self.height - extent).max(0.0))
    }

    /// Whether an item footprint lies fully inside the canvas.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x + width <= self.width && y + height <= self.height
    }
}

/// Absolute final position for one item, as carried by a batched update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// In-memory store of the items on the active zone's canvas.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: HashMap<ItemId, MapItem>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new() }
    }

    /// Replace all items with a zone snapshot.
    pub fn load(&mut self, items: Vec<MapItem>) {
        self.items.clear();
        for item in items {
            self.items.insert(item.id, item);
        }
    }

    /// Insert or replace an item. An existing item with the same id is
    /// overwritten.
    pub fn insert(&mut self, item: MapItem) {
        self.items.insert(item.id, item);
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<MapItem> {
        self.items.remove(&id)
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&MapItem> {
        self.items.get(&id)
    }

    /// Return a mutable reference to an item by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut MapItem> {
        self.items.get_mut(&id)
    }

    /// Whether an item with `id` is present.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Apply an absolute position update, clamped to the canvas bounds.
    /// Positions arriving through this path are programmatic (zone reloads,
    /// rollbacks) and are deliberately not snapped. Returns false when the
    /// item no longer exists.
    pub fn apply_position(&mut self, update: &PositionUpdate, config: &MapConfig) -> bool {
        let Some(item) = self.items.get_mut(&update.id) else {
            return false;
        };
        item.x = config.clamp_x(update.x, item.width);
        item.y = config.clamp_y(update.y, item.height);
        item.rotation = update.rotation;
        true
    }

    /// All item ids, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.keys().copied().collect()
    }

    /// All items sorted by id, oldest first — the draw order of the item
    /// layer (later-created items render on top).
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&MapItem> {
        let mut items: Vec<&MapItem> = self.items.values().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
