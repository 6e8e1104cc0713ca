//! Top-level map-editor engine.
//!
//! [`EngineCore`] holds all logic that does not depend on the DOM — the item
//! store, camera, selection, and the gesture state machine — so the full
//! editing behavior is testable without a browser. [`Engine`] wraps the core
//! together with the host element and converts viewport client coordinates
//! into element-relative screen points before delegating.
//!
//! Handlers return [`Action`]s for the host to process. The engine never
//! talks to the network itself: drag and marquee feedback is computed and
//! applied synchronously from local state, and a gesture's cumulative effect
//! surfaces as one batched `ItemsMoved` on release for the host's
//! persistence gateway.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashSet;

use web_sys::Element;

use crate::align::{AlignMode, DistributeAxis, align_positions, distribute_positions};
use crate::camera::{Camera, Point, element_point_from_rect};
use crate::consts::{MARQUEE_DRAG_THRESHOLD_PX, POSITION_EPSILON, ZOOM_STEP};
use crate::doc::{ItemId, ItemStore, MapConfig, MapItem, PositionUpdate};
use crate::hit::hit_test;
use crate::input::{Button, GestureState, ItemOrigin, Key, MarqueeState, Modifiers, WheelDelta};
use crate::selection::Selection;

/// Actions returned from engine handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// The selection changed. `primary` is the single-item form, set exactly
    /// when one item is selected; `selected` is the array form. Both are
    /// carried on every notification so observers of either granularity
    /// register once.
    SelectionChanged {
        primary: Option<ItemId>,
        selected: Vec<ItemId>,
    },
    /// A user gesture finished repositioning items. `updates` carries the
    /// absolute final positions and must be persisted in a single batched
    /// request; `reverts` carries the pre-gesture positions so the host can
    /// roll the move back if that request fails.
    ItemsMoved {
        updates: Vec<PositionUpdate>,
        reverts: Vec<PositionUpdate>,
    },
    /// The user asked to delete these items. The host confirms, persists,
    /// and then applies the deletion back into the engine.
    DeleteRequested { ids: Vec<ItemId> },
    /// A structural change happened; `count` is the new number of items.
    ItemCountChanged { count: usize },
    /// The host should set the viewport cursor.
    SetCursor(String),
    /// The host should re-render the item layer and overlays.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the host element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub store: ItemStore,
    pub config: MapConfig,
    pub camera: Camera,
    pub selection: Selection,
    pub gesture: GestureState,
    /// Whether the pan key (space) is currently held.
    pub pan_key_held: bool,
    /// Set when a gesture consumed the press/release cycle, so the host can
    /// swallow the synthetic click event the browser fires after release.
    suppress_click: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            store: ItemStore::new(),
            config: MapConfig::default(),
            camera: Camera::default(),
            selection: Selection::new(),
            gesture: GestureState::Idle,
            pan_key_held: false,
            suppress_click: false,
        }
    }
}

/// Items whose center falls inside the marquee rectangle.
fn marquee_preview(store: &ItemStore, marquee: &MarqueeState) -> HashSet<ItemId> {
    store
        .sorted_items()
        .iter()
        .filter(|item| marquee.contains(item.center()))
        .map(|item| item.id)
        .collect()
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn selection_changed(&self) -> Action {
        Action::SelectionChanged {
            primary: self.selection.primary(),
            selected: self.selection.sorted_ids(),
        }
    }

    fn count_changed(&self) -> Action {
        Action::ItemCountChanged { count: self.store.len() }
    }

    // --- Data inputs ---

    /// Hydrate the engine from a zone snapshot. Clears the selection and any
    /// in-progress gesture.
    pub fn load_zone(&mut self, items: Vec<MapItem>, config: MapConfig) -> Vec<Action> {
        self.store.load(items);
        self.config = config;
        self.selection.deselect_all();
        self.gesture = GestureState::Idle;
        vec![self.selection_changed(), self.count_changed(), Action::RenderNeeded]
    }

    /// Insert a freshly created item (already carrying its server-issued id).
    pub fn apply_create(&mut self, item: MapItem) -> Vec<Action> {
        self.store.insert(item);
        vec![self.count_changed(), Action::RenderNeeded]
    }

    /// Remove items that the server confirmed deleted. Prunes the selection
    /// so it never references a missing item.
    pub fn apply_delete(&mut self, ids: &[ItemId]) -> Vec<Action> {
        let mut removed = false;
        for id in ids {
            removed |= self.store.remove(*id).is_some();
        }
        if !removed {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.selection.prune(&self.store) {
            actions.push(self.selection_changed());
        }
        actions.push(self.count_changed());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Apply absolute positions programmatically (rollback, server echo).
    /// Clamped to bounds but deliberately not snapped — only user-initiated
    /// moves snap, so legacy unsnapped data survives a round trip.
    pub fn apply_positions(&mut self, updates: &[PositionUpdate]) -> Vec<Action> {
        let mut applied = false;
        for update in updates {
            applied |= self.store.apply_position(update, &self.config);
        }
        if applied { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    // --- Item property edits (persistence stays with the host) ---

    /// Set an item's rotation, normalized to `[0, 360)`.
    pub fn set_rotation(&mut self, id: ItemId, degrees: f64) -> Vec<Action> {
        let Some(item) = self.store.get_mut(id) else {
            return Vec::new();
        };
        item.rotation = degrees.rem_euclid(360.0);
        vec![Action::RenderNeeded]
    }

    /// Set or clear an item's fill-color override.
    pub fn set_fill_color(&mut self, id: ItemId, fill_color: Option<String>) -> Vec<Action> {
        let Some(item) = self.store.get_mut(id) else {
            return Vec::new();
        };
        item.fill_color = fill_color;
        vec![Action::RenderNeeded]
    }

    /// Set or clear an item's display number.
    pub fn set_number(&mut self, id: ItemId, number: Option<i64>) -> Vec<Action> {
        let Some(item) = self.store.get_mut(id) else {
            return Vec::new();
        };
        item.number = number;
        vec![Action::RenderNeeded]
    }

    /// Set an item's capacity.
    pub fn set_capacity(&mut self, id: ItemId, capacity: u32) -> Vec<Action> {
        let Some(item) = self.store.get_mut(id) else {
            return Vec::new();
        };
        item.capacity = capacity;
        vec![Action::RenderNeeded]
    }

    // --- Selection operations ---

    /// Select one item, replacing the selection unless `additive`.
    pub fn select_item(&mut self, id: ItemId, additive: bool) -> Vec<Action> {
        if !self.store.contains(id) {
            return Vec::new();
        }
        self.selection.select_single(id, additive);
        vec![self.selection_changed(), Action::RenderNeeded]
    }

    /// Toggle one item in or out of the selection.
    pub fn toggle_item(&mut self, id: ItemId) -> Vec<Action> {
        if !self.store.contains(id) {
            return Vec::new();
        }
        self.selection.toggle(id);
        vec![self.selection_changed(), Action::RenderNeeded]
    }

    /// Clear the selection. Always notifies, even when already empty.
    pub fn deselect_all(&mut self) -> Vec<Action> {
        self.selection.deselect_all();
        vec![self.selection_changed(), Action::RenderNeeded]
    }

    /// Select every item on the canvas.
    pub fn select_all(&mut self) -> Vec<Action> {
        self.selection.select_all(&self.store);
        vec![self.selection_changed(), Action::RenderNeeded]
    }

    /// Full item objects for the current selection, in id order.
    #[must_use]
    pub fn selected_items(&self) -> Vec<&MapItem> {
        self.selection
            .sorted_ids()
            .into_iter()
            .filter_map(|id| self.store.get(id))
            .collect()
    }

    // --- Alignment / distribution ---

    /// Reposition the selection according to an alignment rule and emit one
    /// batched `ItemsMoved`. Requires at least two selected items.
    pub fn align_selection(&mut self, mode: AlignMode) -> Vec<Action> {
        let updates = {
            let items = self.selected_items();
            align_positions(&items, mode, &self.config)
        };
        self.apply_arrangement(updates)
    }

    /// Spread the selection evenly along an axis and emit one batched
    /// `ItemsMoved`. Requires at least two selected items.
    pub fn distribute_selection(&mut self, axis: DistributeAxis) -> Vec<Action> {
        let updates = {
            let items = self.selected_items();
            distribute_positions(&items, axis, &self.config)
        };
        self.apply_arrangement(updates)
    }

    fn apply_arrangement(&mut self, updates: Vec<PositionUpdate>) -> Vec<Action> {
        if updates.is_empty() {
            return Vec::new();
        }
        let reverts: Vec<PositionUpdate> = updates
            .iter()
            .filter_map(|u| {
                self.store.get(u.id).map(|item| PositionUpdate {
                    id: u.id,
                    x: item.x,
                    y: item.y,
                    rotation: item.rotation,
                })
            })
            .collect();
        for update in &updates {
            self.store.apply_position(update, &self.config);
        }
        vec![Action::ItemsMoved { updates, reverts }, Action::RenderNeeded]
    }

    // --- Canvas settings ---

    /// Change the snap-grid size at runtime. Future moves snap to the new
    /// grid; existing item positions are left untouched.
    pub fn set_snap_size(&mut self, snap_size: f64) -> Vec<Action> {
        self.config.snap_size = snap_size.max(0.0);
        vec![Action::RenderNeeded]
    }

    /// Whether an item footprint would lie fully inside the canvas — the
    /// local validation applied to palette drops before any request is sent.
    #[must_use]
    pub fn can_place(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.config.contains(x, y, width, height)
    }

    /// Step the zoom in by one increment.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.camera.zoom_in();
        vec![Action::RenderNeeded]
    }

    /// Step the zoom out by one increment.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.camera.zoom_out();
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Handle a pointer press. `screen_pt` is element-relative; an invalid
    /// point (no layout yet) is skipped.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if !screen_pt.is_valid() {
            return Vec::new();
        }
        match button {
            Button::Secondary => Vec::new(),
            Button::Middle => {
                self.gesture = GestureState::Panning { last_screen: screen_pt };
                vec![Action::SetCursor("grabbing".to_owned())]
            }
            Button::Primary => self.on_primary_down(screen_pt, modifiers),
        }
    }

    fn on_primary_down(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        if self.pan_key_held {
            self.gesture = GestureState::Panning { last_screen: screen_pt };
            return vec![Action::SetCursor("grabbing".to_owned())];
        }

        let canvas_pt = self.camera.screen_to_canvas(screen_pt);
        let Some(hit_id) = hit_test(canvas_pt, &self.store) else {
            // Empty canvas: arm a marquee. Whether it replaces or extends the
            // selection is decided at release.
            self.gesture = GestureState::Marquee(MarqueeState::new(
                canvas_pt,
                screen_pt,
                modifiers.extends_selection(),
            ));
            return Vec::new();
        };

        if modifiers.toggles_selection() {
            // Toggle-modifier press is never a move: toggle now and hand any
            // subsequent motion to the marquee.
            self.selection.toggle(hit_id);
            self.gesture = GestureState::Marquee(MarqueeState::new(canvas_pt, screen_pt, true));
            return vec![self.selection_changed(), Action::RenderNeeded];
        }

        let mut actions = Vec::new();
        if modifiers.shift {
            if self.selection.select_single(hit_id, true) {
                actions.push(self.selection_changed());
                actions.push(Action::RenderNeeded);
            }
        } else if !self.selection.is_selected(hit_id) {
            self.selection.select_single(hit_id, false);
            actions.push(self.selection_changed());
            actions.push(Action::RenderNeeded);
        }

        let origins: Vec<ItemOrigin> = self
            .selection
            .sorted_ids()
            .into_iter()
            .filter_map(|id| self.store.get(id).map(|item| ItemOrigin { id, x: item.x, y: item.y }))
            .collect();
        self.gesture = GestureState::MovingSelection {
            pressed: hit_id,
            additive: modifiers.extends_selection(),
            start_canvas: canvas_pt,
            origins,
        };
        actions.push(Action::SetCursor("move".to_owned()));
        actions
    }

    /// Handle pointer movement for the active gesture.
    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        if !screen_pt.is_valid() {
            return Vec::new();
        }
        match &mut self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { last_screen } => {
                let dx = screen_pt.x - last_screen.x;
                let dy = screen_pt.y - last_screen.y;
                *last_screen = screen_pt;
                self.camera.pan_by(dx, dy);
                vec![Action::RenderNeeded]
            }
            GestureState::MovingSelection { start_canvas, origins, .. } => {
                if self.selection.is_empty() {
                    // Selection emptied mid-gesture: the drag silently no-ops.
                    self.gesture = GestureState::Idle;
                    return Vec::new();
                }
                let start = *start_canvas;
                let origins = origins.clone();
                let canvas_pt = self.camera.screen_to_canvas(screen_pt);
                let dx = canvas_pt.x - start.x;
                let dy = canvas_pt.y - start.y;
                for origin in &origins {
                    let Some(item) = self.store.get_mut(origin.id) else {
                        continue;
                    };
                    let (width, height) = (item.width, item.height);
                    item.x = self.config.clamp_x(self.config.snap(origin.x + dx), width);
                    item.y = self.config.clamp_y(self.config.snap(origin.y + dy), height);
                }
                vec![Action::RenderNeeded]
            }
            GestureState::Marquee(marquee) => {
                let canvas_pt = self.camera.screen_to_canvas(screen_pt);
                marquee.current = canvas_pt;
                if !marquee.active {
                    let travelled = (screen_pt.x - marquee.press_screen.x)
                        .hypot(screen_pt.y - marquee.press_screen.y);
                    if travelled <= MARQUEE_DRAG_THRESHOLD_PX {
                        return Vec::new();
                    }
                    marquee.active = true;
                }
                marquee.preview = marquee_preview(&self.store, marquee);
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Handle pointer release, concluding the active gesture.
    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, modifiers: Modifiers) -> Vec<Action> {
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { .. } => vec![Action::SetCursor("default".to_owned())],
            GestureState::MovingSelection { pressed, additive, origins, .. } => {
                self.finish_move(pressed, additive, &origins)
            }
            GestureState::Marquee(marquee) => self.finish_marquee(&marquee, screen_pt, modifiers),
        }
    }

    fn finish_move(&mut self, pressed: ItemId, additive: bool, origins: &[ItemOrigin]) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.selection.is_empty() {
            actions.push(Action::SetCursor("default".to_owned()));
            return actions;
        }
        let mut updates = Vec::new();
        let mut reverts = Vec::new();
        for origin in origins {
            let Some(item) = self.store.get(origin.id) else {
                continue;
            };
            if (item.x - origin.x).abs() > POSITION_EPSILON || (item.y - origin.y).abs() > POSITION_EPSILON {
                updates.push(PositionUpdate { id: item.id, x: item.x, y: item.y, rotation: item.rotation });
                reverts.push(PositionUpdate { id: item.id, x: origin.x, y: origin.y, rotation: item.rotation });
            }
        }
        if updates.is_empty() {
            // Plain click on an already-selected item collapses a multi
            // selection down to the pressed item.
            if !additive && self.store.contains(pressed) && self.selection.select_single(pressed, false) {
                actions.push(self.selection_changed());
                actions.push(Action::RenderNeeded);
            }
        } else {
            self.suppress_click = true;
            actions.push(Action::ItemsMoved { updates, reverts });
        }
        actions.push(Action::SetCursor("default".to_owned()));
        actions
    }

    fn finish_marquee(&mut self, marquee: &MarqueeState, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        if marquee.active {
            self.suppress_click = true;
            let mut marquee = marquee.clone();
            // An invalid release point keeps the last tracked rectangle.
            if screen_pt.is_valid() {
                marquee.current = self.camera.screen_to_canvas(screen_pt);
                marquee.preview = marquee_preview(&self.store, &marquee);
            }
            if marquee.meets_commit_threshold() {
                let mut ids: Vec<ItemId> = marquee.preview.iter().copied().collect();
                ids.sort_unstable();
                let additive = marquee.additive || modifiers.extends_selection();
                self.selection.select_many(&ids, additive);
                actions.push(self.selection_changed());
            } else if !marquee.additive && self.selection.deselect_all() {
                actions.push(self.selection_changed());
            }
            actions.push(Action::RenderNeeded);
        } else if !marquee.additive && self.selection.deselect_all() {
            // Sub-threshold press/release on empty canvas is a plain click:
            // deselect everything.
            actions.push(self.selection_changed());
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Handle a wheel event. With the toggle modifier held the wheel steps the
    /// zoom, anchored at the pointer so the same canvas point stays under it;
    /// without it the wheel scrolls the viewport and never hijacks zoom.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.toggles_selection() {
            if !screen_pt.is_valid() {
                return Vec::new();
            }
            let step = if delta.dy < 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
            self.camera.zoom_at(screen_pt, self.camera.zoom + step);
        } else {
            self.camera.scroll_x += delta.dx;
            self.camera.scroll_y += delta.dy;
        }
        vec![Action::RenderNeeded]
    }

    /// Handle a key press.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_pan_key() {
            self.pan_key_held = true;
            return vec![Action::SetCursor("grab".to_owned())];
        }
        match key.0.as_str() {
            "Delete" | "Backspace" => {
                if self.selection.is_empty() {
                    Vec::new()
                } else {
                    vec![Action::DeleteRequested { ids: self.selection.sorted_ids() }]
                }
            }
            "Escape" => self.cancel_gesture_or_deselect(),
            "a" | "A" if modifiers.toggles_selection() => self.select_all(),
            _ => Vec::new(),
        }
    }

    /// Handle a key release.
    pub fn on_key_up(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_pan_key() {
            self.pan_key_held = false;
            return vec![Action::SetCursor("default".to_owned())];
        }
        Vec::new()
    }

    /// Escape aborts an in-progress gesture — restoring pre-drag positions —
    /// and otherwise clears the selection.
    fn cancel_gesture_or_deselect(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.gesture) {
            GestureState::MovingSelection { origins, .. } => {
                for origin in &origins {
                    if let Some(item) = self.store.get_mut(origin.id) {
                        item.x = origin.x;
                        item.y = origin.y;
                    }
                }
                vec![Action::RenderNeeded]
            }
            GestureState::Marquee(_) | GestureState::Panning { .. } => vec![Action::RenderNeeded],
            GestureState::Idle => self.deselect_all(),
        }
    }

    // --- Queries ---

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&MapItem> {
        self.store.get(id)
    }

    /// Number of items on the canvas.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    /// The marquee rectangle as `(min, max)` canvas points, when one is
    /// actively being drawn.
    #[must_use]
    pub fn marquee_rect(&self) -> Option<(Point, Point)> {
        match &self.gesture {
            GestureState::Marquee(marquee) if marquee.active => Some(marquee.rect()),
            _ => None,
        }
    }

    /// Whether an item is preview-selected by the active marquee.
    #[must_use]
    pub fn is_marquee_previewed(&self, id: ItemId) -> bool {
        match &self.gesture {
            GestureState::Marquee(marquee) if marquee.active => marquee.preview.contains(&id),
            _ => false,
        }
    }

    /// Consume the click-suppression flag. Returns true when the just-ended
    /// gesture already handled the press/release cycle and the synthetic
    /// click event that follows must be ignored.
    pub fn take_suppress_click(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the host element the
/// item layer is rendered into.
pub struct Engine {
    host: Element,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given host element.
    #[must_use]
    pub fn new(host: Element) -> Self {
        Self { host, core: EngineCore::new() }
    }

    /// Element-relative screen point for viewport client coordinates.
    ///
    /// Returns [`Point::INVALID`] while the host element has no layout, so
    /// events arriving before first paint are skipped rather than misplaced.
    #[must_use]
    pub fn screen_point(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.host.get_bounding_client_rect();
        element_point_from_rect(rect.left(), rect.top(), rect.width(), rect.height(), client_x, client_y)
    }

    /// Canvas-space point for viewport client coordinates, or the invalid
    /// sentinel while the host element has no layout.
    #[must_use]
    pub fn canvas_point(&self, client_x: f64, client_y: f64) -> Point {
        let screen = self.screen_point(client_x, client_y);
        if !screen.is_valid() {
            return Point::INVALID;
        }
        self.core.camera.screen_to_canvas(screen)
    }

    // --- Delegated data inputs ---

    pub fn load_zone(&mut self, items: Vec<MapItem>, config: MapConfig) -> Vec<Action> {
        self.core.load_zone(items, config)
    }

    pub fn apply_create(&mut self, item: MapItem) -> Vec<Action> {
        self.core.apply_create(item)
    }

    pub fn apply_delete(&mut self, ids: &[ItemId]) -> Vec<Action> {
        self.core.apply_delete(ids)
    }

    pub fn apply_positions(&mut self, updates: &[PositionUpdate]) -> Vec<Action> {
        self.core.apply_positions(updates)
    }

    // --- Delegated input events (client coordinates) ---

    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let pt = self.screen_point(client_x, client_y);
        self.core.on_pointer_down(pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, modifiers: Modifiers) -> Vec<Action> {
        let pt = self.screen_point(client_x, client_y);
        self.core.on_pointer_move(pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, client_x: f64, client_y: f64, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let pt = self.screen_point(client_x, client_y);
        self.core.on_pointer_up(pt, button, modifiers)
    }

    pub fn on_wheel(&mut self, client_x: f64, client_y: f64, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        let pt = self.screen_point(client_x, client_y);
        self.core.on_wheel(pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    pub fn on_key_up(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_up(key, modifiers)
    }
}
