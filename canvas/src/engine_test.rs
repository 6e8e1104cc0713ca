#![allow(clippy::float_cmp)]

use super::*;
use crate::align::{AlignMode, DistributeAxis};
use crate::consts::{ZOOM_MAX, ZOOM_MIN};
use crate::doc::MapItem;
use crate::input::{Button, GestureState, Key, Modifiers, WheelDelta};

// =============================================================
// Helpers
// =============================================================

fn make_item(id: ItemId, x: f64, y: f64) -> MapItem {
    make_item_sized(id, x, y, 100.0, 80.0)
}

fn make_item_sized(id: ItemId, x: f64, y: f64, w: f64, h: f64) -> MapItem {
    MapItem {
        id,
        zone_id: 1,
        type_key: "sunbed".to_owned(),
        number: Some(id),
        capacity: 2,
        x,
        y,
        width: w,
        height: h,
        rotation: 0.0,
        fill_color: None,
    }
}

fn test_config() -> MapConfig {
    MapConfig {
        width: 1000.0,
        height: 800.0,
        background_color: "#FFFFFF".to_owned(),
        snap_size: 10.0,
    }
}

fn core_with(items: Vec<MapItem>) -> EngineCore {
    let mut core = EngineCore::new();
    core.load_zone(items, test_config());
    core
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn no_modifiers() -> Modifiers {
    Modifiers::default()
}

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Default::default() }
}

fn shift() -> Modifiers {
    Modifiers { shift: true, ..Default::default() }
}

fn key(name: &str) -> Key {
    Key(name.to_owned())
}

/// The `selected` array of the last SelectionChanged in `actions`.
fn last_selection(actions: &[Action]) -> Option<Vec<ItemId>> {
    actions.iter().rev().find_map(|a| match a {
        Action::SelectionChanged { selected, .. } => Some(selected.clone()),
        _ => None,
    })
}

/// The `primary` of the last SelectionChanged in `actions`.
fn last_primary(actions: &[Action]) -> Option<Option<ItemId>> {
    actions.iter().rev().find_map(|a| match a {
        Action::SelectionChanged { primary, .. } => Some(*primary),
        _ => None,
    })
}

fn items_moved(actions: &[Action]) -> Vec<(&Vec<PositionUpdate>, &Vec<PositionUpdate>)> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::ItemsMoved { updates, reverts } => Some((updates, reverts)),
            _ => None,
        })
        .collect()
}

fn count_action(actions: &[Action]) -> Option<usize> {
    actions.iter().rev().find_map(|a| match a {
        Action::ItemCountChanged { count } => Some(*count),
        _ => None,
    })
}

/// Press, move, release with the primary button and no modifiers.
/// Returns the release actions.
fn drag(core: &mut EngineCore, from: Point, to: Point) -> Vec<Action> {
    core.on_pointer_down(from, Button::Primary, no_modifiers());
    core.on_pointer_move(to, no_modifiers());
    core.on_pointer_up(to, Button::Primary, no_modifiers())
}

// =============================================================
// Construction and zone loading
// =============================================================

#[test]
fn new_core_is_empty_and_idle() {
    let core = EngineCore::new();
    assert_eq!(core.item_count(), 0);
    assert!(core.selection.is_empty());
    assert!(matches!(core.gesture, GestureState::Idle));
    assert_eq!(core.camera.zoom, 1.0);
}

#[test]
fn load_zone_populates_store_and_reports_count() {
    let mut core = EngineCore::new();
    let actions = core.load_zone(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)], test_config());
    assert_eq!(core.item_count(), 2);
    assert_eq!(count_action(&actions), Some(2));
}

#[test]
fn load_zone_clears_prior_selection() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.select_item(1, false);
    let actions = core.load_zone(vec![make_item(5, 0.0, 0.0)], test_config());
    assert_eq!(last_selection(&actions), Some(vec![]));
    assert!(core.selection.is_empty());
}

#[test]
fn load_zone_aborts_active_gesture() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.on_pointer_down(pt(50.0, 40.0), Button::Primary, no_modifiers());
    core.load_zone(vec![], test_config());
    assert!(matches!(core.gesture, GestureState::Idle));
}

// =============================================================
// Structural changes
// =============================================================

#[test]
fn apply_create_adds_item_and_reports_count() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    let actions = core.apply_create(make_item(2, 300.0, 0.0));
    assert_eq!(core.item_count(), 2);
    assert_eq!(count_action(&actions), Some(2));
}

#[test]
fn apply_delete_removes_and_prunes_selection() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_all();
    let actions = core.apply_delete(&[1]);
    assert!(!core.store.contains(1));
    // The selection-changed notification reflects the reduced set.
    assert_eq!(last_selection(&actions), Some(vec![2]));
    assert_eq!(count_action(&actions), Some(1));
}

#[test]
fn apply_delete_unknown_ids_is_silent() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    let actions = core.apply_delete(&[99]);
    assert!(actions.is_empty());
    assert_eq!(core.item_count(), 1);
}

#[test]
fn apply_positions_does_not_snap() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.apply_positions(&[PositionUpdate { id: 1, x: 33.3, y: 47.7, rotation: 0.0 }]);
    assert_eq!(core.item(1).map(|i| i.x), Some(33.3));
    assert_eq!(core.item(1).map(|i| i.y), Some(47.7));
}

#[test]
fn apply_positions_clamps_to_bounds() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.apply_positions(&[PositionUpdate { id: 1, x: 5000.0, y: -3.0, rotation: 0.0 }]);
    assert_eq!(core.item(1).map(|i| i.x), Some(900.0));
    assert_eq!(core.item(1).map(|i| i.y), Some(0.0));
}

// =============================================================
// Selection operations and notification forms
// =============================================================

#[test]
fn select_item_fires_both_notification_forms() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    let actions = core.select_item(1, false);
    assert_eq!(last_primary(&actions), Some(Some(1)));
    assert_eq!(last_selection(&actions), Some(vec![1]));
}

#[test]
fn multi_selection_has_no_primary() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_item(1, false);
    let actions = core.select_item(2, true);
    assert_eq!(last_primary(&actions), Some(None));
    assert_eq!(last_selection(&actions), Some(vec![1, 2]));
}

#[test]
fn select_unknown_item_is_ignored() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    assert!(core.select_item(42, false).is_empty());
}

#[test]
fn deselect_all_notifies_with_empty_forms() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.select_item(1, false);
    let actions = core.deselect_all();
    assert_eq!(last_primary(&actions), Some(None));
    assert_eq!(last_selection(&actions), Some(vec![]));
}

#[test]
fn select_all_selects_every_item() {
    let mut core = core_with(vec![make_item(3, 0.0, 0.0), make_item(1, 200.0, 0.0), make_item(2, 400.0, 0.0)]);
    let actions = core.select_all();
    assert_eq!(last_selection(&actions), Some(vec![1, 2, 3]));
}

#[test]
fn selected_items_returns_full_objects() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_all();
    let items = core.selected_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].type_key, "sunbed");
}

// =============================================================
// Pointer press: selection semantics
// =============================================================

#[test]
fn press_on_unselected_item_replaces_selection() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_item(2, false);
    let actions = core.on_pointer_down(pt(50.0, 40.0), Button::Primary, no_modifiers());
    assert_eq!(last_selection(&actions), Some(vec![1]));
    assert!(matches!(core.gesture, GestureState::MovingSelection { .. }));
}

#[test]
fn press_on_selected_item_keeps_multi_selection() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_all();
    let actions = core.on_pointer_down(pt(50.0, 40.0), Button::Primary, no_modifiers());
    assert!(last_selection(&actions).is_none());
    assert_eq!(core.selection.count(), 2);
}

#[test]
fn toggle_modifier_press_toggles_and_arms_marquee() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_item(1, false);
    let actions = core.on_pointer_down(pt(250.0, 40.0), Button::Primary, ctrl());
    assert_eq!(last_selection(&actions), Some(vec![1, 2]));
    // A toggle press is never a drag-to-move.
    assert!(matches!(core.gesture, GestureState::Marquee(_)));
}

#[test]
fn toggle_modifier_press_on_selected_item_deselects_it() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_all();
    let actions = core.on_pointer_down(pt(50.0, 40.0), Button::Primary, ctrl());
    assert_eq!(last_selection(&actions), Some(vec![2]));
}

#[test]
fn shift_press_adds_and_starts_move() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_item(1, false);
    let actions = core.on_pointer_down(pt(250.0, 40.0), Button::Primary, shift());
    assert_eq!(last_selection(&actions), Some(vec![1, 2]));
    assert!(matches!(core.gesture, GestureState::MovingSelection { .. }));
}

#[test]
fn press_on_empty_canvas_arms_marquee_silently() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    let actions = core.on_pointer_down(pt(500.0, 500.0), Button::Primary, no_modifiers());
    assert!(actions.is_empty());
    assert!(matches!(core.gesture, GestureState::Marquee(_)));
}

#[test]
fn invalid_point_press_is_skipped() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    let actions = core.on_pointer_down(Point::INVALID, Button::Primary, no_modifiers());
    assert!(actions.is_empty());
    assert!(matches!(core.gesture, GestureState::Idle));
}

// =============================================================
// Drag: snapping, clamping, batching
// =============================================================

#[test]
fn drag_snaps_final_positions_to_grid() {
    for (dx, dy) in [(23.0, 17.0), (4.9, 5.1), (61.4, -12.3), (99.9, 0.4)] {
        let mut core = core_with(vec![make_item(1, 100.0, 200.0)]);
        drag(&mut core, pt(150.0, 240.0), pt(150.0 + dx, 240.0 + dy));
        let item = core.item(1).map(|i| (i.x, i.y));
        let (x, y) = item.unwrap_or((f64::NAN, f64::NAN));
        assert_eq!(x % 10.0, 0.0, "x not snapped for delta ({dx}, {dy})");
        assert_eq!(y % 10.0, 0.0, "y not snapped for delta ({dx}, {dy})");
    }
}

#[test]
fn drag_applies_positions_live_before_release() {
    let mut core = core_with(vec![make_item(1, 100.0, 200.0)]);
    core.on_pointer_down(pt(150.0, 240.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(183.0, 240.0), no_modifiers());
    // Visible immediately, without waiting for pointer-up.
    assert_eq!(core.item(1).map(|i| i.x), Some(130.0));
}

#[test]
fn drag_clamps_to_canvas_bounds() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    drag(&mut core, pt(50.0, 40.0), pt(-400.0, 5000.0));
    assert_eq!(core.item(1).map(|i| i.x), Some(0.0));
    assert_eq!(core.item(1).map(|i| i.y), Some(720.0));
}

#[test]
fn drag_release_emits_one_batch_for_all_moved_items() {
    let mut core = core_with(vec![
        make_item(1, 0.0, 0.0),
        make_item(2, 200.0, 0.0),
        make_item(3, 400.0, 0.0),
    ]);
    core.select_all();
    let actions = drag(&mut core, pt(50.0, 40.0), pt(150.0, 140.0));
    let batches = items_moved(&actions);
    assert_eq!(batches.len(), 1, "exactly one batched position action");
    assert_eq!(batches[0].0.len(), 3, "batch covers every moved item");
}

#[test]
fn drag_batch_reverts_carry_pregesture_positions() {
    let mut core = core_with(vec![make_item(1, 100.0, 200.0)]);
    let actions = drag(&mut core, pt(150.0, 240.0), pt(250.0, 240.0));
    let batches = items_moved(&actions);
    let reverts = batches[0].1.clone();
    assert_eq!(reverts.len(), 1);
    assert_eq!((reverts[0].x, reverts[0].y), (100.0, 200.0));
    // Applying the reverts restores the pre-drag layout exactly.
    core.apply_positions(&reverts);
    assert_eq!(core.item(1).map(|i| (i.x, i.y)), Some((100.0, 200.0)));
}

#[test]
fn no_move_release_sends_nothing() {
    let mut core = core_with(vec![make_item(1, 100.0, 200.0)]);
    let actions = drag(&mut core, pt(150.0, 240.0), pt(150.0, 240.0));
    assert!(items_moved(&actions).is_empty());
}

#[test]
fn multi_drag_preserves_relative_offsets() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 100.0)]);
    core.select_all();
    drag(&mut core, pt(50.0, 40.0), pt(100.0, 90.0));
    assert_eq!(core.item(1).map(|i| (i.x, i.y)), Some((50.0, 50.0)));
    assert_eq!(core.item(2).map(|i| (i.x, i.y)), Some((250.0, 150.0)));
}

#[test]
fn legacy_unsnapped_item_snaps_on_first_drag() {
    let mut core = core_with(vec![make_item(1, 33.0, 47.0)]);
    drag(&mut core, pt(50.0, 50.0), pt(51.0, 51.0));
    let (x, y) = core.item(1).map(|i| (i.x, i.y)).unwrap_or((f64::NAN, f64::NAN));
    assert_eq!(x % 10.0, 0.0);
    assert_eq!(y % 10.0, 0.0);
}

#[test]
fn deselect_during_drag_makes_gesture_noop() {
    let mut core = core_with(vec![make_item(1, 100.0, 200.0)]);
    core.on_pointer_down(pt(150.0, 240.0), Button::Primary, no_modifiers());
    core.selection.deselect_all();
    core.on_pointer_move(pt(300.0, 240.0), no_modifiers());
    assert_eq!(core.item(1).map(|i| i.x), Some(100.0));
    let actions = core.on_pointer_up(pt(300.0, 240.0), Button::Primary, no_modifiers());
    assert!(items_moved(&actions).is_empty());
}

#[test]
fn click_on_selected_item_collapses_multi_selection() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    core.select_all();
    let actions = drag(&mut core, pt(50.0, 40.0), pt(50.0, 40.0));
    assert_eq!(last_selection(&actions), Some(vec![1]));
}

#[test]
fn escape_aborts_drag_and_restores_origins() {
    let mut core = core_with(vec![make_item(1, 100.0, 200.0)]);
    core.on_pointer_down(pt(150.0, 240.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(250.0, 240.0), no_modifiers());
    core.on_key_down(&key("Escape"), no_modifiers());
    assert_eq!(core.item(1).map(|i| (i.x, i.y)), Some((100.0, 200.0)));
    assert!(matches!(core.gesture, GestureState::Idle));
}

// =============================================================
// Marquee
// =============================================================

/// Three items whose centers sit at (50, 50), (150, 150) and (250, 250).
fn marquee_fixture() -> EngineCore {
    core_with(vec![
        make_item_sized(1, 0.0, 10.0, 100.0, 80.0),
        make_item_sized(2, 100.0, 110.0, 100.0, 80.0),
        make_item_sized(3, 200.0, 210.0, 100.0, 80.0),
    ])
}

#[test]
fn marquee_selects_items_with_center_inside() {
    let mut core = marquee_fixture();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(200.0, 200.0), no_modifiers());
    let actions = core.on_pointer_up(pt(200.0, 200.0), Button::Primary, no_modifiers());
    // (50,50) and (150,150) are enclosed; (250,250) is not.
    assert_eq!(last_selection(&actions), Some(vec![1, 2]));
}

#[test]
fn marquee_requires_center_not_mere_overlap() {
    let mut core = marquee_fixture();
    // The rectangle touches item 3's footprint (from 200,210) but not its center.
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(220.0, 230.0), no_modifiers());
    let actions = core.on_pointer_up(pt(220.0, 230.0), Button::Primary, no_modifiers());
    assert_eq!(last_selection(&actions), Some(vec![1, 2]));
}

#[test]
fn marquee_stays_inactive_below_drag_threshold() {
    let mut core = marquee_fixture();
    core.select_item(1, false);
    core.on_pointer_down(pt(400.0, 400.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(403.0, 400.0), no_modifiers());
    assert!(core.marquee_rect().is_none());
    let actions = core.on_pointer_up(pt(403.0, 400.0), Button::Primary, no_modifiers());
    // The sub-threshold gesture is a plain click: prior selection is cleared.
    assert_eq!(last_selection(&actions), Some(vec![]));
}

#[test]
fn marquee_preview_tracks_pointer_live() {
    let mut core = marquee_fixture();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(100.0, 100.0), no_modifiers());
    assert!(core.is_marquee_previewed(1));
    assert!(!core.is_marquee_previewed(2));
    core.on_pointer_move(pt(200.0, 200.0), no_modifiers());
    assert!(core.is_marquee_previewed(2));
    // Preview never commits on its own.
    assert!(core.selection.is_empty());
}

#[test]
fn small_marquee_deselects_instead_of_committing() {
    let mut core = marquee_fixture();
    core.select_item(3, false);
    core.camera.set_zoom(2.0);
    // 8 screen px exceeds the drag threshold but is only 4 canvas units.
    core.on_pointer_down(pt(800.0, 700.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(808.0, 708.0), no_modifiers());
    assert!(core.marquee_rect().is_some());
    let actions = core.on_pointer_up(pt(808.0, 708.0), Button::Primary, no_modifiers());
    assert_eq!(last_selection(&actions), Some(vec![]));
}

#[test]
fn marquee_replaces_selection_by_default() {
    let mut core = marquee_fixture();
    core.select_item(3, false);
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(200.0, 200.0), no_modifiers());
    let actions = core.on_pointer_up(pt(200.0, 200.0), Button::Primary, no_modifiers());
    assert_eq!(last_selection(&actions), Some(vec![1, 2]));
}

#[test]
fn additive_marquee_unions_with_existing_selection() {
    let mut core = marquee_fixture();
    core.select_item(3, false);
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, shift());
    core.on_pointer_move(pt(200.0, 200.0), no_modifiers());
    let actions = core.on_pointer_up(pt(200.0, 200.0), Button::Primary, no_modifiers());
    assert_eq!(last_selection(&actions), Some(vec![1, 2, 3]));
}

#[test]
fn shift_at_release_also_unions() {
    let mut core = marquee_fixture();
    core.select_item(3, false);
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(200.0, 200.0), no_modifiers());
    let actions = core.on_pointer_up(pt(200.0, 200.0), Button::Primary, shift());
    assert_eq!(last_selection(&actions), Some(vec![1, 2, 3]));
}

#[test]
fn committed_marquee_suppresses_synthetic_click() {
    let mut core = marquee_fixture();
    assert!(!core.take_suppress_click());
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(200.0, 200.0), no_modifiers());
    core.on_pointer_up(pt(200.0, 200.0), Button::Primary, no_modifiers());
    assert!(core.take_suppress_click());
    // The flag is consumed by the read.
    assert!(!core.take_suppress_click());
}

#[test]
fn marquee_rect_is_exposed_only_while_active() {
    let mut core = marquee_fixture();
    assert!(core.marquee_rect().is_none());
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    core.on_pointer_move(pt(120.0, 90.0), no_modifiers());
    let (min, max) = core.marquee_rect().unwrap_or((Point::INVALID, Point::INVALID));
    assert_eq!((min.x, min.y), (0.0, 0.0));
    assert_eq!((max.x, max.y), (120.0, 90.0));
    core.on_pointer_up(pt(120.0, 90.0), Button::Primary, no_modifiers());
    assert!(core.marquee_rect().is_none());
}

// =============================================================
// Panning
// =============================================================

#[test]
fn middle_button_drag_pans_camera() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.on_pointer_down(pt(400.0, 300.0), Button::Middle, no_modifiers());
    core.on_pointer_move(pt(420.0, 310.0), no_modifiers());
    assert_eq!(core.camera.scroll_x, -20.0);
    assert_eq!(core.camera.scroll_y, -10.0);
    core.on_pointer_up(pt(420.0, 310.0), Button::Middle, no_modifiers());
    assert!(matches!(core.gesture, GestureState::Idle));
}

#[test]
fn pan_key_makes_primary_drag_pan_even_over_items() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.on_key_down(&key(" "), no_modifiers());
    core.on_pointer_down(pt(50.0, 40.0), Button::Primary, no_modifiers());
    assert!(matches!(core.gesture, GestureState::Panning { .. }));
    core.on_pointer_move(pt(60.0, 40.0), no_modifiers());
    // The item did not move; the camera did.
    assert_eq!(core.item(1).map(|i| i.x), Some(0.0));
    assert_eq!(core.camera.scroll_x, -10.0);
}

#[test]
fn pan_key_release_restores_item_dragging() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.on_key_down(&key(" "), no_modifiers());
    core.on_key_up(&key(" "), no_modifiers());
    core.on_pointer_down(pt(50.0, 40.0), Button::Primary, no_modifiers());
    assert!(matches!(core.gesture, GestureState::MovingSelection { .. }));
}

// =============================================================
// Wheel: zoom and scroll
// =============================================================

#[test]
fn plain_wheel_scrolls_without_zooming() {
    let mut core = core_with(vec![]);
    core.on_wheel(pt(100.0, 100.0), WheelDelta { dx: 5.0, dy: 40.0 }, no_modifiers());
    assert_eq!(core.camera.zoom, 1.0);
    assert_eq!(core.camera.scroll_x, 5.0);
    assert_eq!(core.camera.scroll_y, 40.0);
}

#[test]
fn modifier_wheel_zooms_anchored_at_pointer() {
    let mut core = core_with(vec![]);
    let anchor = pt(320.0, 240.0);
    let before = core.camera.screen_to_canvas(anchor);
    core.on_wheel(anchor, WheelDelta { dx: 0.0, dy: -120.0 }, ctrl());
    assert!(core.camera.zoom > 1.0);
    let after = core.camera.screen_to_canvas(anchor);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn modifier_wheel_down_zooms_out() {
    let mut core = core_with(vec![]);
    core.on_wheel(pt(0.0, 0.0), WheelDelta { dx: 0.0, dy: 120.0 }, ctrl());
    assert!(core.camera.zoom < 1.0);
}

#[test]
fn zoom_steps_clamp_at_limits() {
    let mut core = core_with(vec![]);
    for _ in 0..30 {
        core.zoom_in();
    }
    assert_eq!(core.camera.zoom, ZOOM_MAX);
    for _ in 0..30 {
        core.zoom_out();
    }
    assert_eq!(core.camera.zoom, ZOOM_MIN);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn delete_key_requests_deletion_of_selection() {
    let mut core = core_with(vec![make_item(2, 0.0, 0.0), make_item(1, 200.0, 0.0)]);
    core.select_all();
    let actions = core.on_key_down(&key("Delete"), no_modifiers());
    let ids = actions.iter().find_map(|a| match a {
        Action::DeleteRequested { ids } => Some(ids.clone()),
        _ => None,
    });
    assert_eq!(ids, Some(vec![1, 2]));
    // Nothing is removed until the host confirms and applies.
    assert_eq!(core.item_count(), 2);
}

#[test]
fn delete_key_without_selection_is_silent() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    assert!(core.on_key_down(&key("Delete"), no_modifiers()).is_empty());
}

#[test]
fn backspace_behaves_like_delete() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.select_item(1, false);
    let actions = core.on_key_down(&key("Backspace"), no_modifiers());
    assert!(actions.iter().any(|a| matches!(a, Action::DeleteRequested { .. })));
}

#[test]
fn escape_when_idle_deselects() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.select_item(1, false);
    let actions = core.on_key_down(&key("Escape"), no_modifiers());
    assert_eq!(last_selection(&actions), Some(vec![]));
}

#[test]
fn ctrl_a_selects_all() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0), make_item(2, 200.0, 0.0)]);
    let actions = core.on_key_down(&key("a"), ctrl());
    assert_eq!(last_selection(&actions), Some(vec![1, 2]));
}

#[test]
fn plain_a_does_not_select_all() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    assert!(core.on_key_down(&key("a"), no_modifiers()).is_empty());
}

// =============================================================
// Snap-size changes
// =============================================================

#[test]
fn snap_size_change_does_not_resnap_existing_items() {
    let mut core = core_with(vec![make_item(1, 33.0, 47.0)]);
    core.set_snap_size(25.0);
    assert_eq!(core.item(1).map(|i| (i.x, i.y)), Some((33.0, 47.0)));
}

#[test]
fn snap_size_change_applies_to_next_drag() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.set_snap_size(25.0);
    drag(&mut core, pt(50.0, 40.0), pt(90.0, 40.0));
    assert_eq!(core.item(1).map(|i| i.x), Some(50.0));
}

#[test]
fn negative_snap_size_disables_snapping() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.set_snap_size(-5.0);
    drag(&mut core, pt(50.0, 40.0), pt(53.0, 40.0));
    assert_eq!(core.item(1).map(|i| i.x), Some(3.0));
}

// =============================================================
// Alignment / distribution through the engine
// =============================================================

#[test]
fn align_selection_emits_single_batch_and_applies() {
    let mut core = core_with(vec![make_item(1, 100.0, 100.0), make_item(2, 340.0, 300.0)]);
    core.select_all();
    let actions = core.align_selection(AlignMode::Left);
    let batches = items_moved(&actions);
    assert_eq!(batches.len(), 1);
    assert_eq!(core.item(2).map(|i| i.x), Some(100.0));
}

#[test]
fn align_selection_requires_two_items() {
    let mut core = core_with(vec![make_item(1, 100.0, 100.0)]);
    core.select_item(1, false);
    assert!(core.align_selection(AlignMode::Left).is_empty());
}

#[test]
fn align_selection_twice_produces_no_second_batch() {
    let mut core = core_with(vec![make_item(1, 100.0, 100.0), make_item(2, 340.0, 300.0)]);
    core.select_all();
    core.align_selection(AlignMode::Left);
    let first_pass = core.item(2).map(|i| (i.x, i.y));
    let actions = core.align_selection(AlignMode::Left);
    assert!(actions.is_empty());
    assert_eq!(core.item(2).map(|i| (i.x, i.y)), first_pass);
}

#[test]
fn distribute_selection_emits_single_batch() {
    let mut core = core_with(vec![
        make_item(1, 0.0, 200.0),
        make_item(2, 300.0, 200.0),
        make_item(3, 700.0, 200.0),
    ]);
    core.select_all();
    let actions = core.distribute_selection(DistributeAxis::Horizontal);
    let batches = items_moved(&actions);
    assert_eq!(batches.len(), 1);
    // All items remain inside the canvas afterwards.
    for id in [1, 2, 3] {
        let (x, y) = core.item(id).map(|i| (i.x, i.y)).unwrap_or((f64::NAN, f64::NAN));
        assert!((0.0..=900.0).contains(&x));
        assert!((0.0..=720.0).contains(&y));
    }
}

#[test]
fn arrangement_reverts_restore_layout() {
    let mut core = core_with(vec![make_item(1, 100.0, 100.0), make_item(2, 340.0, 300.0)]);
    core.select_all();
    let actions = core.align_selection(AlignMode::Left);
    let reverts = items_moved(&actions)[0].1.clone();
    core.apply_positions(&reverts);
    assert_eq!(core.item(2).map(|i| i.x), Some(340.0));
}

// =============================================================
// Property edits
// =============================================================

#[test]
fn set_rotation_normalizes_degrees() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.set_rotation(1, 450.0);
    assert_eq!(core.item(1).map(|i| i.rotation), Some(90.0));
    core.set_rotation(1, -90.0);
    assert_eq!(core.item(1).map(|i| i.rotation), Some(270.0));
}

#[test]
fn set_rotation_unknown_item_is_silent() {
    let mut core = core_with(vec![]);
    assert!(core.set_rotation(9, 45.0).is_empty());
}

#[test]
fn property_setters_mutate_item() {
    let mut core = core_with(vec![make_item(1, 0.0, 0.0)]);
    core.set_fill_color(1, Some("#00AA88".to_owned()));
    core.set_number(1, Some(12));
    core.set_capacity(1, 6);
    let item = core.item(1);
    assert_eq!(item.and_then(|i| i.fill_color.clone()), Some("#00AA88".to_owned()));
    assert_eq!(item.and_then(|i| i.number), Some(12));
    assert_eq!(item.map(|i| i.capacity), Some(6));
}

// =============================================================
// Placement validation
// =============================================================

#[test]
fn can_place_accepts_inside_and_rejects_outside() {
    let core = core_with(vec![]);
    assert!(core.can_place(0.0, 0.0, 100.0, 80.0));
    assert!(core.can_place(900.0, 720.0, 100.0, 80.0));
    assert!(!core.can_place(950.0, 0.0, 100.0, 80.0));
    assert!(!core.can_place(0.0, -1.0, 100.0, 80.0));
}
