//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! `CanvasHost` owns the engine. DOM events flow in (pointer, wheel,
//! keyboard, palette drops), engine [`Action`]s flow out: selection and
//! count into [`EditorState`], position batches into the persistence
//! gateway, render requests into the `items`/`marquee` view signals this
//! component renders from. The surrounding chrome never touches the engine;
//! it pushes [`EditorCommand`]s that the command effect drains here.
//!
//! Gestures never wait on the network: moves apply locally and one batched
//! request per gesture goes out on release. A failed batch rolls the items
//! back to their pre-gesture positions and surfaces a notice.

use leptos::prelude::*;

use crate::state::commands::CommandQueue;
use crate::state::editor::{ActiveZone, EditorState};
use crate::state::notices::NoticeState;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::doc::{ItemId, MapItem, PositionUpdate, ZoneId};
#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use canvas::input::{Key as CanvasKey, WheelDelta};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::spawn_local;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::CreateFurnitureRequest;
#[cfg(feature = "hydrate")]
use crate::state::commands::{EditorCommand, ItemEdit};
#[cfg(feature = "hydrate")]
use crate::state::notices::NoticeLevel;
#[cfg(feature = "hydrate")]
use crate::util::editor_input::{
    keyboard_modifiers, map_button, palette_payload, pointer_modifiers, should_prevent_default_key,
    wheel_modifiers,
};
#[cfg(feature = "hydrate")]
use crate::util::view_prefs::{ZoneViewPrefs, load_view_prefs, save_view_prefs};

/// Snapshot of one item prepared for the DOM item layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemView {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub fill: String,
    pub label: String,
    pub selected: bool,
    pub previewed: bool,
}

/// Marquee rectangle in canvas units, ready to render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Inline style of the scaled canvas surface: the camera as a CSS transform,
/// plus grid lines sized to the snap grid when enabled.
fn surface_style(editor: &EditorState, grid_visible: bool) -> String {
    let mut style = format!(
        "position:relative;width:{}px;height:{}px;background-color:{};\
         transform:translate({}px, {}px) scale({});transform-origin:0 0;",
        editor.config.width,
        editor.config.height,
        editor.config.background_color,
        -editor.scroll_x,
        -editor.scroll_y,
        editor.zoom,
    );
    if grid_visible && editor.config.snap_size > 0.0 {
        style.push_str(&format!(
            "background-image:linear-gradient(to right, rgba(0,0,0,0.08) 1px, transparent 1px),\
             linear-gradient(to bottom, rgba(0,0,0,0.08) 1px, transparent 1px);\
             background-size:{0}px {0}px;",
            editor.config.snap_size
        ));
    }
    style
}

fn item_style(item: &ItemView) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;\
         transform:rotate({}deg);background-color:{};",
        item.x, item.y, item.width, item.height, item.rotation, item.fill
    )
}

fn item_class(item: &ItemView) -> String {
    let mut class = "canvas-item".to_owned();
    if item.selected {
        class.push_str(" canvas-item--selected");
    }
    if item.previewed {
        class.push_str(" canvas-item--previewed");
    }
    class
}

fn marquee_style(rect: &MarqueeView) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
        rect.x, rect.y, rect.width, rect.height
    )
}

/// Everything the hydrate-side glue needs to reach from event handlers and
/// async continuations.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct HostCtx {
    engine: Rc<RefCell<Option<Engine>>>,
    editor: RwSignal<EditorState>,
    notices: RwSignal<NoticeState>,
    items: RwSignal<Vec<ItemView>>,
    marquee: RwSignal<Option<MarqueeView>>,
    host: NodeRef<leptos::html::Div>,
}

/// Rebuild the view signals from the engine and mirror the camera into
/// [`EditorState`] for the chrome.
#[cfg(feature = "hydrate")]
fn sync_view(ctx: &HostCtx) {
    let engine = ctx.engine.borrow();
    let Some(engine) = engine.as_ref() else {
        return;
    };
    let core = &engine.core;
    let (views, selected_snapshot) = ctx.editor.with_untracked(|editor| {
        let views: Vec<ItemView> = core
            .store
            .sorted_items()
            .into_iter()
            .map(|item| ItemView {
                id: item.id,
                x: item.x,
                y: item.y,
                width: item.width,
                height: item.height,
                rotation: item.rotation,
                fill: editor.fill_for(item),
                label: item.number.map(|n| n.to_string()).unwrap_or_default(),
                selected: core.selection.is_selected(item.id),
                previewed: core.is_marquee_previewed(item.id),
            })
            .collect();
        let snapshot = core.selection.primary().and_then(|id| core.item(id).cloned());
        (views, snapshot)
    });
    ctx.items.set(views);
    ctx.marquee.set(core.marquee_rect().map(|(min, max)| MarqueeView {
        x: min.x,
        y: min.y,
        width: max.x - min.x,
        height: max.y - min.y,
    }));
    ctx.editor.update(|editor| {
        editor.zoom = core.camera.zoom;
        editor.scroll_x = core.camera.scroll_x;
        editor.scroll_y = core.camera.scroll_y;
        editor.selected_item = selected_snapshot;
    });
}

/// Queue a notice and schedule its auto-dismissal.
#[cfg(feature = "hydrate")]
fn push_notice(notices: RwSignal<NoticeState>, level: NoticeLevel, message: String) {
    let mut id = 0;
    notices.update(|n| id = n.push(level, message));
    gloo_timers::callback::Timeout::new(6_000, move || {
        notices.update(|n| n.dismiss(id));
    })
    .forget();
}

#[cfg(feature = "hydrate")]
fn set_host_cursor(ctx: &HostCtx, cursor: &str) {
    if let Some(el) = ctx.host.get_untracked() {
        let _ = el.style().set_property("cursor", cursor);
    }
}

/// Remember the current camera for the open zone.
#[cfg(feature = "hydrate")]
fn persist_view(ctx: &HostCtx) {
    let Some(zone_id) = ctx.editor.with_untracked(|e| e.zone_id) else {
        return;
    };
    let engine = ctx.engine.borrow();
    let Some(engine) = engine.as_ref() else {
        return;
    };
    let camera = engine.core.camera;
    save_view_prefs(
        zone_id,
        &ZoneViewPrefs { zoom: camera.zoom, scroll_x: camera.scroll_x, scroll_y: camera.scroll_y },
    );
}

/// Handle every action a single engine call produced.
#[cfg(feature = "hydrate")]
fn process_actions(ctx: &HostCtx, actions: Vec<Action>) {
    let mut render = false;
    for action in actions {
        match action {
            Action::SelectionChanged { primary: _, selected } => {
                ctx.editor.update(|editor| editor.selection = selected);
                render = true;
            }
            Action::ItemsMoved { updates, reverts } => persist_batch(ctx, updates, reverts),
            Action::DeleteRequested { ids } => delete_items(ctx, ids),
            Action::ItemCountChanged { count } => {
                ctx.editor.update(|editor| editor.item_count = count);
            }
            Action::SetCursor(cursor) => set_host_cursor(ctx, &cursor),
            Action::RenderNeeded => render = true,
        }
    }
    if render {
        sync_view(ctx);
    }
}

/// Send one gesture's batch to the server; roll back on failure.
#[cfg(feature = "hydrate")]
fn persist_batch(ctx: &HostCtx, updates: Vec<PositionUpdate>, reverts: Vec<PositionUpdate>) {
    if updates.is_empty() {
        return;
    }
    ctx.editor.update(EditorState::begin_save);
    let ctx = ctx.clone();
    spawn_local(async move {
        let result = api::update_positions(&updates).await;
        ctx.editor.update(EditorState::end_save);
        if let Err(message) = result {
            log::warn!("batch position update failed: {message}");
            {
                let mut engine = ctx.engine.borrow_mut();
                if let Some(engine) = engine.as_mut() {
                    engine.apply_positions(&reverts);
                }
            }
            push_notice(ctx.notices, NoticeLevel::Error, format!("Could not save positions: {message}"));
            sync_view(&ctx);
        }
    });
}

/// Confirm (for multi-item requests), persist, then apply a deletion.
#[cfg(feature = "hydrate")]
fn delete_items(ctx: &HostCtx, ids: Vec<ItemId>) {
    if ids.is_empty() {
        return;
    }
    if ids.len() > 1 && !confirm_delete(ids.len()) {
        return;
    }
    let ctx = ctx.clone();
    spawn_local(async move {
        match api::delete_furniture(&ids).await {
            Ok(()) => {
                let actions = {
                    let mut engine = ctx.engine.borrow_mut();
                    engine.as_mut().map(|engine| engine.apply_delete(&ids))
                };
                if let Some(actions) = actions {
                    process_actions(&ctx, actions);
                }
            }
            Err(message) => {
                push_notice(ctx.notices, NoticeLevel::Error, format!("Delete failed: {message}"));
            }
        }
    });
}

#[cfg(feature = "hydrate")]
fn confirm_delete(count: usize) -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message(&format!("Delete {count} selected items?"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Palette drop: validate locally, fetch the next display number, create the
/// item server-side, then insert it with its server-issued id and select it.
#[cfg(feature = "hydrate")]
fn place_from_drop(ctx: &HostCtx, type_key: String, client_x: f64, client_y: f64) {
    let Some(zone_id) = ctx.editor.with_untracked(|e| e.zone_id) else {
        return;
    };
    let Some(ftype) = ctx.editor.with_untracked(|e| e.furniture_type(&type_key).cloned()) else {
        return;
    };
    let placement = {
        let engine = ctx.engine.borrow();
        let Some(engine) = engine.as_ref() else {
            return;
        };
        let pt = engine.canvas_point(client_x, client_y);
        if !pt.is_valid() {
            return;
        }
        let config = &engine.core.config;
        let x = config.snap(pt.x - ftype.default_width * 0.5);
        let y = config.snap(pt.y - ftype.default_height * 0.5);
        if engine.core.can_place(x, y, ftype.default_width, ftype.default_height) {
            Some((x, y))
        } else {
            None
        }
    };
    let Some((x, y)) = placement else {
        // Local validation failure: warn, send nothing.
        push_notice(ctx.notices, NoticeLevel::Warning, "Drop point is outside the canvas.".to_owned());
        return;
    };

    let ctx = ctx.clone();
    spawn_local(async move {
        let number = api::fetch_next_number(zone_id, &type_key).await.ok();
        let request = CreateFurnitureRequest {
            zone_id,
            furniture_type: type_key.clone(),
            number,
            capacity: ftype.default_capacity,
            position_x: x,
            position_y: y,
            rotation: 0.0,
            width: ftype.default_width,
            height: ftype.default_height,
        };
        match api::create_furniture(&request).await {
            Ok(id) => {
                if ctx.editor.with_untracked(|e| e.zone_id) != Some(zone_id) {
                    // The user left the zone while the request was in flight.
                    return;
                }
                let item = MapItem {
                    id,
                    zone_id,
                    type_key,
                    number,
                    capacity: ftype.default_capacity,
                    x,
                    y,
                    width: ftype.default_width,
                    height: ftype.default_height,
                    rotation: 0.0,
                    fill_color: None,
                };
                let actions = {
                    let mut engine = ctx.engine.borrow_mut();
                    engine.as_mut().map(|engine| {
                        let mut actions = engine.apply_create(item);
                        actions.extend(engine.core.select_item(id, false));
                        actions
                    })
                };
                if let Some(actions) = actions {
                    process_actions(&ctx, actions);
                }
            }
            Err(message) => {
                push_notice(ctx.notices, NoticeLevel::Error, format!("Could not place item: {message}"));
            }
        }
    });
}

/// Apply one chrome-issued property edit and persist it.
#[cfg(feature = "hydrate")]
fn edit_item(ctx: &HostCtx, id: ItemId, edit: ItemEdit) {
    let actions = {
        let mut engine = ctx.engine.borrow_mut();
        let Some(engine) = engine.as_mut() else {
            return;
        };
        match &edit {
            ItemEdit::Number(number) => engine.core.set_number(id, *number),
            ItemEdit::Capacity(capacity) => engine.core.set_capacity(id, *capacity),
            ItemEdit::Rotation(degrees) => engine.core.set_rotation(id, *degrees),
            ItemEdit::FillColor(fill) => engine.core.set_fill_color(id, fill.clone()),
        }
    };
    if actions.is_empty() {
        return;
    }
    process_actions(ctx, actions);

    // Rotation persists through the position endpoint; the rest are plain
    // property updates.
    let position = {
        let engine = ctx.engine.borrow();
        engine
            .as_ref()
            .and_then(|e| e.core.item(id).map(|i| (i.x, i.y, i.rotation)))
    };
    let ctx = ctx.clone();
    spawn_local(async move {
        let result = match edit {
            ItemEdit::Rotation(_) => match position {
                Some((x, y, rotation)) => api::update_position(id, x, y, rotation).await,
                None => Ok(()),
            },
            ItemEdit::Number(number) => {
                api::update_property(id, &serde_json::json!({ "number": number })).await
            }
            ItemEdit::Capacity(capacity) => {
                api::update_property(id, &serde_json::json!({ "capacity": capacity })).await
            }
            ItemEdit::FillColor(fill) => {
                api::update_property(id, &serde_json::json!({ "fill_color": fill })).await
            }
        };
        if let Err(message) = result {
            log::warn!("property update failed: {message}");
            push_notice(ctx.notices, NoticeLevel::Error, format!("Could not save change: {message}"));
        }
    });
}

/// Execute one chrome command against the engine.
///
/// Deletion and property edits re-enter the engine through their own flows,
/// so they are dispatched before the engine borrow below is taken.
#[cfg(feature = "hydrate")]
fn run_command(ctx: &HostCtx, command: EditorCommand) {
    let command = match command {
        EditorCommand::DeleteSelection => {
            let ids = {
                let engine = ctx.engine.borrow();
                engine.as_ref().map(|e| e.core.selection.sorted_ids()).unwrap_or_default()
            };
            delete_items(ctx, ids);
            return;
        }
        EditorCommand::EditItem { id, edit } => {
            edit_item(ctx, id, edit);
            return;
        }
        other => other,
    };
    let actions = {
        let mut engine = ctx.engine.borrow_mut();
        let Some(engine) = engine.as_mut() else {
            return;
        };
        match command {
            EditorCommand::ZoomIn => engine.core.zoom_in(),
            EditorCommand::ZoomOut => engine.core.zoom_out(),
            EditorCommand::SetSnapSize(size) => {
                ctx.editor.update(|e| e.config.snap_size = size.max(0.0));
                engine.core.set_snap_size(size)
            }
            EditorCommand::Align(mode) => engine.core.align_selection(mode),
            EditorCommand::Distribute(axis) => engine.core.distribute_selection(axis),
            EditorCommand::DeselectAll => engine.core.deselect_all(),
            EditorCommand::SelectAll => engine.core.select_all(),
            EditorCommand::DeleteSelection | EditorCommand::EditItem { .. } => Vec::new(),
        }
    };
    process_actions(ctx, actions);
    persist_view(ctx);
}

/// Wire up the engine lifecycle: creation on mount, zone loads on route
/// changes, and the chrome command queue.
#[cfg(feature = "hydrate")]
fn setup_effects(ctx: HostCtx, active_zone: ActiveZone, commands: RwSignal<CommandQueue>) {
    let requested: RwSignal<Option<Option<ZoneId>>> = RwSignal::new(None);

    // Engine creation + zone loading. Tracks the host node and the routed
    // zone; everything else is read untracked.
    Effect::new({
        let ctx = ctx.clone();
        move || {
            let Some(el) = ctx.host.get() else {
                return;
            };
            let zone_id = active_zone.0.get();
            if ctx.engine.borrow().is_none() {
                *ctx.engine.borrow_mut() = Some(Engine::new(el.into()));
            }
            if requested.get_untracked() == Some(zone_id) {
                return;
            }
            requested.set(Some(zone_id));
            ctx.editor.update(|e| e.open_zone(zone_id));
            let Some(zone_id) = zone_id else {
                let actions = {
                    let mut engine = ctx.engine.borrow_mut();
                    engine
                        .as_mut()
                        .map(|engine| engine.load_zone(Vec::new(), canvas::doc::MapConfig::default()))
                };
                if let Some(actions) = actions {
                    process_actions(&ctx, actions);
                }
                return;
            };
            load_zone(&ctx, zone_id);
        }
    });

    // Drain chrome commands in order.
    Effect::new({
        let ctx = ctx.clone();
        move || {
            let seq = commands.with(|c| c.seq);
            if seq == 0 {
                return;
            }
            let mut drained = Vec::new();
            commands.update(|c| drained = c.drain());
            for command in drained {
                run_command(&ctx, command);
            }
        }
    });
}

/// Fetch a zone and hand it to the engine, discarding stale responses for
/// zones the user has already left.
#[cfg(feature = "hydrate")]
fn load_zone(ctx: &HostCtx, zone_id: ZoneId) {
    let ctx = ctx.clone();
    spawn_local(async move {
        match api::fetch_zone(zone_id, None).await {
            Ok(snapshot) => {
                if ctx.editor.with_untracked(|e| e.zone_id) != Some(zone_id) {
                    return;
                }
                ctx.editor.update(|editor| {
                    editor.loading = false;
                    editor.furniture_types = snapshot.furniture_types.clone();
                    editor.config = snapshot.config.clone();
                });
                let actions = {
                    let mut engine = ctx.engine.borrow_mut();
                    engine.as_mut().map(|engine| {
                        let actions = engine.load_zone(snapshot.items, snapshot.config);
                        if let Some(prefs) = load_view_prefs(zone_id) {
                            engine.core.camera.set_zoom(prefs.zoom);
                            engine.core.camera.scroll_x = prefs.scroll_x;
                            engine.core.camera.scroll_y = prefs.scroll_y;
                        }
                        actions
                    })
                };
                if let Some(actions) = actions {
                    process_actions(&ctx, actions);
                }
            }
            Err(message) => {
                if ctx.editor.with_untracked(|e| e.zone_id) != Some(zone_id) {
                    return;
                }
                ctx.editor.update(|e| e.loading = false);
                log::warn!("zone load failed: {message}");
                push_notice(ctx.notices, NoticeLevel::Error, format!("Could not load zone: {message}"));
            }
        }
    });
}

/// Canvas host — the scrollable viewport, the scaled surface, the DOM item
/// layer, and the marquee overlay.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let commands = expect_context::<RwSignal<CommandQueue>>();
    let active_zone = expect_context::<ActiveZone>();

    let items = RwSignal::new(Vec::<ItemView>::new());
    let marquee = RwSignal::new(None::<MarqueeView>);
    let host_ref: NodeRef<leptos::html::Div> = NodeRef::new();

    #[cfg(feature = "hydrate")]
    let ctx = HostCtx { engine: Rc::new(RefCell::new(None)), editor, notices, items, marquee, host: host_ref };
    #[cfg(feature = "hydrate")]
    setup_effects(ctx.clone(), active_zone, commands);
    #[cfg(not(feature = "hydrate"))]
    let _ = (notices, commands, active_zone);

    #[cfg(feature = "hydrate")]
    let on_pointer_down = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::PointerEvent| {
            if ev.button() == 1 {
                ev.prevent_default();
            }
            if let Some(el) = ctx.host.get_untracked() {
                let _ = el.set_pointer_capture(ev.pointer_id());
                let _ = el.focus();
            }
            let actions = {
                let mut engine = ctx.engine.borrow_mut();
                engine.as_mut().map(|engine| {
                    engine.on_pointer_down(
                        ev.client_x().into(),
                        ev.client_y().into(),
                        map_button(ev.button()),
                        pointer_modifiers(&ev),
                    )
                })
            };
            if let Some(actions) = actions {
                process_actions(&ctx, actions);
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_pointer_down = |_: leptos::ev::PointerEvent| {};

    #[cfg(feature = "hydrate")]
    let on_pointer_move = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::PointerEvent| {
            let actions = {
                let mut engine = ctx.engine.borrow_mut();
                engine.as_mut().map(|engine| {
                    engine.on_pointer_move(ev.client_x().into(), ev.client_y().into(), pointer_modifiers(&ev))
                })
            };
            if let Some(actions) = actions {
                process_actions(&ctx, actions);
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_pointer_move = |_: leptos::ev::PointerEvent| {};

    #[cfg(feature = "hydrate")]
    let on_pointer_up = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::PointerEvent| {
            let actions = {
                let mut engine = ctx.engine.borrow_mut();
                engine.as_mut().map(|engine| {
                    engine.on_pointer_up(
                        ev.client_x().into(),
                        ev.client_y().into(),
                        map_button(ev.button()),
                        pointer_modifiers(&ev),
                    )
                })
            };
            if let Some(actions) = actions {
                process_actions(&ctx, actions);
            }
            persist_view(&ctx);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_pointer_up = |_: leptos::ev::PointerEvent| {};

    #[cfg(feature = "hydrate")]
    let on_wheel = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            let actions = {
                let mut engine = ctx.engine.borrow_mut();
                engine.as_mut().map(|engine| {
                    engine.on_wheel(
                        ev.client_x().into(),
                        ev.client_y().into(),
                        WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() },
                        wheel_modifiers(&ev),
                    )
                })
            };
            if let Some(actions) = actions {
                process_actions(&ctx, actions);
            }
            persist_view(&ctx);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_wheel = |_: leptos::ev::WheelEvent| {};

    #[cfg(feature = "hydrate")]
    let on_key_down = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            let key = ev.key();
            if should_prevent_default_key(&key) {
                ev.prevent_default();
            }
            let actions = {
                let mut engine = ctx.engine.borrow_mut();
                engine
                    .as_mut()
                    .map(|engine| engine.on_key_down(&CanvasKey(key), keyboard_modifiers(&ev)))
            };
            if let Some(actions) = actions {
                process_actions(&ctx, actions);
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_key_down = |_: leptos::ev::KeyboardEvent| {};

    #[cfg(feature = "hydrate")]
    let on_key_up = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            let actions = {
                let mut engine = ctx.engine.borrow_mut();
                engine
                    .as_mut()
                    .map(|engine| engine.on_key_up(&CanvasKey(ev.key()), keyboard_modifiers(&ev)))
            };
            if let Some(actions) = actions {
                process_actions(&ctx, actions);
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_key_up = |_: leptos::ev::KeyboardEvent| {};

    #[cfg(feature = "hydrate")]
    let on_click = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::MouseEvent| {
            let suppress = {
                let mut engine = ctx.engine.borrow_mut();
                engine.as_mut().is_some_and(|engine| engine.core.take_suppress_click())
            };
            if suppress {
                // The gesture already handled this press/release cycle.
                ev.stop_propagation();
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_click = |_: leptos::ev::MouseEvent| {};

    #[cfg(feature = "hydrate")]
    let on_drag_over = |ev: leptos::ev::DragEvent| ev.prevent_default();
    #[cfg(not(feature = "hydrate"))]
    let on_drag_over = |_: leptos::ev::DragEvent| {};

    #[cfg(feature = "hydrate")]
    let on_drop = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            if let Some(type_key) = palette_payload(&ev) {
                place_from_drop(&ctx, type_key, ev.client_x().into(), ev.client_y().into());
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_drop = |_: leptos::ev::DragEvent| {};

    view! {
        <div
            class="canvas-host"
            tabindex="0"
            node_ref=host_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:wheel=on_wheel
            on:keydown=on_key_down
            on:keyup=on_key_up
            on:click=on_click
            on:dragover=on_drag_over
            on:drop=on_drop
        >
            <div class="canvas-host__surface" style=move || surface_style(&editor.get(), ui.get().grid_visible)>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let style = item_style(&item);
                            let class = item_class(&item);
                            view! {
                                <div class=class style=style>
                                    <span class="canvas-item__label">{item.label.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    marquee
                        .get()
                        .map(|rect| view! { <div class="canvas-host__marquee" style=marquee_style(&rect)></div> })
                }}
            </div>
        </div>
    }
}
