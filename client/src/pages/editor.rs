//! Editor page — the map-editor workspace layout.
//!
//! Reads the zone id from the route, publishes it through [`ActiveZone`]
//! (loading itself is `CanvasHost`'s job), and composes the chrome around
//! the canvas. The panel policy lives here: one selected item shows the
//! inspector, two or more show the multi-select toolbar, zero shows neither.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::canvas_host::CanvasHost;
use crate::components::inspector_panel::InspectorPanel;
use crate::components::multi_toolbar::MultiToolbar;
use crate::components::notice_tray::NoticeTray;
use crate::components::palette::Palette;
use crate::components::status_bar::StatusBar;
use crate::state::editor::{ActiveZone, EditorState};
use crate::state::ui::{PanelMode, panel_mode_for_selection};

/// Map-editor workspace for one zone.
#[component]
pub fn EditorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let active_zone = expect_context::<ActiveZone>();
    let params = use_params_map();

    // Publish the routed zone id whenever the route changes.
    Effect::new(move || {
        let id = params.read().get("id").and_then(|raw| raw.parse().ok());
        active_zone.0.set(id);
    });

    on_cleanup(move || {
        active_zone.0.set(None);
    });

    let panel_mode = move || panel_mode_for_selection(&editor.get().selection);

    view! {
        <div class="editor-page">
            <div class="editor-page__palette">
                <Palette/>
            </div>
            <div class="editor-page__canvas">
                <Show when=move || editor.get().loading>
                    <div class="editor-page__loading">"Loading zone..."</div>
                </Show>
                <CanvasHost/>
                <Show when=move || matches!(panel_mode(), PanelMode::MultiToolbar(_))>
                    <MultiToolbar/>
                </Show>
            </div>
            <div class="editor-page__side">
                <Show when=move || matches!(panel_mode(), PanelMode::Inspector(_))>
                    <InspectorPanel/>
                </Show>
            </div>
            <div class="editor-page__status">
                <StatusBar/>
            </div>
            <NoticeTray/>
        </div>
    }
}
