//! Bottom status bar: zoom controls, grid settings, counts, save indicator.

use leptos::prelude::*;

use crate::state::commands::{CommandQueue, EditorCommand};
use crate::state::editor::EditorState;
use crate::state::ui::UiState;

/// Status bar at the bottom of the editor page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let commands = expect_context::<RwSignal<CommandQueue>>();

    let push = move |command: EditorCommand| commands.update(|c| c.push(command));

    let zoom_label = move || format!("{:.0}%", editor.get().zoom * 100.0);
    let count_label = move || format!("{} items", editor.get().item_count);
    let saving = move || editor.get().is_saving();

    view! {
        <div class="status-bar">
            <span class="status-bar__items">{count_label}</span>
            <span class="status-bar__divider">"|"</span>
            <button on:click=move |_| push(EditorCommand::SelectAll)>"Select all"</button>
            <span class="status-bar__spacer"></span>
            <label class="status-bar__grid">
                <input
                    type="checkbox"
                    prop:checked=move || ui.get().grid_visible
                    on:change=move |_| ui.update(|u| u.grid_visible = !u.grid_visible)
                />
                "Grid"
            </label>
            <label class="status-bar__snap">
                "Snap"
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<f64>() {
                        push(EditorCommand::SetSnapSize(size));
                    }
                }>
                    <option value="0">"Off"</option>
                    <option value="5">"5"</option>
                    <option value="10" selected="selected">"10"</option>
                    <option value="20">"20"</option>
                    <option value="25">"25"</option>
                    <option value="50">"50"</option>
                </select>
            </label>
            <button on:click=move |_| push(EditorCommand::ZoomOut)>"-"</button>
            <span class="status-bar__zoom">{zoom_label}</span>
            <button on:click=move |_| push(EditorCommand::ZoomIn)>"+"</button>
            <Show when=saving>
                <span class="status-bar__saving">"Saving..."</span>
            </Show>
        </div>
    }
}
