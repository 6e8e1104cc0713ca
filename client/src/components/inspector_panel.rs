//! Detail panel for a single selected item.
//!
//! Shown only when exactly one item is selected. Every edit is pushed as a
//! command; `CanvasHost` applies it to the engine and persists it as one
//! property (or position, for rotation) update.

use leptos::prelude::*;

use crate::state::commands::{CommandQueue, EditorCommand, ItemEdit};
use crate::state::editor::EditorState;

/// Property panel for the selected item.
#[component]
pub fn InspectorPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let commands = expect_context::<RwSignal<CommandQueue>>();

    let item = move || editor.get().selected_item;
    let type_label = move || {
        let state = editor.get();
        state
            .selected_item
            .as_ref()
            .map(|i| {
                state
                    .furniture_type(&i.type_key)
                    .map_or_else(|| i.type_key.clone(), |t| t.label.clone())
            })
            .unwrap_or_default()
    };
    let fill_value = move || {
        let state = editor.get();
        state
            .selected_item
            .as_ref()
            .map(|i| state.fill_for(i))
            .unwrap_or_else(|| "#9AA0A6".to_owned())
    };

    let push_edit = move |edit: ItemEdit| {
        let Some(id) = editor.with_untracked(|e| e.selected_item.as_ref().map(|i| i.id)) else {
            return;
        };
        commands.update(|c| c.push(EditorCommand::EditItem { id, edit }));
    };

    view! {
        <div class="inspector">
            <h3 class="inspector__title">{type_label}</h3>

            <label class="inspector__field">
                "Number"
                <input
                    type="number"
                    prop:value=move || {
                        item().and_then(|i| i.number).map(|n| n.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        push_edit(ItemEdit::Number(event_target_value(&ev).trim().parse::<i64>().ok()));
                    }
                />
            </label>

            <label class="inspector__field">
                "Capacity"
                <input
                    type="number"
                    min="0"
                    prop:value=move || item().map(|i| i.capacity.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        if let Ok(capacity) = event_target_value(&ev).trim().parse::<u32>() {
                            push_edit(ItemEdit::Capacity(capacity));
                        }
                    }
                />
            </label>

            <label class="inspector__field">
                "Rotation"
                <input
                    type="number"
                    step="15"
                    prop:value=move || {
                        item().map(|i| i.rotation.round().to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        if let Ok(degrees) = event_target_value(&ev).trim().parse::<f64>() {
                            push_edit(ItemEdit::Rotation(degrees));
                        }
                    }
                />
            </label>

            <label class="inspector__field">
                "Fill"
                <input
                    type="color"
                    prop:value=fill_value
                    on:input=move |ev| {
                        push_edit(ItemEdit::FillColor(Some(event_target_value(&ev))));
                    }
                />
                <button
                    class="inspector__reset"
                    on:click=move |_| push_edit(ItemEdit::FillColor(None))
                >
                    "Use type color"
                </button>
            </label>
        </div>
    }
}
