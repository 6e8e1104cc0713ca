//! Toolbar shown when two or more items are selected.
//!
//! Hosts the alignment, distribution, and batch-delete actions. Every button
//! pushes a command; `CanvasHost` runs it against the engine and persists
//! the outcome as one batched request.

use leptos::prelude::*;

use canvas::align::{AlignMode, DistributeAxis};

use crate::state::commands::{CommandQueue, EditorCommand};
use crate::state::editor::EditorState;

/// Multi-select toolbar.
#[component]
pub fn MultiToolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let commands = expect_context::<RwSignal<CommandQueue>>();

    let push = move |command: EditorCommand| commands.update(|c| c.push(command));

    view! {
        <div class="multi-toolbar">
            <span class="multi-toolbar__count">
                {move || format!("{} selected", editor.get().selection.len())}
            </span>
            <span class="multi-toolbar__group">
                <button on:click=move |_| push(EditorCommand::Align(AlignMode::Left))>"Left"</button>
                <button on:click=move |_| push(EditorCommand::Align(AlignMode::CenterH))>"Center"</button>
                <button on:click=move |_| push(EditorCommand::Align(AlignMode::Right))>"Right"</button>
                <button on:click=move |_| push(EditorCommand::Align(AlignMode::Top))>"Top"</button>
                <button on:click=move |_| push(EditorCommand::Align(AlignMode::CenterV))>"Middle"</button>
                <button on:click=move |_| push(EditorCommand::Align(AlignMode::Bottom))>"Bottom"</button>
            </span>
            <span class="multi-toolbar__group">
                <button on:click=move |_| {
                    push(EditorCommand::Distribute(DistributeAxis::Horizontal));
                }>"Spread across"</button>
                <button on:click=move |_| {
                    push(EditorCommand::Distribute(DistributeAxis::Vertical));
                }>"Spread down"</button>
            </span>
            <span class="multi-toolbar__group">
                <button
                    class="multi-toolbar__delete"
                    on:click=move |_| push(EditorCommand::DeleteSelection)
                >
                    "Delete"
                </button>
                <button on:click=move |_| push(EditorCommand::DeselectAll)>"Clear"</button>
            </span>
        </div>
    }
}
