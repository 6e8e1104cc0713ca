//! Furniture palette — drag sources for placing new items on the canvas.
//!
//! Each entry is a native HTML5 drag source carrying its furniture-type key;
//! `CanvasHost` is the drop target and owns validation and creation.

use leptos::prelude::*;

use canvas::doc::FurnitureType;

use crate::state::editor::EditorState;
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::editor_input::PALETTE_DRAG_FORMAT;

/// Palette column listing every furniture type of the open zone.
#[component]
pub fn Palette() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="palette" class=("palette--collapsed", move || !ui.get().palette_expanded)>
            <button
                class="palette__toggle"
                on:click=move |_| ui.update(|u| u.palette_expanded = !u.palette_expanded)
            >
                "Palette"
            </button>
            <div class="palette__entries">
                {move || {
                    editor
                        .get()
                        .furniture_types
                        .into_iter()
                        .map(|ftype| view! { <PaletteEntry ftype=ftype/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// One draggable palette row.
#[component]
fn PaletteEntry(ftype: FurnitureType) -> impl IntoView {
    let key = ftype.key.clone();

    #[cfg(feature = "hydrate")]
    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        if let Some(data) = ev.data_transfer() {
            let _ = data.set_data(PALETTE_DRAG_FORMAT, &key);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_drag_start = {
        let _ = key;
        |_: leptos::ev::DragEvent| {}
    };

    let swatch_style = format!("background-color:{};", ftype.color);
    let size_label = format!("{} x {}", ftype.default_width, ftype.default_height);

    view! {
        <div class="palette__entry" draggable="true" on:dragstart=on_drag_start>
            <span class="palette__swatch" style=swatch_style></span>
            <span class="palette__label">{ftype.label.clone()}</span>
            <span class="palette__size">{size_label}</span>
        </div>
    }
}
