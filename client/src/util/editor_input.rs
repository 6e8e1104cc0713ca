//! Mapping from DOM input events to engine input types.
//!
//! The pure mappings (button numbers, modifier flags, key filtering) are
//! compiled for tests as well; only the functions that touch live event
//! objects are hydrate-only.

#[cfg(test)]
#[path = "editor_input_test.rs"]
mod editor_input_test;

use canvas::input::{Button, Modifiers};

/// Drag-and-drop payload format carrying a palette furniture-type key.
pub const PALETTE_DRAG_FORMAT: &str = "text/plain";

/// Map a DOM `button` number to the engine's button type.
#[must_use]
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// Build engine modifiers from the four DOM modifier flags.
#[must_use]
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Keys the editor consumes and must stop the browser from acting on
/// (page navigation on Backspace, scrolling on Space, etc.).
#[must_use]
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "Delete" | "Backspace" | "Escape" | " ")
}

/// Modifiers from a pointer event.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn pointer_modifiers(ev: &leptos::ev::PointerEvent) -> Modifiers {
    map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key())
}

/// Modifiers from a wheel event.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn wheel_modifiers(ev: &leptos::ev::WheelEvent) -> Modifiers {
    map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key())
}

/// Modifiers from a keyboard event.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn keyboard_modifiers(ev: &leptos::ev::KeyboardEvent) -> Modifiers {
    map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key())
}

/// Furniture-type key carried by a palette drag, if this drop has one.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn palette_payload(ev: &leptos::ev::DragEvent) -> Option<String> {
    let data = ev.data_transfer()?;
    let key = data.get_data(PALETTE_DRAG_FORMAT).ok()?;
    if key.is_empty() { None } else { Some(key) }
}
