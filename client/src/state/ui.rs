//! Local UI chrome state and the panel-visibility policy.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`editor`) so
//! rendering controls can evolve independently of canvas data. The panel
//! policy is the one rule the chrome must get right: exactly one selected
//! item shows the detail panel, two or more show the multi-select toolbar,
//! zero shows neither.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::doc::ItemId;

/// Which side surface the current selection calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode {
    /// Nothing selected: no panel, no toolbar.
    Hidden,
    /// Exactly one item selected: the detail/property panel.
    Inspector(ItemId),
    /// Two or more items selected: the multi-select toolbar, with the count.
    MultiToolbar(usize),
}

/// Decide the panel mode for a selection, in array-notification form.
#[must_use]
pub fn panel_mode_for_selection(selection: &[ItemId]) -> PanelMode {
    match selection {
        [] => PanelMode::Hidden,
        [only] => PanelMode::Inspector(*only),
        many => PanelMode::MultiToolbar(many.len()),
    }
}

/// UI state for chrome toggles.
#[derive(Clone, Copy, Debug)]
pub struct UiState {
    /// Whether grid lines are drawn on the canvas surface.
    pub grid_visible: bool,
    /// Whether the palette column is expanded.
    pub palette_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { grid_visible: true, palette_expanded: true }
    }
}
