use super::*;

// =============================================================
// Panel policy: detail panel vs. multi toolbar exclusivity
// =============================================================

#[test]
fn empty_selection_hides_both_surfaces() {
    assert_eq!(panel_mode_for_selection(&[]), PanelMode::Hidden);
}

#[test]
fn single_selection_shows_inspector() {
    assert_eq!(panel_mode_for_selection(&[41]), PanelMode::Inspector(41));
}

#[test]
fn two_selected_show_multi_toolbar() {
    assert_eq!(panel_mode_for_selection(&[1, 2]), PanelMode::MultiToolbar(2));
}

#[test]
fn many_selected_report_their_count() {
    assert_eq!(panel_mode_for_selection(&[1, 2, 3, 4, 5]), PanelMode::MultiToolbar(5));
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn grid_starts_visible() {
    assert!(UiState::default().grid_visible);
}
