//! UI components for the map-editor workspace.

pub mod canvas_host;
pub mod inspector_panel;
pub mod multi_toolbar;
pub mod notice_tray;
pub mod palette;
pub mod status_bar;
