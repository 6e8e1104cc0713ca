//! # client
//!
//! Leptos + WASM back-office frontend for the beach-club map editor.
//!
//! This crate contains the editor page, the UI components surrounding the
//! canvas, application state, the wire types, and the persistence gateway
//! that talks to the reservation server's JSON API. It integrates with the
//! `canvas` crate for the interactive map engine via the `CanvasHost` bridge
//! component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
