//! # auth-status-dialog
//!
//! Leptos + WASM status dialog for out-of-band authentication flows: a
//! waiting/success/error message, an optional QR code or companion-app link
//! for the authentication URL, and the popup window that link may open.
//!
//! `components::status_dialog::StatusDialog` is the entry point. Its
//! transition rules live in `state` so they run in native tests; browser
//! access is confined to `util` behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered demo app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
