//! # clubdesk-web
//!
//! Leptos + WASM frontend for the ClubDesk club management service.
//!
//! The core of the crate is the session gate: `state::session_store` owns
//! the authenticated identity, `util::guard` decides whether a navigation may
//! proceed, and `util::redirect` sends the user back to the login page when a
//! session check fails. Pages and per-endpoint service wrappers sit on top.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
