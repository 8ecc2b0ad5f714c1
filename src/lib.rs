//! # codex-client
//!
//! Leptos + WASM frontend for the Codex scaffold: a login form, a
//! client-side token store, and a route guard in front of the dashboard.
//!
//! The backend is an external HTTP service reached through `net`. Build with
//! the `csr` feature for the browser; native builds exist for unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("codex-client starting, api at {}", config.api_url);
    leptos::mount::mount_to_body(app::App);
}
