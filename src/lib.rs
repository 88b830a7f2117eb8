//! # agenda
//!
//! Leptos + WASM front end for the agenda (calendar/events) product.
//!
//! The crate is split into a browser-independent core and a thin view layer:
//! `storage` and `state::session` own durable session facts, `net` wraps the
//! REST backend behind composable middleware, `router` guards protected
//! routes, and `pages` render the results. The core builds and tests on
//! native targets; browser glue is gated behind the `csr` feature.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: installs console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
