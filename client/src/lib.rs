//! # rolegate-client
//!
//! Leptos + WASM frontend demonstrating role-based route protection.
//!
//! An operator logs in with a name and a role (`user` or `admin`). The
//! identity lives in a `SessionStore` mirrored to `localStorage`, and the
//! two dashboards are gated by the access guard in `state::access`.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
