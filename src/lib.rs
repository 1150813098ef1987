//! # clinique-client
//!
//! Leptos + WASM front-end for the clinic appointment-booking service.
//! Patients book and cancel appointments, doctors approve or reject them;
//! both get a role-specific dashboard after signing in.
//!
//! This crate contains pages, components, application state, the remote API
//! wrappers, and the token/session utilities. All browser-only behavior
//! (HTTP, localStorage, timers) is gated behind the `hydrate` feature so the
//! crate also compiles for SSR and native unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/console logging hooks and hydrates the
/// server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
