//! # client
//!
//! Leptos + WASM frontend for the employee onboarding portal.
//!
//! `auth` holds the session core (credential blob, store, service, guard)
//! with no Leptos dependency. Everything else is the reactive UI built on
//! top of it: state projections, shared components, pages, and the mock
//! onboarding data they render.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
