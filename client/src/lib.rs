//! # client
//!
//! Leptos frontend for the storefront: routing, guarded pages, static
//! product sections and the blog detail view.
//!
//! The route-guard decision and the blog-detail state machine are plain Rust
//! (no feature flags) so the server crate and the native test suite use the
//! same implementation as the browser build.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
