//! # client
//!
//! Leptos + WASM frontend for TweetMind, a chat that streams an AI
//! personality read of a Twitter account.
//!
//! The crate holds the page, its components, the shared reactive state, the
//! HTTP client for the analysis API, and small pure helpers. The decorative
//! avatar backdrop is drawn by the `scene` crate through the `AvatarScene`
//! component.
//!
//! Browser-only code is gated on the `hydrate` feature; the `ssr` build only
//! renders the initial markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the first logger stays.
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
