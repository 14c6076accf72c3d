//! # vidsum
//!
//! Leptos + WASM client for the VidSum video summarizer. Email/password
//! authentication is delegated to a hosted auth backend; the dashboard sends
//! a YouTube URL to a summarization endpoint and renders the returned text.
//!
//! The interesting pieces are the session-flag auth gate (`state::gate`,
//! `state::session`) and the two submit lifecycles (`state::auth_form`,
//! `state::summary`); pages and components are thin reactive wiring around
//! them. Browser-only code is gated behind the `hydrate` feature so the
//! whole crate builds and unit-tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: install the panic hook and logger, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // The original deployment refuses to start without its auth endpoint
    // configuration; surface the same condition loudly at startup.
    if let Err(e) = crate::config::Config::from_build_env() {
        log::error!("startup configuration error: {e}");
    }

    leptos::mount::hydrate_body(app::App);
}
