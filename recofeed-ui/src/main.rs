//! Recofeed Dashboard
//!
//! Browser client for the product recommendation feed, built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR). The product list comes from the REST API;
//! selections go out over the WebSocket channel and each reply replaces the
//! rendered recommendation list.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
