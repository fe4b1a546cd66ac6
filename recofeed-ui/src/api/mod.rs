//! HTTP API access

pub mod client;

pub use client::{fetch_products, get_api_base, ws_url};
