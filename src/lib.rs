//! # Recofeed
//!
//! Real-time product recommendation feed. A client picks a product, sends its
//! identifier over a WebSocket, and the server pushes back the list of
//! recommended products, which the client renders in place of the previous
//! list.
//!
//! ## Modules
//!
//! - [`feed`]: Wire payloads, rendering rules, and selection handling
//! - [`catalog`]: Products and their recommendations
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Server side of the recommendation channel
//! - [`client`]: Native feed client over `tokio-tungstenite`
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recofeed::api::{serve, AppState};
//! use recofeed::catalog::Catalog;
//! use recofeed::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let catalog = Catalog::load_or_demo(config.catalog.path())?;
//!
//!     serve(AppState::new(catalog, config.server)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod feed;
pub mod logging;
pub mod websocket;

// Re-export top-level types for convenience
pub use feed::{
    parse_recommendations, EntryKind, FeedError, ListEntry, Recommendations, RenderedList,
    Selection, SendDecision, CHOOSE_PRODUCT_PROMPT, NO_RECOMMENDATIONS,
};

pub use catalog::{Catalog, CatalogError};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{websocket_handler, ConnectionHub, HubConfig, HubError};

pub use client::{ClientError, FeedClient, FeedEvent};

pub use config::{
    CatalogConfig, ClientConfig, Config, ConfigError, LoggingConfig, ServerConfig,
};
