//! Recofeed HTTP API
//!
//! HTTP layer for the recommendation service, built with Axum.
//!
//! # Endpoints
//!
//! ## Catalog
//! - `GET /api/v1/products` - List products for the selection control
//! - `GET /api/v1/recommendations/:product` - Recommendations for one product
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Recommendation channel
//!
//! When `server.static_dir` is set, every other path is served from that
//! directory (the built dashboard).
//!
//! # Example
//!
//! ```rust,no_run
//! use recofeed::api::{serve, AppState};
//! use recofeed::catalog::Catalog;
//! use recofeed::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Catalog::demo(), ServerConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/products", get(routes::products::list_products))
        .route(
            "/recommendations/:product",
            get(routes::products::get_recommendations),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_dir = state.config.static_dir.clone();

    // Create shared state
    let shared_state = Arc::new(state);

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .route("/ws", get(websocket_handler));

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving dashboard from {}", dir);
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        // The dashboard is usually served from a different origin during development
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Recofeed listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Recofeed shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
