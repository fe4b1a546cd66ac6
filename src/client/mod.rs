//! Native Feed Client
//!
//! Terminal counterpart of the dashboard: one owned WebSocket to the
//! recommendation service, a reader task that turns frames into
//! [`FeedEvent`]s, and the last rendered list.
//!
//! ```rust,no_run
//! use recofeed::client::FeedClient;
//!
//! # async fn run() -> Result<(), recofeed::client::ClientError> {
//! let mut client = FeedClient::connect("ws://localhost:5000/ws").await?;
//! client.send_selection("Product A").await?;
//! let list = client.next_reply().await?;
//! print!("{}", list);
//! client.close().await;
//! # Ok(())
//! # }
//! ```

mod connection;

pub use connection::{receive, FeedClient, FeedEvent};

use std::time::Duration;
use thiserror::Error;

/// Errors raised by the native client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid channel URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to connect to {url}: {error}")]
    Connect { url: String, error: String },

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Server sent a malformed reply: {0}")]
    MalformedReply(String),

    #[error("Recommendation channel closed")]
    Closed,

    #[error("No reply within {0:?}")]
    Timeout(Duration),
}
