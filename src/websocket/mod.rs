//! WebSocket Recommendation Channel
//!
//! Server side of the recommendation channel.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks active channels and routes replies
//! - **Handler**: Handles WebSocket upgrade and message processing
//!
//! ## Protocol
//!
//! Clients connect to `/ws` and send a product identifier as a plain text
//! frame. The server answers each one with a JSON array of recommended
//! products, `[]` when the product is unknown.
//!
//! ```text
//! > Product A
//! < ["Product B","Product C"]
//! > Widget
//! < []
//! ```

mod handler;
mod hub;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
