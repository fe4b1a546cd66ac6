//! State Management
//!
//! Feed state and the recommendation channel.

pub mod feed;
pub mod websocket;

pub use feed::{provide_feed_state, FeedState, SendDecision};
pub use websocket::FeedSocket;
