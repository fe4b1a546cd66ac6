//! Feed error types

use thiserror::Error;

/// Errors raised while handling channel payloads
#[derive(Error, Debug)]
pub enum FeedError {
    /// Payload was not a JSON array of strings
    #[error("Malformed recommendation payload: {reason}")]
    MalformedPayload {
        /// Parser diagnostic
        reason: String,
        /// The offending payload, truncated for logging
        payload: String,
    },
}

impl FeedError {
    pub(crate) fn malformed(payload: &str, err: serde_json::Error) -> Self {
        FeedError::MalformedPayload {
            reason: err.to_string(),
            payload: payload.chars().take(120).collect(),
        }
    }
}
