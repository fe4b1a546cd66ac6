//! Channel connection and event pump.

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::ClientError;
use crate::feed::{parse_recommendations, RenderedList, SendDecision};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Something that happened on the channel
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// Handshake completed
    Opened,
    /// A well-formed list arrived and replaced the rendered list
    Rendered(RenderedList),
    /// A frame could not be parsed; the rendered list is unchanged
    Malformed(String),
    /// The channel is gone; no reconnection is attempted
    Closed { code: Option<u16>, reason: String },
}

/// Owned connection to the recommendation service
pub struct FeedClient {
    url: String,
    sink: SplitSink<WsStream, Message>,
    events: mpsc::UnboundedReceiver<FeedEvent>,
    rendered: Option<RenderedList>,
    reader: JoinHandle<()>,
}

impl FeedClient {
    /// Open the channel
    ///
    /// Only `ws://` and `wss://` URLs are accepted. The first event delivered
    /// is always [`FeedEvent::Opened`].
    pub async fn connect(url: &str) -> Result<Self, ClientError> {
        let parsed = url::Url::parse(url).map_err(|e| ClientError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "ws" | "wss") {
            return Err(ClientError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let (stream, response) =
            tokio_tungstenite::connect_async(url)
                .await
                .map_err(|e| ClientError::Connect {
                    url: url.to_string(),
                    error: e.to_string(),
                })?;

        tracing::info!(url = %url, status = %response.status(), "Recommendation channel open");

        let (sink, stream) = stream.split();
        let (tx, events) = mpsc::unbounded_channel();
        let _ = tx.send(FeedEvent::Opened);
        let reader = tokio::spawn(read_loop(stream, tx));

        Ok(Self {
            url: url.to_string(),
            sink,
            events,
            rendered: None,
            reader,
        })
    }

    /// Send the current selection
    ///
    /// A non-empty value goes out verbatim as one text frame. An empty value
    /// sends nothing and returns [`SendDecision::Prompt`].
    pub async fn send_selection(&mut self, value: &str) -> Result<SendDecision, ClientError> {
        let decision = SendDecision::for_value(value);

        match &decision {
            SendDecision::Transmit(product) => {
                self.sink.send(Message::text(product.clone())).await?;
                tracing::debug!(product = %product, "Selection sent");
            }
            SendDecision::Prompt(prompt) => {
                tracing::debug!(prompt = %prompt, "Empty selection, nothing sent");
            }
        }

        Ok(decision)
    }

    /// Wait for the next channel event
    ///
    /// Returns `None` once the reader task has finished and every event has
    /// been consumed.
    pub async fn next_event(&mut self) -> Option<FeedEvent> {
        let event = self.events.recv().await?;
        if let FeedEvent::Rendered(list) = &event {
            self.rendered = Some(list.clone());
        }
        Some(event)
    }

    /// Wait for the next rendered list, skipping the open notification
    pub async fn next_reply(&mut self) -> Result<RenderedList, ClientError> {
        loop {
            match self.next_event().await {
                Some(FeedEvent::Opened) => continue,
                Some(FeedEvent::Rendered(list)) => return Ok(list),
                Some(FeedEvent::Malformed(reason)) => return Err(ClientError::MalformedReply(reason)),
                Some(FeedEvent::Closed { .. }) | None => return Err(ClientError::Closed),
            }
        }
    }

    /// [`next_reply`](Self::next_reply) with a deadline
    pub async fn next_reply_within(
        &mut self,
        timeout: Duration,
    ) -> Result<RenderedList, ClientError> {
        tokio::time::timeout(timeout, self.next_reply())
            .await
            .map_err(|_| ClientError::Timeout(timeout))?
    }

    /// The list currently shown, if any message has arrived
    pub fn rendered(&self) -> Option<&RenderedList> {
        self.rendered.as_ref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Close the channel
    pub async fn close(&mut self) {
        if let Err(e) = self.sink.close().await {
            tracing::debug!(error = %e, "Close handshake failed");
        }
    }
}

impl Drop for FeedClient {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

/// Turn one text frame into an event
pub fn receive(payload: &str) -> FeedEvent {
    match parse_recommendations(payload) {
        Ok(list) => FeedEvent::Rendered(RenderedList::render(&list)),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed recommendation payload");
            FeedEvent::Malformed(e.to_string())
        }
    }
}

async fn read_loop(mut stream: SplitStream<WsStream>, tx: mpsc::UnboundedSender<FeedEvent>) {
    let mut code = None;
    let mut reason = String::new();

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(text)) => {
                if tx.send(receive(&text)).is_err() {
                    // Client dropped
                    return;
                }
            }
            Ok(Message::Close(frame)) => {
                if let Some(frame) = frame {
                    code = Some(u16::from(frame.code));
                    reason = frame.reason.to_string();
                }
                break;
            }
            Ok(_) => {
                // Binary, ping and pong frames carry no recommendations
            }
            Err(e) => {
                tracing::debug!(error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    tracing::info!(code = ?code, reason = %reason, "Recommendation channel closed");
    let _ = tx.send(FeedEvent::Closed { code, reason });
}
