//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.
//! Every text frame is a product identifier; every reply is the JSON array of
//! its recommendations.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::ConnectionHub;
use crate::api::AppState;
use crate::catalog::Catalog;
use crate::feed::Recommendations;

/// WebSocket upgrade handler
///
/// This is the entry point for recommendation channels.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.ws_hub);
    let catalog = Arc::clone(&state.catalog);
    ws.on_upgrade(move |socket| handle_socket(socket, hub, catalog))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, hub: Arc<ConnectionHub>, catalog: Arc<Catalog>) {
    let (mut sender, mut receiver) = socket.split();

    // Create channel for sending replies to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<Recommendations>();

    let connection_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting recommendation channel");
            let _ = sender.send(Message::Close(None)).await;
            return;
        }
    };

    let conn_id_for_send = connection_id.clone();

    // Task to forward replies from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(reply) = rx.recv().await {
            if sender.send(Message::Text(reply.to_payload())).await.is_err() {
                tracing::debug!(
                    connection_id = %conn_id_for_send,
                    "WebSocket send failed, closing connection"
                );
                break;
            }
        }
    });

    let hub_for_recv = Arc::clone(&hub);
    let conn_id_for_recv = connection_id.clone();

    // Task to receive selections from WebSocket and answer them
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&hub_for_recv, &catalog, &conn_id_for_recv, msg).await {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    hub.unregister(&connection_id).await;
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(
    hub: &ConnectionHub,
    catalog: &Catalog,
    connection_id: &str,
    message: Message,
) -> bool {
    match message {
        Message::Text(product) => {
            let reply = answer_selection(catalog, &product);
            tracing::debug!(
                connection_id = %connection_id,
                product = %product,
                recommendations = reply.len(),
                "Answering selection"
            );
            if let Err(e) = hub.send_to(connection_id, reply).await {
                tracing::debug!(connection_id = %connection_id, error = %e, "Reply dropped");
                return false;
            }
            true
        }
        Message::Binary(_) => {
            // Selections are text only
            tracing::debug!(connection_id = %connection_id, "Ignoring binary frame");
            true
        }
        Message::Ping(_) | Message::Pong(_) => {
            // Axum answers pings automatically
            true
        }
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

/// Look up the reply for one selection; unknown products get `[]`
pub(crate) fn answer_selection(catalog: &Catalog, product: &str) -> Recommendations {
    catalog.recommend(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::websocket::HubConfig;

    #[test]
    fn test_answer_known_product() {
        let reply = answer_selection(&Catalog::demo(), "Product B");
        assert_eq!(reply.to_payload(), r#"["Product A","Product D"]"#);
    }

    #[test]
    fn test_answer_unknown_product_is_empty_array() {
        let reply = answer_selection(&Catalog::demo(), "Widget");
        assert_eq!(reply.to_payload(), "[]");
    }

    #[tokio::test]
    async fn test_text_frame_queues_reply() {
        let hub = ConnectionHub::new(HubConfig::default());
        let catalog = Catalog::demo();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();

        let keep_open =
            handle_ws_message(&hub, &catalog, &id, Message::Text("Product A".to_string())).await;

        assert!(keep_open);
        assert_eq!(
            rx.try_recv().unwrap().labels(),
            &["Product B", "Product C"]
        );
    }

    #[tokio::test]
    async fn test_binary_frame_is_ignored() {
        let hub = ConnectionHub::new(HubConfig::default());
        let catalog = Catalog::demo();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();

        let keep_open = handle_ws_message(&hub, &catalog, &id, Message::Binary(vec![1, 2])).await;

        assert!(keep_open);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_close_frame_ends_session() {
        let hub = ConnectionHub::new(HubConfig::default());
        let catalog = Catalog::demo();
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();

        assert!(!handle_ws_message(&hub, &catalog, &id, Message::Close(None)).await);
    }
}
