//! End-to-end: native feed client against a live server on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use recofeed::api::{build_router, AppState};
use recofeed::catalog::Catalog;
use recofeed::client::{ClientError, FeedClient, FeedEvent};
use recofeed::config::ServerConfig;
use recofeed::feed::{SendDecision, CHOOSE_PRODUCT_PROMPT, NO_RECOMMENDATIONS};

const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

async fn spawn_server(config: ServerConfig) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = build_router(AppState::new(Catalog::demo(), config));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Server whose `/ws` pushes `frames` unprompted, then idles until the client leaves
async fn spawn_scripted_server(frames: &'static [&'static str]) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route(
        "/ws",
        get(move |ws: WebSocketUpgrade| scripted_upgrade(ws, frames)),
    );

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

async fn scripted_upgrade(ws: WebSocketUpgrade, frames: &'static [&'static str]) -> Response {
    ws.on_upgrade(move |socket| push_frames(socket, frames))
}

async fn push_frames(mut socket: WebSocket, frames: &'static [&'static str]) {
    for frame in frames {
        if socket.send(Message::Text(frame.to_string())).await.is_err() {
            return;
        }
    }
    while let Some(Ok(_)) = socket.recv().await {}
}

fn ws_url(addr: SocketAddr) -> String {
    format!("ws://{}/ws", addr)
}

#[tokio::test]
async fn test_first_event_is_opened() {
    let addr = spawn_server(ServerConfig::default()).await;
    let mut client = FeedClient::connect(&ws_url(addr)).await.unwrap();

    assert_eq!(client.next_event().await, Some(FeedEvent::Opened));
    assert!(client.rendered().is_none());

    client.close().await;
}

#[tokio::test]
async fn test_selection_renders_recommendations() {
    let addr = spawn_server(ServerConfig::default()).await;
    let mut client = FeedClient::connect(&ws_url(addr)).await.unwrap();

    let decision = client.send_selection("Product A").await.unwrap();
    assert_eq!(decision, SendDecision::Transmit("Product A".to_string()));

    let list = client.next_reply_within(REPLY_TIMEOUT).await.unwrap();
    assert_eq!(list.texts(), vec!["Product B", "Product C"]);
    assert_eq!(client.rendered(), Some(&list));

    client.close().await;
}

#[tokio::test]
async fn test_unknown_product_renders_error_entry() {
    let addr = spawn_server(ServerConfig::default()).await;
    let mut client = FeedClient::connect(&ws_url(addr)).await.unwrap();

    client.send_selection("Widget").await.unwrap();
    let list = client.next_reply_within(REPLY_TIMEOUT).await.unwrap();

    assert_eq!(list.texts(), vec![NO_RECOMMENDATIONS]);
    assert!(list.entries()[0].is_error());

    client.close().await;
}

#[tokio::test]
async fn test_each_reply_replaces_previous_list() {
    let addr = spawn_server(ServerConfig::default()).await;
    let mut client = FeedClient::connect(&ws_url(addr)).await.unwrap();

    client.send_selection("Product A").await.unwrap();
    client.next_reply_within(REPLY_TIMEOUT).await.unwrap();

    client.send_selection("Product D").await.unwrap();
    client.next_reply_within(REPLY_TIMEOUT).await.unwrap();

    let rendered = client.rendered().unwrap();
    assert_eq!(rendered.texts(), vec!["Product B", "Product E"]);

    client.close().await;
}

#[tokio::test]
async fn test_empty_selection_sends_nothing() {
    let addr = spawn_server(ServerConfig::default()).await;
    let mut client = FeedClient::connect(&ws_url(addr)).await.unwrap();

    let decision = client.send_selection("").await.unwrap();
    assert_eq!(decision, SendDecision::Prompt(CHOOSE_PRODUCT_PROMPT));

    // Had "" gone out, the next reply would be the empty-list error entry
    client.send_selection("Product B").await.unwrap();
    let list = client.next_reply_within(REPLY_TIMEOUT).await.unwrap();
    assert_eq!(list.texts(), vec!["Product A", "Product D"]);

    client.close().await;
}

#[tokio::test]
async fn test_connection_limit_closes_channel() {
    let config = ServerConfig {
        max_connections: 1,
        ..Default::default()
    };
    let addr = spawn_server(config).await;

    let mut first = FeedClient::connect(&ws_url(addr)).await.unwrap();
    first.send_selection("Product A").await.unwrap();
    first.next_reply_within(REPLY_TIMEOUT).await.unwrap();

    // The handshake succeeds, then the server closes straight away
    let mut second = FeedClient::connect(&ws_url(addr)).await.unwrap();
    let result = second.next_reply_within(REPLY_TIMEOUT).await;
    assert!(matches!(result, Err(ClientError::Closed)));

    first.close().await;
}

#[tokio::test]
async fn test_malformed_frame_keeps_rendered_list() {
    let addr = spawn_scripted_server(&[r#"["A","B"]"#, "garbage", "[]"]).await;
    let mut client = FeedClient::connect(&ws_url(addr)).await.unwrap();

    assert_eq!(client.next_event().await, Some(FeedEvent::Opened));

    match client.next_event().await {
        Some(FeedEvent::Rendered(list)) => assert_eq!(list.texts(), vec!["A", "B"]),
        other => panic!("Expected Rendered, got {:?}", other),
    }

    assert!(matches!(
        client.next_event().await,
        Some(FeedEvent::Malformed(_))
    ));
    assert_eq!(client.rendered().unwrap().texts(), vec!["A", "B"]);

    assert!(matches!(
        client.next_event().await,
        Some(FeedEvent::Rendered(_))
    ));
    let rendered = client.rendered().unwrap();
    assert_eq!(rendered.texts(), vec![NO_RECOMMENDATIONS]);
    assert!(rendered.is_no_results());

    client.close().await;
}
