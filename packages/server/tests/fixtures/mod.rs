//! Shared helpers for the relay integration tests.
//!
//! Each [`TestServer`] runs an independent relay in-process on an ephemeral
//! port, so tests can run in parallel.

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use relay_server::{app::build_server, config::RelayConfig};
use relay_shared::time::SystemClock;
use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

pub type WsClient = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// How long a test waits for a frame it expects
pub const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// Helper struct to manage an in-process server lifecycle
pub struct TestServer {
    port: u16,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a relay with the default configuration
    pub async fn start() -> Self {
        Self::start_with(RelayConfig::default()).await
    }

    /// Start a relay with a custom configuration (host and port are overridden)
    pub async fn start_with(config: RelayConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let port = listener
            .local_addr()
            .expect("Failed to read local address")
            .port();

        let config = RelayConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..config
        };
        let server = build_server(config, Arc::new(SystemClock));
        let handle = tokio::spawn(async move {
            if let Err(e) = server.serve(listener).await {
                eprintln!("test server stopped: {}", e);
            }
        });

        TestServer { port, handle }
    }

    /// WebSocket URL at the root path
    pub fn url(&self) -> String {
        format!("ws://127.0.0.1:{}/", self.port)
    }

    /// WebSocket URL at `/ws`
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }

    /// Base URL for the HTTP API
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Connect a client and consume its welcome frame
    pub async fn connect(&self) -> WsClient {
        let mut client = connect(&self.url()).await;
        let welcome = next_json(&mut client).await;
        assert_eq!(welcome["type"], "system");
        client
    }

    /// Fetch `/api/stats`
    pub async fn stats(&self) -> Value {
        reqwest::get(format!("{}/api/stats", self.base_url()))
            .await
            .expect("Failed to call /api/stats")
            .json()
            .await
            .expect("Failed to decode /api/stats")
    }

    /// Poll `/api/stats` until the connection count matches
    pub async fn wait_for_connections(&self, expected: u64) {
        let deadline = tokio::time::Instant::now() + RECV_TIMEOUT;
        loop {
            let stats = self.stats().await;
            if stats["connections"] == expected {
                return;
            }
            if tokio::time::Instant::now() > deadline {
                panic!(
                    "Expected {} connection(s), stats: {}",
                    expected, stats
                );
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Stop the server when the test ends
        self.handle.abort();
    }
}

/// Open a WebSocket connection without consuming any frame
pub async fn connect(url: &str) -> WsClient {
    let (client, _response) = connect_async(url)
        .await
        .expect("Failed to connect to test server");
    client
}

/// Send a JSON value as a text frame
pub async fn send_json(client: &mut WsClient, value: &Value) {
    send_text(client, &value.to_string()).await;
}

/// Send a raw text frame
pub async fn send_text(client: &mut WsClient, text: &str) {
    client
        .send(Message::Text(text.to_string().into()))
        .await
        .expect("Failed to send frame");
}

/// Receive the next text frame and decode it as JSON
pub async fn next_json(client: &mut WsClient) -> Value {
    let deadline = tokio::time::Instant::now() + RECV_TIMEOUT;
    loop {
        let next = tokio::time::timeout_at(deadline, client.next())
            .await
            .expect("Timed out waiting for a frame");
        match next {
            Some(Ok(Message::Text(text))) => {
                return serde_json::from_str(text.as_str()).expect("Frame is not JSON");
            }
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
            other => panic!("Unexpected frame: {:?}", other),
        }
    }
}

/// Assert that no text frame arrives within `wait`
pub async fn assert_no_frame(client: &mut WsClient, wait: Duration) {
    if let Ok(Some(Ok(Message::Text(text)))) = tokio::time::timeout(wait, client.next()).await {
        panic!("Unexpected frame: {}", text);
    }
}

/// Wait until the server closes this connection
pub async fn wait_for_close(client: &mut WsClient) {
    let deadline = tokio::time::Instant::now() + RECV_TIMEOUT;
    loop {
        match tokio::time::timeout_at(deadline, client.next()).await {
            Err(_) => panic!("Connection was not closed"),
            Ok(None | Some(Err(_)) | Some(Ok(Message::Close(_)))) => return,
            Ok(Some(Ok(_))) => continue,
        }
    }
}
