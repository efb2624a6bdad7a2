//! WebSocket connection handlers.

use std::{fmt::Display, sync::Arc, time::Duration};

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{Sink, SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::{domain::ConnectionId, ui::state::AppState};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let max_frame_bytes = state.limits.max_frame_bytes;
    ws.max_message_size(max_frame_bytes)
        .max_frame_size(max_frame_bytes)
        .on_failed_upgrade(|e| tracing::warn!("WebSocket upgrade failed: {}", e))
        .on_upgrade(move |socket| handle_socket(socket, state))
}

/// Why a connection's writer task stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PusherExit {
    /// Every sender of the outbound queue was dropped
    QueueClosed,
    /// The socket rejected a write
    WriteFailed,
    /// A single write did not complete within the write timeout
    WriteTimedOut,
}

/// Drains the outbound queue into the socket.
///
/// Each write is bounded by `write_timeout`, so a client that stops reading
/// ends this loop instead of holding its queue forever.
pub async fn pusher_loop<S>(
    mut rx: mpsc::Receiver<String>,
    mut sender: S,
    write_timeout: Duration,
) -> PusherExit
where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    while let Some(frame) = rx.recv().await {
        let write = sender.send(Message::Text(frame.into()));
        match tokio::time::timeout(write_timeout, write).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::debug!("WebSocket write failed: {}", e);
                return PusherExit::WriteFailed;
            }
            Err(_) => return PusherExit::WriteTimedOut,
        }
    }
    PusherExit::QueueClosed
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Register the connection (the welcome frame is queued first)
    let (tx, rx) = mpsc::channel(state.limits.outbound_buffer);
    let connection = state
        .connect_client_usecase
        .execute(ConnectionId::generate(), tx)
        .await;
    let connection_id = connection.id().clone();
    tracing::info!("Connection '{}' opened", connection_id);

    // Spawn a task to push queued frames to this client
    let write_timeout = state.limits.write_timeout;
    let pusher_id = connection_id.clone();
    let mut send_task = tokio::spawn(async move {
        match pusher_loop(rx, sender, write_timeout).await {
            PusherExit::WriteTimedOut => tracing::warn!(
                "Connection '{}' did not accept a write within {:?}, dropping it",
                pusher_id,
                write_timeout
            ),
            exit => tracing::debug!("Writer for '{}' stopped: {:?}", pusher_id, exit),
        }
    });

    // Spawn a task to relay frames received from this client
    let state_clone = state.clone();
    let reader_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket read error on '{}': {}", reader_id, e);
                    break;
                }
            };

            let result = match msg {
                Message::Text(text) => {
                    state_clone
                        .relay_message_usecase
                        .execute(&reader_id, text.as_str())
                        .await
                }
                Message::Binary(data) => {
                    state_clone
                        .relay_message_usecase
                        .execute_binary(&reader_id, &data)
                        .await
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", reader_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                Message::Ping(_) | Message::Pong(_) => continue,
            };

            if let Err(e) = result {
                tracing::warn!("Connection '{}': {}", reader_id, e);
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let remaining = state.disconnect_client_usecase.execute(&connection).await;
    tracing::info!(
        "Connection '{}' closed ({} connection(s) remaining)",
        connection_id,
        remaining
    );
}
