//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use relay_server::domain::ChatMessage;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, protocol::Message},
};

use crate::{
    domain::classify_frame, error::ClientError, formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Run one WebSocket session until the input closes or the connection breaks.
///
/// # Returns
///
/// * `Ok(())` - The user ended the session (the input channel closed)
/// * `Err(ClientError::ConnectionLost)` - The connection closed after it was established
/// * `Err(_)` - The connection could not be established
pub async fn run_session(
    url: &str,
    sender_id: &str,
    input: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url).await.map_err(|e| match e {
        tungstenite::Error::Url(e) => ClientError::InvalidUrl(e.to_string()),
        e => ClientError::ConnectionError(e.to_string()),
    })?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
        sender_id
    );

    let (mut write, mut read) = ws_stream.split();
    let formatter = MessageFormatter::local();

    loop {
        tokio::select! {
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let frame = classify_frame(text.as_str());
                    print!("{}", formatter.format_frame(&frame, sender_id));
                    redisplay_prompt(sender_id);
                }
                Some(Ok(Message::Binary(data))) => {
                    print!("{}", formatter.format_binary(data.len()));
                    redisplay_prompt(sender_id);
                }
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Server closed the connection");
                    return Err(ClientError::ConnectionLost);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return Err(ClientError::ConnectionLost);
                }
            },
            line = input.recv() => match line {
                Some(line) => {
                    let json = match serde_json::to_string(&ChatMessage::new(sender_id, line)) {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::error!("Failed to serialize message: {}", e);
                            continue;
                        }
                    };

                    if let Err(e) = write.send(Message::Text(json.into())).await {
                        tracing::warn!("Failed to send message: {}", e);
                        return Err(ClientError::ConnectionLost);
                    }
                }
                None => {
                    if let Err(e) = write.close().await {
                        tracing::debug!("Failed to close connection cleanly: {}", e);
                    }
                    return Ok(());
                }
            },
        }
    }
}
