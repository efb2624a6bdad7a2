//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use relay_server::domain::{ChatMessage, SystemMessage};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ClientError;

/// Prefix of generated sender ids
pub const SENDER_ID_PREFIX: &str = "user_";

const SENDER_ID_SUFFIX_LEN: usize = 9;

/// Generate a sender id: `user_` followed by 9 lowercase alphanumerics.
pub fn generate_sender_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}{}", SENDER_ID_PREFIX, &random[..SENDER_ID_SUFFIX_LEN])
}

/// A frame received from the relay, classified for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingFrame {
    System(SystemMessage),
    Chat(ChatMessage),
    /// Anything else (non-JSON, unknown type, missing fields), shown verbatim
    Other(String),
}

#[derive(Deserialize)]
struct FrameKind {
    r#type: Option<String>,
}

/// Classify a text frame by its `type` field.
pub fn classify_frame(text: &str) -> IncomingFrame {
    let other = || IncomingFrame::Other(text.to_string());

    let Ok(kind) = serde_json::from_str::<FrameKind>(text) else {
        return other();
    };

    match kind.r#type.as_deref() {
        Some("system") => serde_json::from_str(text)
            .map(IncomingFrame::System)
            .unwrap_or_else(|_| other()),
        Some("text") => serde_json::from_str(text)
            .map(IncomingFrame::Chat)
            .unwrap_or_else(|_| other()),
        _ => other(),
    }
}

/// Check if the client should exit immediately based on the error type.
///
/// # Returns
///
/// `true` if retrying cannot help (e.g. an invalid URL), `false` otherwise
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::InvalidUrl(_) | ClientError::ReconnectExhausted(_)
    )
}

/// Count consecutive failed attempts after a session ended with `error`.
///
/// A session that was connected and then lost starts a fresh series.
pub fn failed_attempts_after(error: &ClientError, previous: u32) -> u32 {
    match error {
        ClientError::ConnectionLost => 0,
        _ => previous + 1,
    }
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `failed_attempts` - Consecutive failed connection attempts so far
/// * `max_attempts` - The maximum number of consecutive failures allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    failed_attempts: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    failed_attempts < max_attempts
}
