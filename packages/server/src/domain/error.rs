//! Domain layer error definitions.

use thiserror::Error;

use super::connection::ConnectionState;

/// Errors raised while decoding or encoding a frame
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The payload is not valid JSON
    #[error("frame is not valid JSON: {0}")]
    Malformed(String),

    /// The payload is valid JSON but not an object
    #[error("frame must be a JSON object (got {0})")]
    NotAnObject(&'static str),

    /// The payload is not valid UTF-8
    #[error("frame is not valid UTF-8")]
    InvalidUtf8,

    /// Re-encoding the stamped frame failed
    #[error("failed to encode frame: {0}")]
    Encode(String),
}

/// Errors raised while enqueueing a frame on a connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PushError {
    /// The connection is not in the Open state
    #[error("connection is not writable (state: {0})")]
    NotWritable(ConnectionState),

    /// The outbound queue is full (slow consumer)
    #[error("outbound queue is full")]
    QueueFull,

    /// The writer task has gone away
    #[error("outbound queue is closed")]
    Closed,
}

impl PushError {
    /// Whether the error means the connection can never be written again.
    pub fn is_dead(&self) -> bool {
        matches!(
            self,
            PushError::Closed | PushError::NotWritable(ConnectionState::Closed)
        )
    }
}
