//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::FrameError;

/// Errors returned by `RelayMessageUseCase`.
///
/// Every variant means the frame was dropped; none of them is reported back
/// to the sending client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("dropped inbound frame: {0}")]
    InvalidFrame(#[from] FrameError),
}
