//! Domain layer: connections, the registry abstraction and frame stamping.
//!
//! Nothing here touches sockets. The registry trait is implemented by the
//! infrastructure layer and consumed by the usecases.

pub mod connection;
pub mod error;
pub mod frame;
pub mod message;
pub mod registry;
pub mod stats;
pub mod value_object;

pub use connection::{Connection, ConnectionState, OutboundChannel};
pub use error::{FrameError, PushError};
pub use frame::{InboundFrame, StampedFrame};
pub use message::{ChatMessage, MessageType, SystemMessage};
pub use registry::ConnectionRegistry;
pub use stats::{RelayStats, RelayStatsSnapshot};
pub use value_object::{ConnectionId, Timestamp};

#[cfg(test)]
pub use registry::MockConnectionRegistry;
