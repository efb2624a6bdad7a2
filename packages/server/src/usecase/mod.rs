//! UseCase 層
//!
//! Relay engine operations. Called from the UI layer (one call per socket
//! event) and operating on the domain through `ConnectionRegistry`.

pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod get_relay_stats;
pub mod relay_message;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::RelayError;
pub use get_relay_stats::{GetRelayStatsUseCase, RelayStatus};
pub use relay_message::{BroadcastReport, RelayMessageUseCase};
