//! Relay configuration.

use std::time::Duration;

use crate::usecase::connect_client::DEFAULT_WELCOME_MESSAGE;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_FRAME_BYTES: usize = 64 * 1024;
pub const DEFAULT_OUTBOUND_BUFFER: usize = 256;

/// Runtime settings of the relay server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to bind to (`0` picks an ephemeral port)
    pub port: u16,
    /// Content of the system frame sent to every new connection
    pub welcome_message: String,
    /// Upper bound for a single socket write before the connection is dropped
    pub write_timeout: Duration,
    /// Largest inbound frame accepted from a client
    pub max_frame_bytes: usize,
    /// Capacity of each connection's outbound queue
    pub outbound_buffer: usize,
}

impl RelayConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Transport limits used by the socket handlers.
    pub fn transport_limits(&self) -> TransportLimits {
        TransportLimits {
            write_timeout: self.write_timeout,
            max_frame_bytes: self.max_frame_bytes,
            outbound_buffer: self.outbound_buffer.max(1),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
            outbound_buffer: DEFAULT_OUTBOUND_BUFFER,
        }
    }
}

/// Per-connection limits applied by the WebSocket handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportLimits {
    pub write_timeout: Duration,
    pub max_frame_bytes: usize,
    pub outbound_buffer: usize,
}
