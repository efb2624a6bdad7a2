//! WebSocket broadcast relay server.
//!
//! Every JSON object received from a client is stamped with the server time
//! and forwarded to all connected clients, the sender included.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin relay-server
//! cargo run --bin relay-server -- --host 127.0.0.1 --port 3000
//! PORT=3000 cargo run --bin relay-server
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use relay_server::{
    app::build_server,
    config::{
        DEFAULT_HOST, DEFAULT_MAX_FRAME_BYTES, DEFAULT_OUTBOUND_BUFFER, DEFAULT_PORT,
        DEFAULT_WRITE_TIMEOUT_SECS, RelayConfig,
    },
    usecase::connect_client::DEFAULT_WELCOME_MESSAGE,
};
use relay_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "relay-server")]
#[command(about = "WebSocket relay that stamps and broadcasts chat frames", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Content of the system frame sent to each new connection
    #[arg(short = 'w', long, env = "WELCOME_MESSAGE", default_value = DEFAULT_WELCOME_MESSAGE)]
    welcome: String,

    /// Seconds a single socket write may take before the client is dropped
    #[arg(long, env = "WRITE_TIMEOUT_SECS", default_value_t = DEFAULT_WRITE_TIMEOUT_SECS)]
    write_timeout_secs: u64,

    /// Largest inbound frame accepted from a client, in bytes
    #[arg(long, env = "MAX_FRAME_BYTES", default_value_t = DEFAULT_MAX_FRAME_BYTES)]
    max_frame_bytes: usize,

    /// Number of frames queued per client before broadcasts to it are skipped
    #[arg(long, env = "OUTBOUND_BUFFER", default_value_t = DEFAULT_OUTBOUND_BUFFER)]
    outbound_buffer: usize,
}

impl From<Args> for RelayConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            welcome_message: args.welcome,
            write_timeout: Duration::from_secs(args.write_timeout_secs),
            max_frame_bytes: args.max_frame_bytes,
            outbound_buffer: args.outbound_buffer,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = RelayConfig::from(args);
    tracing::debug!("Starting with {:?}", config);

    let server = build_server(config, Arc::new(SystemClock));
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
