//! Terminal chat client for the broadcast relay.
//!
//! Connects to the relay and sends every line typed at the ">" prompt as a
//! text frame. Automatically reconnects on disconnection (every 3 seconds,
//! giving up after 5 consecutive failures).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin relay-client
//! cargo run --bin relay-client -- --url ws://127.0.0.1:8080/ --sender-id user_alice
//! ```

use clap::Parser;
use relay_client::domain::generate_sender_id;
use relay_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "relay-client")]
#[command(about = "Terminal chat client for the WebSocket relay", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, env = "RELAY_URL", default_value = "ws://127.0.0.1:8080/")]
    url: String,

    /// Sender id attached to outgoing messages (random `user_…` id if omitted)
    #[arg(short = 's', long)]
    sender_id: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let sender_id = args.sender_id.unwrap_or_else(generate_sender_id);

    // Run the client
    if let Err(e) = relay_client::run_client(args.url, sender_id).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
