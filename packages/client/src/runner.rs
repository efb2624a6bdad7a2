//! Client execution logic with reconnection support.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::{
    domain::{failed_attempts_after, should_attempt_reconnect, should_exit_immediately},
    error::ClientError,
    session::run_session,
    ui::spawn_input_reader,
};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 3;

/// How often and how long the client retries a lost connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Consecutive failed attempts before giving up
    pub max_attempts: u32,
    /// Pause between attempts
    pub interval: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RECONNECT_ATTEMPTS,
            interval: Duration::from_secs(RECONNECT_INTERVAL_SECS),
        }
    }
}

/// Run the chat client reading from the terminal, with the default policy.
pub async fn run_client(url: String, sender_id: String) -> Result<(), ClientError> {
    let input = spawn_input_reader(sender_id.clone());
    run_client_with(&url, &sender_id, ReconnectPolicy::default(), input).await
}

/// Run the chat client with reconnection logic.
///
/// Lines received on `input` are sent as chat messages. Returns `Ok(())` when
/// `input` closes.
pub async fn run_client_with(
    url: &str,
    sender_id: &str,
    policy: ReconnectPolicy,
    mut input: mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let mut failed_attempts = 0;

    loop {
        tracing::info!(
            "Attempting to connect to {} as '{}' (attempt {}/{})",
            url,
            sender_id,
            failed_attempts + 1,
            policy.max_attempts
        );

        match run_session(url, sender_id, &mut input).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                return Ok(());
            }
            Err(e) => {
                if should_exit_immediately(&e) {
                    return Err(e);
                }

                tracing::warn!("{}", e);
                failed_attempts = failed_attempts_after(&e, failed_attempts);

                if !should_attempt_reconnect(&e, failed_attempts, policy.max_attempts) {
                    return Err(ClientError::ReconnectExhausted(policy.max_attempts));
                }

                tracing::info!(
                    "Reconnecting in {:?}... (attempt {}/{})",
                    policy.interval,
                    failed_attempts + 1,
                    policy.max_attempts
                );

                tokio::time::sleep(policy.interval).await;
            }
        }
    }
}
