//! Logging setup utilities for the relay binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose log output is enabled by the default filter.
const RELAY_CRATES: [&str; 3] = ["relay_shared", "relay_server", "relay_client"];

/// Build the default filter directive used when `RUST_LOG` is not set.
///
/// Every relay crate and the binary itself are enabled at `default_log_level`;
/// everything else falls back to the subscriber's default (`error`).
pub fn default_directive(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut targets: Vec<&str> = RELAY_CRATES.to_vec();
    if !targets.contains(&binary_target.as_str()) {
        targets.push(&binary_target);
    }

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "relay-server", "relay-client")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use relay_shared::logger::setup_logger;
///
/// setup_logger("relay-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_enables_relay_crates_and_binary() {
        // テスト項目: デフォルトのフィルタに relay の各クレートとバイナリが含まれる
        // given (前提条件):
        let binary_name = "relay-server";

        // when (操作):
        let directive = default_directive(binary_name, "debug");

        // then (期待する結果):
        assert_eq!(
            directive,
            "relay_shared=debug,relay_server=debug,relay_client=debug"
        );
    }

    #[test]
    fn test_default_directive_appends_unknown_binary() {
        // テスト項目: relay 以外のバイナリ名はフィルタの末尾に追加される
        // given (前提条件):
        let binary_name = "load-test";

        // when (操作):
        let directive = default_directive(binary_name, "info");

        // then (期待する結果):
        assert!(directive.ends_with(",load_test=info"));
        assert!(directive.starts_with("relay_shared=info"));
    }
}
