//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::RelayConfig,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetRelayStatsUseCase, RelayMessageUseCase,
    },
};

use super::{
    handler::{get_stats, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Fatal server errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening endpoint could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// WebSocket broadcast relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_client_usecase,
///     relay_message_usecase,
///     disconnect_client_usecase,
///     get_relay_stats_usecase,
///     RelayConfig::default(),
/// );
/// server.run().await?;
/// ```
pub struct Server {
    /// ConnectClientUseCase（接続のユースケース）
    connect_client_usecase: Arc<ConnectClientUseCase>,
    /// RelayMessageUseCase（中継のユースケース）
    relay_message_usecase: Arc<RelayMessageUseCase>,
    /// DisconnectClientUseCase（切断のユースケース）
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// GetRelayStatsUseCase（統計情報取得のユースケース）
    get_relay_stats_usecase: Arc<GetRelayStatsUseCase>,
    config: RelayConfig,
}

impl Server {
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        relay_message_usecase: Arc<RelayMessageUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        get_relay_stats_usecase: Arc<GetRelayStatsUseCase>,
        config: RelayConfig,
    ) -> Self {
        Self {
            connect_client_usecase,
            relay_message_usecase,
            disconnect_client_usecase,
            get_relay_stats_usecase,
            config,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Build the router.
    ///
    /// The WebSocket endpoint is served at `/` (where browser clients connect)
    /// and at `/ws`.
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_client_usecase: self.connect_client_usecase,
            relay_message_usecase: self.relay_message_usecase,
            disconnect_client_usecase: self.disconnect_client_usecase,
            get_relay_stats_usecase: self.get_relay_stats_usecase,
            limits: self.config.transport_limits(),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/", get(websocket_handler))
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/stats", get(get_stats))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Bind to the configured host and port, then serve until Ctrl+C / SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address
    /// or if there's an error during server execution.
    pub async fn run(self) -> Result<(), ServerError> {
        let bind_addr = self.config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;

        tracing::info!(
            "WebSocket relay listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until the future is dropped.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
