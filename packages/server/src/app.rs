//! Dependency wiring for the relay server.

use std::sync::Arc;

use relay_shared::time::Clock;

use crate::{
    config::RelayConfig,
    domain::RelayStats,
    infrastructure::registry::InMemoryConnectionRegistry,
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetRelayStatsUseCase, RelayMessageUseCase,
    },
};

/// Build a relay server backed by a fresh in-memory registry.
///
/// Each call creates an independent registry, so several servers can run in
/// one process.
pub fn build_server(config: RelayConfig, clock: Arc<dyn Clock>) -> Server {
    // Initialize dependencies in order:
    // 1. Registry and stats
    // 2. UseCases
    // 3. Server

    // 1. Create Registry (in-memory) and stats
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let stats = Arc::new(RelayStats::new());

    // 2. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        registry.clone(),
        clock.clone(),
        config.welcome_message.clone(),
    ));
    let relay_message_usecase = Arc::new(RelayMessageUseCase::new(
        registry.clone(),
        clock,
        stats.clone(),
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(registry.clone()));
    let get_relay_stats_usecase = Arc::new(GetRelayStatsUseCase::new(registry, stats));

    // 3. Create the server
    Server::new(
        connect_client_usecase,
        relay_message_usecase,
        disconnect_client_usecase,
        get_relay_stats_usecase,
        config,
    )
}
