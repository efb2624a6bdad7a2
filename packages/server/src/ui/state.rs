//! Server state shared by the handlers.

use std::sync::Arc;

use crate::{
    config::TransportLimits,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetRelayStatsUseCase, RelayMessageUseCase,
    },
};

/// Shared application state
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub get_relay_stats_usecase: Arc<GetRelayStatsUseCase>,
    pub limits: TransportLimits,
}
