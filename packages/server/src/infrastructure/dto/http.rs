//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use crate::usecase::RelayStatus;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

impl HealthDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Relay counters and current connection count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayStatsDto {
    pub connections: usize,
    pub frames_received: u64,
    pub frames_relayed: u64,
    pub frames_dropped: u64,
    pub deliveries: u64,
    pub deliveries_skipped: u64,
    pub connections_pruned: u64,
}

impl From<RelayStatus> for RelayStatsDto {
    fn from(status: RelayStatus) -> Self {
        let stats = status.stats;
        Self {
            connections: status.connections,
            frames_received: stats.frames_received,
            frames_relayed: stats.frames_relayed,
            frames_dropped: stats.frames_dropped,
            deliveries: stats.deliveries,
            deliveries_skipped: stats.deliveries_skipped,
            connections_pruned: stats.connections_pruned,
        }
    }
}
