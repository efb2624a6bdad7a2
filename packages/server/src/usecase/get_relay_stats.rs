//! UseCase: relay の統計情報取得

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, RelayStats, RelayStatsSnapshot};

/// Counters plus the live connection count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayStatus {
    pub connections: usize,
    pub stats: RelayStatsSnapshot,
}

/// 統計情報取得のユースケース
pub struct GetRelayStatsUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    stats: Arc<RelayStats>,
}

impl GetRelayStatsUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, stats: Arc<RelayStats>) -> Self {
        Self { registry, stats }
    }

    pub async fn execute(&self) -> RelayStatus {
        RelayStatus {
            connections: self.registry.count().await,
            stats: self.stats.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockConnectionRegistry;

    #[tokio::test]
    async fn test_stats_include_connection_count() {
        // テスト項目: 接続数とカウンタがまとめて返される
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry.expect_count().return_const(3usize);
        let stats = Arc::new(RelayStats::new());
        stats.record_received();
        stats.record_broadcast(3, 0, 0);
        let usecase = GetRelayStatsUseCase::new(Arc::new(registry), stats);

        // when (操作):
        let status = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(status.connections, 3);
        assert_eq!(status.stats.frames_received, 1);
        assert_eq!(status.stats.deliveries, 3);
    }
}
