//! UseCase: メッセージ中継処理
//!
//! 受信フレームを JSON として解釈し、`timestamp` をサーバー時刻で上書きして、
//! Registry の snapshot に含まれる全接続（送信者自身を含む）へ配信します。
//!
//! ## 配信の失敗
//!
//! - 書き込み不可・キュー満杯の接続はその配信だけスキップ
//! - キューが閉じた接続（writer タスク終了済み）は Registry から削除
//! - どの接続の失敗も他の接続への配信を妨げない

use std::sync::Arc;

use relay_shared::time::Clock;

use crate::domain::{
    ConnectionId, ConnectionRegistry, FrameError, InboundFrame, RelayStats, Timestamp,
};

use super::error::RelayError;

/// Per-connection outcome of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Number of connections the frame was enqueued to
    pub delivered: usize,
    /// Connections skipped for this broadcast (not open, or queue full)
    pub skipped: Vec<ConnectionId>,
    /// Dead connections removed from the registry during the broadcast
    pub pruned: Vec<ConnectionId>,
}

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    clock: Arc<dyn Clock>,
    stats: Arc<RelayStats>,
}

impl RelayMessageUseCase {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        clock: Arc<dyn Clock>,
        stats: Arc<RelayStats>,
    ) -> Self {
        Self {
            registry,
            clock,
            stats,
        }
    }

    /// テキストフレームを中継
    ///
    /// # Arguments
    ///
    /// * `from` - 送信元の接続 ID（ログ用）
    /// * `raw` - 受信したペイロード
    ///
    /// # Returns
    ///
    /// * `Ok(BroadcastReport)` - 配信結果
    /// * `Err(RelayError)` - フレームを破棄した（送信者には何も返さない）
    pub async fn execute(
        &self,
        from: &ConnectionId,
        raw: &str,
    ) -> Result<BroadcastReport, RelayError> {
        self.relay(from, InboundFrame::parse(raw)).await
    }

    /// バイナリフレームを中継（UTF-8 の JSON であればテキストと同じ扱い）
    pub async fn execute_binary(
        &self,
        from: &ConnectionId,
        raw: &[u8],
    ) -> Result<BroadcastReport, RelayError> {
        self.relay(from, InboundFrame::parse_bytes(raw)).await
    }

    /// 符号化済みフレームを snapshot の全接続へ配信
    pub async fn broadcast(&self, encoded: &str) -> BroadcastReport {
        let targets = self.registry.snapshot().await;
        let mut report = BroadcastReport::default();

        for connection in targets {
            match connection.push(encoded.to_string()) {
                Ok(()) => report.delivered += 1,
                Err(e) if e.is_dead() => {
                    tracing::warn!(
                        "Connection '{}' is dead ({}), removing from registry",
                        connection.id(),
                        e
                    );
                    self.registry.unregister(connection.id()).await;
                    connection.mark_closed();
                    report.pruned.push(connection.id().clone());
                }
                Err(e) => {
                    tracing::warn!("Skipping connection '{}': {}", connection.id(), e);
                    report.skipped.push(connection.id().clone());
                }
            }
        }

        self.stats
            .record_broadcast(report.delivered, report.skipped.len(), report.pruned.len());
        report
    }

    async fn relay(
        &self,
        from: &ConnectionId,
        frame: Result<InboundFrame, FrameError>,
    ) -> Result<BroadcastReport, RelayError> {
        self.stats.record_received();

        let encoded = match frame.and_then(|frame| {
            let received_at = Timestamp::new(self.clock.now());
            frame.stamp(&received_at).encode()
        }) {
            Ok(encoded) => encoded,
            Err(e) => {
                self.stats.record_dropped();
                return Err(e.into());
            }
        };

        let report = self.broadcast(&encoded).await;
        tracing::debug!(
            "Relayed frame from '{}' to {} connection(s) ({} skipped, {} pruned)",
            from,
            report.delivered,
            report.skipped.len(),
            report.pruned.len()
        );
        Ok(report)
    }
}
