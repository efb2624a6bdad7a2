//! UseCase: クライアント接続処理
//!
//! 1. `Connection` を生成して Open にする
//! 2. welcome の system フレームを送信キューに積む
//! 3. Registry に登録する
//!
//! welcome は登録より先にキューへ積むため、クライアントが最初に受け取る
//! フレームは必ず welcome になります。

use std::sync::Arc;

use relay_shared::time::Clock;

use crate::domain::{
    Connection, ConnectionId, ConnectionRegistry, OutboundChannel, SystemMessage, Timestamp,
};

/// Default welcome notice sent to every new connection.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Bienvenue dans le chat DEVWEEK !";

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    clock: Arc<dyn Clock>,
    welcome_message: String,
}

impl ConnectClientUseCase {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        clock: Arc<dyn Clock>,
        welcome_message: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            clock,
            welcome_message: welcome_message.into(),
        }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - transport が割り当てた接続 ID
    /// * `outbound` - 接続の送信キュー
    ///
    /// # Returns
    ///
    /// 登録済みの `Connection`（Open 状態）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        outbound: OutboundChannel,
    ) -> Connection {
        let connected_at = Timestamp::new(self.clock.now());
        let connection = Connection::new(connection_id, outbound, connected_at);
        connection.open();

        match self.build_welcome(&connected_at) {
            Ok(welcome) => {
                if let Err(e) = connection.push(welcome) {
                    tracing::warn!(
                        "Failed to send welcome to connection '{}': {}",
                        connection.id(),
                        e
                    );
                }
            }
            Err(e) => tracing::error!("Failed to encode welcome message: {}", e),
        }

        self.registry.register(connection.clone()).await;
        connection
    }

    fn build_welcome(&self, at: &Timestamp) -> Result<String, serde_json::Error> {
        serde_json::to_string(&SystemMessage::new(self.welcome_message.clone(), at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionState, MessageType, MockConnectionRegistry},
        infrastructure::registry::InMemoryConnectionRegistry,
    };
    use relay_shared::time::FixedClock;
    use tokio::sync::mpsc;

    fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::from_millis(1_767_225_600_000))
    }

    #[tokio::test]
    async fn test_connect_registers_open_connection() {
        // テスト項目: 接続後、Open 状態の接続が Registry に登録される
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = ConnectClientUseCase::new(registry.clone(), fixed_clock(), "welcome");
        let (tx, _rx) = mpsc::channel(8);

        // when (操作):
        let connection = usecase.execute(ConnectionId::from("alice"), tx).await;

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Open);
        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id(), connection.id());
    }

    #[tokio::test]
    async fn test_connect_sends_welcome_first() {
        // テスト項目: 接続直後に welcome の system フレームが 1 つだけ届く
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = ConnectClientUseCase::new(registry, fixed_clock(), "Bienvenue !");
        let (tx, mut rx) = mpsc::channel(8);

        // when (操作):
        usecase.execute(ConnectionId::from("alice"), tx).await;

        // then (期待する結果):
        let frame = rx.recv().await.unwrap();
        let welcome: SystemMessage = serde_json::from_str(&frame).unwrap();
        assert_eq!(welcome.r#type, MessageType::System);
        assert_eq!(welcome.content, "Bienvenue !");
        assert_eq!(welcome.timestamp, "2026-01-01T00:00:00.000Z");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_connect_tolerates_welcome_failure() {
        // テスト項目: welcome の送信に失敗しても登録は行われる
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_register()
            .withf(|connection| connection.id().as_str() == "alice")
            .times(1)
            .return_const(());
        let usecase = ConnectClientUseCase::new(Arc::new(registry), fixed_clock(), "welcome");
        let (tx, rx) = mpsc::channel(8);
        drop(rx);

        // when (操作):
        let connection = usecase.execute(ConnectionId::from("alice"), tx).await;

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Open);
    }

    #[test]
    fn test_default_welcome_message() {
        // テスト項目: デフォルトの welcome 文言
        assert_eq!(DEFAULT_WELCOME_MESSAGE, "Bienvenue dans le chat DEVWEEK !");
    }
}
