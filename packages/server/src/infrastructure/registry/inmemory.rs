//! InMemory ConnectionRegistry 実装
//!
//! ## 責務
//!
//! - 接続中の `Connection` を ID をキーに保持する
//! - register / unregister / snapshot を並行アクセス下で安全に提供する
//!
//! ## 設計ノート
//!
//! ブロードキャストは `snapshot()` で得たコピーを走査するため、
//! 走査中に接続・切断が起きてもロックを保持し続けることはありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry};

/// インメモリ ConnectionRegistry 実装
pub struct InMemoryConnectionRegistry {
    /// Key: connection id
    connections: RwLock<HashMap<ConnectionId, Connection>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい空の InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, connection: Connection) {
        let mut connections = self.connections.write().await;
        let connection_id = connection.id().clone();
        if connections.insert(connection_id.clone(), connection).is_some() {
            tracing::debug!("Connection '{}' re-registered, entry replaced", connection_id);
        } else {
            tracing::debug!("Connection '{}' registered", connection_id);
        }
    }

    async fn unregister(&self, connection_id: &ConnectionId) -> bool {
        let mut connections = self.connections.write().await;
        let removed = connections.remove(connection_id).is_some();
        if removed {
            tracing::debug!("Connection '{}' unregistered", connection_id);
        }
        removed
    }

    async fn snapshot(&self) -> Vec<Connection> {
        let connections = self.connections.read().await;
        connections.values().cloned().collect()
    }

    async fn count(&self) -> usize {
        self.connections.read().await.len()
    }
}
