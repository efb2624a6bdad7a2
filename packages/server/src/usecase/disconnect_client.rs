//! UseCase: クライアント切断処理
//!
//! クライアントからの close、読み書きエラー、書き込みタイムアウトの
//! いずれでも同じ手順で呼ばれます（Closing → unregister → Closed）。

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectClientUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// クライアント切断を実行
    ///
    /// 既に Registry から削除されている接続（ブロードキャスト中に死亡検知された
    /// 場合など）に対しても安全に呼び出せます。
    ///
    /// # Returns
    ///
    /// 切断後に残っている接続数
    pub async fn execute(&self, connection: &Connection) -> usize {
        connection.begin_close();
        if !self.registry.unregister(connection.id()).await {
            tracing::debug!(
                "Connection '{}' was already removed from registry",
                connection.id()
            );
        }
        connection.mark_closed();

        self.registry.count().await
    }
}
