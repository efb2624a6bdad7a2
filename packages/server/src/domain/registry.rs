//! Connection Registry trait 定義
//!
//! The registry is the only shared mutable state of the relay. Implementations
//! own their synchronization; callers never lock around these calls.

use async_trait::async_trait;

use super::{connection::Connection, value_object::ConnectionId};

/// The set of connections eligible to receive broadcasts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Make a connection visible to subsequent broadcasts.
    ///
    /// Registering an identity that is already present replaces the entry, so
    /// a connection is never delivered the same broadcast twice.
    async fn register(&self, connection: Connection);

    /// Remove a connection. Idempotent.
    ///
    /// Returns `true` if the connection was registered.
    async fn unregister(&self, connection_id: &ConnectionId) -> bool;

    /// The registered connections at the instant of the call.
    async fn snapshot(&self) -> Vec<Connection>;

    /// Number of registered connections.
    async fn count(&self) -> usize;
}
