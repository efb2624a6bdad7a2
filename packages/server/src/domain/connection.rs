//! Connection entity: one accepted client session.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
};

use tokio::sync::mpsc::{self, error::TrySendError};

use super::{
    error::PushError,
    value_object::{ConnectionId, Timestamp},
};

/// Send-side handle of a connection's outbound queue.
///
/// The receiving half is drained by the connection's writer task.
pub type OutboundChannel = mpsc::Sender<String>;

/// Lifecycle of a connection: `Connecting → Open → Closing → Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closing,
    Closed,
}

impl ConnectionState {
    fn as_u8(self) -> u8 {
        match self {
            ConnectionState::Connecting => 0,
            ConnectionState::Open => 1,
            ConnectionState::Closing => 2,
            ConnectionState::Closed => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectionState::Connecting,
            1 => ConnectionState::Open,
            2 => ConnectionState::Closing,
            _ => ConnectionState::Closed,
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "open",
            ConnectionState::Closing => "closing",
            ConnectionState::Closed => "closed",
        };
        write!(f, "{}", name)
    }
}

/// One client session.
///
/// Clones share the lifecycle state and the outbound queue, so the registry,
/// the socket tasks and an in-flight broadcast all see the same connection.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    connected_at: Timestamp,
    state: Arc<AtomicU8>,
    outbound: OutboundChannel,
}

impl Connection {
    /// Create a connection in the `Connecting` state.
    pub fn new(id: ConnectionId, outbound: OutboundChannel, connected_at: Timestamp) -> Self {
        Self {
            id,
            connected_at,
            state: Arc::new(AtomicU8::new(ConnectionState::Connecting.as_u8())),
            outbound,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.id
    }

    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// `Connecting → Open`. Returns `false` if the connection already left
    /// the `Connecting` state.
    pub fn open(&self) -> bool {
        self.transition(ConnectionState::Connecting, ConnectionState::Open)
    }

    /// `Connecting | Open → Closing`. A closed connection stays closed.
    pub fn begin_close(&self) {
        if !self.transition(ConnectionState::Connecting, ConnectionState::Closing) {
            self.transition(ConnectionState::Open, ConnectionState::Closing);
        }
    }

    /// Any state `→ Closed`.
    pub fn mark_closed(&self) {
        self.state
            .store(ConnectionState::Closed.as_u8(), Ordering::Release);
    }

    /// Open and the writer task is still alive.
    pub fn is_writable(&self) -> bool {
        self.state() == ConnectionState::Open && !self.outbound.is_closed()
    }

    /// Enqueue an encoded frame without waiting.
    ///
    /// Never blocks: a full queue is reported as [`PushError::QueueFull`] so a
    /// slow consumer cannot stall the caller.
    pub fn push(&self, frame: String) -> Result<(), PushError> {
        let state = self.state();
        if state != ConnectionState::Open {
            return Err(PushError::NotWritable(state));
        }

        self.outbound.try_send(frame).map_err(|e| match e {
            TrySendError::Full(_) => PushError::QueueFull,
            TrySendError::Closed(_) => PushError::Closed,
        })
    }

    fn transition(&self, from: ConnectionState, to: ConnectionState) -> bool {
        self.state
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
