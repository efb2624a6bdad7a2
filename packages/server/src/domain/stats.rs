//! Relay counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters updated by the relay usecases.
#[derive(Debug, Default)]
pub struct RelayStats {
    frames_received: AtomicU64,
    frames_relayed: AtomicU64,
    frames_dropped: AtomicU64,
    deliveries: AtomicU64,
    deliveries_skipped: AtomicU64,
    connections_pruned: AtomicU64,
}

/// Point-in-time copy of [`RelayStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStatsSnapshot {
    pub frames_received: u64,
    pub frames_relayed: u64,
    pub frames_dropped: u64,
    pub deliveries: u64,
    pub deliveries_skipped: u64,
    pub connections_pruned: u64,
}

impl RelayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_received(&self) {
        self.frames_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped(&self) {
        self.frames_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one broadcast and its per-connection outcome.
    pub fn record_broadcast(&self, delivered: usize, skipped: usize, pruned: usize) {
        self.frames_relayed.fetch_add(1, Ordering::Relaxed);
        self.deliveries.fetch_add(delivered as u64, Ordering::Relaxed);
        self.deliveries_skipped
            .fetch_add((skipped + pruned) as u64, Ordering::Relaxed);
        self.connections_pruned
            .fetch_add(pruned as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RelayStatsSnapshot {
        RelayStatsSnapshot {
            frames_received: self.frames_received.load(Ordering::Relaxed),
            frames_relayed: self.frames_relayed.load(Ordering::Relaxed),
            frames_dropped: self.frames_dropped.load(Ordering::Relaxed),
            deliveries: self.deliveries.load(Ordering::Relaxed),
            deliveries_skipped: self.deliveries_skipped.load(Ordering::Relaxed),
            connections_pruned: self.connections_pruned.load(Ordering::Relaxed),
        }
    }
}
