//! In-memory snapshot store.
//!
//! Serves a snapshot held in memory as if it came from a real data layer.
//! Useful for tests and for hosts that manage the network themselves.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::{NetworkSnapshot, SnapshotSource, StoreError};

/// Snapshot store backed by memory.
///
/// The held snapshot can be swapped with [`replace`](Self::replace) while
/// queries are in flight; each query keeps working against whichever snapshot
/// it already loaded, matching the engine's snapshot-per-query model.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: Arc<RwLock<NetworkSnapshot>>,
}

impl InMemoryStore {
    /// Create a store serving the given snapshot.
    pub fn new(snapshot: NetworkSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Replace the served snapshot, e.g. after the host edits the network.
    pub async fn replace(&self, snapshot: NetworkSnapshot) {
        let mut guard = self.snapshot.write().await;
        *guard = snapshot;
    }
}

impl SnapshotSource for InMemoryStore {
    async fn load_snapshot(&self) -> Result<NetworkSnapshot, StoreError> {
        let guard = self.snapshot.read().await;
        Ok(guard.clone())
    }
}
