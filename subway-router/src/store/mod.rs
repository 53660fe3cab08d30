//! Network snapshot source.
//!
//! The engine never owns the network. An external data layer (out of scope
//! here) manages stations and lines and hands the engine a read-only,
//! point-in-time [`NetworkSnapshot`] per query. This module defines that
//! snapshot, the [`SnapshotSource`] abstraction over the data layer, and an
//! in-memory implementation for tests and hosts without a real store.

mod memory;

pub use memory::InMemoryStore;

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, Segment, Station, StationId};

/// Errors from the snapshot store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Backing store could not be reached
    #[error("snapshot store unavailable: {message}")]
    Unavailable { message: String },

    /// Backing store returned data the source could not decode
    #[error("malformed snapshot data: {message}")]
    Malformed { message: String },
}

/// A read-only, point-in-time view of the whole network.
///
/// A snapshot is consistent by contract: every segment of every line refers
/// to stations present in `stations`. The graph builder re-checks this and
/// rejects snapshots that break the contract, since the data ultimately comes
/// from outside the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// All stations in the network.
    pub stations: Vec<Station>,

    /// All lines, each with its segments in track order.
    pub lines: Vec<Line>,
}

impl NetworkSnapshot {
    /// Create a snapshot from pre-assembled stations and lines.
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        Self { stations, lines }
    }

    /// Start building a snapshot with the fluent [`SnapshotBuilder`].
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Returns true if the snapshot contains no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Source of network snapshots.
///
/// Abstracts the excluded data layer so the engine can be tested without a
/// running store. Loading may be a network or database call, so it is async;
/// retries, if any, belong to the implementation, never to the engine.
#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    /// Load the current snapshot.
    ///
    /// Must return a consistent view: all segments of a line belong to
    /// stations present in the snapshot.
    async fn load_snapshot(&self) -> Result<NetworkSnapshot, StoreError>;
}

/// Fluent builder for snapshots, mainly for tests.
///
/// `line` starts a new line; subsequent `segment` calls append to it.
///
/// # Examples
///
/// ```
/// use subway_router::store::NetworkSnapshot;
///
/// let snapshot = NetworkSnapshot::builder()
///     .station(1, "Riverside")
///     .station(2, "Old Town")
///     .line(1, "Circle", "green", 0)
///     .segment(1, 2, 5)
///     .build();
///
/// assert_eq!(snapshot.stations.len(), 2);
/// assert_eq!(snapshot.lines[0].segments.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    stations: Vec<Station>,
    lines: Vec<Line>,
}

impl SnapshotBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, id: u64, name: &str) -> Self {
        self.stations.push(Station::new(StationId::new(id), name));
        self
    }

    /// Start a new line. Segments added afterwards belong to this line.
    pub fn line(mut self, id: u64, name: &str, color: &str, surcharge: u64) -> Self {
        self.lines
            .push(Line::new(LineId::new(id), name, color, surcharge, Vec::new()));
        self
    }

    /// Append a segment to the most recently started line.
    ///
    /// # Panics
    ///
    /// Panics if no line has been started. This is a test-construction aid,
    /// not a validation surface.
    pub fn segment(mut self, up: u64, down: u64, distance: u64) -> Self {
        let line = self
            .lines
            .last_mut()
            .expect("segment() requires a preceding line()");
        line.segments.push(Segment::new(
            StationId::new(up),
            StationId::new(down),
            distance,
        ));
        self
    }

    /// Build the snapshot.
    pub fn build(self) -> NetworkSnapshot {
        NetworkSnapshot::new(self.stations, self.lines)
    }
}
