//! Route service: the engine's front door.
//!
//! Orchestrates one query end to end: validate the endpoints, load the
//! current snapshot, build the graph, run the search, price the path. Every
//! call starts from a fresh snapshot and a fresh graph; nothing is cached,
//! so a call always reflects the network as the store sees it at call time.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Station, StationId};
use crate::fare::FarePolicy;
use crate::planner::{GraphError, RouteGraph, SearchError, shortest_path};
use crate::store::{SnapshotSource, StoreError};

/// A computed route with its fare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    /// Stations in traversal order, source and target inclusive.
    pub stations: Vec<Station>,

    /// Total distance of the route.
    pub total_distance: u64,

    /// Fare for the route at the requested age.
    pub fare: u64,
}

/// Errors from a route query.
///
/// Everything here is a typed result, never a panic: the presentation layer
/// owns how each kind is shown to a user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteError {
    /// Source or target does not exist in the current snapshot
    #[error("station {0} not found in the network")]
    StationNotFound(StationId),

    /// Source and target are the same station
    #[error("source and target are the same station: {0}")]
    SameStation(StationId),

    /// The stations exist but no segments connect them
    #[error("no path between stations {source} and {target}")]
    NoPath {
        source: StationId,
        target: StationId,
    },

    /// The store supplied a snapshot the engine cannot route over
    #[error("network data is inconsistent: {0}")]
    DataIntegrity(#[from] GraphError),

    /// The store itself failed before the engine could run
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<SearchError> for RouteError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::StationNotFound(id) => RouteError::StationNotFound(id),
            SearchError::SameStation(id) => RouteError::SameStation(id),
            SearchError::NoPath { source, target } => RouteError::NoPath { source, target },
        }
    }
}

/// The route-and-fare query service.
///
/// Stateless across calls: concurrent queries share nothing but the snapshot
/// source, which is only ever read.
#[derive(Debug, Clone)]
pub struct RouteService<S> {
    store: S,
    policy: FarePolicy,
}

impl<S: SnapshotSource> RouteService<S> {
    /// Create a service over a snapshot source with the given tariff.
    pub fn new(store: S, policy: FarePolicy) -> Self {
        Self { store, policy }
    }

    /// Find the shortest route between two stations and price it.
    ///
    /// Fails fast on `source == target` without touching the store; all
    /// other failures are classified per [`RouteError`].
    pub async fn find_route(
        &self,
        source: StationId,
        target: StationId,
        age: u8,
    ) -> Result<RouteSummary, RouteError> {
        if source == target {
            return Err(RouteError::SameStation(source));
        }

        let snapshot = self.store.load_snapshot().await?;
        let graph = RouteGraph::build(&snapshot)?;
        let path = shortest_path(&graph, source, target)?;
        let fare = self
            .policy
            .compute(path.total_distance, path.max_surcharge, age);

        let stations = path
            .stations
            .iter()
            .map(|id| {
                snapshot
                    .station(*id)
                    .cloned()
                    // Graph nodes are drawn from the snapshot's station set,
                    // so the lookup cannot miss.
                    .expect("path station missing from its own snapshot")
            })
            .collect();

        debug!(
            %source,
            %target,
            age,
            distance = path.total_distance,
            fare,
            "route query answered"
        );

        Ok(RouteSummary {
            stations,
            total_distance: path.total_distance,
            fare,
        })
    }
}
