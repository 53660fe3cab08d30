//! Shortest-route search over the station graph.
//!
//! Classic binary-heap Dijkstra: maintain a frontier of reachable nodes
//! ordered by tentative distance, repeatedly settle the closest one and relax
//! its edges, stop once the target is settled or the frontier runs dry.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use tracing::{debug, trace};

use crate::domain::{LineId, StationId};

use super::graph::{Edge, RouteGraph};

/// Error from route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Station not present in the graph
    #[error("station {0} not found in the network")]
    StationNotFound(StationId),

    /// Source and target are the same station
    #[error("source and target are the same station: {0}")]
    SameStation(StationId),

    /// No edge sequence connects the two stations
    #[error("no path between stations {source} and {target}")]
    NoPath {
        source: StationId,
        target: StationId,
    },
}

/// A minimum-distance path between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    /// Stations in traversal order, source and target inclusive. A path
    /// never revisits a station.
    pub stations: Vec<StationId>,

    /// Sum of the traversed segment distances.
    pub total_distance: u64,

    /// Lines whose segments were traversed.
    pub lines: BTreeSet<LineId>,

    /// Highest surcharge among the traversed lines.
    pub max_surcharge: u64,
}

/// Frontier entry: a reachable node and its tentative distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    distance: u64,
    node: usize,
}

// Reversed ordering so the max-heap `BinaryHeap` pops the closest node.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-total-distance path between two stations.
///
/// When several minimum-distance paths exist, any one of them may be
/// returned; the fare depends only on distance, lines, and age, so the
/// choice is not observable in the result.
pub fn shortest_path(
    graph: &RouteGraph,
    source: StationId,
    target: StationId,
) -> Result<RoutePath, SearchError> {
    if source == target {
        return Err(SearchError::SameStation(source));
    }
    let source_ix = graph
        .index_of(source)
        .ok_or(SearchError::StationNotFound(source))?;
    let target_ix = graph
        .index_of(target)
        .ok_or(SearchError::StationNotFound(target))?;

    let mut dist = vec![u64::MAX; graph.node_count()];
    let mut prev: Vec<Option<(usize, Edge)>> = vec![None; graph.node_count()];
    let mut frontier = BinaryHeap::new();

    dist[source_ix] = 0;
    frontier.push(FrontierEntry {
        distance: 0,
        node: source_ix,
    });

    while let Some(FrontierEntry { distance, node }) = frontier.pop() {
        // Stale entry: the node was already settled at a shorter distance.
        if distance > dist[node] {
            continue;
        }
        if node == target_ix {
            break;
        }

        for edge in graph.neighbors(node) {
            let tentative = distance + edge.distance;
            if tentative < dist[edge.target] {
                dist[edge.target] = tentative;
                prev[edge.target] = Some((node, *edge));
                frontier.push(FrontierEntry {
                    distance: tentative,
                    node: edge.target,
                });
                trace!(
                    station = %graph.station_at(edge.target),
                    distance = tentative,
                    "relaxed"
                );
            }
        }
    }

    if dist[target_ix] == u64::MAX {
        return Err(SearchError::NoPath { source, target });
    }

    // Walk the predecessor chain back from the target.
    let mut stations = vec![graph.station_at(target_ix)];
    let mut lines = BTreeSet::new();
    let mut max_surcharge = 0u64;
    let mut node = target_ix;
    while let Some((parent, edge)) = prev[node] {
        lines.insert(edge.line);
        max_surcharge = max_surcharge.max(edge.surcharge);
        stations.push(graph.station_at(parent));
        node = parent;
    }
    stations.reverse();

    debug!(
        source = %source,
        target = %target,
        distance = dist[target_ix],
        stops = stations.len(),
        "shortest path found"
    );

    Ok(RoutePath {
        stations,
        total_distance: dist[target_ix],
        lines,
        max_surcharge,
    })
}
