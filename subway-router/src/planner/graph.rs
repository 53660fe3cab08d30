//! Weighted station graph built from a network snapshot.
//!
//! The graph is an arena of station nodes addressed by dense indices, with
//! an adjacency list of undirected edges. It is built fresh for every query
//! and discarded afterwards; nothing here outlives a single request.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{LineId, StationId};
use crate::store::NetworkSnapshot;

/// Data-integrity failures detected while building the graph.
///
/// These indicate bad data from the external store, not a routing failure.
/// The query cannot proceed, and retrying without fixing the data would
/// produce the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Segment with a zero distance
    #[error("segment {up} -> {down} on line {line} has non-positive distance")]
    NonPositiveDistance {
        line: LineId,
        up: StationId,
        down: StationId,
    },

    /// Segment endpoint missing from the snapshot's station set
    #[error("segment on line {line} references unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// Segment connecting a station to itself
    #[error("segment on line {line} connects station {station} to itself")]
    SelfLoop { line: LineId, station: StationId },

    /// Same station pair appearing in more than one segment of one line
    #[error("duplicate segment {up} -> {down} on line {line}")]
    DuplicateSegment {
        line: LineId,
        up: StationId,
        down: StationId,
    },
}

/// An edge out of a node: the neighbor plus the traversal payload.
///
/// The owning line's surcharge is denormalized onto the edge so the search
/// never has to look back into the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    /// Dense index of the neighboring node.
    pub target: usize,

    /// Segment distance; the edge weight.
    pub distance: u64,

    /// Line the segment belongs to.
    pub line: LineId,

    /// That line's surcharge.
    pub surcharge: u64,
}

/// Weighted, undirected station graph for one query.
///
/// One node per snapshot station, one edge per segment. Station ids are
/// mapped to dense node indices; indices are meaningless across graphs.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Station id of each node, indexed by node index.
    nodes: Vec<StationId>,

    /// Station id to node index.
    index: HashMap<StationId, usize>,

    /// Outgoing edges of each node. Every segment appears here twice, once
    /// per direction.
    adjacency: Vec<Vec<Edge>>,
}

impl RouteGraph {
    /// Build a graph from a snapshot.
    ///
    /// Every snapshot station becomes a node, connected or not; every
    /// segment becomes one undirected edge. Fails with [`GraphError`] when
    /// the snapshot violates its integrity contract.
    pub fn build(snapshot: &NetworkSnapshot) -> Result<Self, GraphError> {
        let mut nodes = Vec::with_capacity(snapshot.stations.len());
        let mut index = HashMap::with_capacity(snapshot.stations.len());

        for station in &snapshot.stations {
            index.entry(station.id).or_insert_with(|| {
                nodes.push(station.id);
                nodes.len() - 1
            });
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut segment_count = 0usize;

        for line in &snapshot.lines {
            // Station pairs already seen on this line, direction-normalized.
            let mut seen: HashSet<(StationId, StationId)> = HashSet::new();

            for segment in &line.segments {
                if segment.distance == 0 {
                    return Err(GraphError::NonPositiveDistance {
                        line: line.id,
                        up: segment.up,
                        down: segment.down,
                    });
                }
                if segment.up == segment.down {
                    return Err(GraphError::SelfLoop {
                        line: line.id,
                        station: segment.up,
                    });
                }

                let up = *index
                    .get(&segment.up)
                    .ok_or(GraphError::UnknownStation {
                        line: line.id,
                        station: segment.up,
                    })?;
                let down = *index
                    .get(&segment.down)
                    .ok_or(GraphError::UnknownStation {
                        line: line.id,
                        station: segment.down,
                    })?;

                let pair = if segment.up <= segment.down {
                    (segment.up, segment.down)
                } else {
                    (segment.down, segment.up)
                };
                if !seen.insert(pair) {
                    return Err(GraphError::DuplicateSegment {
                        line: line.id,
                        up: segment.up,
                        down: segment.down,
                    });
                }

                adjacency[up].push(Edge {
                    target: down,
                    distance: segment.distance,
                    line: line.id,
                    surcharge: line.surcharge,
                });
                adjacency[down].push(Edge {
                    target: up,
                    distance: segment.distance,
                    line: line.id,
                    surcharge: line.surcharge,
                });
                segment_count += 1;
            }
        }

        debug!(
            stations = nodes.len(),
            segments = segment_count,
            lines = snapshot.lines.len(),
            "route graph built"
        );

        Ok(Self {
            nodes,
            index,
            adjacency,
        })
    }

    /// Returns the node index of a station, if present.
    pub(crate) fn index_of(&self, id: StationId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns the station id at a node index.
    pub(crate) fn station_at(&self, node: usize) -> StationId {
        self.nodes[node]
    }

    /// Returns the edges out of a node.
    pub(crate) fn neighbors(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Returns true if the station is a node of this graph.
    pub fn contains(&self, id: StationId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of station nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}
