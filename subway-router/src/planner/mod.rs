//! Route planning: graph construction and shortest-path search.
//!
//! A query turns the current network snapshot into a weighted, undirected
//! graph (one node per station, one edge per segment), then runs Dijkstra
//! over it. Both steps are pure functions of the snapshot; nothing is cached
//! between queries, so concurrent queries need no coordination.

mod graph;
mod search;


pub use graph::{GraphError, RouteGraph};
pub use search::{RoutePath, SearchError, shortest_path};
