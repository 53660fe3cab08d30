//! Domain types for the subway network.
//!
//! This module contains the entities the engine reads out of a network
//! snapshot: stations, lines, and the segments that connect adjacent
//! stations. These are plain data as supplied by the external store;
//! integrity rules (positive distances, known endpoints) are enforced by the
//! graph builder when a snapshot is turned into a routable graph.

mod ids;
mod line;
mod station;

pub use ids::{LineId, StationId};
pub use line::{Line, Segment};
pub use station::Station;
