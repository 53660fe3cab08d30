//! Line and segment entities.

use serde::{Deserialize, Serialize};

use super::{LineId, StationId};

/// A direct connection between two adjacent stations on one line.
///
/// Distances are positive integers in the network's distance unit. A zero
/// distance is invalid data; it is rejected by the graph builder rather than
/// here, because segments arrive from the external store unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Up-direction endpoint.
    pub up: StationId,

    /// Down-direction endpoint.
    pub down: StationId,

    /// Distance between the endpoints. Traversal direction does not matter.
    pub distance: u64,
}

impl Segment {
    /// Create a new segment.
    pub fn new(up: StationId, down: StationId, distance: u64) -> Self {
        Self { up, down, distance }
    }
}

/// A subway line: identity, display color, surcharge, and the ordered
/// segments that make up its track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Identifier assigned by the data store.
    pub id: LineId,

    /// Human-readable name for display.
    pub name: String,

    /// Display color for the presentation layer. Plays no role in routing.
    pub color: String,

    /// Extra amount added to a route's fare when this line is traversed.
    /// When several surcharged lines are used, only the highest applies.
    pub surcharge: u64,

    /// Segments in track order.
    pub segments: Vec<Segment>,
}

impl Line {
    /// Create a new line.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        surcharge: u64,
        segments: Vec<Segment>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            surcharge,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(value: u64) -> StationId {
        StationId::new(value)
    }

    #[test]
    fn line_holds_segments_in_order() {
        let line = Line::new(
            LineId::new(1),
            "Circle",
            "green",
            0,
            vec![
                Segment::new(sid(1), sid(2), 5),
                Segment::new(sid(2), sid(3), 7),
            ],
        );

        assert_eq!(line.segments.len(), 2);
        assert_eq!(line.segments[0].up, sid(1));
        assert_eq!(line.segments[1].down, sid(3));
    }

    #[test]
    fn segment_is_plain_data() {
        let seg = Segment::new(sid(10), sid(11), 3);
        assert_eq!(seg.distance, 3);
        assert_eq!(seg, Segment::new(sid(10), sid(11), 3));
    }
}
