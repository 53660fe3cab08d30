//! Identifier newtypes for stations and lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a station.
///
/// Identifiers are assigned by the external data store; the engine only
/// compares them and uses them as graph keys, so the numeric value is opaque.
///
/// # Examples
///
/// ```
/// use subway_router::domain::StationId;
///
/// let a = StationId::new(1);
/// let b = StationId::new(1);
/// assert_eq!(a, b);
/// assert_eq!(a.value(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Create a station id from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Create a line id from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        assert_eq!(StationId::new(7), StationId::new(7));
        assert_ne!(StationId::new(7), StationId::new(8));
        assert_eq!(LineId::new(2), LineId::new(2));
        assert_ne!(LineId::new(2), LineId::new(3));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", StationId::new(42)), "42");
        assert_eq!(format!("{:?}", StationId::new(42)), "StationId(42)");
        assert_eq!(format!("{}", LineId::new(5)), "5");
        assert_eq!(format!("{:?}", LineId::new(5)), "LineId(5)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::new(1));
        assert!(set.contains(&StationId::new(1)));
        assert!(!set.contains(&StationId::new(2)));
    }

    #[test]
    fn serde_transparent() {
        let id = StationId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let back: StationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
