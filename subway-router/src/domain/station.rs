//! Station entity.

use serde::{Deserialize, Serialize};

use super::StationId;

/// A subway station.
///
/// Stations are immutable within a query; the engine never edits them, it
/// only reads them out of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Identifier assigned by the data store.
    pub id: StationId,

    /// Human-readable name for display.
    pub name: String,
}

impl Station {
    /// Create a new station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
