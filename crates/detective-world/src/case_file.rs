//! The case file: which rooms hold evidence, and against whom.
//!
//! Each entry ties a room name to one clue text and one suspect name. The
//! table is assembled once and only consulted afterwards; the exploration
//! driver asks it about every room it enters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::WorldError;
use crate::mansion::MansionMap;

/// One row of the case file as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    /// Room that yields the clue.
    pub room: String,
    /// Clue text.
    pub clue: String,
    /// Suspect the clue points to.
    pub suspect: String,
}

/// Evidence found in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    /// Clue text.
    pub clue: String,
    /// Suspect the clue points to.
    pub suspect: String,
}

/// Immutable room-name to evidence table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFile {
    entries: BTreeMap<String, Evidence>,
}

impl CaseFile {
    /// Assemble a case file from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEvidence`] if two rows name the same
    /// room.
    pub fn from_entries(
        entries: impl IntoIterator<Item = EvidenceEntry>,
    ) -> Result<Self, WorldError> {
        let mut table = BTreeMap::new();
        for entry in entries {
            if table.contains_key(&entry.room) {
                return Err(WorldError::DuplicateEvidence(entry.room));
            }
            table.insert(
                entry.room,
                Evidence {
                    clue: entry.clue,
                    suspect: entry.suspect,
                },
            );
        }
        Ok(Self { entries: table })
    }

    /// Evidence held by the room with this exact name.
    pub fn evidence_for(&self, room_name: &str) -> Option<&Evidence> {
        self.entries.get(room_name)
    }

    /// Number of rooms with evidence.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no room holds evidence.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows whose room does not exist in `map`, in name order.
    ///
    /// Such rows never fire. Each one is logged at `warn`.
    pub fn unplaced_rooms<'a>(&'a self, map: &'a MansionMap) -> Vec<&'a str> {
        let missing: Vec<&str> = self
            .entries
            .keys()
            .map(String::as_str)
            .filter(|name| map.find_by_name(name).is_none())
            .collect();
        for room in &missing {
            warn!(room = %room, "case file names a room that is not in the mansion");
        }
        missing
    }
}
