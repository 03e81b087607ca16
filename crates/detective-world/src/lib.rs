//! Mansion map, room layout, and case file for Detective Quest.
//!
//! This crate models the static side of a session: the mansion as a binary
//! tree of rooms and the table of evidence hidden in those rooms. Both are
//! built once at startup and never change afterwards.
//!
//! # Modules
//!
//! - [`mansion`] -- Room arena, [`MansionBuilder`] for construction, and the
//!   read-only [`MansionMap`].
//! - [`layout`] -- [`MansionLayout`], a name-based description of a mansion
//!   that can be loaded from configuration.
//! - [`case_file`] -- [`CaseFile`], the room to (clue, suspect) table.
//! - [`starting_mansion`] -- Default seven-room mansion and its case file.
//! - [`error`] -- Error types for map and case file construction.
//!
//! [`MansionBuilder`]: mansion::MansionBuilder
//! [`MansionMap`]: mansion::MansionMap
//! [`MansionLayout`]: layout::MansionLayout
//! [`CaseFile`]: case_file::CaseFile

pub mod case_file;
pub mod error;
pub mod layout;
pub mod mansion;
pub mod starting_mansion;

// Re-export primary types at crate root.
pub use case_file::{CaseFile, Evidence, EvidenceEntry};
pub use error::WorldError;
pub use layout::{MansionLayout, RoomLayout};
pub use mansion::{Direction, MansionBuilder, MansionMap, Room, RoomId};
pub use starting_mansion::{
    StartingRoomIds, create_starting_mansion, starting_case_file, starting_evidence,
};
