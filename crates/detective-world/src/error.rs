//! Error types for the `detective-world` crate.
//!
//! Every fallible operation in this crate returns
//! `Result<T, WorldError>`.

use std::collections::TryReserveError;

use crate::mansion::RoomId;

/// Errors that can occur while building the mansion or the case file.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A room id does not belong to the builder it was used with.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A layout refers to a room name that was never declared.
    #[error("unknown room name: {0:?}")]
    UnknownRoomName(String),

    /// Two rooms in a layout share the same name.
    #[error("duplicate room name: {0:?}")]
    DuplicateRoomName(String),

    /// A room was linked as its own child.
    #[error("room {0} cannot be its own child")]
    SelfLink(RoomId),

    /// The child is already attached under another room.
    #[error("room {child} already has parent {parent}")]
    AlreadyAttached {
        /// The room being attached.
        child: RoomId,
        /// Its existing parent.
        parent: RoomId,
    },

    /// The link would make a room its own ancestor.
    #[error("linking {child} under {parent} would create a cycle")]
    Cycle {
        /// The prospective parent.
        parent: RoomId,
        /// The prospective child.
        child: RoomId,
    },

    /// The root handed to the builder already hangs under another room.
    #[error("root room {0} has a parent")]
    RootHasParent(RoomId),

    /// A room exists in the builder but cannot be reached from the root.
    #[error("room {0:?} is not reachable from the root")]
    Unreachable(String),

    /// Two case file entries target the same room.
    #[error("duplicate evidence for room {0:?}")]
    DuplicateEvidence(String),

    /// Memory for a new record could not be reserved.
    #[error("out of memory while storing {what}")]
    Exhausted {
        /// What was being stored.
        what: &'static str,
        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}
