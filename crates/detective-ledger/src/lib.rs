//! Clue index and suspect ledger for Detective Quest.
//!
//! Everything the detective learns during a session is recorded here. The
//! two structures grow as rooms are explored and are never pruned.
//!
//! # Architecture
//!
//! - [`clue_index`] -- The [`ClueIndex`]: an unbalanced binary search tree
//!   of clue texts, deduplicated, enumerated in lexicographic order.
//! - [`suspect_ledger`] -- The [`SuspectLedger`]: a fixed-size hash table
//!   with collision chains, mapping each suspect to the distinct clues that
//!   implicate them.
//!
//! Both keep their nodes in arenas and link them by index. Arena growth
//! reserves memory fallibly, so running out of memory is reported as
//! [`LedgerError::Exhausted`] instead of aborting.
//!
//! # Usage
//!
//! ```
//! use detective_ledger::{ClueIndex, SuspectLedger};
//!
//! let mut clues = ClueIndex::new();
//! let mut suspects = SuspectLedger::default();
//!
//! clues.insert("Muddy boots.").ok();
//! suspects.associate("Gardener", "Muddy boots.").ok();
//!
//! assert_eq!(clues.iter().collect::<Vec<_>>(), vec!["Muddy boots."]);
//! assert_eq!(
//!     suspects.most_implicated().map(|s| s.name()),
//!     Some("Gardener")
//! );
//! ```

pub mod clue_index;
pub mod suspect_ledger;

// Re-export primary types at crate root.
pub use clue_index::{ClueIndex, InOrder, Insertion};
pub use suspect_ledger::{
    Citation, DEFAULT_BUCKET_COUNT, Suspect, SuspectLedger, Suspects, suspect_hash,
};

use std::collections::TryReserveError;

/// Errors that can occur when recording clues or suspects.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Memory for a new node could not be reserved.
    #[error("out of memory while storing {what}")]
    Exhausted {
        /// What was being stored.
        what: &'static str,
        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },

    /// An internal error that should not occur in normal operation.
    #[error("internal ledger error: {0}")]
    InternalError(&'static str),
}

/// Reserve room for one more element, mapping failure to [`LedgerError`].
pub(crate) fn reserve_one<T>(items: &mut Vec<T>, what: &'static str) -> Result<(), LedgerError> {
    items
        .try_reserve(1)
        .map_err(|source| LedgerError::Exhausted { what, source })
}

/// Copy `text` into a freshly reserved `String`.
pub(crate) fn try_to_owned(text: &str, what: &'static str) -> Result<String, LedgerError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|source| LedgerError::Exhausted { what, source })?;
    owned.push_str(text);
    Ok(owned)
}
