//! The detective's notebook.
//!
//! Bundles the two structures a session accumulates: the [`ClueIndex`] of
//! every clue found and the [`SuspectLedger`] tying clues to suspects. One
//! notebook is owned by one driver for the length of a session.

use std::num::NonZeroUsize;

use detective_ledger::{Citation, ClueIndex, Insertion, LedgerError, SuspectLedger};
use detective_world::Evidence;
use tracing::info;

/// What recording one piece of evidence changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery {
    /// Effect on the clue index.
    pub clue: Insertion,
    /// Effect on the suspect ledger.
    pub citation: Citation,
}

impl Discovery {
    /// Whether anything was learned that was not known before.
    pub const fn is_new(self) -> bool {
        matches!(self.clue, Insertion::Added) || matches!(self.citation, Citation::Recorded)
    }
}

/// Clue index and suspect ledger for one session.
#[derive(Debug, Clone, Default)]
pub struct Notebook {
    clues: ClueIndex,
    suspects: SuspectLedger,
}

impl Notebook {
    /// Empty notebook whose suspect ledger has `bucket_count` buckets.
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        Self {
            clues: ClueIndex::new(),
            suspects: SuspectLedger::new(bucket_count),
        }
    }

    /// File one piece of evidence: index the clue and cite the suspect.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if either structure cannot grow.
    pub fn record(&mut self, evidence: &Evidence) -> Result<Discovery, LedgerError> {
        let clue = self.clues.insert(&evidence.clue)?;
        let citation = self.suspects.associate(&evidence.suspect, &evidence.clue)?;
        let discovery = Discovery { clue, citation };
        if discovery.is_new() {
            info!(
                clue = %evidence.clue,
                suspect = %evidence.suspect,
                clues = self.clues.len(),
                suspects = self.suspects.len(),
                "evidence recorded"
            );
        }
        Ok(discovery)
    }

    /// Every clue found so far.
    pub const fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// Every suspect cited so far.
    pub const fn suspects(&self) -> &SuspectLedger {
        &self.suspects
    }
}
