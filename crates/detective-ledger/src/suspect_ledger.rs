//! Suspect ledger: a hashed multi-map from suspect name to clue texts.
//!
//! The table has a fixed number of buckets. Each bucket heads a singly
//! linked chain of suspects whose names hash to it; chain links are indices
//! into a shared arena. A name's bucket is the byte sum of the name modulo
//! the bucket count.
//!
//! # Ordering
//!
//! Enumeration walks buckets `0..T` and each chain head to tail. New
//! suspects are pushed at the head of their chain, so within one bucket the
//! most recently created suspect comes first. Each suspect lists its clues
//! most recently associated first.
//!
//! # Invariants
//!
//! - A suspect's citation count is the number of distinct clue texts
//!   associated with it.
//! - Suspect names are unique across the whole table.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::{LedgerError, reserve_one, try_to_owned};

/// Bucket count used by [`SuspectLedger::default`].
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = match NonZeroUsize::new(7) {
    Some(count) => count,
    None => NonZeroUsize::MIN,
};

/// Sum of the name's bytes, wrapping on overflow.
pub fn suspect_hash(name: &str) -> u32 {
    name.bytes()
        .fold(0_u32, |sum, byte| sum.wrapping_add(u32::from(byte)))
}

/// Outcome of [`SuspectLedger::associate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Citation {
    /// The clue was added to the suspect and its count went up by one.
    Recorded,
    /// The suspect already had this clue; nothing changed.
    AlreadyKnown,
}

/// A suspect and the clues pointing at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suspect {
    name: String,
    /// Oldest first; read back reversed.
    clues: Vec<String>,
}

impl Suspect {
    /// The suspect's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many distinct clues implicate this suspect.
    pub const fn citation_count(&self) -> usize {
        self.clues.len()
    }

    /// Associated clues, most recently associated first.
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.clues.iter().rev().map(String::as_str)
    }

    /// Whether this exact clue text is associated.
    pub fn is_cited_by(&self, clue: &str) -> bool {
        self.clues.iter().any(|known| known == clue)
    }
}

#[derive(Debug, Clone)]
struct SuspectNode {
    suspect: Suspect,
    next: Option<usize>,
}

/// Fixed-size hash table of suspects with collision chains.
#[derive(Debug, Clone)]
pub struct SuspectLedger {
    heads: Vec<Option<usize>>,
    nodes: Vec<SuspectNode>,
}

impl Default for SuspectLedger {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}

impl SuspectLedger {
    /// Create an empty ledger with `bucket_count` buckets.
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        Self {
            heads: vec![None; bucket_count.get()],
            nodes: Vec::new(),
        }
    }

    /// Number of buckets.
    pub const fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Number of distinct suspects.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no suspect has been recorded.
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bucket that `name` hashes to.
    pub fn bucket_of(&self, name: &str) -> usize {
        usize::try_from(suspect_hash(name))
            .ok()
            .and_then(|hash| hash.checked_rem(self.bucket_count()))
            .unwrap_or(0)
    }

    /// Look up a suspect by exact name.
    pub fn find(&self, name: &str) -> Option<&Suspect> {
        self.chain(self.bucket_of(name))
            .find(|suspect| suspect.name == name)
    }

    /// Record that `clue` implicates `suspect_name`.
    ///
    /// Creates the suspect at the head of its bucket's chain if needed. A
    /// clue already associated with that suspect is ignored, so repeating a
    /// call never changes the count.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Exhausted`] if a new suspect or clue entry
    /// cannot be allocated.
    pub fn associate(&mut self, suspect_name: &str, clue: &str) -> Result<Citation, LedgerError> {
        let bucket = self.bucket_of(suspect_name);
        let index = match self.position_in_chain(bucket, suspect_name) {
            Some(index) => index,
            None => self.push_suspect(bucket, suspect_name)?,
        };

        let suspect = &mut self
            .nodes
            .get_mut(index)
            .ok_or(LedgerError::InternalError("suspect vanished after lookup"))?
            .suspect;

        if suspect.is_cited_by(clue) {
            debug!(suspect = suspect_name, clue, "clue already tied to suspect");
            return Ok(Citation::AlreadyKnown);
        }

        let owned = try_to_owned(clue, "suspect clue text")?;
        reserve_one(&mut suspect.clues, "suspect clue entry")?;
        suspect.clues.push(owned);
        debug!(
            suspect = suspect_name,
            clue,
            citations = suspect.clues.len(),
            "clue tied to suspect"
        );
        Ok(Citation::Recorded)
    }

    /// Every suspect, bucket by bucket, each chain head to tail.
    pub fn iter(&self) -> Suspects<'_> {
        Suspects {
            ledger: self,
            bucket: 0,
            link: None,
        }
    }

    /// Suspects in one bucket's chain, head first. Empty for out-of-range
    /// buckets.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &Suspect> {
        let mut link = self.heads.get(bucket).copied().flatten();
        std::iter::from_fn(move || {
            let node = self.nodes.get(link?)?;
            link = node.next;
            Some(&node.suspect)
        })
    }

    /// The suspect with the highest citation count.
    ///
    /// Ties go to whichever suspect [`iter`](Self::iter) yields first.
    /// `None` when the ledger is empty.
    pub fn most_implicated(&self) -> Option<&Suspect> {
        self.iter().fold(None::<&Suspect>, |best, suspect| match best {
            Some(leader) if suspect.citation_count() <= leader.citation_count() => Some(leader),
            _ => Some(suspect),
        })
    }

    fn position_in_chain(&self, bucket: usize, name: &str) -> Option<usize> {
        let mut link = self.heads.get(bucket).copied().flatten();
        while let Some(index) = link {
            let node = self.nodes.get(index)?;
            if node.suspect.name == name {
                return Some(index);
            }
            link = node.next;
        }
        None
    }

    fn push_suspect(&mut self, bucket: usize, name: &str) -> Result<usize, LedgerError> {
        let owned = try_to_owned(name, "suspect name")?;
        reserve_one(&mut self.nodes, "suspect")?;

        let head = self
            .heads
            .get_mut(bucket)
            .ok_or(LedgerError::InternalError("bucket index out of range"))?;
        let index = self.nodes.len();
        self.nodes.push(SuspectNode {
            suspect: Suspect {
                name: owned,
                clues: Vec::new(),
            },
            next: *head,
        });
        *head = Some(index);

        debug!(suspect = name, bucket, "suspect opened");
        Ok(index)
    }
}

impl<'a> IntoIterator for &'a SuspectLedger {
    type Item = &'a Suspect;
    type IntoIter = Suspects<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over every suspect in bucket-then-chain order.
#[derive(Debug, Clone)]
pub struct Suspects<'a> {
    ledger: &'a SuspectLedger,
    bucket: usize,
    link: Option<usize>,
}

impl<'a> Iterator for Suspects<'a> {
    type Item = &'a Suspect;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(index) = self.link {
                let node = self.ledger.nodes.get(index)?;
                self.link = node.next;
                return Some(&node.suspect);
            }
            let head = self.ledger.heads.get(self.bucket)?;
            self.bucket = self.bucket.saturating_add(1);
            self.link = *head;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BLACK: &str = "Sr. Black";
    const WHITE: &str = "Sra. White";
    const MUSTARD: &str = "Coronel Mostarda";
    const SCARLET: &str = "Srta. Scarlet";

    fn names(ledger: &SuspectLedger) -> Vec<&str> {
        ledger.iter().map(Suspect::name).collect()
    }

    #[test]
    fn hash_is_byte_sum() {
        assert_eq!(suspect_hash(""), 0);
        assert_eq!(suspect_hash("a"), 97);
        assert_eq!(suspect_hash(BLACK), 752);
        assert_eq!(suspect_hash(WHITE), 885);
    }

    #[test]
    fn default_buckets_place_known_suspects() {
        let ledger = SuspectLedger::default();
        assert_eq!(ledger.bucket_count(), 7);
        assert_eq!(ledger.bucket_of(BLACK), 3);
        assert_eq!(ledger.bucket_of(WHITE), 3);
        assert_eq!(ledger.bucket_of(SCARLET), 2);
        assert_eq!(ledger.bucket_of(MUSTARD), 6);
    }

    #[test]
    fn empty_ledger_has_no_leader() {
        let ledger = SuspectLedger::default();
        assert!(ledger.is_empty());
        assert!(ledger.most_implicated().is_none());
        assert!(ledger.find(BLACK).is_none());
        assert_eq!(ledger.iter().count(), 0);
    }

    #[test]
    fn associate_creates_suspect_with_one_citation() {
        let mut ledger = SuspectLedger::default();
        assert_eq!(ledger.associate(WHITE, "Knife.").unwrap(), Citation::Recorded);
        let white = ledger.find(WHITE).unwrap();
        assert_eq!(white.citation_count(), 1);
        assert_eq!(white.clues().collect::<Vec<_>>(), vec!["Knife."]);
    }

    #[test]
    fn associate_is_idempotent() {
        let mut ledger = SuspectLedger::default();
        ledger.associate(BLACK, "Torn pages.").unwrap();
        assert_eq!(
            ledger.associate(BLACK, "Torn pages.").unwrap(),
            Citation::AlreadyKnown
        );
        let black = ledger.find(BLACK).unwrap();
        assert_eq!(black.citation_count(), 1);
        assert_eq!(black.clues().count(), 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn count_tracks_distinct_clues_newest_first() {
        let mut ledger = SuspectLedger::default();
        for clue in ["one", "two", "one", "three", "two"] {
            ledger.associate(MUSTARD, clue).unwrap();
        }
        let mustard = ledger.find(MUSTARD).unwrap();
        assert_eq!(mustard.citation_count(), 3);
        assert_eq!(mustard.clues().collect::<Vec<_>>(), vec!["three", "two", "one"]);
    }

    #[test]
    fn colliding_names_share_a_chain_newest_first() {
        let mut ledger = SuspectLedger::default();
        ledger.associate(BLACK, "a").unwrap();
        ledger.associate(WHITE, "b").unwrap();

        let chain: Vec<&str> = ledger.chain(3).map(Suspect::name).collect();
        assert_eq!(chain, vec![WHITE, BLACK]);
        assert_eq!(ledger.find(BLACK).unwrap().clues().next(), Some("a"));
        assert_eq!(ledger.find(WHITE).unwrap().clues().next(), Some("b"));
        assert_eq!(ledger.chain(99).count(), 0);
    }

    #[test]
    fn enumeration_is_bucket_then_chain_order() {
        let mut ledger = SuspectLedger::default();
        ledger.associate(BLACK, "Torn pages.").unwrap();
        ledger.associate(WHITE, "Knife.").unwrap();
        ledger.associate(MUSTARD, "Footprints.").unwrap();
        ledger.associate(SCARLET, "Warm engine.").unwrap();

        assert_eq!(names(&ledger), vec![SCARLET, WHITE, BLACK, MUSTARD]);
    }

    #[test]
    fn ties_go_to_first_enumerated() {
        let mut ledger = SuspectLedger::default();
        ledger.associate(MUSTARD, "Footprints.").unwrap();
        ledger.associate(BLACK, "Torn pages.").unwrap();
        // Black (bucket 3) precedes Mustard (bucket 6) despite arriving later.
        assert_eq!(ledger.most_implicated().unwrap().name(), BLACK);

        ledger.associate(WHITE, "Knife.").unwrap();
        // White now heads bucket 3.
        assert_eq!(ledger.most_implicated().unwrap().name(), WHITE);
    }

    #[test]
    fn strictly_higher_count_wins() {
        let mut ledger = SuspectLedger::default();
        ledger.associate(SCARLET, "Warm engine.").unwrap();
        ledger.associate(MUSTARD, "Footprints.").unwrap();
        ledger.associate(MUSTARD, "Muddy gloves.").unwrap();

        let leader = ledger.most_implicated().unwrap();
        assert_eq!(leader.name(), MUSTARD);
        assert!(ledger.iter().all(|s| s.citation_count() <= leader.citation_count()));
    }

    #[test]
    fn single_bucket_table_is_one_chain() {
        let mut ledger = SuspectLedger::new(NonZeroUsize::MIN);
        for name in ["a", "b", "c"] {
            ledger.associate(name, "clue").unwrap();
        }
        assert_eq!(names(&ledger), vec!["c", "b", "a"]);
        assert_eq!(ledger.most_implicated().unwrap().name(), "c");
    }

    #[test]
    fn same_clue_may_implicate_several_suspects() {
        let mut ledger = SuspectLedger::default();
        ledger.associate(BLACK, "Shared clue.").unwrap();
        ledger.associate(SCARLET, "Shared clue.").unwrap();
        assert_eq!(ledger.find(BLACK).unwrap().citation_count(), 1);
        assert_eq!(ledger.find(SCARLET).unwrap().citation_count(), 1);
    }
}
