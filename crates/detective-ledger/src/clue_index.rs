//! Clue index: a binary search tree of clue texts.
//!
//! Nodes live in an arena and point at their children by index. Texts are
//! ordered by plain byte-wise string comparison. The tree is never
//! rebalanced, so inserting already sorted texts degrades it into a chain.
//!
//! # Invariants
//!
//! - No two nodes carry equal text; inserting a known text is a no-op.
//! - Nodes are never removed or relinked once attached.

use std::cmp::Ordering;

use tracing::debug;

use crate::{LedgerError, reserve_one, try_to_owned};

/// Outcome of [`ClueIndex::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new node now holds the text.
    Added,
    /// The text was already indexed; nothing changed.
    AlreadyPresent,
}

#[derive(Debug, Clone)]
struct ClueNode {
    text: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Deduplicating, ordered collection of clue texts.
#[derive(Debug, Clone, Default)]
pub struct ClueIndex {
    nodes: Vec<ClueNode>,
    root: Option<usize>,
}

impl ClueIndex {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Insert `text` unless an equal text is already indexed.
    ///
    /// Descends from the root, going left for smaller texts and right for
    /// greater ones, and attaches a new leaf where the descent falls off the
    /// tree.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Exhausted`] if the new node cannot be
    /// allocated. The index is left unchanged in that case.
    pub fn insert(&mut self, text: &str) -> Result<Insertion, LedgerError> {
        let mut parent: Option<(usize, Ordering)> = None;
        let mut link = self.root;

        while let Some(index) = link {
            let Some(node) = self.nodes.get(index) else {
                break;
            };
            let side = text.cmp(node.text.as_str());
            link = match side {
                Ordering::Equal => {
                    debug!(clue = text, "clue already indexed");
                    return Ok(Insertion::AlreadyPresent);
                }
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            parent = Some((index, side));
        }

        let owned = try_to_owned(text, "clue text")?;
        reserve_one(&mut self.nodes, "clue node")?;
        let index = self.nodes.len();
        self.nodes.push(ClueNode {
            text: owned,
            left: None,
            right: None,
        });

        match parent {
            None => self.root = Some(index),
            Some((parent, side)) => {
                if let Some(node) = self.nodes.get_mut(parent) {
                    if side == Ordering::Less {
                        node.left = Some(index);
                    } else {
                        node.right = Some(index);
                    }
                }
            }
        }

        debug!(clue = text, total = self.nodes.len(), "clue indexed");
        Ok(Insertion::Added)
    }

    /// Whether an equal text is indexed.
    pub fn contains(&self, text: &str) -> bool {
        let mut link = self.root;
        while let Some(node) = link.and_then(|index| self.nodes.get(index)) {
            link = match text.cmp(node.text.as_str()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Texts in ascending order.
    ///
    /// The iterator is lazy and borrows the index; calling `iter` again
    /// starts over from the smallest text.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Number of distinct texts.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been indexed yet.
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal of a [`ClueIndex`].
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    nodes: &'a [ClueNode],
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.cursor {
            self.stack.push(index);
            self.cursor = self.nodes.get(index).and_then(|node| node.left);
        }
        let index = self.stack.pop()?;
        let node = self.nodes.get(index)?;
        self.cursor = node.right;
        Some(node.text.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn index_of(texts: &[&str]) -> ClueIndex {
        let mut index = ClueIndex::new();
        for text in texts {
            index.insert(text).unwrap();
        }
        index
    }

    /// Nodes on the longest root-to-leaf path.
    fn height(index: &ClueIndex) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(usize, usize)> = index.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((at, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            if let Some(node) = index.nodes.get(at) {
                stack.extend(node.left.map(|child| (child, depth.saturating_add(1))));
                stack.extend(node.right.map(|child| (child, depth.saturating_add(1))));
            }
        }
        tallest
    }

    #[test]
    fn empty_index_enumerates_nothing() {
        let index = ClueIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.iter().next(), None);
        assert_eq!(height(&index), 0);
    }

    #[test]
    fn enumerates_in_lexicographic_order() {
        let index = index_of(&["pear", "apple", "zucchini", "mango", "banana"]);
        let texts: Vec<&str> = index.iter().collect();
        assert_eq!(texts, vec!["apple", "banana", "mango", "pear", "zucchini"]);
    }

    #[test]
    fn comparison_is_case_sensitive_bytewise() {
        let index = index_of(&["faca", "Faca", "Zebra"]);
        let texts: Vec<&str> = index.iter().collect();
        assert_eq!(texts, vec!["Faca", "Zebra", "faca"]);
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut index = ClueIndex::new();
        assert_eq!(index.insert("Knife.").unwrap(), Insertion::Added);
        assert_eq!(index.insert("Knife.").unwrap(), Insertion::AlreadyPresent);
        assert_eq!(index.len(), 1);
        assert_eq!(index.iter().count(), 1);
    }

    #[test]
    fn insertion_order_does_not_change_the_set() {
        let forward = index_of(&["c", "a", "b", "d", "a"]);
        let backward = index_of(&["d", "b", "a", "c", "c"]);
        assert_eq!(
            forward.iter().collect::<Vec<_>>(),
            backward.iter().collect::<Vec<_>>()
        );
        assert_eq!(forward.len(), 4);
    }

    #[test]
    fn sorted_input_degrades_into_a_chain() {
        let index = index_of(&["a", "b", "c", "d", "e"]);
        assert_eq!(height(&index), 5);

        let balanced = index_of(&["c", "b", "d", "a", "e"]);
        assert_eq!(height(&balanced), 3);
    }

    #[test]
    fn iteration_is_restartable() {
        let index = index_of(&["b", "a", "c"]);
        let mut first = index.iter();
        assert_eq!(first.next(), Some("a"));
        let again: Vec<&str> = (&index).into_iter().collect();
        assert_eq!(again, vec!["a", "b", "c"]);
        assert_eq!(first.collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn contains_finds_only_indexed_texts() {
        let index = index_of(&["m", "c", "x"]);
        assert!(index.contains("c"));
        assert!(index.contains("x"));
        assert!(!index.contains("d"));
    }

    #[test]
    fn output_never_repeats_and_never_decreases() {
        let texts = [
            "Pegadas recentes no Jardim molhado.",
            "Faca com manchas suspeitas na Cozinha.",
            "Carro com motor quente na Garagem.",
            "Faca com manchas suspeitas na Cozinha.",
            "Paginas rasgadas de um diario na Biblioteca.",
            "Carro com motor quente na Garagem.",
        ];
        let index = index_of(&texts);
        let out: Vec<&str> = index.iter().collect();
        assert_eq!(out.len(), 4);
        assert!(out.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
    }
}
