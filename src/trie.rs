//! Prefix tree backing the dictionary.
//!
//! Each edge carries one letter; a node's terminal flag marks that the path
//! from the root spells a complete word. The structure is write-once: the
//! dictionary builder inserts words and nothing ever deletes a node, which
//! is what makes sharing `&Node` across unboundedly many searches safe.

use std::collections::HashMap;

/// A single trie node. The root represents the empty prefix and is never
/// terminal (the empty string is not a word in any dictionary).
#[derive(Debug, Default)]
pub(crate) struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

impl Node {
    pub(crate) fn new() -> Node {
        Node::default()
    }

    /// Insert the remainder of a word below this node, creating child nodes
    /// as needed. When the iterator is exhausted the current node is marked
    /// terminal. Every node created this way lies on the path of at least
    /// one inserted word.
    pub(crate) fn insert<I: Iterator<Item = char>>(&mut self, mut word: I) {
        match word.next() {
            None => self.terminal = true,
            Some(c) => self.children.entry(c).or_default().insert(word),
        }
    }

    /// The pruning primitive: the child reached by `letter`, if any word in
    /// the dictionary extends the current prefix with that letter.
    #[inline]
    pub(crate) fn child(&self, letter: char) -> Option<&Node> {
        self.children.get(&letter)
    }

    /// True iff the path from the root to this node spells a complete word.
    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Walk `letters` down from this node, returning the node reached, or
    /// `None` as soon as the path leaves the trie.
    pub(crate) fn descend<I: Iterator<Item = char>>(&self, letters: I) -> Option<&Node> {
        let mut node = self;
        for c in letters {
            node = node.child(c)?;
        }
        Some(node)
    }
}
