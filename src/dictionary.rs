//! `dictionary` — load a word list and build the prefix-tree dictionary.
//!
//! This module reads a word list (one word per line, no header, no
//! metadata) and inserts each word into a trie, producing a [`Dictionary`]
//! that is immutable after construction. Building is the expensive step;
//! the resulting value is meant to be held by the caller and reused across
//! unboundedly many solves.
//!
//! The parsing rules:
//! - Each line is trimmed; empty lines are skipped.
//! - Words shorter than `min_word_len` are skipped at build time. This is
//!   the crate's minimum-length policy: the conventional Boggle rule
//!   excludes words under three letters, so [`MIN_WORD_LEN`] is 3, but the
//!   limit is a constructor argument so callers can include shorter words.
//! - Characters are accepted as-is. No case folding is performed; a word
//!   list with uppercase entries simply won't match a lowercase board.
//!
//! The module is **WASM-friendly**: `parse_from_str` works everywhere
//! (browsers hand us file contents fetched via JavaScript), while
//! `load_from_path` is native-only.

use crate::errors::SolveError;
use crate::trie::Node;

/// Conventional Boggle minimum word length (words under 3 letters score
/// nothing and are excluded).
pub const MIN_WORD_LEN: usize = 3;

/// An immutable-after-build trie dictionary.
///
/// Shareable by reference across sequential or concurrent solve calls; the
/// trie is never mutated after construction. Dropping the `Dictionary`
/// releases the whole trie — this is the deterministic destruction hook the
/// binding layers rely on.
#[derive(Debug)]
pub struct Dictionary {
    root: Node,
    word_count: usize,
    min_word_len: usize,
}

impl Dictionary {
    /// Build a dictionary from in-memory word-list text.
    ///
    /// WASM-safe: no filesystem access. Words shorter than `min_word_len`
    /// are never inserted, so the trie carries no dead branches for them
    /// and the searcher needs no emission-time length check.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_word_len: usize) -> Dictionary {
        let mut root = Node::new();
        let mut word_count = 0;

        for raw_line in contents.lines() {
            let word = raw_line.trim();
            if word.is_empty() || word.chars().count() < min_word_len {
                continue;
            }
            root.insert(word.chars());
            word_count += 1;
        }

        log::debug!("built dictionary: {word_count} words (min length {min_word_len})");
        Dictionary { root, word_count, min_word_len }
    }

    /// Native-only convenience: read a word-list file and build.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DictionaryLoad`] if the file cannot be read.
    /// No partially built dictionary escapes on failure.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_word_len: usize,
    ) -> Result<Dictionary, SolveError> {
        let path_ref = path.as_ref();
        let contents =
            std::fs::read_to_string(path_ref).map_err(|e| SolveError::DictionaryLoad {
                path: path_ref.display().to_string(),
                source: e,
            })?;
        Ok(Self::parse_from_str(&contents, min_word_len))
    }

    /// Number of words retained (after the minimum-length filter).
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The minimum word length this dictionary was built with.
    #[must_use]
    pub fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    /// True iff `word` was inserted as a complete word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.root
            .descend(word.chars())
            .is_some_and(Node::is_terminal)
    }

    /// True iff some inserted word starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.root.descend(prefix.chars()).is_some()
    }

    /// Root trie node, the searcher's starting prefix position.
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}
