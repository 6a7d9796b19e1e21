//! The path searcher: pruned depth-first backtracking over the board.
//!
//! For every cell as a start point, the searcher walks all paths of
//! 8-directionally adjacent, unvisited cells, descending the dictionary
//! trie in lockstep with the path. A branch is abandoned the moment the
//! accumulated prefix matches no dictionary entry — this pruning is the
//! engine's core efficiency property, and [`SolveReport::branches_explored`]
//! exists so tests can verify it by counting rather than timing.
//!
//! # Examples
//!
//! ## One-shot solve
//!
//! ```no_run
//! let words = boggled::solver::solve("ca\nts", "/usr/share/dict/words")?;
//! for word in words.lines() {
//!     println!("{word}");
//! }
//! # Ok::<(), boggled::errors::SolveError>(())
//! ```
//!
//! ## Reusing a dictionary across boards
//!
//! ```
//! use boggled::dictionary::Dictionary;
//! use boggled::solver;
//!
//! let dictionary = Dictionary::parse_from_str("ant\ntan\ntad\nand", 3);
//! for board in ["an\ntd", "na\ndt"] {
//!     let words = solver::solve_for_dictionary(board, &dictionary)?;
//!     println!("{board:?}: {words:?}");
//! }
//! # Ok::<(), boggled::errors::SolveError>(())
//! ```

use std::collections::BTreeSet;

use crate::board::Board;
use crate::dictionary::{Dictionary, MIN_WORD_LEN};
use crate::errors::SolveError;
use crate::formatter::{self, DEFAULT_OUTPUT_CAPACITY};
use crate::ledger::Ledger;
use crate::trie::Node;

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Every dictionary word reachable on the board, sorted
    /// lexicographically, each word exactly once no matter how many paths
    /// spell it.
    pub words: Vec<String>,
    /// Number of cell visits the depth-first search performed, including
    /// immediately pruned ones. Bounded instrumentation for pruning tests
    /// and diagnostics; not part of the word-set contract.
    pub branches_explored: usize,
}

/// Mutable state threaded through one search: the current path (as text
/// and as a visited bitmap), the words found so far, and the branch
/// counter. All of it is per-call; the board and dictionary are read-only.
struct SearchState<'a> {
    board: &'a Board,
    visited: Ledger,
    path: String,
    found: BTreeSet<String>,
    branches_explored: usize,
}

impl<'a> SearchState<'a> {
    fn new(board: &'a Board) -> SearchState<'a> {
        SearchState {
            board,
            visited: Ledger::new(board.cols()),
            path: String::new(),
            found: BTreeSet::new(),
            branches_explored: 0,
        }
    }

    /// One step of the backtracking search: try to extend the current path
    /// with the cell at `(row, col)`, with `node` as the trie position of
    /// the path so far.
    ///
    /// Every mutation made here is undone before returning, so the caller's
    /// frame sees the state it passed in.
    fn explore(&mut self, row: usize, col: usize, node: &Node) {
        self.branches_explored += 1;

        let letter = self.board.cell(row, col);
        // Prune: no dictionary word extends the current prefix with this
        // letter, so nothing below this branch can ever be a word.
        let Some(mut node) = node.child(letter) else {
            return;
        };
        self.path.push(letter);
        let mut pushed = 1;

        // A 'q' cell carries the Qu die face: it contributes the digraph,
        // consuming one cell but two trie edges.
        if letter == 'q' {
            match node.child('u') {
                Some(qu_node) => {
                    node = qu_node;
                    self.path.push('u');
                    pushed = 2;
                }
                None => {
                    self.path.pop();
                    return;
                }
            }
        }

        self.visited.mark(row, col);

        if node.is_terminal() {
            // Found a word, but keep searching: a longer word may extend
            // the same path ("cat" and "cats").
            self.found.insert(self.path.clone());
        }

        for (nr, nc) in self.board.neighbors(row, col) {
            if !self.visited.check(nr, nc) {
                self.explore(nr, nc, node);
            }
        }

        // Backtrack for the sibling branch / next start cell.
        self.visited.clear(row, col);
        for _ in 0..pushed {
            self.path.pop();
        }
    }
}

/// Find every dictionary word reachable on the board.
///
/// Runs to completion synchronously; no I/O happens mid-search. The
/// dictionary is only read, so one `Dictionary` can serve many boards.
#[must_use]
pub fn search(board: &Board, dictionary: &Dictionary) -> SolveReport {
    let mut state = SearchState::new(board);
    for (row, col) in board.positions() {
        state.explore(row, col, dictionary.root());
    }
    debug_assert!(state.path.is_empty(), "path must be fully unwound");

    log::debug!(
        "searched {}x{} board: {} words, {} branches",
        board.rows(),
        board.cols(),
        state.found.len(),
        state.branches_explored
    );

    SolveReport {
        words: state.found.into_iter().collect(),
        branches_explored: state.branches_explored,
    }
}

/// Solve a board against a prebuilt dictionary, returning newline-joined
/// words. The performance-sensitive form: build the dictionary once, call
/// this per board.
///
/// # Errors
///
/// Returns a [`SolveError`] if the board text is malformed or the result
/// exceeds [`DEFAULT_OUTPUT_CAPACITY`].
pub fn solve_for_dictionary(
    board_text: &str,
    dictionary: &Dictionary,
) -> Result<String, SolveError> {
    solve_for_dictionary_bounded(board_text, dictionary, DEFAULT_OUTPUT_CAPACITY)
}

/// [`solve_for_dictionary`] with a caller-supplied output capacity.
///
/// # Errors
///
/// As [`solve_for_dictionary`]; overflow of `capacity` is reported as
/// [`SolveError::BufferOverflow`], never as a truncated result.
pub fn solve_for_dictionary_bounded(
    board_text: &str,
    dictionary: &Dictionary,
    capacity: usize,
) -> Result<String, SolveError> {
    let board = Board::parse(board_text)?;
    let report = search(&board, dictionary);
    formatter::render(report.words.iter().map(String::as_str), capacity)
}

/// One-shot convenience form: build a dictionary from `dictionary_path`
/// (with the default minimum word length), then solve `board_text`.
///
/// # Errors
///
/// Returns a [`SolveError`] if the word list cannot be read, the board is
/// malformed, or the result overflows the default capacity.
#[cfg(not(target_arch = "wasm32"))]
pub fn solve(board_text: &str, dictionary_path: &str) -> Result<String, SolveError> {
    let dictionary = Dictionary::load_from_path(dictionary_path, MIN_WORD_LEN)?;
    solve_for_dictionary(board_text, &dictionary)
}
