//! `board` — parse raw board text into a rectangular letter grid.
//!
//! A board is a text blob of fixed-width rows separated by line breaks.
//! Letters within a row may optionally be separated by spaces or tabs
//! (`"c a\nt s"` and `"ca\nts"` describe the same board). Cells are
//! restricted to ASCII letters and lowercased on the way in, matching the
//! lowercase word lists the solver is normally run against.
//!
//! The grid is transient: constructed fresh per solve call and discarded
//! after the search completes. The dictionary, by contrast, lives across
//! solves.

use itertools::iproduct;
use smallvec::SmallVec;

use crate::errors::SolveError;

/// Maximum supported cell count.
///
/// This is an explicit defensive bound on pathological inputs, not a tuning
/// knob: the visited ledger is a single `u64` bitmap, so a board may not
/// exceed 64 cells (an 8×8 grid — double a tournament Boggle board in each
/// dimension).
pub const MAX_BOARD_CELLS: usize = 64;

/// Coordinates of up to eight neighbors, stack-allocated.
pub(crate) type Neighbors = SmallVec<[(usize, usize); 8]>;

/// A rows × cols grid of single lowercase letters.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Parse board text into a rectangular grid.
    ///
    /// Blank lines (including the stray trailing newline most editors
    /// leave) are not rows. Non-letter characters within a row are treated
    /// as separators and dropped.
    ///
    /// # Errors
    ///
    /// - [`SolveError::EmptyBoard`] if no cells remain after parsing.
    /// - [`SolveError::RaggedBoard`] if rows have inconsistent lengths.
    /// - [`SolveError::BoardTooLarge`] if the grid exceeds
    ///   [`MAX_BOARD_CELLS`].
    pub fn parse(text: &str) -> Result<Board, SolveError> {
        let mut cells: Vec<Vec<char>> = Vec::new();

        for line in text.lines() {
            let row: Vec<char> = line
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect();
            if row.is_empty() {
                continue;
            }
            if let Some(first) = cells.first() {
                if row.len() != first.len() {
                    return Err(SolveError::RaggedBoard {
                        row: cells.len(),
                        expected: first.len(),
                        actual: row.len(),
                    });
                }
            }
            cells.push(row);
        }

        if cells.is_empty() {
            return Err(SolveError::EmptyBoard);
        }

        let rows = cells.len();
        let cols = cells[0].len();
        if rows * cols > MAX_BOARD_CELLS {
            return Err(SolveError::BoardTooLarge {
                cells: rows * cols,
                max: MAX_BOARD_CELLS,
            });
        }

        Ok(Board { cells, rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> char {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.cells[row][col]
    }

    /// All board coordinates, row-major.
    pub(crate) fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
    }

    /// The up to 8 cells horizontally, vertically, and diagonally adjacent
    /// to `(row, col)`, clipped to grid bounds.
    ///
    /// 8-directional adjacency is the defining rule of the search space; a
    /// 4-directional variant would be a different game.
    pub(crate) fn neighbors(&self, row: usize, col: usize) -> Neighbors {
        let (row, col) = (row as isize, col as isize);
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| !(dr == 0 && dc == 0))
            .map(|(dr, dc)| (row + dr, col + dc))
            .filter(|&(nr, nc)| {
                nr >= 0 && nr < self.rows as isize && nc >= 0 && nc < self.cols as isize
            })
            .map(|(nr, nc)| (nr as usize, nc as usize))
            .collect()
    }
}
