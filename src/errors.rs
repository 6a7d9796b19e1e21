//! Error types for the solving pipeline, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E005) for documentation lookup:
//!
//! - E001: `DictionaryLoad` (Word-list source unreadable)
//! - E002: `EmptyBoard` (Board text contains no cells)
//! - E003: `RaggedBoard` (Board rows have inconsistent lengths)
//! - E004: `BoardTooLarge` (Board exceeds the supported cell count)
//! - E005: `BufferOverflow` (Result does not fit the output capacity)
//!
//! All failures are surfaced synchronously to the immediate caller; nothing
//! is retried and nothing is partially constructed. In particular an
//! overflowing result is reported as an error rather than truncated — see
//! [`crate::formatter`] for the contract.
//!
//! # Example
//!
//! ```
//! use boggled::errors::SolveError;
//!
//! match boggled::solver::solve("ca\nts", "/no/such/wordlist") {
//!     Ok(words) => println!("{words}"),
//!     Err(e) => {
//!         eprintln!("{}", e.display_detailed());
//!         assert_eq!(e.code(), "E001");
//!     }
//! }
//! ```

use std::io;

/// Unified error type for dictionary building, board parsing, and result
/// formatting. Callers of the solve operations handle a single
/// `Result<_, SolveError>`.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// The word-list source could not be read. No usable dictionary is
    /// constructed when this is returned.
    #[error("failed to read word list from '{path}': {source}")]
    DictionaryLoad {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The board text contained no cells at all.
    #[error("board is empty")]
    EmptyBoard,

    /// Board rows must all have the same length (rectangular grid).
    #[error("board row {row} has {actual} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The board exceeds the supported cell count
    /// ([`MAX_BOARD_CELLS`](crate::board::MAX_BOARD_CELLS)).
    #[error("board has {cells} cells, maximum supported is {max}")]
    BoardTooLarge { cells: usize, max: usize },

    /// The serialized result set would not fit the output capacity.
    #[error("result needs {needed} bytes but capacity is {capacity}")]
    BufferOverflow { needed: usize, capacity: usize },
}

impl From<SolveError> for io::Error {
    fn from(se: SolveError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, se.to_string())
    }
}

impl SolveError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::DictionaryLoad { .. } => "E001",
            SolveError::EmptyBoard => "E002",
            SolveError::RaggedBoard { .. } => "E003",
            SolveError::BoardTooLarge { .. } => "E004",
            SolveError::BufferOverflow { .. } => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolveError::DictionaryLoad { .. } => "Word-list source unreadable",
            SolveError::EmptyBoard => "Board text contains no cells",
            SolveError::RaggedBoard { .. } => "Board rows have inconsistent lengths",
            SolveError::BoardTooLarge { .. } => "Board exceeds the supported cell count",
            SolveError::BufferOverflow { .. } => "Result does not fit the output capacity",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolveError::DictionaryLoad { .. } => {
                Some("Check that the word-list path exists and is readable (one word per line)")
            }
            SolveError::EmptyBoard => {
                Some("Provide at least one row of letters, e.g. \"ca\\nts\"")
            }
            SolveError::RaggedBoard { .. } => {
                Some("Every row of a board must have the same number of letters")
            }
            SolveError::BoardTooLarge { .. } => {
                Some("Split the input into smaller boards; the engine targets Boggle-sized grids")
            }
            SolveError::BufferOverflow { .. } => {
                Some("Raise the output capacity or solve with a smaller dictionary")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
