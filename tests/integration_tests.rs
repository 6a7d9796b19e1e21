//! Integration tests for the Boggle solving engine.
//!
//! These exercise the complete pipeline — word list to dictionary to board
//! search to rendered text — over a fixture word list, and check the
//! engine's recall and precision against an unpruned brute-force reference
//! search on small boards.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;

use boggled::dictionary::Dictionary;
use boggled::errors::SolveError;
use boggled::solver;

const MIN_WORD_LEN: usize = 3;

fn fixture_dictionary() -> Dictionary {
    let contents = fs::read_to_string("tests/fixtures/words.txt")
        .expect("failed to read fixture word list");
    Dictionary::parse_from_str(&contents, MIN_WORD_LEN)
}

fn fixture_words() -> BTreeSet<String> {
    fs::read_to_string("tests/fixtures/words.txt")
        .expect("failed to read fixture word list")
        .lines()
        .map(str::to_string)
        .filter(|w| w.len() >= MIN_WORD_LEN)
        .collect()
}

/// Unpruned reference search: enumerate every simple path on the board up
/// to the longest dictionary word and test each spelled string for
/// membership. Deliberately independent of the engine (its own parsing,
/// its own adjacency walk) so the two implementations cross-check.
mod reference {
    use std::collections::BTreeSet;

    pub fn search(board_text: &str, words: &BTreeSet<String>) -> BTreeSet<String> {
        let grid: Vec<Vec<char>> = board_text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.chars().filter(char::is_ascii_alphabetic).collect())
            .collect();
        let max_len = words.iter().map(String::len).max().unwrap_or(0);

        let mut found = BTreeSet::new();
        for row in 0..grid.len() {
            for col in 0..grid[0].len() {
                let mut visited = vec![vec![false; grid[0].len()]; grid.len()];
                walk(&grid, row, col, &mut visited, String::new(), max_len, words, &mut found);
            }
        }
        found
    }

    #[allow(clippy::too_many_arguments)]
    fn walk(
        grid: &[Vec<char>],
        row: usize,
        col: usize,
        visited: &mut Vec<Vec<bool>>,
        mut word: String,
        max_len: usize,
        words: &BTreeSet<String>,
        found: &mut BTreeSet<String>,
    ) {
        word.push(grid[row][col]);
        // the q cell carries its u, same as the engine's digraph rule
        if grid[row][col] == 'q' {
            word.push('u');
        }
        if word.len() > max_len {
            return;
        }
        if words.contains(&word) {
            found.insert(word.clone());
        }
        visited[row][col] = true;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (row as isize + dr, col as isize + dc);
                if nr >= 0
                    && (nr as usize) < grid.len()
                    && nc >= 0
                    && (nc as usize) < grid[0].len()
                    && !visited[nr as usize][nc as usize]
                {
                    walk(
                        grid,
                        nr as usize,
                        nc as usize,
                        visited,
                        word.clone(),
                        max_len,
                        words,
                        found,
                    );
                }
            }
        }
        visited[row][col] = false;
    }
}

mod pipeline {
    use super::*;

    #[test]
    fn test_small_board_finds_expected_words() {
        let dictionary = fixture_dictionary();
        let text = solver::solve_for_dictionary("an\ntd", &dictionary).unwrap();
        assert_eq!(text, "and\nant\ntad\ntan");
    }

    #[test]
    fn test_one_shot_solve_builds_from_path() {
        let mut wordlist = tempfile::NamedTempFile::new().unwrap();
        write!(wordlist, "ant\ntan\nand\ntad\n").unwrap();
        let text = solver::solve("an\ntd", wordlist.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "and\nant\ntad\ntan");
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let dictionary = fixture_dictionary();
        let first = solver::solve_for_dictionary("mat\neen\ndrs", &dictionary).unwrap();
        for _ in 0..5 {
            let again = solver::solve_for_dictionary("mat\neen\ndrs", &dictionary).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_output_has_no_trailing_newline_or_metadata() {
        let dictionary = fixture_dictionary();
        let text = solver::solve_for_dictionary("an\ntd", &dictionary).unwrap();
        assert!(!text.ends_with('\n'));
        assert!(text.lines().all(|l| fixture_words().contains(l)));
    }

    #[test]
    fn test_overflow_is_an_error_not_a_prefix() {
        let dictionary = fixture_dictionary();
        let err = solver::solve_for_dictionary_bounded("an\ntd", &dictionary, 4).unwrap_err();
        match err {
            SolveError::BufferOverflow { needed, capacity } => {
                assert_eq!(capacity, 4);
                assert_eq!(needed, "and\nant\ntad\ntan".len());
            }
            other => panic!("expected BufferOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_board_fails_before_search() {
        let dictionary = fixture_dictionary();
        let err = solver::solve_for_dictionary("abc\nde", &dictionary).unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}

mod against_reference {
    use super::*;

    fn assert_engine_matches_reference(board_text: &str) {
        let dictionary = fixture_dictionary();
        let engine: BTreeSet<String> = solver::search(
            &boggled::board::Board::parse(board_text).unwrap(),
            &dictionary,
        )
        .words
        .into_iter()
        .collect();
        let reference = reference::search(board_text, &fixture_words());
        assert_eq!(engine, reference, "board {board_text:?}");
    }

    #[test]
    fn test_full_recall_and_precision_3x3() {
        assert_engine_matches_reference("mat\neen\ndrs");
    }

    #[test]
    fn test_full_recall_and_precision_2x3() {
        assert_engine_matches_reference("tan\nder");
    }

    #[test]
    fn test_full_recall_and_precision_qu_board() {
        // Boggle dice spell "qu" on one face; both searches apply the
        // digraph rule, and this board can spell queen/queens/query
        let board = "que\neey\nnsr";
        assert_engine_matches_reference(board);

        let dictionary = fixture_dictionary();
        let words = solver::solve_for_dictionary(board, &dictionary).unwrap();
        assert!(words.lines().any(|w| w == "queen"));
        assert!(words.lines().any(|w| w == "queens"));
    }

    #[test]
    fn test_pruned_search_does_no_extra_work_on_barren_board() {
        // no fixture word starts with x, so the engine must abandon every
        // start cell after one branch; the reference has no such shortcut
        let dictionary = fixture_dictionary();
        let report = solver::search(
            &boggled::board::Board::parse("xx\nxx").unwrap(),
            &dictionary,
        );
        assert!(report.words.is_empty());
        assert_eq!(report.branches_explored, 4);
    }
}
