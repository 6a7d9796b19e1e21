//! Boggle word-search solving engine.
//!
//! Boggle is the 1972 word game in which sixteen lettered dice are tossed
//! into a 4⨯4 grid and players race to find words spelled by paths of
//! adjacent dice. This crate is the solving engine: build a [`dictionary`]
//! (a prefix-tree over a word list) once, then run the pruned
//! depth-first [`solver`] against any number of [`board`]s.
//!
//! The library is the core; the CLI (`src/main.rs`) and the WASM bindings
//! (`src/wasm.rs`) are thin glue over [`solver::solve`] and
//! [`solver::solve_for_dictionary`].

// Reusable library API — visible to both CLI and WASM builds
pub mod board;
pub mod dictionary;
pub mod errors;
pub mod formatter;
pub mod log;
pub mod solver;

mod ledger;
mod trie;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
