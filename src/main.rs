use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use boggled::board::Board;
use boggled::dictionary::Dictionary;
use boggled::solver;

/// Boggle board solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the board file (rows of letters, one row per line)
    board: String,

    /// Path to the word list (one word per line)
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dictionary: String,

    /// Minimum word length to report
    #[arg(short = 'm', long, default_value_t = boggled::dictionary::MIN_WORD_LEN)]
    min_word_len: usize,
}

/// Entry point of the CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("BOGGLED_DEBUG").is_ok();
    boggled::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(solve_err) = e.downcast_ref::<boggled::errors::SolveError>() {
            eprintln!("Error: {}", solve_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Build the dictionary from the word list (the expensive step).
/// 3. Parse the board file and search it.
/// 4. Print each found word on stdout.
/// 5. Print diagnostics (counts, timings) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary, cli.min_word_len)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let board_text = std::fs::read_to_string(&cli.board)
        .map_err(|e| format!("failed to read board from '{}': {e}", cli.board))?;
    let board = Board::parse(&board_text)?;

    let t_solve = Instant::now();
    let report = solver::search(&board, &dictionary);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for word in &report.words {
        println!("{word}");
    }

    eprintln!(
        "Loaded {} words in {load_secs:.3}s; searched {}x{} board in {solve_secs:.3}s \
         ({} words found, {} branches explored).",
        dictionary.len(),
        board.rows(),
        board.cols(),
        report.words.len(),
        report.branches_explored
    );

    Ok(())
}
