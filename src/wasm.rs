//! WASM bindings: the dictionary handle and the solve entry points.
//!
//! The JavaScript-facing `Dictionary` is an opaque handle owning a built
//! trie. It is created from in-memory word-list text (browsers cannot read
//! file paths) and destroyed exactly once via the wasm-bindgen generated
//! `free()` — Rust's `Drop` is the destruction hook, so callers cannot
//! double-free it or leak it past `free()`. Solving against a held handle
//! never rebuilds the trie, which is the whole point of exposing it.

use crate::dictionary::Dictionary;
use crate::errors::SolveError;
use crate::log::init_logger;
use crate::solver;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E003")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolveError> for WasmError {
    fn from(e: SolveError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);
        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript once after the WASM module
/// loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// Opaque dictionary handle held by the JavaScript side.
///
/// Build it once from word-list text, pass it to
/// [`solve_for_dictionary_wasm`] as many times as needed, and call `free()`
/// (or let a `FinalizationRegistry` do it) when done. Using a handle after
/// `free()` is rejected by wasm-bindgen's ownership tracking rather than
/// reading freed memory.
#[wasm_bindgen(js_name = Dictionary)]
pub struct WasmDictionary {
    inner: Dictionary,
}

#[wasm_bindgen(js_class = Dictionary)]
impl WasmDictionary {
    /// Build a dictionary from newline-separated word-list text.
    ///
    /// `min_word_len` is the minimum-length policy (3 for conventional
    /// Boggle rules).
    #[wasm_bindgen(constructor)]
    pub fn new(contents: &str, min_word_len: usize) -> WasmDictionary {
        WasmDictionary {
            inner: Dictionary::parse_from_str(contents, min_word_len),
        }
    }

    /// Number of words retained after the minimum-length filter.
    #[wasm_bindgen(getter)]
    pub fn word_count(&self) -> usize {
        self.inner.len()
    }
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    words: Vec<String>,
    branches_explored: usize,
}

/// JS entry: (board_text: string, dictionary: Dictionary)
/// returns { words: string[], branches_explored: number }
#[wasm_bindgen]
pub fn solve_for_dictionary_wasm(
    board_text: &str,
    dictionary: &WasmDictionary,
) -> Result<JsValue, JsValue> {
    let board = crate::board::Board::parse(board_text).map_err(WasmError::from)?;
    let report = solver::search(&board, &dictionary.inner);

    let result = WasmSolveResult {
        words: report.words,
        branches_explored: report.branches_explored,
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
