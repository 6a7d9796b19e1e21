//! `formatter` — serialize a found-word set into a bounded text buffer.
//!
//! Deduplication is guaranteed upstream (the searcher collects into a set);
//! this stage only joins words with single line breaks. The destination is
//! capacity-bounded because the solve operations hand their output to
//! foreign callers with fixed-size buffers, and a result set over a large
//! dictionary can run to thousands of bytes.
//!
//! The overflow policy is **fail, don't truncate**: if the serialized
//! result would exceed the capacity, [`SolveError::BufferOverflow`] is
//! returned before any output is built. A prefix of a result set looks like
//! a complete answer, which is worse than no answer.

use crate::errors::SolveError;

/// Default output capacity for the text-producing solve operations.
///
/// Matches the 8 KiB buffer the C/Python callers of the original engine
/// allocate; generous for Boggle-sized boards against a full system word
/// list.
pub const DEFAULT_OUTPUT_CAPACITY: usize = 8192;

/// Join `words` with single `\n` separators, no trailing newline, within
/// `capacity` bytes.
///
/// # Errors
///
/// Returns [`SolveError::BufferOverflow`] with the exact byte count needed
/// if the result would not fit.
pub fn render<'a, I>(words: I, capacity: usize) -> Result<String, SolveError>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let needed: usize = words
        .clone()
        .into_iter()
        .map(|w| w.len() + 1)
        .sum::<usize>()
        .saturating_sub(1); // no trailing separator

    if needed > capacity {
        return Err(SolveError::BufferOverflow { needed, capacity });
    }

    let mut out = String::with_capacity(needed);
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(word);
    }
    debug_assert_eq!(out.len(), needed);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_joins_with_newlines() {
        let text = render(["ant", "tan"], DEFAULT_OUTPUT_CAPACITY).unwrap();
        assert_eq!(text, "ant\ntan");
    }

    #[test]
    fn test_render_empty_set() {
        let text = render([], DEFAULT_OUTPUT_CAPACITY).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_render_exact_fit() {
        // "ant\ntan" is 7 bytes
        let text = render(["ant", "tan"], 7).unwrap();
        assert_eq!(text.len(), 7);
    }

    #[test]
    fn test_render_overflow_signals_instead_of_truncating() {
        let err = render(["ant", "tan"], 6).unwrap_err();
        match err {
            SolveError::BufferOverflow { needed, capacity } => {
                assert_eq!(needed, 7);
                assert_eq!(capacity, 6);
            }
            other => panic!("expected BufferOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_render_single_word_no_separator() {
        let text = render(["queen"], 5).unwrap();
        assert_eq!(text, "queen");
    }
}
