//! Reading integer sequences at the CLI boundary.
//!
//! Accepts integers separated by commas and/or whitespace, optionally
//! wrapped in `[` `]` so JSON arrays can be piped in directly:
//!
//! ```text
//! 4 1 6 3 8
//! 4,1,6,3,8
//! [4, 1, 6, 3, 8]
//! ```
//!
//! Every element must be an `i64` literal. Decimals, words and values
//! outside the `i64` range are rejected rather than coerced.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Parse a sequence of integers. Empty input is an empty sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(pos, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("element {} ('{}') is not an integer", pos, token))
        })
        .collect()
}

/// Read and parse a sequence from `path`, or from stdin when `path` is `-`.
pub fn read_sequence(path: &Path) -> Result<Vec<i64>> {
    if path == Path::new("-") {
        return read_stdin();
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sequence file: {}", path.display()))?;
    parse_sequence(&text).with_context(|| format!("Invalid sequence in {}", path.display()))
}

pub fn read_stdin() -> Result<Vec<i64>> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read sequence from stdin")?;
    parse_sequence(&text).context("Invalid sequence on stdin")
}

/// True when stdin is a pipe or file rather than an interactive terminal.
pub fn stdin_is_piped() -> bool {
    !atty::is(atty::Stream::Stdin)
}
