//! Lexical analysis for the shell: splitting a raw input line into tokens.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Longest accepted command line, in bytes, measured after the line
/// terminator has been stripped.
pub const MAX_LINE_LEN: usize = 80;

/// Errors that can occur while tokenizing an input line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexingError {
    /// The line exceeds [`MAX_LINE_LEN`]. The line is rejected whole rather
    /// than truncated, so a partial command is never executed.
    #[error("line too long: {len} bytes (limit {limit})")]
    LineTooLong { len: usize, limit: usize },
}

/// Runs of spaces, tabs and commas all separate tokens.
fn delimiters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t,]+").expect("delimiter pattern is valid"))
}

/// Split a line into non-empty tokens separated by runs of spaces, tabs or
/// commas.
///
/// The trailing end-of-line terminator (`\n`, `\r\n`) is stripped first and
/// never appears inside a token. Blank input and delimiter-only input both
/// produce an empty vector; the caller must treat that as "no command".
///
/// # Arguments
/// * `line` - The raw line as read from the terminal.
///
/// # Returns
/// `Result<Vec<String>, LexingError>`: the tokens in order on success, or
/// [`LexingError::LineTooLong`] if the line exceeds the input limit.
pub fn split_into_tokens(line: &str) -> Result<Vec<String>, LexingError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.len() > MAX_LINE_LEN {
        return Err(LexingError::LineTooLong {
            len: line.len(),
            limit: MAX_LINE_LEN,
        });
    }

    Ok(delimiters()
        .split(line)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect())
}
