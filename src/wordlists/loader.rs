//! Word list loading utilities
//!
//! Reads newline-delimited word lists from disk.

use std::fs;
use std::io;
use std::path::Path;

/// Load the non-blank lines of a file
///
/// Each line is trimmed; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_lines;
///
/// let words = load_lines("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(lines_from_str(&content))
}

/// Split newline-delimited text into trimmed, non-blank entries
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Convert embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(ToString::to_string).collect()
}
