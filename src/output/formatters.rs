//! Formatting utilities for terminal output

use crate::core::letter_count;

/// Circled number showing a word's length
///
/// Lengths 1-20 use a single circled digit; longer words fall back to `(n)`.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = letter_count(word);
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({n})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// A history entry as shown in lists: badge then word
#[must_use]
pub fn history_line(word: &str) -> String {
    format!("{} {word}", length_badge(word))
}

/// Root word spaced out for headers, e.g. `S I L K W O R M`
#[must_use]
pub fn spaced_root(root: &str) -> String {
    root.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
