//! Root word listing

use crate::wordlists::{WordSource, WordSourceError};

/// Candidate root words from `source`, normalized and deduplicated
///
/// # Errors
///
/// Returns [`WordSourceError`] if the source can't be read.
pub fn list_roots<W: WordSource + ?Sized>(source: &W) -> Result<Vec<String>, WordSourceError> {
    let mut words: Vec<String> = source
        .root_word_candidates()?
        .iter()
        .map(|w| crate::core::normalize(w))
        .filter(|w| !w.is_empty())
        .collect();

    words.sort_unstable();
    words.dedup();
    Ok(words)
}
