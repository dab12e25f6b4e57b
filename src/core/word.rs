//! Word normalization and letter availability
//!
//! A candidate is playable only if every one of its letters can be matched to a
//! distinct, unused occurrence of that letter in the root word.

/// Normalize raw player input
///
/// Lowercases the input and strips leading/trailing whitespace, newlines included.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize(" Silk \n"), "silk");
/// assert_eq!(normalize("\t\n"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Check whether `word` can be spelled from the letters of `root`
///
/// Multiset subtraction: walks the candidate's letters in order and removes one
/// matching letter from a working copy of the root for each. A letter may not be
/// used more often than it appears in the root.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("worm", "silkworm"));
/// assert!(!is_possible("silkworms", "silkworm")); // only one 's'
/// ```
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.to_lowercase().chars().collect();

    for letter in word.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Number of letters in a word, as scored and displayed
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
