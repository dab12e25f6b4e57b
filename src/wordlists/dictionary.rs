//! Spell checking
//!
//! The validation pipeline only needs a yes/no answer for a word in a language.
//! [`WordListDictionary`] answers it from a set of known words.

use super::embedded::DICTIONARY;
use super::loader::load_lines;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Language code of the built-in dictionary
pub const ENGLISH: &str = "en";

/// Decides whether a word is spelled correctly
pub trait SpellChecker {
    fn is_spelled_correctly(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_spelled_correctly(&self, word: &str, language: &str) -> bool {
        (**self).is_spelled_correctly(word, language)
    }
}

/// A dictionary for a single language backed by a word set
///
/// Lookups in any other language always fail.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from a list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ENGLISH, DICTIONARY)
    }

    /// Load a one-word-per-line dictionary file, e.g. `/usr/share/dict/words`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    #[instrument(skip(path, language), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>, language: impl Into<String>) -> io::Result<Self> {
        let dictionary = Self::new(language, load_lines(path.as_ref())?);
        info!(words = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl SpellChecker for WordListDictionary {
    fn is_spelled_correctly(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_knows_common_words() {
        let dictionary = WordListDictionary::embedded();
        assert_eq!(dictionary.language(), ENGLISH);
        for word in ["silk", "worm", "milk", "silkworm"] {
            assert!(dictionary.is_spelled_correctly(word, "en"), "missing {word}");
        }
        assert!(!dictionary.is_spelled_correctly("mrowklis", "en"));
    }

    #[test]
    fn embedded_accepts_everyday_words() {
        use crate::core::{RoundState, Validator};

        let dictionary = WordListDictionary::embedded();
        let validator = Validator::new(&dictionary, ENGLISH);
        let cases = [
            ("accepted", "peace"),
            ("accepted", "cape"),
            ("accepted", "deep"),
            ("silkworm", "limo"),
            ("mountain", "amount"),
        ];
        for (root, word) in cases {
            let mut round = RoundState::with_root(root);
            assert!(
                validator.submit(word, &mut round).is_accepted(),
                "{word} from {root}"
            );
        }
    }

    #[test]
    fn embedded_is_a_full_word_list() {
        assert!(DICTIONARY.len() > 50_000);
        assert!(DICTIONARY.iter().all(|w| !w.contains('\'')));
    }

    #[test]
    fn other_language_never_matches() {
        let dictionary = WordListDictionary::embedded();
        assert!(!dictionary.is_spelled_correctly("silk", "fr"));
        assert!(dictionary.is_spelled_correctly("silk", "EN"));
    }

    #[test]
    fn entries_are_normalized() {
        let dictionary = WordListDictionary::new("en", ["  Silk ", "", "WORM"]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("silk"));
        assert!(dictionary.contains("worm"));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = WordListDictionary::new("en", Vec::<String>::new());
        assert!(dictionary.is_empty());
        assert!(!dictionary.is_spelled_correctly("silk", "en"));
    }

    #[test]
    fn from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Aardvark\nzebra\n").unwrap();

        let dictionary = WordListDictionary::from_file(file.path(), "en").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_spelled_correctly("aardvark", "en"));
    }

    #[test]
    fn reference_delegates() {
        let dictionary = WordListDictionary::embedded();
        let by_ref = &dictionary;
        assert!(by_ref.is_spelled_correctly("worm", "en"));
    }
}
