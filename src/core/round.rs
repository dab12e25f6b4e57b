//! Round state
//!
//! One round is scoped by a single root word, the words accepted so far and the
//! running score. Starting a new round replaces all three.

use super::word::{letter_count, normalize};
use crate::wordlists::WordSource;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

/// Root word used when the word source is empty or unavailable
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// State of the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT_WORD)
    }
}

impl RoundState {
    /// Create a round with a fixed root word
    ///
    /// The root is normalized; a blank root falls back to [`DEFAULT_ROOT_WORD`].
    #[must_use]
    pub fn with_root(root: &str) -> Self {
        let root = normalize(root);
        Self {
            root_word: if root.is_empty() {
                DEFAULT_ROOT_WORD.to_string()
            } else {
                root
            },
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Start a new round
    ///
    /// Draws a root word uniformly at random from the source's candidates, clears
    /// the history and resets the score. If the source fails or yields no usable
    /// words, [`DEFAULT_ROOT_WORD`] is used instead.
    pub fn start<W, R>(&mut self, source: &W, rng: &mut R) -> &str
    where
        W: WordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates: Vec<String> = match source.root_word_candidates() {
            Ok(words) => words
                .iter()
                .map(|w| normalize(w))
                .filter(|w| !w.is_empty())
                .collect(),
            Err(e) => {
                warn!(error = %e, fallback = DEFAULT_ROOT_WORD, "Word source unavailable");
                Vec::new()
            }
        };

        let root = if let Some(word) = candidates.choose(rng) {
            word.clone()
        } else {
            warn!(fallback = DEFAULT_ROOT_WORD, "Word source has no root words");
            DEFAULT_ROOT_WORD.to_string()
        };

        self.root_word = root;
        self.used_words.clear();
        self.score = 0;

        info!(root_word = %self.root_word, candidates = candidates.len(), "Round started");
        &self.root_word
    }

    /// Record an accepted word
    ///
    /// Prepends the word to the history and adds its length to the score. No
    /// validation happens here; see [`super::Validator`].
    pub fn record_acceptance(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.score += letter_count(&word);
        self.used_words.insert(0, word);
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.used_words
    }

    /// Whether `word` was already accepted this round
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }
}
