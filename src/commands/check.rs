//! One-shot word checking
//!
//! Runs a list of words through a single round with a fixed root word.

use crate::core::{Outcome, RoundState, Validator};
use crate::wordlists::SpellChecker;

/// Result of checking a list of words
pub struct CheckReport {
    pub root: String,
    pub entries: Vec<CheckEntry>,
    pub score: usize,
    pub history: Vec<String>,
}

/// One submitted word and what happened to it
pub struct CheckEntry {
    pub input: String,
    pub outcome: Outcome,
}

impl CheckReport {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_accepted()).count()
    }
}

/// Submit `words` in order to a round rooted at `root`
#[must_use]
pub fn check_words<C: SpellChecker + ?Sized>(
    root: &str,
    words: &[String],
    checker: &C,
    language: &str,
) -> CheckReport {
    let validator = Validator::new(checker, language);
    let mut round = RoundState::with_root(root);

    let entries = words
        .iter()
        .map(|input| CheckEntry {
            input: input.clone(),
            outcome: validator.submit(input, &mut round),
        })
        .collect();

    CheckReport {
        root: round.root_word().to_string(),
        entries,
        score: round.score(),
        history: round.history().to_vec(),
    }
}
