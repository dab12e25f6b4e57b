//! Word validation pipeline
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. Normalize (blank input is [`Rejection::Empty`])
//! 2. Originality
//! 3. Possibility (letters available in the root word)
//! 4. Realness (minimum length, then the spell checker)
//!
//! Possibility is checked before realness, so a short nonsense string that can't
//! be spelled from the root reports [`Rejection::NotPossible`].

use super::rejection::{Outcome, Rejection};
use super::round::RoundState;
use super::word::{is_possible, letter_count, normalize};
use crate::wordlists::SpellChecker;
use tracing::{debug, info};

/// Words shorter than this are never real
pub const MIN_WORD_LENGTH: usize = 3;

/// Validates submissions against a round
pub struct Validator<'a, C: SpellChecker + ?Sized> {
    checker: &'a C,
    language: &'a str,
}

impl<'a, C: SpellChecker + ?Sized> Validator<'a, C> {
    #[must_use]
    pub const fn new(checker: &'a C, language: &'a str) -> Self {
        Self { checker, language }
    }

    #[must_use]
    pub const fn language(&self) -> &str {
        self.language
    }

    /// Submit a raw word
    ///
    /// On success the word is recorded in `round` and its points are returned.
    /// Rejections leave `round` untouched.
    pub fn submit(&self, raw: &str, round: &mut RoundState) -> Outcome {
        match self.check(raw, round) {
            Ok(word) => {
                let points = letter_count(&word);
                round.record_acceptance(word.clone());
                info!(word = %word, points, score = round.score(), "Word accepted");
                Outcome::Accepted { word, points }
            }
            Err(reason) => {
                debug!(raw = %raw.trim(), ?reason, "Word rejected");
                Outcome::Rejected(reason)
            }
        }
    }

    /// Run every check without touching the round
    ///
    /// Returns the normalized word when all checks pass.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] hit in pipeline order.
    pub fn check(&self, raw: &str, round: &RoundState) -> Result<String, Rejection> {
        let word = normalize(raw);

        if word.is_empty() {
            return Err(Rejection::Empty);
        }

        if round.contains(&word) {
            return Err(Rejection::NotOriginal);
        }

        if !is_possible(&word, round.root_word()) {
            return Err(Rejection::NotPossible);
        }

        if !self.is_real(&word) {
            return Err(Rejection::NotReal);
        }

        Ok(word)
    }

    fn is_real(&self, word: &str) -> bool {
        // Cheap length check before consulting the dictionary
        letter_count(word) >= MIN_WORD_LENGTH
            && self.checker.is_spelled_correctly(word, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Accepts every word and counts how often it was asked
    #[derive(Default)]
    struct AnyWord {
        calls: Cell<usize>,
    }

    impl SpellChecker for AnyWord {
        fn is_spelled_correctly(&self, _word: &str, _language: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            true
        }
    }

    struct NoWord;

    impl SpellChecker for NoWord {
        fn is_spelled_correctly(&self, _word: &str, _language: &str) -> bool {
            false
        }
    }

    struct Only(&'static [&'static str]);

    impl SpellChecker for Only {
        fn is_spelled_correctly(&self, word: &str, language: &str) -> bool {
            language == "en" && self.0.contains(&word)
        }
    }

    static WORDS: Only = Only(&["silk", "worm", "milk", "silkworm", "silkworms", "or"]);

    #[test]
    fn accepts_and_scores() {
        let validator = Validator::new(&WORDS, "en");
        let mut round = RoundState::with_root("silkworm");

        assert_eq!(
            validator.submit("silk", &mut round),
            Outcome::Accepted {
                word: "silk".to_string(),
                points: 4
            }
        );
        assert_eq!(round.score(), 4);

        assert!(validator.submit("worm", &mut round).is_accepted());
        assert_eq!(round.score(), 8);
        assert_eq!(round.history(), ["worm", "silk"]);
    }

    #[test]
    fn blank_input_is_empty() {
        let validator = Validator::new(&WORDS, "en");
        let mut round = RoundState::with_root("silkworm");

        for raw in ["", "   ", "\n", " \t\r\n "] {
            assert_eq!(
                validator.submit(raw, &mut round),
                Outcome::Rejected(Rejection::Empty)
            );
        }
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn resubmission_is_not_original() {
        let validator = Validator::new(&WORDS, "en");
        let mut round = RoundState::with_root("silkworm");

        assert!(validator.submit("silk", &mut round).is_accepted());
        assert_eq!(
            validator.submit("silk", &mut round),
            Outcome::Rejected(Rejection::NotOriginal)
        );
        assert_eq!(
            validator.submit(" SILK\n", &mut round),
            Outcome::Rejected(Rejection::NotOriginal)
        );
        assert_eq!(round.score(), 4);
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn extra_letter_is_not_possible() {
        let validator = Validator::new(&WORDS, "en");
        let mut round = RoundState::with_root("silkworm");

        assert_eq!(
            validator.submit("silkworms", &mut round),
            Outcome::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn short_word_is_not_real() {
        let checker = AnyWord::default();
        let validator = Validator::new(&checker, "en");
        let mut round = RoundState::with_root("silkworm");

        assert_eq!(
            validator.submit("or", &mut round),
            Outcome::Rejected(Rejection::NotReal)
        );
        // Length is checked before the dictionary
        assert_eq!(checker.calls.get(), 0);
    }

    #[test]
    fn unknown_word_is_not_real() {
        let validator = Validator::new(&NoWord, "en");
        let mut round = RoundState::with_root("silkworm");

        assert_eq!(
            validator.submit("milk", &mut round),
            Outcome::Rejected(Rejection::NotReal)
        );
        assert!(round.history().is_empty());
    }

    #[test]
    fn possibility_checked_before_realness() {
        let validator = Validator::new(&NoWord, "en");
        let mut round = RoundState::with_root("silkworm");

        // Short nonsense that also isn't spellable reports NotPossible
        assert_eq!(
            validator.submit("zq", &mut round),
            Outcome::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn originality_checked_before_possibility() {
        let checker = AnyWord::default();
        let validator = Validator::new(&checker, "en");
        let mut round = RoundState::with_root("silkworm");
        // A history entry that isn't possible for this root still reports NotOriginal
        round.record_acceptance("zebra");

        assert_eq!(
            validator.submit("zebra", &mut round),
            Outcome::Rejected(Rejection::NotOriginal)
        );
    }

    #[test]
    fn normalized_input_matches_plain() {
        let validator = Validator::new(&WORDS, "en");
        let mut a = RoundState::with_root("silkworm");
        let mut b = RoundState::with_root("silkworm");

        assert_eq!(
            validator.submit(" Silk \n", &mut a),
            validator.submit("silk", &mut b)
        );
        assert_eq!(a, b);
    }

    #[test]
    fn root_word_itself_is_accepted() {
        let validator = Validator::new(&WORDS, "en");
        let mut round = RoundState::with_root("silkworm");

        assert!(validator.submit("silkworm", &mut round).is_accepted());
        assert_eq!(round.score(), 8);
    }

    #[test]
    fn language_is_passed_to_checker() {
        let validator = Validator::new(&WORDS, "fr");
        let mut round = RoundState::with_root("silkworm");

        assert_eq!(validator.language(), "fr");
        assert_eq!(
            validator.submit("silk", &mut round),
            Outcome::Rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn check_does_not_mutate() {
        let validator = Validator::new(&WORDS, "en");
        let round = RoundState::with_root("silkworm");

        assert_eq!(validator.check(" Milk ", &round), Ok("milk".to_string()));
        assert!(round.history().is_empty());
    }

    #[test]
    fn score_is_sum_of_accepted_lengths() {
        let checker = AnyWord::default();
        let validator = Validator::new(&checker, "en");
        let mut round = RoundState::with_root("silkworm");
        let attempts = ["silk", "or", "worm", "silk", "milk", "silkworms", "skim"];

        let mut expected = 0;
        for raw in attempts {
            if let Outcome::Accepted { points, .. } = validator.submit(raw, &mut round) {
                expected += points;
            }
        }

        let total: usize = round.history().iter().map(|w| w.chars().count()).sum();
        assert_eq!(round.score(), expected);
        assert_eq!(round.score(), total);
        assert_eq!(round.score(), 16);
    }
}
