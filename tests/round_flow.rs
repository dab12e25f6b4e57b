//! End-to-end checks of a playing session through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::core::{Game, Outcome, Rejection, RoundState, Validator};
use word_scramble::wordlists::{
    EmbeddedWords, START_WORDS, SpellChecker, WordListDictionary, WordSource, WordSourceError,
};

struct Roots(Vec<&'static str>);

impl WordSource for Roots {
    fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        Ok(self.0.iter().map(ToString::to_string).collect())
    }
}

/// Treats every word as correctly spelled
struct Lenient;

impl SpellChecker for Lenient {
    fn is_spelled_correctly(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

#[test]
fn silkworm_round() {
    let mut game = Game::new(
        WordListDictionary::embedded(),
        Roots(vec!["silkworm"]),
        "en",
        Some(0),
    );
    assert_eq!(game.round().root_word(), "silkworm");

    assert!(game.submit("silk").is_accepted());
    assert_eq!(game.round().score(), 4);
    assert!(game.submit("worm").is_accepted());
    assert_eq!(game.round().score(), 8);

    assert_eq!(game.submit("silk"), Outcome::Rejected(Rejection::NotOriginal));
    assert_eq!(
        game.submit("silkworms"),
        Outcome::Rejected(Rejection::NotPossible)
    );
    assert_eq!(game.submit("or"), Outcome::Rejected(Rejection::NotReal));
    assert_eq!(game.submit(" \n"), Outcome::Rejected(Rejection::Empty));

    assert_eq!(game.round().history(), ["worm", "silk"]);
    assert_eq!(game.round().score(), 8);
}

#[test]
fn every_used_word_is_not_original() {
    let validator = Validator::new(&Lenient, "en");
    let mut round = RoundState::with_root("mountain");

    for word in ["mount", "main", "nation", "ant", "tin"] {
        assert!(validator.submit(word, &mut round).is_accepted(), "{word}");
    }

    let used = round.history().to_vec();
    for word in &used {
        assert_eq!(
            validator.submit(word, &mut round),
            Outcome::Rejected(Rejection::NotOriginal)
        );
        assert_eq!(
            validator.submit(&word.to_uppercase(), &mut round),
            Outcome::Rejected(Rejection::NotOriginal)
        );
    }
    assert_eq!(round.history(), used.as_slice());
}

#[test]
fn start_round_draws_only_known_roots() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut round = RoundState::default();

    for _ in 0..100 {
        let root = round.start(&EmbeddedWords, &mut rng).to_string();
        assert!(START_WORDS.contains(&root.as_str()), "unknown root {root}");
        assert_eq!(round.score(), 0);
        assert!(round.history().is_empty());
    }
}

#[test]
fn normalized_submission_matches() {
    let dictionary = WordListDictionary::embedded();
    let validator = Validator::new(&dictionary, "en");

    let mut padded = RoundState::with_root("silkworm");
    let mut plain = RoundState::with_root("silkworm");

    assert_eq!(
        validator.submit(" Silk \n", &mut padded),
        validator.submit("silk", &mut plain)
    );
    assert_eq!(padded, plain);
}

#[test]
fn history_stays_possible_and_unique() {
    let validator = Validator::new(&Lenient, "en");
    let mut round = RoundState::with_root("accepted");

    let attempts = [
        "ace", "cap", "cape", "ace", "pace", "tea", "peace", "accept", "accepted", "deep",
    ];
    for raw in attempts {
        validator.submit(raw, &mut round);
    }

    let history = round.history();
    let unique: std::collections::HashSet<_> = history.iter().collect();
    assert_eq!(unique.len(), history.len());
    for word in history {
        assert!(word_scramble::core::is_possible(word, "accepted"), "{word}");
    }
    let total: usize = history.iter().map(|w| w.chars().count()).sum();
    assert_eq!(round.score(), total);
}
