//! Game session
//!
//! Owns everything a front-end needs to play: the current round, the word source,
//! the spell checker and a seedable random generator.

use super::rejection::Outcome;
use super::round::RoundState;
use super::validator::Validator;
use crate::wordlists::{SpellChecker, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::instrument;

/// In-memory statistics for the running session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub words_accepted: usize,
    pub best_score: usize,
}

/// A playing session
pub struct Game<C: SpellChecker, W: WordSource> {
    checker: C,
    source: W,
    language: String,
    rng: StdRng,
    round: RoundState,
    stats: SessionStats,
}

impl<C: SpellChecker, W: WordSource> Game<C, W> {
    /// Create a session and start its first round
    ///
    /// With a `seed` the sequence of root words is reproducible.
    pub fn new(checker: C, source: W, language: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut game = Self {
            checker,
            source,
            language: language.into(),
            rng,
            round: RoundState::default(),
            stats: SessionStats::default(),
        };
        game.start_round();
        game
    }

    /// Start a new round with a fresh root word
    #[instrument(skip(self), fields(round = self.stats.rounds_played + 1))]
    pub fn start_round(&mut self) -> &str {
        self.stats.rounds_played += 1;
        self.round.start(&self.source, &mut self.rng)
    }

    /// Submit a raw word to the current round
    #[instrument(skip(self, raw), fields(root = %self.round.root_word()))]
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let validator = Validator::new(&self.checker, &self.language);
        let outcome = validator.submit(raw, &mut self.round);

        if outcome.is_accepted() {
            self.stats.words_accepted += 1;
            self.stats.best_score = self.stats.best_score.max(self.round.score());
        }

        outcome
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
