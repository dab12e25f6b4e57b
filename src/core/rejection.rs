//! Submission outcomes
//!
//! Rejections are returned as data; the front-end decides how to show them.

use std::fmt;

/// Reason a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Blank input after normalization. Front-ends ignore it silently.
    Empty,
    /// Already played this round
    NotOriginal,
    /// Cannot be spelled from the root word's letters
    NotPossible,
    /// Shorter than three letters, or not a dictionary word
    NotReal,
}

impl Rejection {
    /// Every rejection kind, in pipeline order
    pub const ALL: [Self; 4] = [
        Self::Empty,
        Self::NotOriginal,
        Self::NotPossible,
        Self::NotReal,
    ];

    /// Short headline for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Empty => "No word entered",
            Self::NotOriginal => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Longer explanation shown under the title
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "Type a word first",
            Self::NotOriginal => "Be more original",
            Self::NotPossible => "You can't just make them up, you know!",
            Self::NotReal => "That isn't a real word",
        }
    }

    /// Whether front-ends should stay quiet about this rejection
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Result of submitting a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The word was added to the round's history
    Accepted {
        /// Normalized word
        word: String,
        /// Points added to the score
        points: usize,
    },
    /// The round state was left untouched
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}
