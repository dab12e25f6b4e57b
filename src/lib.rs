//! Word Scramble
//!
//! A casual word game: the player is shown a random root word and builds as many
//! real words as possible from its letters. Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Outcome, Rejection, RoundState, Validator};
//! use word_scramble::wordlists::WordListDictionary;
//!
//! let dictionary = WordListDictionary::embedded();
//! let validator = Validator::new(&dictionary, "en");
//! let mut round = RoundState::with_root("silkworm");
//!
//! assert!(matches!(validator.submit("silk", &mut round), Outcome::Accepted { .. }));
//! assert_eq!(
//!     validator.submit("silkworms", &mut round),
//!     Outcome::Rejected(Rejection::NotPossible)
//! );
//! assert_eq!(round.score(), 4);
//! ```

// Core domain types
pub mod core;

// Word sources and dictionary
pub mod wordlists;

// Configuration file and defaults
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
