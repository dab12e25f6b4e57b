//! Core domain types for the word game
//!
//! Rounds, the validation pipeline and the session that ties them together.
//! Nothing here touches the terminal; outcomes are returned as data.

mod game;
mod rejection;
mod round;
mod validator;
mod word;

pub use game::{Game, SessionStats};
pub use rejection::{Outcome, Rejection};
pub use round::{DEFAULT_ROOT_WORD, RoundState};
pub use validator::{MIN_WORD_LENGTH, Validator};
pub use word::{is_possible, letter_count, normalize};
