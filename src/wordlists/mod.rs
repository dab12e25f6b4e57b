//! Word lists for the game
//!
//! Root word sources and the dictionary used for spell checking. Both ship with
//! embedded defaults compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;
mod source;

pub use dictionary::{ENGLISH, SpellChecker, WordListDictionary};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{EmbeddedWords, Fallback, FileWords, WordSource, WordSourceError};
