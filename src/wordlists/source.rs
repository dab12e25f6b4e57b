//! Root word sources
//!
//! A source supplies the list a round draws its root word from. Sources are read
//! at round start, so a file can be edited between rounds.

use super::embedded::START_WORDS;
use super::loader::{load_lines, words_from_slice};
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Supplies candidate root words
pub trait WordSource {
    /// List the candidate root words
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError`] if the list cannot be read.
    fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError>;
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        (**self).root_word_candidates()
    }
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        (**self).root_word_candidates()
    }
}

/// Word source error with location tracking
#[derive(Debug, Clone, Display, Error)]
#[display("Word source error: {} at {}:{}", message, file, line)]
pub struct WordSourceError {
    /// Error message
    pub message: String,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl WordSourceError {
    /// Creates a new error with caller location tracking
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// The built-in list of root words
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        Ok(words_from_slice(START_WORDS))
    }
}

/// A newline-delimited word list on disk
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWords {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        let words = load_lines(&self.path).map_err(|e| {
            WordSourceError::new(format!("Could not load {}: {e}", self.path.display()))
        })?;
        debug!(count = words.len(), "Loaded root words");
        Ok(words)
    }
}

/// Try `primary`, and use `secondary` if it fails
///
/// The failure is logged, keeping the game playable.
#[derive(Debug, Clone)]
pub struct Fallback<P, S> {
    primary: P,
    secondary: S,
}

impl<P: WordSource, S: WordSource> Fallback<P, S> {
    #[must_use]
    pub const fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: WordSource, S: WordSource> WordSource for Fallback<P, S> {
    fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        match self.primary.root_word_candidates() {
            Ok(words) => Ok(words),
            Err(e) => {
                warn!(error = %e, "Falling back to secondary word source");
                self.secondary.root_word_candidates()
            }
        }
    }
}
