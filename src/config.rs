//! Game configuration
//!
//! Loaded from an optional TOML file; command-line flags override file values.
//!
//! ```toml
//! start_words = "data/start.txt"
//! dictionary = "/usr/share/dict/words"
//! language = "en"
//! seed = 42
//! require_word_source = false
//! log_file = "word_scramble.log"
//! ```

use crate::wordlists::{
    ENGLISH, EmbeddedWords, Fallback, FileWords, WordListDictionary, WordSource, WordSourceError,
};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Root word list; the embedded list is used when unset
    #[serde(default)]
    pub start_words: Option<PathBuf>,

    /// Dictionary file; the embedded English list is used when unset
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    /// Language passed to the spell checker
    #[serde(default = "default_language")]
    pub language: String,

    /// Seed for root word selection
    #[serde(default)]
    pub seed: Option<u64>,

    /// Treat a missing or unreadable `start_words` file as fatal instead of
    /// falling back to the embedded list
    #[serde(default)]
    pub require_word_source: bool,

    /// Where tracing output is written
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_language() -> String {
    ENGLISH.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("word_scramble.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: None,
            dictionary: None,
            language: default_language(),
            seed: None,
            require_word_source: false,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        let config = Self::from_toml(&content)?;
        info!(language = %config.language, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on invalid TOML or unknown keys.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))?;

        if config.language.trim().is_empty() {
            return Err(ConfigError::new("language must not be empty"));
        }

        Ok(config)
    }

    /// Build the root word source described by this config
    ///
    /// A configured file falls back to the embedded list unless
    /// `require_word_source` is set.
    #[must_use]
    pub fn word_source(&self) -> Box<dyn WordSource> {
        match (&self.start_words, self.require_word_source) {
            (Some(path), true) => Box::new(FileWords::new(path)),
            (Some(path), false) => Box::new(Fallback::new(FileWords::new(path), EmbeddedWords)),
            (None, _) => Box::new(EmbeddedWords),
        }
    }

    /// Fail early when a required word source can't be used
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError`] if `require_word_source` is set and the
    /// configured file is missing, unreadable or empty.
    pub fn verify_word_source(&self) -> Result<(), WordSourceError> {
        if !self.require_word_source {
            return Ok(());
        }

        let Some(path) = &self.start_words else {
            return Err(WordSourceError::new(
                "require_word_source is set but no start_words file is configured",
            ));
        };

        let words = FileWords::new(path).root_word_candidates()?;
        if words.is_empty() {
            return Err(WordSourceError::new(format!(
                "{} contains no words",
                path.display()
            )));
        }

        Ok(())
    }

    /// Build the spell checker described by this config
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a configured dictionary file can't be read.
    pub fn spell_checker(&self) -> io::Result<WordListDictionary> {
        match &self.dictionary {
            Some(path) => WordListDictionary::from_file(path, self.language.clone()),
            None => Ok(WordListDictionary::new(
                self.language.clone(),
                crate::wordlists::DICTIONARY,
            )),
        }
    }
}

/// Configuration error
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking
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
