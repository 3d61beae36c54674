//! Store configuration.
//!
//! `StoreConfig` controls how many games a store holds and what a freshly
//! created game looks like. The word-count and font limits are fixed
//! contracts (word services only accept `1..=9999`, fonts are `0..=100`)
//! and live here as constants rather than config fields.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::word::Language;

/// Largest word count a game can hold before it is in the
/// invalid-parameters state.
pub const MAX_WORD_COUNT: i64 = 9999;

/// Largest font size. Larger values are clamped.
pub const MAX_FONT: u32 = 100;

/// Configuration for a `GameStore`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of games alive at once.
    pub max_games: usize,

    /// Word count of a newly created game.
    pub initial_word_count: i64,

    /// Font size of a newly created game.
    pub default_font: u32,

    /// Language the store starts in.
    pub language: Language,

    /// Seed for the offline word catalog shuffle.
    /// Same seed produces the same word lists.
    pub seed: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_games: 20,
            initial_word_count: 20,
            default_font: 16,
            language: Language::English,
            seed: 42,
        }
    }
}

impl StoreConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use word_match::core::{Language, StoreConfig};
    ///
    /// let config = StoreConfig::from_json(r#"{"max_games": 5, "language": "french"}"#).unwrap();
    /// assert_eq!(config.max_games, 5);
    /// assert_eq!(config.language, Language::French);
    /// assert_eq!(config.initial_word_count, 20);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config against the fixed limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_games == 0 {
            return Err(ConfigError::NoGamesAllowed);
        }
        if self.default_font > MAX_FONT {
            return Err(ConfigError::FontOutOfRange {
                font: self.default_font,
                max: MAX_FONT,
            });
        }
        if !(0..=MAX_WORD_COUNT).contains(&self.initial_word_count) {
            return Err(ConfigError::WordCountOutOfRange {
                count: self.initial_word_count,
                max: MAX_WORD_COUNT,
            });
        }
        Ok(())
    }

    /// Set the game limit.
    #[must_use]
    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.max_games = max_games;
        self
    }

    /// Set the word count of new games.
    #[must_use]
    pub fn with_initial_word_count(mut self, count: i64) -> Self {
        self.initial_word_count = count;
        self
    }

    /// Set the font size of new games.
    #[must_use]
    pub fn with_default_font(mut self, font: u32) -> Self {
        self.default_font = font;
        self
    }

    /// Set the starting language.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the catalog seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
