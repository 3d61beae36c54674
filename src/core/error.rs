//! Error types for the provider and configuration seams.
//!
//! Store operations never return these: a failed fetch degrades to an
//! empty word list and a no-op returns `false`. They only surface from
//! `WordProvider` implementations and `StoreConfig::from_json`.

use thiserror::Error;

/// A word provider could not produce a list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider has no words to hand out.
    #[error("word catalog is empty")]
    EmptyCatalog,

    /// The word service answered with a non-success status.
    #[error("word service returned status {0}")]
    Status(u16),

    /// The response body was not a list of words.
    #[error("malformed word list: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never completed.
    #[error("word service unreachable: {0}")]
    Transport(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

/// A store configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_games must be at least 1")]
    NoGamesAllowed,

    #[error("default font {font} exceeds max font {max}")]
    FontOutOfRange { font: u32, max: u32 },

    #[error("initial word count {count} is outside 0..={max}")]
    WordCountOutOfRange { count: i64, max: i64 },
}
