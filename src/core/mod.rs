//! Core types: game ids, words and languages, configuration, RNG, errors.
//!
//! Everything here is independent of game rules; the `game`, `history`
//! and `store` modules build on these.

pub mod id;
pub mod word;
pub mod config;
pub mod rng;
pub mod error;

pub use id::GameId;
pub use word::{Language, Word};
pub use config::{StoreConfig, MAX_FONT, MAX_WORD_COUNT};
pub use rng::GameRng;
pub use error::{ConfigError, FetchError};
