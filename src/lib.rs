//! # word-match
//!
//! Core of a multi-game bilingual word-matching client.
//!
//! Users run up to 20 independent games. Each game shows a shuffled list of
//! English/French words; typing the focused word matches it, clicking a
//! word pins focus on it, and word count and font size can be changed.
//! Every state-changing action is undoable per game.
//!
//! ## Design Principles
//!
//! 1. **Snapshot discipline**: every recorded action captures the game's
//!    state before and after by value. Undo/redo re-establish those
//!    snapshots and never alias live state.
//!
//! 2. **Per-game history**: the store maps each game id to its own linear
//!    `CommandLog`. Histories never interact and die with their game.
//!
//! 3. **No errors at the boundary**: missing games, redundant changes and
//!    failed fetches are no-ops or degrade to empty word lists.
//!
//! ## Modules
//!
//! - `core`: Game ids, words/languages, configuration, RNG, errors
//! - `game`: Per-game state machine and derived views
//! - `history`: Commands and the undo/redo log
//! - `words`: Word-list providers
//! - `store`: The game collection and two-phase fetches
//!
//! ## Example
//!
//! ```
//! use word_match::{FetchError, GameStore, StoreConfig, Word};
//!
//! let provider = |count: usize| -> Result<Vec<Word>, FetchError> {
//!     Ok(vec![Word::new("cat", "chat"), Word::new("dog", "chien")]
//!         .into_iter()
//!         .cycle()
//!         .take(count)
//!         .collect())
//! };
//! let config = StoreConfig::default().with_initial_word_count(2);
//! let mut store = GameStore::with_provider(config, provider);
//!
//! let id = store.create_game().unwrap();
//! assert!(store.submit_guess(id, "CAT"));
//! assert_eq!(store.game(id).unwrap().focused_index(), Some(1));
//!
//! assert!(store.undo(id));
//! assert_eq!(store.game(id).unwrap().matched(), 0);
//! ```

pub mod core;
pub mod game;
pub mod history;
pub mod words;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    GameId, Language, Word,
    StoreConfig, MAX_FONT, MAX_WORD_COUNT,
    GameRng,
    ConfigError, FetchError,
};

pub use crate::game::{Focus, Game, GameSnapshot, GameStatus, WordState};

pub use crate::history::{Command, CommandKind, CommandLog};

pub use crate::words::{fetch_words, CatalogProvider, WordProvider};
#[cfg(feature = "http")]
pub use crate::words::HttpProvider;

pub use crate::store::{GameStore, RequestTarget, WordRequest};
