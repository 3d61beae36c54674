//! Pending word fetches.
//!
//! Operations that need a fresh word list come in two phases. `request_*`
//! describes the fetch and leaves every game untouched; `settle` applies
//! the result against whatever state the store is in by then. The fetch
//! itself can happen anywhere in between.

use serde::{Deserialize, Serialize};

use crate::core::{GameId, Word};
use crate::words::{fetch_words, WordProvider};

/// What a pending fetch will be used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestTarget {
    /// Words for a game that does not exist yet.
    NewGame,
    /// Words for an existing game at a new size.
    Resize(GameId),
    /// Words for an existing game at its current size.
    Reset(GameId),
}

/// A word fetch the store is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordRequest {
    target: RequestTarget,
    count: i64,
}

impl WordRequest {
    pub(crate) fn new(target: RequestTarget, count: i64) -> Self {
        Self { target, count }
    }

    #[must_use]
    pub fn target(&self) -> RequestTarget {
        self.target
    }

    /// Number of words requested, possibly outside the fetchable range.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The game this request belongs to, if it already exists.
    #[must_use]
    pub fn game(&self) -> Option<GameId> {
        match self.target {
            RequestTarget::NewGame => None,
            RequestTarget::Resize(id) | RequestTarget::Reset(id) => Some(id),
        }
    }

    /// Run the fetch through `provider`, with the usual range guard and
    /// failure-to-empty fallback.
    pub fn fetch<P: WordProvider + ?Sized>(&self, provider: &mut P) -> Vec<Word> {
        fetch_words(provider, self.count)
    }
}
