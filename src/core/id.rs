//! Game identification.
//!
//! Every game owned by a `GameStore` has a unique `GameId`. Ids are handed
//! out from a strictly increasing counter and are never reused, not even
//! after the store is cleared.
//!
//! ```
//! use word_match::core::GameId;
//!
//! let first = GameId::new(0);
//! assert_eq!(first.next(), Some(GameId::new(1)));
//! assert_eq!(format!("{}", first), "Game 0");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one, `None` once the counter is spent.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<u32> for GameId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}
