//! Seeded shuffling for the offline word catalog.
//!
//! A store seeds one `GameRng`. Each catalog fetch takes its own
//! [`GameRng::next_stream`], so the lists a store hands out depend only on
//! the seed and on how many fetches came before.
//!
//! ```
//! use word_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.next_stream().shuffle(&mut left);
//! b.next_stream().shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream used to shuffle word decks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Stream for one fetch, seeded from this one's next output.
    #[must_use]
    pub fn next_stream(&mut self) -> Self {
        Self::new(self.inner.next_u64())
    }

    /// Shuffle a deck in place.
    pub fn shuffle<T>(&mut self, deck: &mut [T]) {
        deck.shuffle(&mut self.inner);
    }
}
