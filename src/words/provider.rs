//! Word-list provider seam.
//!
//! Providers are only ever asked for `1..=MAX_WORD_COUNT` words. The store
//! goes through [`fetch_words`], which short-circuits everything else and
//! swallows provider failures into an empty list.

use tracing::{trace, warn};

use crate::core::{FetchError, Word, MAX_WORD_COUNT};

/// Source of fresh word lists.
pub trait WordProvider {
    /// Produce `count` words. `count` is always in `1..=MAX_WORD_COUNT`.
    fn fetch(&mut self, count: usize) -> Result<Vec<Word>, FetchError>;
}

impl<F> WordProvider for F
where
    F: FnMut(usize) -> Result<Vec<Word>, FetchError>,
{
    fn fetch(&mut self, count: usize) -> Result<Vec<Word>, FetchError> {
        self(count)
    }
}

/// Fetch `count` words, never failing.
///
/// Counts outside `1..=MAX_WORD_COUNT` return an empty list without calling
/// the provider; a provider error also yields an empty list.
pub fn fetch_words<P: WordProvider + ?Sized>(provider: &mut P, count: i64) -> Vec<Word> {
    if count <= 0 || count > MAX_WORD_COUNT {
        trace!(count, "word count out of fetch range");
        return Vec::new();
    }

    match provider.fetch(count as usize) {
        Ok(words) => words,
        Err(err) => {
            warn!(count, error = %err, "word fetch failed, using empty list");
            Vec::new()
        }
    }
}
