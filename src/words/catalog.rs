//! Offline word provider.
//!
//! Hands out shuffled lists drawn from a fixed bilingual catalog. Every
//! fetch draws from its own stream of the seeded RNG, so a given seed always
//! yields the same sequence of lists. Requests longer than the catalog
//! cycle through fresh shuffles.

use crate::core::{FetchError, GameRng, Word};

use super::provider::WordProvider;

const BUILTIN: &[(&str, &str)] = &[
    ("apple", "pomme"),
    ("bird", "oiseau"),
    ("boat", "bateau"),
    ("book", "livre"),
    ("bread", "pain"),
    ("cat", "chat"),
    ("chair", "chaise"),
    ("cheese", "fromage"),
    ("city", "ville"),
    ("cloud", "nuage"),
    ("dog", "chien"),
    ("door", "porte"),
    ("fish", "poisson"),
    ("flower", "fleur"),
    ("forest", "forêt"),
    ("fox", "renard"),
    ("garden", "jardin"),
    ("horse", "cheval"),
    ("house", "maison"),
    ("key", "clé"),
    ("lake", "lac"),
    ("milk", "lait"),
    ("moon", "lune"),
    ("mountain", "montagne"),
    ("night", "nuit"),
    ("river", "rivière"),
    ("road", "route"),
    ("school", "école"),
    ("sea", "mer"),
    ("snow", "neige"),
    ("star", "étoile"),
    ("sun", "soleil"),
    ("table", "table"),
    ("train", "train"),
    ("tree", "arbre"),
    ("water", "eau"),
    ("window", "fenêtre"),
    ("winter", "hiver"),
];

/// Shuffled lists from a fixed catalog.
#[derive(Clone, Debug)]
pub struct CatalogProvider {
    words: Vec<Word>,
    rng: GameRng,
}

impl CatalogProvider {
    /// Provider over the built-in English/French catalog.
    #[must_use]
    pub fn builtin(seed: u64) -> Self {
        let words = BUILTIN
            .iter()
            .map(|&(english, french)| Word::new(english, french))
            .collect();
        Self::new(words, seed)
    }

    /// Provider over a custom catalog.
    #[must_use]
    pub fn new(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: GameRng::new(seed),
        }
    }

    /// Number of distinct words in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for CatalogProvider {
    fn fetch(&mut self, count: usize) -> Result<Vec<Word>, FetchError> {
        if self.words.is_empty() {
            return Err(FetchError::EmptyCatalog);
        }

        let mut stream = self.rng.next_stream();
        let mut out = Vec::with_capacity(count);
        let mut deck = self.words.clone();
        while out.len() < count {
            stream.shuffle(&mut deck);
            let take = (count - out.len()).min(deck.len());
            out.extend_from_slice(&deck[..take]);
        }
        Ok(out)
    }
}
