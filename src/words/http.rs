//! HTTP word provider.
//!
//! Talks to a word service exposing
//! `GET {base_url}/myWordsApi/i18nwords?numWords={count}`, which answers
//! with a JSON array of `{"en-CA": .., "fr-CA": ..}` objects.

use reqwest::blocking::Client;
use tracing::debug;

use crate::core::{FetchError, Word};

use super::provider::WordProvider;

const WORDS_PATH: &str = "/myWordsApi/i18nwords";

/// Blocking client for a remote word service.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl HttpProvider {
    /// Provider for the service rooted at `base_url`
    /// (for example `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for `count` words.
    #[must_use]
    pub fn url(&self, count: usize) -> String {
        format!("{}{}?numWords={}", self.base_url, WORDS_PATH, count)
    }
}

impl WordProvider for HttpProvider {
    fn fetch(&mut self, count: usize) -> Result<Vec<Word>, FetchError> {
        let url = self.url(count);
        debug!(%url, "fetching words");

        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        let words: Vec<Word> = serde_json::from_str(&body)?;
        Ok(words)
    }
}
