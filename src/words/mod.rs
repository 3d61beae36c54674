//! Word-list providers.
//!
//! The store treats word fetching as an opaque call through
//! `WordProvider`. Two implementations ship with the crate:
//!
//! - `CatalogProvider`: offline, deterministic shuffles of a built-in catalog
//! - `HttpProvider` (feature `http`): a remote word service

pub mod provider;
pub mod catalog;
#[cfg(feature = "http")]
pub mod http;

pub use provider::{fetch_words, WordProvider};
pub use catalog::CatalogProvider;
#[cfg(feature = "http")]
pub use http::HttpProvider;
