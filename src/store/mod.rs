//! Game collection, selection and dispatch to per-game histories.

pub mod game_store;
pub mod request;

pub use game_store::GameStore;
pub use request::{RequestTarget, WordRequest};
