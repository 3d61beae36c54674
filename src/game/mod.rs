//! Per-game state machine.
//!
//! A `Game` holds one session's word list and progress. Focus is an
//! explicit two-state machine (`Focus::Auto` / `Focus::Pinned`); completion
//! is always derived, see `GameStatus`.

pub mod state;
pub mod view;

pub use state::{word_count_in_range, Focus, Game, GameSnapshot};
pub use view::{GameStatus, WordState};
