//! Derived, read-only views of a game for the rendering layer.
//!
//! Nothing here is stored: completion and per-word display state are
//! recomputed from the game on every call.

use serde::{Deserialize, Serialize};

use super::state::Game;
use crate::core::MAX_WORD_COUNT;

/// Overall progress of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Word count outside `0..=MAX_WORD_COUNT`; nothing is interactive.
    InvalidParameters,
    /// Every word matched.
    Complete,
    InProgress { matched: usize, total: usize },
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InvalidParameters => {
                write!(f, "Invalid Num Words! Should be in 0 - {}", MAX_WORD_COUNT)
            }
            GameStatus::Complete => f.write_str("Game Completed!"),
            GameStatus::InProgress { matched, total } => {
                write!(f, "{}/{} Words Matched", matched, total)
            }
        }
    }
}

/// How one word should be displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordState {
    /// Matched, game still in progress.
    Completed,
    /// Matched, and so is every other word.
    CompletedAll,
    /// Focused by a user pin.
    PinnedFocus,
    /// Focused by auto-advance.
    Focused,
    Incomplete,
}

impl Game {
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.has_valid_parameters() {
            GameStatus::InvalidParameters
        } else if self.is_complete() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress {
                matched: self.matched(),
                total: self.word_count() as usize,
            }
        }
    }

    /// Whether typed guesses and font changes make sense right now.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self.status(), GameStatus::InProgress { .. })
    }

    /// Share of the progress bar that is complete, in `0.0..=1.0`.
    ///
    /// An empty game counts as fully complete, an invalid one as fully
    /// incomplete.
    #[must_use]
    pub fn progress_fraction(&self) -> f32 {
        match self.status() {
            GameStatus::InvalidParameters => 0.0,
            GameStatus::Complete => 1.0,
            GameStatus::InProgress { matched, total } => matched as f32 / total as f32,
        }
    }

    /// Display state of every word in the list.
    #[must_use]
    pub fn word_states(&self) -> Vec<WordState> {
        let all_done = self.is_complete();
        let focused = self.focused_index();
        let pinned = self.is_pinned();

        (0..self.words().len())
            .map(|index| {
                if self.is_completed(index) {
                    if all_done {
                        WordState::CompletedAll
                    } else {
                        WordState::Completed
                    }
                } else if focused == Some(index) {
                    if pinned {
                        WordState::PinnedFocus
                    } else {
                        WordState::Focused
                    }
                } else {
                    WordState::Incomplete
                }
            })
            .collect()
    }
}
