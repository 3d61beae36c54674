//! A single word-matching game.
//!
//! ## Game
//!
//! Owns the word list, the completion mask, focus and font. All mutating
//! methods are crate-private: the store wraps each one in the
//! snapshot-before / mutate / snapshot-after discipline that feeds the
//! game's command log.
//!
//! ## GameSnapshot
//!
//! Value copy of every mutable field. Uses `im` persistent vectors so
//! taking a snapshot is O(1) and later mutations never alias it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameId, Language, Word, MAX_FONT, MAX_WORD_COUNT};

/// Which word accepts typed input.
///
/// `Auto` always points at the lowest-index incomplete word (`None` once
/// every word is matched). `Pinned` is a user override that suspends
/// auto-advance until the same word is clicked again or a guess matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
    Auto(Option<usize>),
    Pinned(usize),
}

impl Focus {
    /// Index of the focused word, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Focus::Auto(index) => index,
            Focus::Pinned(index) => Some(index),
        }
    }

    /// True for a user override.
    #[must_use]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Focus::Pinned(_))
    }
}

/// Every mutable field of a game, captured by value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub words: Vector<Word>,
    pub completed: Vector<bool>,
    pub word_count: i64,
    pub matched: usize,
    pub focus: Focus,
    pub font: u32,
    pub committed_font: u32,
}

/// One independent word-matching session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    state: GameSnapshot,
}

/// Whether a word count is inside `0..=MAX_WORD_COUNT`.
#[must_use]
pub fn word_count_in_range(count: i64) -> bool {
    (0..=MAX_WORD_COUNT).contains(&count)
}

fn blank_mask(word_count: i64) -> Vector<bool> {
    if word_count_in_range(word_count) {
        std::iter::repeat(false).take(word_count as usize).collect()
    } else {
        Vector::new()
    }
}

impl Game {
    /// Create a fresh game: nothing matched, focus on the first word.
    #[must_use]
    pub fn new(id: GameId, words: Vec<Word>, word_count: i64, font: u32) -> Self {
        let font = font.min(MAX_FONT);
        let mut game = Self {
            id,
            state: GameSnapshot {
                words: Vector::new(),
                completed: Vector::new(),
                word_count,
                matched: 0,
                focus: Focus::Auto(None),
                font,
                committed_font: font,
            },
        };
        game.replace_words(word_count, words);
        game
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// The words in display order. May be shorter than `word_count` when
    /// the fetch failed.
    #[must_use]
    pub fn words(&self) -> &Vector<Word> {
        &self.state.words
    }

    /// Word at `index`, if the list has one there.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.state.words.get(index)
    }

    #[must_use]
    pub fn completed(&self) -> &Vector<bool> {
        &self.state.completed
    }

    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.state.completed.get(index).copied().unwrap_or(false)
    }

    /// Requested word count, stored exactly as given.
    #[must_use]
    pub fn word_count(&self) -> i64 {
        self.state.word_count
    }

    /// Number of matched words.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.state.matched
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.state.focus.index()
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.state.focus.is_pinned()
    }

    /// Live font size.
    #[must_use]
    pub fn font(&self) -> u32 {
        self.state.font
    }

    /// Font size as of the last recorded font command.
    #[must_use]
    pub fn committed_font(&self) -> u32 {
        self.state.committed_font
    }

    /// False in the invalid-parameters state.
    #[must_use]
    pub fn has_valid_parameters(&self) -> bool {
        word_count_in_range(self.state.word_count)
    }

    /// Every word matched. Derived on each call, never cached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_valid_parameters() && self.state.matched as i64 == self.state.word_count
    }

    // === Snapshots ===

    /// Capture the mutable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.clone()
    }

    /// Re-establish a captured state. Idempotent.
    pub fn restore(&mut self, snapshot: &GameSnapshot) {
        self.state = snapshot.clone();
    }

    // === Transitions ===

    fn lowest_incomplete(&self) -> Option<usize> {
        self.state.completed.iter().position(|done| !done)
    }

    /// Match `input` against the focused word.
    ///
    /// Returns true and advances focus when it matches; leaves the game
    /// untouched otherwise.
    pub(crate) fn apply_guess(&mut self, input: &str, language: Language) -> bool {
        let Some(index) = self.focused_index() else {
            return false;
        };
        let Some(word) = self.state.words.get(index) else {
            return false;
        };
        if !word.matches(input, language) || index >= self.state.completed.len() {
            return false;
        }

        if !self.state.completed[index] {
            self.state.completed.set(index, true);
            self.state.matched += 1;
        }
        self.state.focus = Focus::Auto(self.lowest_incomplete());
        true
    }

    /// Pin focus on `index`, or unpin if it is already the pinned word.
    ///
    /// Pinning a completed word re-opens it. Returns false for indices
    /// outside the completion mask.
    pub(crate) fn toggle_focus(&mut self, index: usize) -> bool {
        if index >= self.state.completed.len() {
            return false;
        }

        match self.state.focus {
            Focus::Pinned(pinned) if pinned == index => {
                self.state.focus = Focus::Auto(self.lowest_incomplete());
            }
            _ => {
                if self.state.completed[index] {
                    self.state.completed.set(index, false);
                    self.state.matched -= 1;
                }
                self.state.focus = Focus::Pinned(index);
            }
        }
        true
    }

    /// Install a new word list and clear all progress.
    pub(crate) fn replace_words(&mut self, word_count: i64, words: Vec<Word>) {
        self.state.word_count = word_count;
        self.state.words = words.into_iter().collect();
        self.state.completed = blank_mask(word_count);
        self.state.matched = 0;
        self.state.focus = Focus::Auto(self.lowest_incomplete());
    }

    /// Live font update, clamped to `MAX_FONT`.
    pub(crate) fn set_font(&mut self, font: u32) {
        self.state.font = font.min(MAX_FONT);
    }

    /// Font update that becomes the new committed value.
    pub(crate) fn commit_font(&mut self, font: u32) {
        let font = font.min(MAX_FONT);
        self.state.font = font;
        self.state.committed_font = font;
    }

    /// Snapshot as of the last committed font: the live (uncommitted) font
    /// is replaced by the committed one.
    pub(crate) fn committed_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            font: self.state.committed_font,
            ..self.snapshot()
        }
    }
}
