//! Reversible game transitions.
//!
//! A `Command` is a pair of game snapshots taken around one mutation. Undo
//! re-establishes the old snapshot, redo the new one. Both directions are
//! idempotent and never look at any other game.

use serde::{Deserialize, Serialize};

use crate::game::{Game, GameSnapshot};

/// What kind of action a command records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// A guess matched the focused word.
    Guess,
    /// Focus was pinned or unpinned.
    Focus,
    /// The word list was refetched at a new size.
    Resize,
    /// The word list was refetched at the same size.
    Reset,
    /// A font change was committed.
    Font,
}

impl CommandKind {
    /// Human-readable description for undo/redo tooltips.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CommandKind::Guess => "Match Word",
            CommandKind::Focus => "Change Focus",
            CommandKind::Resize => "Change Word Count",
            CommandKind::Reset => "Reset Game",
            CommandKind::Font => "Change Font",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// One recorded transition of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    kind: CommandKind,
    before: GameSnapshot,
    after: GameSnapshot,
}

impl Command {
    /// Record a transition from `before` to `after`.
    #[must_use]
    pub fn new(kind: CommandKind, before: GameSnapshot, after: GameSnapshot) -> Self {
        Self { kind, before, after }
    }

    #[must_use]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    #[must_use]
    pub fn before(&self) -> &GameSnapshot {
        &self.before
    }

    #[must_use]
    pub fn after(&self) -> &GameSnapshot {
        &self.after
    }

    /// Re-establish the state after the transition.
    pub fn apply(&self, game: &mut Game) {
        game.restore(&self.after);
    }

    /// Re-establish the state before the transition.
    pub fn revert(&self, game: &mut Game) {
        game.restore(&self.before);
    }
}
