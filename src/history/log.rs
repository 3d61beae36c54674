//! Linear undo/redo log.
//!
//! Commands are kept in one vector with a cursor: everything before the
//! cursor is applied, everything after it has been undone and can be
//! redone. Executing a new command drops the redo suffix, so history is a
//! line, never a tree.

use tracing::debug;

use super::command::{Command, CommandKind};
use crate::game::Game;

/// Undo/redo history for exactly one game.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    commands: Vec<Command>,
    cursor: usize,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command whose forward state is already applied.
    ///
    /// Any redo entries are discarded.
    pub fn execute(&mut self, command: Command) {
        self.commands.truncate(self.cursor);
        self.commands.push(command);
        self.cursor = self.commands.len();
    }

    /// Revert the most recent applied command. Returns false if there is
    /// nothing to undo.
    pub fn undo(&mut self, game: &mut Game) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        let command = &self.commands[self.cursor];
        command.revert(game);
        debug!(game = %game.id(), kind = %command.kind(), cursor = self.cursor, "undo");
        true
    }

    /// Re-apply the next undone command. Returns false if there is nothing
    /// to redo.
    pub fn redo(&mut self, game: &mut Game) -> bool {
        if !self.can_redo() {
            return false;
        }
        let command = &self.commands[self.cursor];
        command.apply(game);
        self.cursor += 1;
        debug!(game = %game.id(), kind = %command.kind(), cursor = self.cursor, "redo");
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// What the next undo would revert.
    #[must_use]
    pub fn undo_kind(&self) -> Option<CommandKind> {
        self.cursor.checked_sub(1).map(|i| self.commands[i].kind())
    }

    /// What the next redo would re-apply.
    #[must_use]
    pub fn redo_kind(&self) -> Option<CommandKind> {
        self.commands.get(self.cursor).map(Command::kind)
    }

    /// Number of recorded commands, applied or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of applied commands.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameId, Language, Word};

    fn game() -> Game {
        Game::new(
            GameId::new(0),
            vec![Word::new("cat", "chat"), Word::new("dog", "chien"), Word::new("fox", "renard")],
            3,
            16,
        )
    }

    fn guess(game: &mut Game, log: &mut CommandLog, input: &str) {
        let before = game.snapshot();
        assert!(game.apply_guess(input, Language::English));
        log.execute(Command::new(CommandKind::Guess, before, game.snapshot()));
    }

    #[test]
    fn test_empty_log() {
        let mut log = CommandLog::new();
        let mut game = game();
        let before = game.snapshot();

        assert!(!log.can_undo());
        assert!(!log.can_redo());
        assert!(!log.undo(&mut game));
        assert!(!log.redo(&mut game));
        assert_eq!(game.snapshot(), before);
        assert!(log.is_empty());
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut log = CommandLog::new();
        let mut game = game();
        let initial = game.snapshot();

        guess(&mut game, &mut log, "cat");
        guess(&mut game, &mut log, "dog");
        let done = game.snapshot();

        assert!(log.undo(&mut game));
        assert!(log.undo(&mut game));
        assert_eq!(game.snapshot(), initial);
        assert!(!log.can_undo());
        assert!(log.can_redo());

        assert!(log.redo(&mut game));
        assert!(log.redo(&mut game));
        assert_eq!(game.snapshot(), done);
        assert!(!log.can_redo());
    }

    #[test]
    fn test_execute_discards_redo() {
        let mut log = CommandLog::new();
        let mut game = game();

        guess(&mut game, &mut log, "cat");
        guess(&mut game, &mut log, "dog");
        log.undo(&mut game);
        log.undo(&mut game);
        assert_eq!(log.len(), 2);

        guess(&mut game, &mut log, "cat");

        assert!(!log.can_redo());
        assert_eq!(log.len(), 1);
        assert_eq!(log.cursor(), 1);
    }

    #[test]
    fn test_next_kinds() {
        let mut log = CommandLog::new();
        let mut game = game();
        assert_eq!(log.undo_kind(), None);

        guess(&mut game, &mut log, "cat");
        let before = game.snapshot();
        game.toggle_focus(2);
        log.execute(Command::new(CommandKind::Focus, before, game.snapshot()));

        assert_eq!(log.undo_kind(), Some(CommandKind::Focus));
        assert_eq!(log.redo_kind(), None);

        log.undo(&mut game);
        assert_eq!(log.undo_kind(), Some(CommandKind::Guess));
        assert_eq!(log.redo_kind(), Some(CommandKind::Focus));
    }

    #[test]
    fn test_clear() {
        let mut log = CommandLog::new();
        let mut game = game();
        guess(&mut game, &mut log, "cat");

        log.clear();

        assert!(log.is_empty());
        assert!(!log.can_undo());
    }
}
