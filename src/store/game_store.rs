//! The game collection.
//!
//! `GameStore` owns every game, one `CommandLog` per game, the selection
//! and the shared language. Every state-changing game operation follows
//! the same steps:
//!
//! 1. locate the game (no-op if it is gone)
//! 2. snapshot it
//! 3. mutate it in place
//! 4. snapshot it again
//! 5. push `Command(before, after)` onto that game's log
//! 6. bump the store revision so the UI re-reads
//!
//! No operation returns an error. Absent games, redundant changes, empty
//! history and full/empty collections all come back as `false`/`None`.

use rustc_hash::FxHashMap;
use tracing::{debug, info, trace, warn};

use super::request::{RequestTarget, WordRequest};
use crate::core::{GameId, Language, StoreConfig, Word};
use crate::game::{Game, GameSnapshot};
use crate::history::{Command, CommandKind, CommandLog};
use crate::words::{CatalogProvider, WordProvider};

/// All games of one client.
pub struct GameStore<P = CatalogProvider> {
    config: StoreConfig,
    provider: P,
    games: Vec<Game>,
    histories: FxHashMap<GameId, CommandLog>,
    next_id: GameId,
    selected: Option<GameId>,
    language: Language,
    revision: u64,
}

impl GameStore<CatalogProvider> {
    /// Store backed by the built-in offline catalog, seeded from `config`.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let provider = CatalogProvider::builtin(config.seed);
        Self::with_provider(config, provider)
    }
}

impl Default for GameStore<CatalogProvider> {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl<P: WordProvider> GameStore<P> {
    /// Store that fetches words through `provider`.
    pub fn with_provider(config: StoreConfig, provider: P) -> Self {
        Self {
            language: config.language,
            config,
            provider,
            games: Vec::new(),
            histories: FxHashMap::default(),
            next_id: GameId::default(),
            selected: None,
            revision: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Games in creation order.
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// True once `max_games` games exist.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.games.len() >= self.config.max_games
    }

    #[must_use]
    pub fn selected(&self) -> Option<GameId> {
        self.selected
    }

    #[must_use]
    pub fn selected_game(&self) -> Option<&Game> {
        self.selected.and_then(|id| self.game(id))
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Counter bumped by every published change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Undo history of a game.
    #[must_use]
    pub fn history(&self, id: GameId) -> Option<&CommandLog> {
        self.histories.get(&id)
    }

    /// Mutable access to the word provider, e.g. to fetch for a pending
    /// request outside the store.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    fn publish(&mut self) {
        self.revision += 1;
    }

    // === Recorded transitions ===

    /// Run one recorded transition on game `id`.
    ///
    /// `capture` takes the "before" snapshot; `mutate` returns false when
    /// nothing changed, in which case no command is recorded.
    fn transition<C, M>(&mut self, id: GameId, kind: CommandKind, capture: C, mutate: M) -> bool
    where
        C: FnOnce(&Game) -> GameSnapshot,
        M: FnOnce(&mut Game) -> bool,
    {
        let Some(game) = self.games.iter_mut().find(|g| g.id() == id) else {
            trace!(game = %id, %kind, "no such game");
            return false;
        };

        let before = capture(&*game);
        if !mutate(&mut *game) {
            return false;
        }
        let after = game.snapshot();

        self.histories
            .entry(id)
            .or_default()
            .execute(Command::new(kind, before, after));
        debug!(game = %id, %kind, "recorded command");
        self.publish();
        true
    }

    /// Match `text` against the focused word of game `id`.
    ///
    /// Returns true iff it matched; a miss changes nothing.
    pub fn submit_guess(&mut self, id: GameId, text: &str) -> bool {
        let language = self.language;
        self.transition(id, CommandKind::Guess, Game::snapshot, |game| {
            game.apply_guess(text, language)
        })
    }

    /// Pin focus on word `index`, re-opening it if it was matched; clicking
    /// the pinned word again unpins it.
    pub fn set_focus(&mut self, id: GameId, index: usize) -> bool {
        self.transition(id, CommandKind::Focus, Game::snapshot, |game| {
            game.toggle_focus(index)
        })
    }

    /// Refetch game `id` at `count` words. Out-of-range counts are stored
    /// as given and put the game in the invalid-parameters state.
    pub fn resize_word_list(&mut self, id: GameId, count: i64) -> bool {
        match self.request_resize(id, count) {
            Some(request) => self.settle_with_provider(request).is_some(),
            None => false,
        }
    }

    /// Refetch game `id` at its current size and clear its progress.
    pub fn reset_game(&mut self, id: GameId) -> bool {
        match self.request_reset(id) {
            Some(request) => self.settle_with_provider(request).is_some(),
            None => false,
        }
    }

    /// Live font update during a drag. Not recorded.
    pub fn adjust_font(&mut self, id: GameId, size: u32) -> bool {
        let Some(game) = self.games.iter_mut().find(|g| g.id() == id) else {
            return false;
        };
        game.set_font(size);
        self.publish();
        true
    }

    /// Finish a font gesture: one command from the last committed font to
    /// `size`.
    pub fn commit_font(&mut self, id: GameId, size: u32) -> bool {
        self.transition(id, CommandKind::Font, Game::committed_snapshot, |game| {
            game.commit_font(size);
            true
        })
    }

    // === Undo / redo ===

    pub fn undo(&mut self, id: GameId) -> bool {
        let (Some(game), Some(log)) = (
            self.games.iter_mut().find(|g| g.id() == id),
            self.histories.get_mut(&id),
        ) else {
            return false;
        };
        let undone = log.undo(game);
        if undone {
            self.publish();
        }
        undone
    }

    pub fn redo(&mut self, id: GameId) -> bool {
        let (Some(game), Some(log)) = (
            self.games.iter_mut().find(|g| g.id() == id),
            self.histories.get_mut(&id),
        ) else {
            return false;
        };
        let redone = log.redo(game);
        if redone {
            self.publish();
        }
        redone
    }

    #[must_use]
    pub fn can_undo(&self, id: GameId) -> bool {
        self.histories.get(&id).is_some_and(CommandLog::can_undo)
    }

    #[must_use]
    pub fn can_redo(&self, id: GameId) -> bool {
        self.histories.get(&id).is_some_and(CommandLog::can_redo)
    }

    /// Undo on the selected game, if any.
    pub fn undo_selected(&mut self) -> bool {
        self.selected.is_some_and(|id| self.undo(id))
    }

    /// Redo on the selected game, if any.
    pub fn redo_selected(&mut self) -> bool {
        self.selected.is_some_and(|id| self.redo(id))
    }

    #[must_use]
    pub fn can_undo_selected(&self) -> bool {
        self.selected.is_some_and(|id| self.can_undo(id))
    }

    #[must_use]
    pub fn can_redo_selected(&self) -> bool {
        self.selected.is_some_and(|id| self.can_redo(id))
    }

    // === Two-phase fetches ===

    /// Start creating a game. `None` when the store is full.
    #[must_use]
    pub fn request_create(&self) -> Option<WordRequest> {
        if self.is_full() {
            trace!(max = self.config.max_games, "store full");
            return None;
        }
        Some(WordRequest::new(RequestTarget::NewGame, self.config.initial_word_count))
    }

    /// Start resizing game `id`. `None` when the game is gone or already
    /// has `count` words.
    #[must_use]
    pub fn request_resize(&self, id: GameId, count: i64) -> Option<WordRequest> {
        let game = self.game(id)?;
        if game.word_count() == count {
            trace!(game = %id, count, "word count unchanged");
            return None;
        }
        Some(WordRequest::new(RequestTarget::Resize(id), count))
    }

    /// Start resetting game `id`. `None` when the game is gone.
    #[must_use]
    pub fn request_reset(&self, id: GameId) -> Option<WordRequest> {
        let game = self.game(id)?;
        Some(WordRequest::new(RequestTarget::Reset(id), game.word_count()))
    }

    /// Apply the words fetched for `request` to the current state.
    ///
    /// Checks are repeated here, so a request that went stale while its
    /// fetch was in flight (game deleted, store filled up, size already
    /// reached, size changed under a reset) settles as a no-op. Returns the
    /// affected game.
    pub fn settle(&mut self, request: WordRequest, words: Vec<Word>) -> Option<GameId> {
        let settled = match request.target() {
            RequestTarget::NewGame => self.insert_game(words),
            RequestTarget::Resize(id) => {
                let count = request.count();
                if self.game(id).is_some_and(|game| game.word_count() == count) {
                    trace!(game = %id, count, "word count unchanged");
                    return None;
                }
                self.transition(id, CommandKind::Resize, Game::snapshot, |game| {
                    game.replace_words(count, words);
                    true
                })
                .then_some(id)
            }
            RequestTarget::Reset(id) => {
                let count = request.count();
                if self.game(id).is_some_and(|game| game.word_count() != count) {
                    warn!(game = %id, count, "word count changed since reset was requested");
                    return None;
                }
                self.transition(id, CommandKind::Reset, Game::snapshot, |game| {
                    game.replace_words(count, words);
                    true
                })
                .then_some(id)
            }
        };

        if settled.is_none() {
            warn!(?request, "request settled without effect");
        }
        settled
    }

    fn settle_with_provider(&mut self, request: WordRequest) -> Option<GameId> {
        let words = request.fetch(&mut self.provider);
        self.settle(request, words)
    }

    fn insert_game(&mut self, words: Vec<Word>) -> Option<GameId> {
        if self.is_full() {
            return None;
        }
        let id = self.next_id;
        let Some(next) = id.next() else {
            warn!(game = %id, "game ids exhausted");
            return None;
        };
        self.next_id = next;

        self.games.push(Game::new(
            id,
            words,
            self.config.initial_word_count,
            self.config.default_font,
        ));
        self.histories.insert(id, CommandLog::new());
        info!(game = %id, total = self.games.len(), "created game");
        self.publish();
        Some(id)
    }

    // === Collection / selection ===

    /// Create a game with a fresh word list. `None` when the store is full.
    pub fn create_game(&mut self) -> Option<GameId> {
        let request = self.request_create()?;
        self.settle_with_provider(request)
    }

    /// Toggle selection of game `id`. Selecting the selected game clears
    /// the selection. Returns false for unknown ids.
    pub fn select_game(&mut self, id: GameId) -> bool {
        if self.selected == Some(id) {
            self.selected = None;
        } else if self.game(id).is_some() {
            self.selected = Some(id);
        } else {
            trace!(game = %id, "no such game");
            return false;
        }
        self.publish();
        true
    }

    /// Delete game `id`, or the most recently created game for `None`.
    ///
    /// Its history goes with it. Returns the deleted id.
    pub fn delete_game(&mut self, id: Option<GameId>) -> Option<GameId> {
        let index = match id {
            Some(id) => self.games.iter().position(|g| g.id() == id)?,
            None => self.games.len().checked_sub(1)?,
        };

        let removed = self.games.remove(index).id();
        self.histories.remove(&removed);
        if self.selected == Some(removed) {
            self.selected = None;
        }
        info!(game = %removed, total = self.games.len(), "deleted game");
        self.publish();
        Some(removed)
    }

    /// Drop every game and its history. Not undoable; ids keep counting up.
    pub fn clear_games(&mut self) {
        let dropped = self.games.len();
        self.games.clear();
        self.histories.clear();
        self.selected = None;
        info!(dropped, "cleared games");
        self.publish();
    }

    /// Switch the display/matching language of every game. Not undoable.
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        self.language = language;
        info!(%language, "language changed");
        self.publish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FetchError;
    use crate::game::Focus;

    type Provider = fn(usize) -> Result<Vec<Word>, FetchError>;

    fn animals(count: usize) -> Result<Vec<Word>, FetchError> {
        let base = [("cat", "chat"), ("dog", "chien"), ("fox", "renard")];
        Ok((0..count)
            .map(|i| {
                let (en, fr) = base[i % base.len()];
                Word::new(en, fr)
            })
            .collect())
    }

    fn store() -> GameStore<Provider> {
        let config = StoreConfig::default().with_initial_word_count(3);
        GameStore::with_provider(config, animals as Provider)
    }

    #[test]
    fn test_create_game() {
        let mut store = store();
        let id = store.create_game().unwrap();

        let game = store.game(id).unwrap();
        assert_eq!(game.word_count(), 3);
        assert_eq!(game.words().len(), 3);
        assert_eq!(game.font(), 16);
        assert!(!store.can_undo(id));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_ids_increase() {
        let mut store = store();
        let a = store.create_game().unwrap();
        let b = store.create_game().unwrap();
        store.clear_games();
        let c = store.create_game().unwrap();

        assert!(a < b && b < c);
    }

    #[test]
    fn test_create_game_when_full() {
        let mut store = store();
        for _ in 0..20 {
            assert!(store.create_game().is_some());
        }
        assert!(store.is_full());
        assert!(store.create_game().is_none());
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn test_submit_guess_records_command() {
        let mut store = store();
        let id = store.create_game().unwrap();

        assert!(!store.submit_guess(id, "dog"));
        assert!(!store.can_undo(id));

        assert!(store.submit_guess(id, "CAT"));
        assert_eq!(store.game(id).unwrap().focused_index(), Some(1));
        assert!(store.can_undo(id));

        assert!(store.undo(id));
        assert_eq!(store.game(id).unwrap().matched(), 0);
        assert!(store.redo(id));
        assert_eq!(store.game(id).unwrap().matched(), 1);
    }

    #[test]
    fn test_guess_follows_language() {
        let mut store = store();
        let id = store.create_game().unwrap();

        store.set_language(Language::French);
        assert!(!store.submit_guess(id, "cat"));
        assert!(store.submit_guess(id, "chat"));
    }

    #[test]
    fn test_unknown_game_is_noop() {
        let mut store = store();
        let ghost = GameId::new(99);

        assert!(!store.submit_guess(ghost, "cat"));
        assert!(!store.set_focus(ghost, 0));
        assert!(!store.resize_word_list(ghost, 5));
        assert!(!store.reset_game(ghost));
        assert!(!store.adjust_font(ghost, 20));
        assert!(!store.commit_font(ghost, 20));
        assert!(!store.undo(ghost));
        assert!(!store.redo(ghost));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_resize_same_count_is_noop() {
        let mut store = store();
        let id = store.create_game().unwrap();

        assert!(!store.resize_word_list(id, 3));
        assert!(!store.can_undo(id));
    }

    #[test]
    fn test_resize_out_of_range() {
        let mut store = store();
        let id = store.create_game().unwrap();

        assert!(store.resize_word_list(id, 25_000));

        let game = store.game(id).unwrap();
        assert_eq!(game.word_count(), 25_000);
        assert!(!game.has_valid_parameters());
        assert!(game.words().is_empty());
        assert_eq!(game.focus(), Focus::Auto(None));

        assert!(store.resize_word_list(id, 2));
        assert!(store.game(id).unwrap().has_valid_parameters());
        assert_eq!(store.game(id).unwrap().focus(), Focus::Auto(Some(0)));
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut store = store();
        let id = store.create_game().unwrap();
        store.submit_guess(id, "cat");
        store.set_focus(id, 2);

        assert!(store.reset_game(id));

        let game = store.game(id).unwrap();
        assert_eq!(game.matched(), 0);
        assert_eq!(game.focus(), Focus::Auto(Some(0)));
        assert_eq!(store.history(id).unwrap().undo_kind(), Some(CommandKind::Reset));
    }

    #[test]
    fn test_font_drag_then_commit() {
        let mut store = store();
        let id = store.create_game().unwrap();

        for size in [18, 24, 30] {
            assert!(store.adjust_font(id, size));
        }
        assert!(!store.can_undo(id));
        assert_eq!(store.game(id).unwrap().font(), 30);

        assert!(store.commit_font(id, 30));
        assert_eq!(store.history(id).unwrap().len(), 1);

        assert!(store.undo(id));
        let game = store.game(id).unwrap();
        assert_eq!(game.font(), 16);
        assert_eq!(game.committed_font(), 16);

        assert!(store.redo(id));
        assert_eq!(store.game(id).unwrap().font(), 30);
    }

    #[test]
    fn test_histories_are_independent() {
        let mut store = store();
        let a = store.create_game().unwrap();
        let b = store.create_game().unwrap();

        store.submit_guess(a, "cat");
        store.submit_guess(b, "cat");
        store.submit_guess(b, "dog");

        assert!(store.undo(a));
        assert!(!store.can_undo(a));
        assert_eq!(store.game(b).unwrap().matched(), 2);
        assert_eq!(store.history(b).unwrap().cursor(), 2);
    }

    #[test]
    fn test_select_toggles() {
        let mut store = store();
        let a = store.create_game().unwrap();
        let b = store.create_game().unwrap();

        assert!(store.select_game(a));
        assert_eq!(store.selected(), Some(a));
        assert!(store.select_game(b));
        assert_eq!(store.selected(), Some(b));
        assert!(store.select_game(b));
        assert_eq!(store.selected(), None);
        assert!(!store.select_game(GameId::new(42)));
    }

    #[test]
    fn test_selected_undo() {
        let mut store = store();
        let id = store.create_game().unwrap();
        store.submit_guess(id, "cat");

        assert!(!store.can_undo_selected());
        assert!(!store.undo_selected());

        store.select_game(id);
        assert!(store.can_undo_selected());
        assert!(store.undo_selected());
        assert!(store.can_redo_selected());
        assert!(store.redo_selected());
    }

    #[test]
    fn test_delete_last_and_selected() {
        let mut store = store();
        let a = store.create_game().unwrap();
        let b = store.create_game().unwrap();
        let c = store.create_game().unwrap();
        store.select_game(c);

        assert_eq!(store.delete_game(None), Some(c));
        assert_eq!(store.selected(), None);
        assert!(store.history(c).is_none());

        store.select_game(b);
        assert_eq!(store.delete_game(Some(a)), Some(a));
        assert_eq!(store.selected(), Some(b));

        assert_eq!(store.delete_game(Some(a)), None);
        assert_eq!(store.delete_game(None), Some(b));
        assert_eq!(store.delete_game(None), None);
    }

    #[test]
    fn test_clear_games() {
        let mut store = store();
        let id = store.create_game().unwrap();
        store.select_game(id);
        store.submit_guess(id, "cat");

        store.clear_games();

        assert!(store.is_empty());
        assert_eq!(store.selected(), None);
        assert!(store.history(id).is_none());
        assert!(!store.can_undo(id));
    }

    #[test]
    fn test_two_phase_last_settle_wins() {
        let mut store = store();
        let id = store.create_game().unwrap();

        let first = store.request_resize(id, 5).unwrap();
        let second = store.request_resize(id, 2).unwrap();

        let words = second.fetch(store.provider_mut());
        assert_eq!(store.settle(second, words), Some(id));
        let words = first.fetch(store.provider_mut());
        assert_eq!(store.settle(first, words), Some(id));

        assert_eq!(store.game(id).unwrap().word_count(), 5);
        assert!(store.undo(id));
        assert_eq!(store.game(id).unwrap().word_count(), 2);
        assert!(store.undo(id));
        assert_eq!(store.game(id).unwrap().word_count(), 3);
    }

    #[test]
    fn test_stale_requests_settle_as_noop() {
        let mut store = store();
        let id = store.create_game().unwrap();

        let resize = store.request_resize(id, 5).unwrap();
        store.delete_game(Some(id));
        assert_eq!(store.settle(resize, Vec::new()), None);

        let config = StoreConfig::default().with_max_games(1);
        let mut small = GameStore::with_provider(config, animals as Provider);
        let create = small.request_create().unwrap();
        small.create_game();
        assert_eq!(small.settle(create, Vec::new()), None);
        assert_eq!(small.len(), 1);
    }

    #[test]
    fn test_settle_with_failed_fetch() {
        let mut store = store();
        let create = store.request_create().unwrap();

        let id = store.settle(create, Vec::new()).unwrap();

        let game = store.game(id).unwrap();
        assert_eq!(game.word_count(), 3);
        assert!(game.words().is_empty());
        assert!(!store.submit_guess(id, "cat"));
    }

    #[test]
    fn test_default_store_uses_catalog() {
        let mut store: GameStore = GameStore::default();
        let id = store.create_game().unwrap();
        assert_eq!(store.game(id).unwrap().words().len(), 20);
    }
}
