//! A persisted play session
//!
//! `Session` owns the current `GameState` and the slot it is saved to. Every mutation is
//! completed in memory first and then written out; a failed write is logged and play
//! continues.
//!
//! Lifecycle: `Session::resume` applies the load policy (resume today's daily or any
//! practice game, otherwise start today's daily), practice games are entered and left
//! explicitly, and the session is dropped when the front end exits.

use super::{StateStore, StorageError, deserialize, serialize};
use crate::game::{GameError, GameState, GuessOutcome};
use crate::puzzle::{Calendar, PuzzleId, random_practice_id};
use crate::wordlists::WordLists;

/// The current game plus its storage slot
#[derive(Debug)]
pub struct Session<'a, S: StateStore> {
    state: GameState,
    store: S,
    lists: &'a WordLists,
    calendar: Calendar,
    /// Daily game set aside while a practice game is running
    suspended_daily: Option<GameState>,
}

impl<'a, S: StateStore> Session<'a, S> {
    /// Open a session against today's local date
    pub fn resume(store: S, lists: &'a WordLists, calendar: Calendar) -> Self {
        let today = calendar.todays_id();
        Self::resume_on(store, lists, calendar, today)
    }

    /// Open a session as if `today` were the current daily ID
    pub fn resume_on(
        store: S,
        lists: &'a WordLists,
        calendar: Calendar,
        today: PuzzleId,
    ) -> Self {
        let stored = load_stored(&store, today, true);
        let fresh = stored.is_none();
        let mut session = Self {
            state: stored.unwrap_or_else(|| GameState::new(today, false, lists)),
            store,
            lists,
            calendar,
            suspended_daily: None,
        };

        if fresh {
            tracing::info!(id = today, "starting daily puzzle");
            session.persist();
        }
        session
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Replace the current game with a fresh puzzle
    pub fn start_game(&mut self, id: PuzzleId, practice: bool) {
        tracing::info!(id, practice, "starting new game");
        self.state = GameState::new(id, practice, self.lists);
        self.persist();
    }

    /// Play a guess on every board
    ///
    /// # Errors
    /// Same as `GameState::submit_guess`; nothing is written on error.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        let outcome = self.state.submit_guess(input, self.lists)?;
        tracing::debug!(
            guesses = outcome.guesses_used,
            boards = outcome.boards_completed,
            "guess accepted"
        );
        if outcome.status.is_over() {
            tracing::info!(id = self.state.id(), status = ?outcome.status, "game finished");
        }
        self.persist();
        Ok(outcome)
    }

    /// Start a random practice puzzle, setting the daily game aside
    pub fn enter_practice(&mut self) -> PuzzleId {
        if !self.state.is_practice() {
            self.suspended_daily = Some(self.state.clone());
        }
        let id = random_practice_id();
        self.start_game(id, true);
        id
    }

    /// Leave practice mode and return to today's daily puzzle
    pub fn exit_practice(&mut self) {
        let today = self.calendar.todays_id();
        self.exit_practice_on(today);
    }

    /// Leave practice mode as if `today` were the current daily ID
    ///
    /// The daily game set aside by `enter_practice` comes back if it is still today's;
    /// otherwise the load policy runs again with practice games excluded.
    pub fn exit_practice_on(&mut self, today: PuzzleId) {
        if !self.state.is_practice() {
            return;
        }

        let restored = self
            .suspended_daily
            .take()
            .filter(|daily| daily.id() == today)
            .or_else(|| load_stored(&self.store, today, false));

        match restored {
            Some(daily) => {
                tracing::info!(id = daily.id(), "returning to daily puzzle");
                self.state = daily;
                self.persist();
            }
            None => self.start_game(today, false),
        }
    }

    fn persist(&mut self) {
        let result = serialize(&self.state)
            .to_json()
            .and_then(|blob| self.store.save(&blob));
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to save game state");
        }
    }
}

/// Stored game that may be resumed, if any
///
/// Daily games resume only on their own day. Practice games never expire, but are skipped
/// when `allow_practice` is false.
fn load_stored<S: StateStore>(
    store: &S,
    today: PuzzleId,
    allow_practice: bool,
) -> Option<GameState> {
    let blob = match store.load() {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "could not read saved game");
            return None;
        }
    };

    let state = match deserialize(&blob).and_then(super::SerializedState::into_state) {
        Ok(state) => state,
        Err(StorageError::InvalidFormat(reason)) => {
            tracing::warn!(%reason, "discarding malformed saved game");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable saved game");
            return None;
        }
    };

    if state.is_practice() {
        if allow_practice {
            tracing::info!(id = state.id(), "resuming practice puzzle");
            return Some(state);
        }
        return None;
    }

    if state.id() == today {
        tracing::info!(id = state.id(), "resuming daily puzzle");
        Some(state)
    } else {
        tracing::info!(stored = state.id(), today, "saved daily puzzle is stale");
        None
    }
}
