//! Game state and transitions
//!
//! A `GameState` is the puzzle identity plus the append-only guess history. Everything
//! else (solved boards, feedback rows, completion) is derived from those two on demand.

use super::{GameError, InvalidGuess, NUM_BOARDS, NUM_GUESSES};
use crate::core::{Pattern, Word};
use crate::puzzle::{PuzzleId, generate_targets};
use crate::wordlists::WordLists;
use rustc_hash::{FxHashMap, FxHashSet};

/// Overall progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every target was guessed
    Won,
    /// All guesses were used before every board was solved
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Summary returned after a guess is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Board solved by this guess, if it solved one that was still open
    pub solved_board: Option<usize>,
    pub boards_completed: usize,
    pub guesses_used: usize,
    pub status: GameStatus,
}

/// One puzzle in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    id: PuzzleId,
    practice: bool,
    targets: Vec<Word>,
    guesses: Vec<Word>,
}

impl GameState {
    /// Start a fresh puzzle
    ///
    /// # Examples
    /// ```
    /// use quadrasexordle::game::{GameState, GameStatus, NUM_BOARDS};
    /// use quadrasexordle::wordlists::WordLists;
    ///
    /// let lists = WordLists::embedded().unwrap();
    /// let mut state = GameState::new(3, false, &lists);
    /// assert_eq!(state.targets().len(), NUM_BOARDS);
    ///
    /// let outcome = state.submit_guess("crane", &lists).unwrap();
    /// assert_eq!(outcome.guesses_used, 1);
    /// assert_eq!(outcome.status, GameStatus::InProgress);
    /// ```
    #[must_use]
    pub fn new(id: PuzzleId, practice: bool, lists: &WordLists) -> Self {
        Self {
            id,
            practice,
            targets: generate_targets(id, lists),
            guesses: Vec::new(),
        }
    }

    /// Rebuild a state from stored parts
    ///
    /// Returns `None` unless there is exactly one target per board and no more guesses than
    /// the limit allows.
    #[must_use]
    pub fn from_parts(
        id: PuzzleId,
        practice: bool,
        targets: Vec<Word>,
        guesses: Vec<Word>,
    ) -> Option<Self> {
        if targets.len() != NUM_BOARDS || guesses.len() > NUM_GUESSES {
            return None;
        }
        Some(Self {
            id,
            practice,
            targets,
            guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PuzzleId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn is_practice(&self) -> bool {
        self.practice
    }

    /// Targets in board order
    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Accepted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        NUM_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Header title, e.g. "Daily Quadrasexordle #12"
    #[must_use]
    pub fn title(&self) -> String {
        if self.practice {
            "Practice Quadrasexordle".to_string()
        } else {
            format!("Daily Quadrasexordle #{}", self.id)
        }
    }

    /// Validate and record a guess
    ///
    /// Input is case-insensitive. On error the state is unchanged and no guess is used.
    ///
    /// # Errors
    /// - `GameError::GameOver` if every board is solved or every guess is used
    /// - `GameError::InvalidGuess` if the input is not a 5-letter word from the guess list
    pub fn submit_guess(
        &mut self,
        input: &str,
        lists: &WordLists,
    ) -> Result<GuessOutcome, GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }

        let word = Word::new(input)?;
        if !lists.is_valid_guess(&word) {
            return Err(InvalidGuess::NotInWordList(word.text().to_string()).into());
        }

        let already_guessed = self.guesses.contains(&word);
        let solved_board = if already_guessed {
            None
        } else {
            self.targets.iter().position(|target| *target == word)
        };

        self.guesses.push(word);

        Ok(GuessOutcome {
            solved_board,
            boards_completed: self.boards_completed(),
            guesses_used: self.guesses.len(),
            status: self.status(),
        })
    }

    /// Number of boards whose target appears among the guesses
    #[must_use]
    pub fn boards_completed(&self) -> usize {
        let guessed: FxHashSet<&Word> = self.guesses.iter().collect();
        self.targets
            .iter()
            .filter(|target| guessed.contains(target))
            .count()
    }

    /// True iff every target appears among the guesses
    #[must_use]
    pub fn all_words_guessed(&self) -> bool {
        self.boards_completed() == self.targets.len()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.all_words_guessed() {
            GameStatus::Won
        } else if self.guesses.len() >= NUM_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Index into `guesses` of the guess that solved `board`
    #[must_use]
    pub fn solved_at(&self, board: usize) -> Option<usize> {
        let target = self.targets.get(board)?;
        self.guesses.iter().position(|guess| guess == target)
    }

    /// Solving guess index per board, in board order
    #[must_use]
    pub fn solve_indices(&self) -> Vec<Option<usize>> {
        let mut first_seen: FxHashMap<&Word, usize> = FxHashMap::default();
        for (i, guess) in self.guesses.iter().enumerate() {
            first_seen.entry(guess).or_insert(i);
        }
        self.targets
            .iter()
            .map(|target| first_seen.get(target).copied())
            .collect()
    }

    #[must_use]
    pub fn is_board_solved(&self, board: usize) -> bool {
        self.solved_at(board).is_some()
    }

    /// Feedback rows shown on `board`
    ///
    /// A solved board stops at the guess that solved it; later guesses do not appear.
    #[must_use]
    pub fn board_rows(&self, board: usize) -> Vec<(&Word, Pattern)> {
        let Some(target) = self.targets.get(board) else {
            return Vec::new();
        };
        let visible = self.solved_at(board).map_or(self.guesses.len(), |i| i + 1);
        self.guesses[..visible]
            .iter()
            .map(|guess| (guess, Pattern::calculate(guess, target)))
            .collect()
    }

    /// Most recent row on `board`, if any guess has been made
    #[must_use]
    pub fn latest_row(&self, board: usize) -> Option<(&Word, Pattern)> {
        let target = self.targets.get(board)?;
        let last = match self.solved_at(board) {
            Some(i) => i,
            None => self.guesses.len().checked_sub(1)?,
        };
        let guess = &self.guesses[last];
        Some((guess, Pattern::calculate(guess, target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::GUESSES;

    fn lists() -> WordLists {
        WordLists::embedded().unwrap()
    }

    /// A valid guess that is not one of this puzzle's targets
    fn filler(state: &GameState) -> String {
        GUESSES
            .iter()
            .find(|w| {
                let word = Word::new(w).unwrap();
                !state.targets().contains(&word)
            })
            .unwrap()
            .to_string()
    }

    #[test]
    fn new_game_has_no_guesses() {
        let state = GameState::new(10, false, &lists());
        assert_eq!(state.id(), 10);
        assert!(!state.is_practice());
        assert_eq!(state.targets().len(), NUM_BOARDS);
        assert_eq!(state.num_guesses(), 0);
        assert_eq!(state.guesses_remaining(), NUM_GUESSES);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.boards_completed(), 0);
    }

    #[test]
    fn same_id_same_targets() {
        let lists = lists();
        let daily = GameState::new(55, false, &lists);
        let practice = GameState::new(55, true, &lists);
        assert_eq!(daily.targets(), practice.targets());
    }

    #[test]
    fn titles() {
        let lists = lists();
        assert_eq!(
            GameState::new(12, false, &lists).title(),
            "Daily Quadrasexordle #12"
        );
        assert_eq!(
            GameState::new(12, true, &lists).title(),
            "Practice Quadrasexordle"
        );
    }

    #[test]
    fn guess_is_normalized_and_recorded() {
        let lists = lists();
        let mut state = GameState::new(1, false, &lists);
        let word = filler(&state);

        let outcome = state.submit_guess(&word.to_lowercase(), &lists).unwrap();
        assert_eq!(outcome.guesses_used, 1);
        assert_eq!(outcome.solved_board, None);
        assert_eq!(state.guesses()[0].text(), word.to_uppercase());
    }

    #[test]
    fn invalid_guesses_leave_state_unchanged() {
        let lists = lists();
        let mut state = GameState::new(2, false, &lists);
        let before = state.clone();

        assert!(matches!(
            state.submit_guess("abc", &lists),
            Err(GameError::InvalidGuess(InvalidGuess::Malformed(_)))
        ));
        assert!(matches!(
            state.submit_guess("cr4ne", &lists),
            Err(GameError::InvalidGuess(InvalidGuess::Malformed(_)))
        ));
        assert_eq!(
            state.submit_guess("xqzvk", &lists),
            Err(GameError::InvalidGuess(InvalidGuess::NotInWordList(
                "XQZVK".to_string()
            )))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn guessing_a_target_solves_its_board() {
        let lists = lists();
        let mut state = GameState::new(3, false, &lists);
        let target = state.targets()[17].clone();

        let outcome = state.submit_guess(target.text(), &lists).unwrap();
        assert_eq!(outcome.solved_board, Some(17));
        assert_eq!(outcome.boards_completed, 1);
        assert!(state.is_board_solved(17));
        assert_eq!(state.solved_at(17), Some(0));
    }

    #[test]
    fn repeating_a_solved_target_solves_nothing_new() {
        let lists = lists();
        let mut state = GameState::new(3, false, &lists);
        let target = state.targets()[0].clone();

        state.submit_guess(target.text(), &lists).unwrap();
        let outcome = state.submit_guess(target.text(), &lists).unwrap();
        assert_eq!(outcome.solved_board, None);
        assert_eq!(outcome.boards_completed, 1);
        assert_eq!(outcome.guesses_used, 2);
    }

    #[test]
    fn guessing_every_target_wins() {
        let lists = lists();
        let mut state = GameState::new(4, false, &lists);
        let targets = state.targets().to_vec();

        for target in &targets {
            state.submit_guess(target.text(), &lists).unwrap();
        }

        assert!(state.all_words_guessed());
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.boards_completed(), NUM_BOARDS);
        assert_eq!(
            state.submit_guess(targets[0].text(), &lists),
            Err(GameError::GameOver)
        );
        assert_eq!(state.num_guesses(), NUM_BOARDS);
    }

    #[test]
    fn guess_limit_is_a_hard_stop() {
        let lists = lists();
        let mut state = GameState::new(5, false, &lists);
        let word = filler(&state);

        for _ in 0..NUM_GUESSES {
            state.submit_guess(&word, &lists).unwrap();
        }
        assert_eq!(state.num_guesses(), NUM_GUESSES);
        assert_eq!(state.status(), GameStatus::Lost);

        assert_eq!(state.submit_guess(&word, &lists), Err(GameError::GameOver));
        let target = state.targets()[0].clone();
        assert_eq!(
            state.submit_guess(target.text(), &lists),
            Err(GameError::GameOver)
        );
        assert_eq!(state.num_guesses(), NUM_GUESSES);
    }

    #[test]
    fn game_over_is_reported_before_invalid_input() {
        let lists = lists();
        let mut state = GameState::new(5, false, &lists);
        let word = filler(&state);
        for _ in 0..NUM_GUESSES {
            state.submit_guess(&word, &lists).unwrap();
        }
        assert_eq!(state.submit_guess("??", &lists), Err(GameError::GameOver));
    }

    #[test]
    fn one_missing_target_keeps_game_unsolved() {
        let lists = lists();
        let mut state = GameState::new(6, false, &lists);
        let targets = state.targets().to_vec();
        let word = filler(&state);

        for target in &targets[..NUM_BOARDS - 1] {
            state.submit_guess(target.text(), &lists).unwrap();
        }
        for _ in 0..5 {
            state.submit_guess(&word, &lists).unwrap();
        }

        assert_eq!(state.num_guesses(), 68);
        assert_eq!(state.boards_completed(), NUM_BOARDS - 1);
        assert!(!state.all_words_guessed());
        assert_eq!(state.status(), GameStatus::InProgress);

        let outcome = state
            .submit_guess(targets[NUM_BOARDS - 1].text(), &lists)
            .unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.guesses_used, NUM_GUESSES);
    }

    #[test]
    fn winning_on_the_last_guess_is_a_win() {
        let lists = lists();
        let mut state = GameState::new(8, false, &lists);
        let targets = state.targets().to_vec();
        let word = filler(&state);

        for _ in 0..NUM_GUESSES - NUM_BOARDS {
            state.submit_guess(&word, &lists).unwrap();
        }
        for target in &targets {
            state.submit_guess(target.text(), &lists).unwrap();
        }
        assert_eq!(state.num_guesses(), NUM_GUESSES);
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn solved_boards_freeze_their_rows() {
        let lists = lists();
        let mut state = GameState::new(9, false, &lists);
        let word = filler(&state);
        let target = state.targets()[5].clone();

        state.submit_guess(&word, &lists).unwrap();
        state.submit_guess(target.text(), &lists).unwrap();
        state.submit_guess(&word, &lists).unwrap();

        let rows = state.board_rows(5);
        assert_eq!(rows.len(), 2);
        assert!(rows[1].1.is_perfect());
        assert_eq!(state.latest_row(5).unwrap().0, &target);

        // Unsolved boards show every guess
        let open = (0..NUM_BOARDS).find(|&b| !state.is_board_solved(b)).unwrap();
        assert_eq!(state.board_rows(open).len(), 3);
        assert_eq!(state.latest_row(open).unwrap().0.text(), word.to_uppercase());
    }

    #[test]
    fn solve_indices_match_solved_at() {
        let lists = lists();
        let mut state = GameState::new(11, false, &lists);
        let targets = state.targets().to_vec();
        state.submit_guess(targets[3].text(), &lists).unwrap();
        state.submit_guess(targets[60].text(), &lists).unwrap();

        let indices = state.solve_indices();
        assert_eq!(indices.len(), NUM_BOARDS);
        for (board, index) in indices.iter().enumerate() {
            assert_eq!(*index, state.solved_at(board));
        }
        assert_eq!(indices[3], Some(0));
        assert_eq!(indices[60], Some(1));
    }

    #[test]
    fn rows_for_missing_board_are_empty() {
        let state = GameState::new(1, false, &lists());
        assert!(state.board_rows(NUM_BOARDS).is_empty());
        assert!(state.latest_row(0).is_none());
        assert_eq!(state.solved_at(NUM_BOARDS), None);
    }

    #[test]
    fn from_parts_enforces_shape() {
        let lists = lists();
        let state = GameState::new(12, true, &lists);
        let targets = state.targets().to_vec();

        let restored =
            GameState::from_parts(12, true, targets.clone(), Vec::new()).unwrap();
        assert_eq!(restored, state);

        assert!(GameState::from_parts(12, true, targets[..63].to_vec(), Vec::new()).is_none());
        let too_many = vec![targets[0].clone(); NUM_GUESSES + 1];
        assert!(GameState::from_parts(12, true, targets, too_many).is_none());
    }
}
