//! Errors returned by game operations
//!
//! Every variant is recoverable: the state is left untouched and the caller reports the
//! rejection to the player.

use crate::core::WordError;
use std::fmt;

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    /// Wrong length or non-letter characters
    Malformed(WordError),
    /// Well-formed but not in the guess dictionary
    NotInWordList(String),
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => err.fmt(f),
            Self::NotInWordList(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

/// Error type for `GameState::submit_guess`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGuess(InvalidGuess),
    /// Every board is solved or every guess is used
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(reason) => write!(f, "Invalid guess: {reason}"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<InvalidGuess> for GameError {
    fn from(reason: InvalidGuess) -> Self {
        Self::InvalidGuess(reason)
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        Self::InvalidGuess(InvalidGuess::Malformed(err))
    }
}
