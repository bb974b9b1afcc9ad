//! Game state machine
//!
//! Guess validation, per-board feedback, completion, and the shareable summary.

mod error;
mod share;
mod state;

pub use error::{GameError, InvalidGuess};
pub use share::{GAME_URL, share_text};
pub use state::{GameState, GameStatus, GuessOutcome};

/// Simultaneous boards in every puzzle
pub const NUM_BOARDS: usize = 64;

/// Guesses allowed per puzzle
pub const NUM_GUESSES: usize = 69;
