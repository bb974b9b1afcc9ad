//! Quadrasexordle
//!
//! Sixty-four simultaneous Wordle boards, sixty-nine guesses. Puzzles are generated
//! deterministically from an ID with MT19937, so every player gets the same daily boards.
//!
//! # Quick Start
//!
//! ```rust
//! use quadrasexordle::game::{GameState, NUM_BOARDS};
//! use quadrasexordle::wordlists::WordLists;
//!
//! let lists = WordLists::embedded().unwrap();
//! let mut state = GameState::new(42, false, &lists);
//!
//! state.submit_guess("crane", &lists).unwrap();
//! for board in 0..NUM_BOARDS {
//!     let (_guess, pattern) = state.latest_row(board).unwrap();
//!     assert!(pattern.value() <= 242);
//! }
//! ```

// Words and feedback
pub mod core;

// Puzzle numbering and target generation
pub mod puzzle;

// Word lists
pub mod wordlists;

// Game state machine
pub mod game;

// Saved games
pub mod storage;

// Runtime configuration
pub mod config;

// Log output
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
