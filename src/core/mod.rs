//! Core domain types
//!
//! Words and per-letter feedback. Everything here is pure and has no I/O.

mod pattern;
mod word;

pub use pattern::{LetterStatus, Pattern, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
