//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Pattern, Word};
use crate::game::GameState;
use colored::{ColoredString, Colorize};

/// One letter tile colored by its feedback
fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = letter.to_string();
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Guess rendered as colored tiles
#[must_use]
pub fn colored_row(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.statuses())
        .map(|(letter, status)| tile(letter, status).to_string())
        .collect()
}

/// Fixed-width cell describing one board in the summary grid
///
/// Solved boards show the guess number that solved them; open boards show the latest
/// feedback, or dots before the first guess. When the game is over the target of an open
/// board is revealed instead.
#[must_use]
pub fn board_cell(state: &GameState, board: usize) -> String {
    if let Some(index) = state.solved_at(board) {
        return format!("{:>5}", format!("#{}", index + 1)).green().bold().to_string();
    }
    if state.status().is_over() {
        return state.targets()[board].text().red().bold().to_string();
    }
    match state.latest_row(board) {
        Some((guess, pattern)) => colored_row(guess, pattern),
        None => ".....".bright_black().to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "s" unless `count` is one
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
