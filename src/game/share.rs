//! Shareable result text

use super::{GameState, NUM_GUESSES};
use std::fmt::Write;

/// Link appended to shared results
pub const GAME_URL: &str = "https://quadrasexordle.com/";

const BOARDS_PER_ROW: usize = 4;
const UNSOLVED: &str = "🟥🟥";

/// Keycap emoji for a single decimal digit
fn keycap(digit: char) -> String {
    format!("{digit}\u{fe0f}\u{20e3}")
}

/// Two-digit keycap rendering of a 1-based guess number
fn guess_number(n: usize) -> String {
    format!("{n:02}").chars().map(keycap).collect()
}

/// Result summary: title, guess count, one cell per board with the guess that solved it
///
/// The guess count reads `X` unless every board was solved.
#[must_use]
pub fn share_text(state: &GameState) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", state.title());

    let guess_count = if state.all_words_guessed() {
        state.num_guesses().to_string()
    } else {
        "X".to_string()
    };
    let _ = writeln!(text, "Guesses: {guess_count}/{NUM_GUESSES}");

    let cells: Vec<String> = state
        .solve_indices()
        .into_iter()
        .map(|index| index.map_or_else(|| UNSOLVED.to_string(), |i| guess_number(i + 1)))
        .collect();
    for row in cells.chunks(BOARDS_PER_ROW) {
        let _ = writeln!(text, "{}", row.join(" "));
    }

    text.push_str(GAME_URL);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::NUM_BOARDS;
    use crate::wordlists::WordLists;

    #[test]
    fn keycaps() {
        assert_eq!(guess_number(7), "0\u{fe0f}\u{20e3}7\u{fe0f}\u{20e3}");
        assert_eq!(guess_number(42), "4\u{fe0f}\u{20e3}2\u{fe0f}\u{20e3}");
    }

    #[test]
    fn fresh_game_is_all_unsolved() {
        let lists = WordLists::embedded().unwrap();
        let state = GameState::new(20, false, &lists);
        let text = share_text(&state);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Daily Quadrasexordle #20");
        assert_eq!(lines[1], "Guesses: X/69");
        assert_eq!(lines.len(), 2 + NUM_BOARDS / BOARDS_PER_ROW + 1);
        assert_eq!(lines[2], "🟥🟥 🟥🟥 🟥🟥 🟥🟥");
        assert_eq!(*lines.last().unwrap(), GAME_URL);
    }

    #[test]
    fn solved_boards_show_their_guess_number() {
        let lists = WordLists::embedded().unwrap();
        let mut state = GameState::new(21, true, &lists);
        let targets = state.targets().to_vec();
        state.submit_guess(targets[1].text(), &lists).unwrap();
        state.submit_guess(targets[0].text(), &lists).unwrap();

        let text = share_text(&state);
        let first_row = text.lines().nth(2).unwrap();
        assert_eq!(
            first_row,
            format!("{} {} 🟥🟥 🟥🟥", guess_number(2), guess_number(1))
        );
    }

    #[test]
    fn full_solve_reports_guess_count() {
        let lists = WordLists::embedded().unwrap();
        let mut state = GameState::new(22, false, &lists);
        for target in state.targets().to_vec() {
            state.submit_guess(target.text(), &lists).unwrap();
        }
        assert!(share_text(&state).contains("Guesses: 64/69\n"));
        assert!(!share_text(&state).contains(UNSOLVED));
    }
}
