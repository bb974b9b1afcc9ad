//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Plain input is a guess; lines starting with `:` are
//! commands.

use crate::game::{GameError, NUM_BOARDS, share_text};
use crate::output::{print_board, print_game_over, print_outcome, print_summary};
use crate::storage::{Session, StateStore};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Guess(String),
    /// Show one board's rows (0-based)
    Board(usize),
    Summary,
    Practice,
    Daily,
    Share,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse a line of input
///
/// Board numbers are entered 1-based and returned 0-based.
///
/// # Examples
/// ```
/// use quadrasexordle::commands::{ReplCommand, parse_command};
///
/// assert_eq!(parse_command(":board 12"), ReplCommand::Board(11));
/// assert_eq!(parse_command("crane"), ReplCommand::Guess("crane".to_string()));
/// ```
#[must_use]
pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    let Some(command) = line.strip_prefix(':') else {
        return ReplCommand::Guess(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("board" | "b"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if (1..=NUM_BOARDS).contains(&n) => ReplCommand::Board(n - 1),
            _ => ReplCommand::Unknown(line.to_string()),
        },
        (Some("show" | "s"), None, None) => ReplCommand::Summary,
        (Some("practice" | "p"), None, None) => ReplCommand::Practice,
        (Some("daily" | "d"), None, None) => ReplCommand::Daily,
        (Some("share"), None, None) => ReplCommand::Share,
        (Some("help" | "h" | "?"), None, None) => ReplCommand::Help,
        (Some("quit" | "q" | "exit"), None, None) => ReplCommand::Quit,
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

fn print_help() {
    println!("Type a five-letter word to guess it on every board.");
    println!("Commands:");
    println!("  :board N   show every row of board N (1-{NUM_BOARDS})");
    println!("  :show      show the board overview");
    println!("  :practice  start a random practice puzzle");
    println!("  :daily     return to today's daily puzzle");
    println!("  :share     print the shareable result");
    println!("  :quit      exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: StateStore>(session: &mut Session<'_, S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Quadrasexordle - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    print_summary(session.state());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "guess>".bright_cyan().bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.map_err(|e| e.to_string())?;

        match parse_command(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Guess(word) => match session.submit_guess(&word) {
                Ok(outcome) => {
                    print_outcome(session.state(), &outcome);
                    if outcome.status.is_over() {
                        print_summary(session.state());
                        print_game_over(session.state());
                        println!("\n{}\n", share_text(session.state()));
                    }
                }
                Err(GameError::GameOver) => {
                    println!(
                        "{}",
                        "The game is over. Use :practice for a new puzzle.".yellow()
                    );
                }
                Err(e) => println!("❌ {e}"),
            },
            ReplCommand::Board(board) => print_board(session.state(), board),
            ReplCommand::Summary => print_summary(session.state()),
            ReplCommand::Practice => {
                session.enter_practice();
                println!("\n🔄 New practice puzzle started!");
                print_summary(session.state());
            }
            ReplCommand::Daily => {
                if session.state().is_practice() {
                    session.exit_practice();
                    println!("\n📅 Back to the daily puzzle");
                    print_summary(session.state());
                } else {
                    println!("Already playing the daily puzzle.");
                }
            }
            ReplCommand::Share => println!("\n{}\n", share_text(session.state())),
            ReplCommand::Help => print_help(),
            ReplCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ReplCommand::Unknown(input) => {
                println!("❌ Unknown command {input:?}. Type :help for a list.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_are_guesses() {
        assert_eq!(parse_command("  Crane \n"), ReplCommand::Guess("Crane".to_string()));
        assert_eq!(parse_command("xyz"), ReplCommand::Guess("xyz".to_string()));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command(""), ReplCommand::Empty);
        assert_eq!(parse_command("   "), ReplCommand::Empty);
    }

    #[test]
    fn board_numbers_are_one_based() {
        assert_eq!(parse_command(":board 1"), ReplCommand::Board(0));
        assert_eq!(parse_command(":b 64"), ReplCommand::Board(63));
        assert!(matches!(parse_command(":board 0"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_command(":board 65"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_command(":board x"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_command(":board"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn named_commands() {
        assert_eq!(parse_command(":practice"), ReplCommand::Practice);
        assert_eq!(parse_command(":daily"), ReplCommand::Daily);
        assert_eq!(parse_command(":share"), ReplCommand::Share);
        assert_eq!(parse_command(":show"), ReplCommand::Summary);
        assert_eq!(parse_command(":q"), ReplCommand::Quit);
        assert_eq!(parse_command(":help"), ReplCommand::Help);
        assert!(matches!(parse_command(":share now"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_command(":nope"), ReplCommand::Unknown(_)));
    }
}
