//! Display functions for game and command results

use super::formatters::{board_cell, colored_row, create_progress_bar, plural};
use crate::commands::AuditReport;
use crate::core::Word;
use crate::game::{GameState, GameStatus, GuessOutcome, NUM_BOARDS, NUM_GUESSES};
use crate::puzzle::{Calendar, PuzzleId, format_hours_remaining};
use chrono::NaiveDate;
use colored::Colorize;

const GRID_COLUMNS: usize = 8;

/// Print the header line and the board overview grid
pub fn print_summary(state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", state.title().bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "   Boards complete: {}/{NUM_BOARDS}    Guesses used: {}/{NUM_GUESSES}",
        state.boards_completed().to_string().bright_yellow().bold(),
        state.num_guesses().to_string().bright_yellow().bold()
    );
    if !state.is_practice() {
        println!(
            "   Next daily puzzle in {}",
            format_hours_remaining(Calendar::hours_until_next_now())
        );
    }
    println!();

    for row_start in (0..NUM_BOARDS).step_by(GRID_COLUMNS) {
        let labels: Vec<String> = (row_start..row_start + GRID_COLUMNS)
            .map(|board| format!("{:<5}", board + 1))
            .collect();
        println!("   {}", labels.join(" ").bright_black());

        let cells: Vec<String> = (row_start..row_start + GRID_COLUMNS)
            .map(|board| board_cell(state, board))
            .collect();
        println!("   {}", cells.join(" "));
    }
    println!();
}

/// Print every feedback row of one board (`board` is 0-based)
pub fn print_board(state: &GameState, board: usize) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Board {} of {NUM_BOARDS}", (board + 1).to_string().bold());
    println!("{}", "─".repeat(40).cyan());

    let rows = state.board_rows(board);
    if rows.is_empty() {
        println!("  {}", "No guesses yet".bright_black());
    }
    for (i, (guess, pattern)) in rows.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, colored_row(guess, *pattern));
    }

    if let Some(index) = state.solved_at(board) {
        println!(
            "\n  {}",
            format!("✅ Solved on guess {}", index + 1).green().bold()
        );
    } else if state.status().is_over() {
        println!(
            "\n  The word was {}",
            state.targets()[board].text().red().bold()
        );
    }
}

/// Print the result of a single accepted guess
pub fn print_outcome(state: &GameState, outcome: &GuessOutcome) {
    if let Some(board) = outcome.solved_board {
        println!(
            "{}",
            format!("✓ Solved board {}!", board + 1).green().bold()
        );
    }
    let remaining = state.guesses_remaining();
    println!(
        "  {}/{NUM_BOARDS} boards complete, {remaining} guess{} left",
        outcome.boards_completed,
        if remaining == 1 { "" } else { "es" }
    );
}

/// Print the end-of-game banner; answers to open boards are revealed on a loss
pub fn print_game_over(state: &GameState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match state.status() {
        GameStatus::Won => println!(
            "{}",
            format!(
                "    🎉 All {NUM_BOARDS} boards solved in {} guesses! 🎉",
                state.num_guesses()
            )
            .bright_green()
            .bold()
        ),
        GameStatus::Lost => {
            let open = NUM_BOARDS - state.boards_completed();
            println!(
                "{}",
                format!("    Out of guesses, {open} board{} left", plural(open))
                    .red()
                    .bold()
            );
            let missed: Vec<&str> = state
                .targets()
                .iter()
                .enumerate()
                .filter(|(board, _)| !state.is_board_solved(*board))
                .map(|(_, target)| target.text())
                .collect();
            println!("\n  Missed words: {}", missed.join(", ").yellow());
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the targets of one puzzle, eight per line
pub fn print_targets(id: PuzzleId, date: Option<NaiveDate>, targets: &[Word]) {
    match date {
        Some(date) => println!("\nPuzzle #{id} (daily puzzle for {date})\n"),
        None => println!("\nPuzzle #{id}\n"),
    }
    for (row, chunk) in targets.chunks(GRID_COLUMNS).enumerate() {
        let words: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, word)| {
                format!(
                    "{:>2} {}",
                    row * GRID_COLUMNS + col + 1,
                    word.text().bright_white()
                )
            })
            .collect();
        println!("  {}", words.join("  "));
    }
}

/// Print the result of a puzzle audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUDIT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let last = u64::from(report.from) + report.puzzles.saturating_sub(1) as u64;
    println!("\n📊 {}", "Puzzles:".bright_cyan().bold());
    println!("   Checked:          #{} to #{last} ({})", report.from, report.puzzles);
    if report.failures.is_empty() {
        println!("   Failures:         {}", "none".green().bold());
    } else {
        println!(
            "   Failures:         {}",
            report.failures.len().to_string().red().bold()
        );
        for id in report.failures.iter().take(10) {
            println!("     #{id}");
        }
    }
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Target coverage:".bright_cyan().bold());
    println!(
        "   Drawn at least once: {}/{}",
        report.distinct_targets, report.target_pool
    );
    println!(
        "   [{}]",
        create_progress_bar(
            report.distinct_targets as f64,
            report.target_pool as f64,
            40
        )
        .green()
    );
    println!("   Mean draws per word: {:.2}", report.mean_draws);

    let max = report.most_drawn.first().map_or(0, |(_, n)| *n);
    println!("\n   Most drawn:");
    for (word, n) in &report.most_drawn {
        println!(
            "     {word} {} {n}",
            create_progress_bar(*n as f64, max as f64, 20).yellow()
        );
    }
    println!("   Least drawn:");
    for (word, n) in &report.least_drawn {
        println!(
            "     {word} {} {n}",
            create_progress_bar(*n as f64, max as f64, 20).bright_black()
        );
    }
}
