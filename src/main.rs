//! Quadrasexordle - CLI
//!
//! Play the 64-board daily puzzle in a TUI or a line-based prompt, and inspect or audit
//! generated puzzles.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use quadrasexordle::{
    commands::{run_audit, run_simple},
    config::{Config, default_state_file},
    game::{NUM_BOARDS, share_text},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::{print_audit_report, print_board, print_summary, print_targets},
    puzzle::{DEFAULT_START_DATE, PuzzleId, generate_targets},
    storage::{FileStore, Session},
    wordlists::WordLists,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quadrasexordle",
    about = "Sixty-four Wordle boards at once, sixty-nine guesses to solve them all",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Saved game file
    #[arg(long, global = true, env = "QUADRASEXORDLE_STATE")]
    state_file: Option<PathBuf>,

    /// Date of daily puzzle #0 (YYYY-MM-DD)
    #[arg(long, global = true, env = "QUADRASEXORDLE_START_DATE", default_value_t = DEFAULT_START_DATE)]
    start_date: NaiveDate,

    /// Replace the target word list with a file (one word per line)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Replace the guess word list with a file (one word per line)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Log filter, e.g. 'info' or 'quadrasexordle=debug' (default: $RUST_LOG, then 'warn')
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompt without TUI)
    Simple,

    /// Show the saved game
    Show {
        /// Show every row of one board (1-64)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=64))]
        board: Option<u8>,
    },

    /// Print the shareable result of the saved game
    Share,

    /// Print the targets generated for a puzzle
    Targets {
        /// Puzzle ID (default: today's daily puzzle)
        #[arg(long)]
        id: Option<PuzzleId>,
    },

    /// Generate a run of puzzles and check them
    Audit {
        /// First puzzle ID
        #[arg(long, default_value = "0")]
        from: PuzzleId,

        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            state_file: self.state_file.clone().unwrap_or_else(default_state_file),
            start_date: self.start_date,
            targets_file: self.targets.clone(),
            guesses_file: self.guesses.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&command, &config.log_file) {
        (Commands::Play, _) => LogTarget::File(config.tui_log_path()),
        (_, Some(path)) => LogTarget::File(path.clone()),
        (_, None) => LogTarget::Stderr,
    };
    logging::setup(config.log_level.as_deref(), &log_target)?;

    let lists = config.word_lists().context("loading word lists")?;

    match command {
        Commands::Play => run_play_command(&config, &lists),
        Commands::Simple => run_simple_command(&config, &lists),
        Commands::Show { board } => {
            run_show_command(&config, &lists, board.map(|b| usize::from(b) - 1));
            Ok(())
        }
        Commands::Share => {
            run_share_command(&config, &lists);
            Ok(())
        }
        Commands::Targets { id } => {
            run_targets_command(&config, &lists, id);
            Ok(())
        }
        Commands::Audit { from, count } => {
            run_audit_command(&lists, from, count);
            Ok(())
        }
    }
}

fn open_session<'a>(config: &Config, lists: &'a WordLists) -> Session<'a, FileStore> {
    tracing::debug!(path = %config.state_file.display(), "opening saved game");
    Session::resume(config.store(), lists, config.calendar())
}

fn run_play_command(config: &Config, lists: &WordLists) -> Result<()> {
    let app = App::new(open_session(config, lists));
    run_tui(app)
}

fn run_simple_command(config: &Config, lists: &WordLists) -> Result<()> {
    let mut session = open_session(config, lists);
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_show_command(config: &Config, lists: &WordLists, board: Option<usize>) {
    let session = open_session(config, lists);
    match board {
        Some(board) if board < NUM_BOARDS => print_board(session.state(), board),
        _ => print_summary(session.state()),
    }
}

fn run_share_command(config: &Config, lists: &WordLists) {
    let session = open_session(config, lists);
    println!("{}", share_text(session.state()));
}

fn run_targets_command(config: &Config, lists: &WordLists, id: Option<PuzzleId>) {
    let calendar = config.calendar();
    let id = id.unwrap_or_else(|| calendar.todays_id());
    let targets = generate_targets(id, lists);
    print_targets(id, calendar.date_for_id(id), &targets);
}

fn run_audit_command(lists: &WordLists, from: PuzzleId, count: usize) {
    println!("\n🎯 Auditing {count} puzzles from #{from}...");
    let report = run_audit(lists, from, count, true);
    print_audit_report(&report);
}
