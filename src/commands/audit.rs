//! Puzzle audit
//!
//! Generates a run of consecutive puzzles in parallel and checks each one: it must be
//! reproducible from its ID, fill every board, and never repeat a target. Target draw
//! frequencies are collected across the run.

use crate::core::Word;
use crate::game::NUM_BOARDS;
use crate::puzzle::{PuzzleId, generate_targets};
use crate::wordlists::WordLists;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Number of most and least drawn words kept in the report
const FREQUENCY_SAMPLE: usize = 5;

/// Result of checking a single puzzle
#[derive(Debug, Clone)]
pub struct PuzzleCheck {
    pub id: PuzzleId,
    pub targets: Vec<Word>,
    /// A second generation from the same ID matched
    pub deterministic: bool,
    pub unique: bool,
    pub complete: bool,
}

impl PuzzleCheck {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.deterministic && self.unique && self.complete
    }
}

/// Aggregate over an audit run
#[derive(Debug)]
pub struct AuditReport {
    pub from: PuzzleId,
    pub puzzles: usize,
    pub failures: Vec<PuzzleId>,
    /// Targets drawn at least once
    pub distinct_targets: usize,
    /// Size of the target list
    pub target_pool: usize,
    pub most_drawn: Vec<(String, usize)>,
    pub least_drawn: Vec<(String, usize)>,
    pub mean_draws: f64,
    pub duration: Duration,
}

/// Generate and check one puzzle
#[must_use]
pub fn check_puzzle(id: PuzzleId, lists: &WordLists) -> PuzzleCheck {
    let targets = generate_targets(id, lists);
    let deterministic = generate_targets(id, lists) == targets;
    let unique = targets.iter().collect::<FxHashSet<_>>().len() == targets.len();
    let complete = targets.len() == NUM_BOARDS;

    PuzzleCheck {
        id,
        targets,
        deterministic,
        unique,
        complete,
    }
}

/// Audit `count` puzzles starting at `from`
///
/// IDs past `PuzzleId::MAX` are not generated.
#[must_use]
pub fn run_audit(
    lists: &WordLists,
    from: PuzzleId,
    count: usize,
    show_progress: bool,
) -> AuditReport {
    let ids: Vec<PuzzleId> = (from..=PuzzleId::MAX).take(count).collect();

    let pb = if show_progress {
        ProgressBar::new(ids.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("generating");

    let start = Instant::now();
    let checks: Vec<PuzzleCheck> = ids
        .par_iter()
        .map(|&id| {
            let check = check_puzzle(id, lists);
            pb.inc(1);
            check
        })
        .collect();
    pb.finish_with_message("Complete!");

    let failures: Vec<PuzzleId> = checks
        .iter()
        .filter(|check| !check.passed())
        .map(|check| check.id)
        .collect();
    for id in &failures {
        tracing::warn!(id, "puzzle failed audit");
    }

    let mut draws: FxHashMap<&str, usize> = lists
        .targets()
        .iter()
        .map(|word| (word.text(), 0))
        .collect();
    for check in &checks {
        for target in &check.targets {
            *draws.entry(target.text()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = draws
        .into_iter()
        .map(|(word, n)| (word.to_string(), n))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let distinct_targets = ranked.iter().filter(|(_, n)| *n > 0).count();
    let total_draws: usize = ranked.iter().map(|(_, n)| n).sum();
    let mean_draws = if ranked.is_empty() {
        0.0
    } else {
        total_draws as f64 / ranked.len() as f64
    };

    let most_drawn = ranked.iter().take(FREQUENCY_SAMPLE).cloned().collect();
    let least_drawn = ranked.iter().rev().take(FREQUENCY_SAMPLE).cloned().collect();

    AuditReport {
        from,
        puzzles: checks.len(),
        failures,
        distinct_targets,
        target_pool: lists.targets().len(),
        most_drawn,
        least_drawn,
        mean_draws,
        duration: start.elapsed(),
    }
}
