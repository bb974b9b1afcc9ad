//! Terminal output formatting
//!
//! Colored rendering of boards, game summaries, and command results for the line-based
//! front ends.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_board, print_game_over, print_outcome, print_summary,
    print_targets,
};
