//! Command implementations

pub mod audit;
pub mod simple;

pub use audit::{AuditReport, PuzzleCheck, check_puzzle, run_audit};
pub use simple::{ReplCommand, parse_command, run_simple};
