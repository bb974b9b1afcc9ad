//! Puzzle identity and generation
//!
//! A puzzle is fully determined by its ID: the ID seeds an MT19937 stream that picks the
//! targets. Daily IDs come from the calendar, practice IDs are random.

mod calendar;
mod generator;
mod rng;

pub use calendar::{Calendar, DEFAULT_START_DATE, format_hours_remaining};
pub use generator::generate_targets;
pub use rng::MersenneTwister;

use rand::Rng;

/// Puzzle identifier; also the generator seed
pub type PuzzleId = u32;

/// Random ID for a practice puzzle
#[must_use]
pub fn random_practice_id() -> PuzzleId {
    rand::rng().random()
}
