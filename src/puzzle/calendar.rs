//! Daily puzzle numbering
//!
//! Day boundaries follow the player's local calendar: a new daily puzzle begins at local
//! midnight.

use super::PuzzleId;
use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Date of daily puzzle #0
pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 2, 14) {
    Some(date) => date,
    None => panic!("invalid start date"),
};

/// Maps local dates to daily puzzle IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    start: NaiveDate,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DEFAULT_START_DATE)
    }
}

impl Calendar {
    #[must_use]
    pub const fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Daily puzzle ID for today's local date
    #[must_use]
    pub fn todays_id(&self) -> PuzzleId {
        self.id_for_date(Local::now().date_naive())
    }

    /// Whole days from the start date to `date`; dates before the start map to 0
    #[must_use]
    pub fn id_for_date(&self, date: NaiveDate) -> PuzzleId {
        let days = (date - self.start).num_days();
        PuzzleId::try_from(days.max(0)).unwrap_or(PuzzleId::MAX)
    }

    /// Local date on which puzzle `id` is the daily puzzle
    #[must_use]
    pub fn date_for_id(&self, id: PuzzleId) -> Option<NaiveDate> {
        self.start.checked_add_days(Days::new(u64::from(id)))
    }

    /// Hours left until the next daily puzzle at local time `now`
    #[must_use]
    pub fn hours_until_next(now: NaiveDateTime) -> f64 {
        let since_midnight = now.time() - NaiveTime::MIN;
        24.0 - since_midnight.num_milliseconds() as f64 / 3_600_000.0
    }

    /// Hours left until the next daily puzzle, from the local clock
    #[must_use]
    pub fn hours_until_next_now() -> f64 {
        Self::hours_until_next(Local::now().naive_local())
    }
}

/// Render a countdown the way the about screen shows it: whole hours, one decimal in the
/// last hour
#[must_use]
pub fn format_hours_remaining(hours: f64) -> String {
    let value = if hours > 0.95 {
        format!("{hours:.0}")
    } else {
        format!("{hours:.1}")
    };
    let plural = if value == "1" { "" } else { "s" };
    format!("{value} hour{plural}")
}
