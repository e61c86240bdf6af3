//! Pattern validation errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Violations of the caller-side pattern contract.
///
/// The expansion engine never raises these itself: degenerate patterns
/// degrade to empty output. They exist so callers can check a pattern
/// up front and report something better than a silently empty preview.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    #[error("Interval must be at least 1")]
    ZeroInterval,

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("Day of month must be between 1 and 31, got {0}")]
    DayOfMonthOutOfRange(u32),

    #[error("Weekly pattern has no weekdays selected")]
    EmptyWeekdaySet,
}

pub type PatternResult<T> = std::result::Result<T, PatternError>;
