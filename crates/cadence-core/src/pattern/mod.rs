//! Recurrence pattern data model.
//!
//! These types form the tagged union a pattern really is: a frequency
//! variant carrying only the fields that variant needs, so illegal
//! combinations (a weekly pattern with a day-of-month, say) cannot be
//! constructed in the first place.

mod ordinal;
mod recurrence;
mod weekday;

pub use ordinal::WeekOrdinal;
pub use recurrence::{Frequency, MonthlyRule, Recurrence, RecurrencePattern};
pub use weekday::Weekday;
