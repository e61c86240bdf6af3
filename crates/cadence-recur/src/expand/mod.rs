//! Recurrence expansion: pattern matching plus bounded date generation.

mod generator;
mod matcher;

use chrono::{Datelike, NaiveDate};

use cadence_core::pattern::RecurrencePattern;

pub use generator::generate_recurring_dates;
pub use matcher::date_matches_pattern;

/// Hard ceiling on calendar days scanned per call.
///
/// Guarantees termination regardless of pattern validity or interval
/// size; a pattern that never matches again produces a short or empty
/// result instead of looping forever.
pub const MAX_SCANNED_DAYS: usize = 1000;

/// Occurrence cap used when the caller wants "the next batch" without
/// picking a number, as preview surfaces do.
pub const DEFAULT_MAX_OCCURRENCES: usize = 50;

/// ## Summary
/// Generates the next [`DEFAULT_MAX_OCCURRENCES`] occurrences of a
/// pattern.
#[must_use]
pub fn preview_dates(pattern: &RecurrencePattern) -> Vec<NaiveDate> {
    generate_recurring_dates(pattern, DEFAULT_MAX_OCCURRENCES)
}

/// ## Summary
/// Returns the preview occurrences that fall within the given month,
/// for a one-month calendar page.
///
/// `month` is 1-based (January = 1).
#[must_use]
pub fn occurrences_in_month(
    pattern: &RecurrencePattern,
    year: i32,
    month: u32,
) -> Vec<NaiveDate> {
    preview_dates(pattern)
        .into_iter()
        .filter(|date| date.year() == year && date.month() == month)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::pattern::{MonthlyRule, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn preview_is_capped_at_default() {
        let pattern = RecurrencePattern::daily(date(2024, 1, 1));
        let dates = preview_dates(&pattern);
        assert_eq!(dates.len(), DEFAULT_MAX_OCCURRENCES);
    }

    #[test]
    fn occurrences_in_month_filters_to_that_month() {
        let pattern = RecurrencePattern::weekly(
            date(2024, 1, 1),
            vec![Weekday::Monday, Weekday::Thursday],
        );
        let in_february = occurrences_in_month(&pattern, 2024, 2);
        assert!(!in_february.is_empty());
        for d in &in_february {
            assert_eq!(d.year(), 2024);
            assert_eq!(d.month(), 2);
        }
    }

    #[test]
    fn occurrences_in_month_is_empty_outside_preview_window() {
        // Monthly pattern: 50 occurrences span past 1000 scanned days,
        // so the preview stops well before 2030.
        let pattern =
            RecurrencePattern::monthly(date(2024, 1, 15), MonthlyRule::OnDay(15));
        assert!(occurrences_in_month(&pattern, 2030, 1).is_empty());
    }
}
