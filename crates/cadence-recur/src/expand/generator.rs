//! Bounded day-by-day occurrence generation.

use chrono::NaiveDate;

use cadence_core::pattern::RecurrencePattern;

use super::MAX_SCANNED_DAYS;
use super::matcher::date_matches_pattern;

/// ## Summary
/// Generates the ordered occurrence dates of a pattern.
///
/// Walks forward one calendar day at a time from the pattern's start,
/// testing each day against the matching predicate. Every day between
/// the start and the first unmet stopping condition is visited exactly
/// once, so irregular shapes (ordinal weekdays, multi-day weekly sets)
/// need no per-frequency jump logic.
///
/// Stops at the first of: `max_occurrences` collected, the end date
/// passed, or [`MAX_SCANNED_DAYS`] days scanned. The scan ceiling wins
/// over everything else and guarantees termination for any input.
///
/// The result is strictly increasing with no duplicates, and is
/// recomputed from scratch on every call.
///
/// ## Side Effects
/// None - pure function of its inputs.
#[must_use]
#[tracing::instrument(skip(pattern), fields(
    frequency = %pattern.recurrence.frequency(),
    interval = pattern.interval,
))]
pub fn generate_recurring_dates(
    pattern: &RecurrencePattern,
    max_occurrences: usize,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut cursor = pattern.start;
    let mut scanned = 0;

    while dates.len() < max_occurrences && scanned < MAX_SCANNED_DAYS {
        scanned += 1;

        if let Some(end) = pattern.end
            && cursor > end
        {
            break;
        }

        if date_matches_pattern(cursor, pattern) {
            dates.push(cursor);
        }

        let Some(next) = cursor.succ_opt() else {
            // End of the representable calendar.
            break;
        };
        cursor = next;
    }

    tracing::debug!(occurrences = dates.len(), scanned, "Expanded recurrence pattern");
    dates
}
