//! The matching predicate: is a candidate date an occurrence?

use chrono::{Datelike, Days, NaiveDate};

use cadence_core::pattern::{MonthlyRule, Recurrence, RecurrencePattern, WeekOrdinal, Weekday};

/// ## Summary
/// Decides whether `date` is an occurrence of `pattern`.
///
/// Pure and total: malformed patterns (empty weekly day set, interval
/// of zero) never match rather than failing. A date earlier than the
/// pattern's start is never an occurrence.
#[must_use]
pub fn date_matches_pattern(date: NaiveDate, pattern: &RecurrencePattern) -> bool {
    if date < pattern.start {
        return false;
    }

    // The contract requires interval >= 1; anything else never matches.
    if pattern.interval == 0 {
        return false;
    }
    let interval = i64::from(pattern.interval);

    match &pattern.recurrence {
        Recurrence::Daily => daily_match(date, pattern.start, interval),
        Recurrence::Weekly { days } => weekly_match(date, pattern.start, interval, days),
        Recurrence::Monthly(rule) => monthly_match(date, pattern.start, interval, *rule),
        Recurrence::Yearly => yearly_match(date, pattern.start, interval),
    }
}

fn daily_match(date: NaiveDate, start: NaiveDate, interval: i64) -> bool {
    let days = date.signed_duration_since(start).num_days();
    days >= 0 && days % interval == 0
}

fn weekly_match(date: NaiveDate, start: NaiveDate, interval: i64, days_of_week: &[Weekday]) -> bool {
    if days_of_week.is_empty() {
        return false;
    }

    if !days_of_week.contains(&Weekday::from(date.weekday())) {
        return false;
    }

    // Interval buckets are day-difference / 7, not aligned calendar
    // weeks: two dates in the same bucket can straddle a week boundary.
    let weeks = date.signed_duration_since(start).num_days() / 7;
    weeks >= 0 && weeks % interval == 0
}

fn monthly_match(date: NaiveDate, start: NaiveDate, interval: i64, rule: MonthlyRule) -> bool {
    let months = i64::from(date.year() - start.year()) * 12 + i64::from(date.month())
        - i64::from(start.month());
    if months < 0 || months % interval != 0 {
        return false;
    }

    match rule {
        MonthlyRule::OnNthWeekday { ordinal, weekday } => {
            nth_weekday_match(date, ordinal, weekday)
        }
        MonthlyRule::OnDay(day) => date.day() == day,
        MonthlyRule::OnStartDay => date.day() == start.day(),
    }
}

/// Nth-weekday-of-month rule ("second Tuesday", "last Friday").
///
/// The ordinal position is measured from the first occurrence of the
/// weekday on or after the 1st. "last" means no later occurrence exists
/// in the month; "fourth" is not a fallback for it.
fn nth_weekday_match(date: NaiveDate, ordinal: WeekOrdinal, weekday: Weekday) -> bool {
    let target = weekday.to_chrono();
    if date.weekday() != target {
        return false;
    }

    let Some(first_of_month) = date.with_day(1) else {
        return false;
    };
    let offset = (7 + target.num_days_from_sunday()
        - first_of_month.weekday().num_days_from_sunday())
        % 7;
    let first_occurrence_day = 1 + offset;
    let position = (date.day() - first_occurrence_day) / 7 + 1;

    match ordinal.position() {
        Some(required) => position == required,
        // Last: adding a week must leave the month.
        None => date
            .checked_add_days(Days::new(7))
            .is_none_or(|next| next.month() != date.month()),
    }
}

fn yearly_match(date: NaiveDate, start: NaiveDate, interval: i64) -> bool {
    let years = i64::from(date.year() - start.year());
    years >= 0
        && years % interval == 0
        && date.month() == start.month()
        && date.day() == start.day()
}
