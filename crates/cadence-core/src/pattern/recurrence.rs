//! Recurrence pattern and frequency types.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{PatternError, PatternResult};

use super::{WeekOrdinal, Weekday};

/// Recurrence frequency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Parses a frequency from its label (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a monthly pattern picks its day within each matching month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyRule {
    /// The start date's day of month.
    OnStartDay,
    /// A fixed day of month (1-31).
    OnDay(u32),
    /// An ordinal weekday, e.g. the second Tuesday.
    OnNthWeekday {
        ordinal: WeekOrdinal,
        weekday: Weekday,
    },
}

/// The repeating shape of a pattern.
///
/// Each variant carries only the fields relevant to it, so a pattern
/// cannot mix, say, a weekly day set with a monthly ordinal rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    Daily,
    /// Weekly on the listed weekdays. The list preserves caller order
    /// (formatting renders it verbatim); an empty list never matches.
    Weekly { days: Vec<Weekday> },
    Monthly(MonthlyRule),
    Yearly,
}

impl Recurrence {
    /// Returns the frequency unit of this recurrence.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        match self {
            Self::Daily => Frequency::Daily,
            Self::Weekly { .. } => Frequency::Weekly,
            Self::Monthly(_) => Frequency::Monthly,
            Self::Yearly => Frequency::Yearly,
        }
    }
}

/// A recurrence pattern anchored at a start date.
///
/// Immutable value type: the engine takes it by reference and holds no
/// state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePattern {
    /// The repeating shape.
    pub recurrence: Recurrence,

    /// Repeat every `interval` units of the frequency (must be >= 1).
    pub interval: u32,

    /// Lower inclusive bound for occurrences, and the anchor from which
    /// interval offsets are measured.
    pub start: NaiveDate,

    /// Optional upper bound; no date after this is ever emitted. The
    /// end date itself may still be an occurrence.
    pub end: Option<NaiveDate>,
}

impl RecurrencePattern {
    /// Creates a pattern with interval 1 and no end date.
    #[must_use]
    pub fn new(recurrence: Recurrence, start: NaiveDate) -> Self {
        Self {
            recurrence,
            interval: 1,
            start,
            end: None,
        }
    }

    /// Creates a daily pattern.
    #[must_use]
    pub fn daily(start: NaiveDate) -> Self {
        Self::new(Recurrence::Daily, start)
    }

    /// Creates a weekly pattern on the given weekdays.
    #[must_use]
    pub fn weekly(start: NaiveDate, days: Vec<Weekday>) -> Self {
        Self::new(Recurrence::Weekly { days }, start)
    }

    /// Creates a monthly pattern with the given day rule.
    #[must_use]
    pub fn monthly(start: NaiveDate, rule: MonthlyRule) -> Self {
        Self::new(Recurrence::Monthly(rule), start)
    }

    /// Creates a yearly pattern.
    #[must_use]
    pub fn yearly(start: NaiveDate) -> Self {
        Self::new(Recurrence::Yearly, start)
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the end date.
    #[must_use]
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// ## Summary
    /// Checks the caller-side contract the engine itself assumes but
    /// does not re-check: interval at least 1, end not before start,
    /// and a day rule that can match at all.
    ///
    /// The engine degrades degenerate patterns to empty output rather
    /// than failing; this helper lets callers surface the problem as a
    /// typed error instead.
    ///
    /// ## Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> PatternResult<()> {
        if self.interval == 0 {
            return Err(PatternError::ZeroInterval);
        }

        if let Some(end) = self.end
            && end < self.start
        {
            return Err(PatternError::EndBeforeStart {
                start: self.start,
                end,
            });
        }

        match &self.recurrence {
            Recurrence::Weekly { days } if days.is_empty() => {
                Err(PatternError::EmptyWeekdaySet)
            }
            Recurrence::Monthly(MonthlyRule::OnDay(day)) if !(1..=31).contains(day) => {
                Err(PatternError::DayOfMonthOutOfRange(*day))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn frequency_parse() {
        assert_eq!(Frequency::parse("daily"), Some(Frequency::Daily));
        assert_eq!(Frequency::parse("Yearly"), Some(Frequency::Yearly));
        assert_eq!(Frequency::parse("hourly"), None);
    }

    #[test]
    fn recurrence_frequency_projection() {
        let weekly = Recurrence::Weekly {
            days: vec![Weekday::Monday],
        };
        assert_eq!(weekly.frequency(), Frequency::Weekly);
        assert_eq!(
            Recurrence::Monthly(MonthlyRule::OnStartDay).frequency(),
            Frequency::Monthly
        );
    }

    #[test]
    fn builder_defaults() {
        let pattern = RecurrencePattern::daily(date(2024, 1, 1));
        assert_eq!(pattern.interval, 1);
        assert_eq!(pattern.end, None);

        let pattern = pattern.with_interval(3).with_end(date(2024, 2, 1));
        assert_eq!(pattern.interval, 3);
        assert_eq!(pattern.end, Some(date(2024, 2, 1)));
    }

    #[test]
    fn validate_accepts_well_formed_patterns() {
        let pattern = RecurrencePattern::weekly(date(2024, 1, 1), vec![Weekday::Monday])
            .with_interval(2)
            .with_end(date(2024, 3, 1));
        assert!(pattern.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let pattern = RecurrencePattern::daily(date(2024, 1, 1)).with_interval(0);
        assert!(matches!(pattern.validate(), Err(PatternError::ZeroInterval)));
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let pattern = RecurrencePattern::daily(date(2024, 6, 1)).with_end(date(2024, 1, 1));
        assert!(matches!(
            pattern.validate(),
            Err(PatternError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_weekday_set() {
        let pattern = RecurrencePattern::weekly(date(2024, 1, 1), Vec::new());
        assert!(matches!(
            pattern.validate(),
            Err(PatternError::EmptyWeekdaySet)
        ));
    }

    #[test]
    fn validate_rejects_day_of_month_out_of_range() {
        let pattern =
            RecurrencePattern::monthly(date(2024, 1, 1), MonthlyRule::OnDay(32));
        assert!(matches!(
            pattern.validate(),
            Err(PatternError::DayOfMonthOutOfRange(32))
        ));
    }
}
