//! Human-readable rendering of recurrence patterns.

use cadence_core::pattern::{MonthlyRule, Recurrence, RecurrencePattern};

/// ## Summary
/// Renders a pattern as a one-line description, e.g.
/// `"Every 2 weekly on Monday, Wednesday"`.
///
/// The interval numeral is omitted when it is 1, which leaves a double
/// space before the unit; downstream display surfaces rely on the text
/// as-is, so the spacing is kept verbatim. Weekday lists render in the
/// order the pattern carries them, not calendar order.
#[must_use]
pub fn format_recurrence_rule(pattern: &RecurrencePattern) -> String {
    let interval = if pattern.interval > 1 {
        pattern.interval.to_string()
    } else {
        String::new()
    };
    let mut rule = format!("Every {interval} {}", pattern.recurrence.frequency());

    match &pattern.recurrence {
        Recurrence::Weekly { days } if !days.is_empty() => {
            let names: Vec<&str> = days.iter().map(|day| day.capitalized()).collect();
            rule.push_str(" on ");
            rule.push_str(&names.join(", "));
        }
        Recurrence::Monthly(MonthlyRule::OnNthWeekday { ordinal, weekday }) => {
            rule.push_str(&format!(" on the {ordinal} {weekday}"));
        }
        Recurrence::Monthly(MonthlyRule::OnDay(day)) => {
            rule.push_str(&format!(" on day {day}"));
        }
        _ => {}
    }

    rule
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::pattern::{WeekOrdinal, Weekday};
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn daily_with_interval() {
        let pattern = RecurrencePattern::daily(start()).with_interval(2);
        assert_eq!(format_recurrence_rule(&pattern), "Every 2 daily");
    }

    #[test]
    fn interval_one_omits_numeral_keeping_double_space() {
        let pattern = RecurrencePattern::daily(start());
        assert_eq!(format_recurrence_rule(&pattern), "Every  daily");
    }

    #[test]
    fn weekly_lists_days_in_input_order() {
        let pattern = RecurrencePattern::weekly(
            start(),
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
        );
        assert_eq!(
            format_recurrence_rule(&pattern),
            "Every  weekly on Monday, Wednesday, Friday"
        );

        let reversed = RecurrencePattern::weekly(
            start(),
            vec![Weekday::Friday, Weekday::Monday],
        );
        assert_eq!(
            format_recurrence_rule(&reversed),
            "Every  weekly on Friday, Monday"
        );
    }

    #[test]
    fn weekly_with_no_days_has_no_suffix() {
        let pattern = RecurrencePattern::weekly(start(), Vec::new());
        assert_eq!(format_recurrence_rule(&pattern), "Every  weekly");
    }

    #[test]
    fn monthly_ordinal_weekday_is_lowercase() {
        let pattern = RecurrencePattern::monthly(
            start(),
            MonthlyRule::OnNthWeekday {
                ordinal: WeekOrdinal::Second,
                weekday: Weekday::Tuesday,
            },
        );
        assert_eq!(
            format_recurrence_rule(&pattern),
            "Every  monthly on the second tuesday"
        );
    }

    #[test]
    fn monthly_fixed_day() {
        let pattern = RecurrencePattern::monthly(start(), MonthlyRule::OnDay(15))
            .with_interval(3);
        assert_eq!(format_recurrence_rule(&pattern), "Every 3 monthly on day 15");
    }

    #[test]
    fn monthly_start_day_and_yearly_have_no_suffix() {
        let monthly = RecurrencePattern::monthly(start(), MonthlyRule::OnStartDay);
        assert_eq!(format_recurrence_rule(&monthly), "Every  monthly");

        let yearly = RecurrencePattern::yearly(start()).with_interval(5);
        assert_eq!(format_recurrence_rule(&yearly), "Every 5 yearly");
    }
}
