//! Recurrence expansion engine.
//!
//! Computes the concrete calendar dates implied by a recurrence pattern
//! and renders a one-line description of the rule. The engine is a
//! stateless computation library: every call is a pure function of its
//! inputs, safe to invoke concurrently with no coordination.
//!
//! - [`expand`] holds the matching predicate and the bounded day-by-day
//!   scan that turns a pattern into an ordered date sequence.
//! - [`format`] renders a pattern as display text.

pub mod expand;
pub mod format;

pub use expand::{
    DEFAULT_MAX_OCCURRENCES, MAX_SCANNED_DAYS, date_matches_pattern, generate_recurring_dates,
    occurrences_in_month, preview_dates,
};
pub use format::format_recurrence_rule;
