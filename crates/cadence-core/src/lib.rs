//! Core value types for recurrence patterns.
//!
//! This crate defines the data model shared by the expansion engine:
//! weekdays, week ordinals, frequencies, and the recurrence pattern
//! itself, plus the validation errors callers use before handing a
//! pattern to the engine.

pub mod error;
pub mod pattern;

pub use error::{PatternError, PatternResult};
pub use pattern::{Frequency, MonthlyRule, Recurrence, RecurrencePattern, WeekOrdinal, Weekday};
