//! Week-of-month ordinal value type.

use std::fmt;

/// Position of a weekday within its month ("second Tuesday").
///
/// `Last` is not an alias for `Fourth`: it means no later occurrence of
/// the weekday exists in the month, which in a five-occurrence month is
/// the fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekOrdinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOrdinal {
    /// Returns the lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }

    /// Parses an ordinal from its label (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "first" => Self::First,
            "second" => Self::Second,
            "third" => Self::Third,
            "fourth" => Self::Fourth,
            "last" => Self::Last,
            _ => return None,
        })
    }

    /// Returns the fixed position (1-4), or `None` for `Last`.
    #[must_use]
    pub const fn position(self) -> Option<u32> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Last => None,
        }
    }
}

impl fmt::Display for WeekOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
