//! Selectors for reading individual fields of a date.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// One field of a [`Date`](crate::Date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Component {
    /// The year (0 or later).
    Year,
    /// The month (1..=12).
    Month,
    /// The day within the month (1..=31).
    Day,
}

impl Component {
    /// Single-letter selector used by [`fmt::Display`] and accepted by
    /// [`FromStr`].
    pub fn letter(self) -> char {
        match self {
            Component::Year => 'y',
            Component::Month => 'm',
            Component::Day => 'd',
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parses `y`, `m`, `d` or `year`, `month`, `day`, ignoring ASCII case.
impl FromStr for Component {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "y" | "year" => Ok(Component::Year),
            "m" | "month" => Ok(Component::Month),
            "d" | "day" => Ok(Component::Day),
            _ => Err(CalendarError::InvalidSelector {
                selector: s.to_string(),
            }),
        }
    }
}
