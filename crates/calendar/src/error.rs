//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// The first three variants cover validation of a `(year, month, day)`
/// triple in the proleptic Gregorian calendar. The rest report selectors
/// and operands that have no meaning for a date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is negative or does not fit the date range.
    ///
    /// Arithmetic that steps below January 1 of year 0 reports `year: -1`.
    #[error("invalid year: {year} (must be 0..={max})", max = i32::MAX)]
    InvalidYear {
        /// The invalid year.
        year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is zero or exceeds the length of its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The last valid day of the month in the given year.
        max_day: u8,
    },

    /// Returned when a textual component selector is not recognised.
    #[error("invalid selector: {selector:?} (must be one of y, m, d)")]
    InvalidSelector {
        /// The selector text that was provided.
        selector: String,
    },

    /// Returned when a date is added to or subtracted by an unsupported type.
    #[error("unsupported operand: {operand} (must be an integer or a date)")]
    UnsupportedOperand {
        /// Type name of the rejected operand.
        operand: &'static str,
    },

    /// Returned when a date is compared against an unsupported type.
    #[error("cannot compare a date with {found}")]
    TypeMismatch {
        /// Type name of the rejected comparand.
        found: &'static str,
    },
}
