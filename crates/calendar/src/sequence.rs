//! Date sequence generation.

use crate::date::Date;
use crate::error::CalendarError;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month and year boundaries,
/// including February 29, follow the Gregorian leap-year rule.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if the sequence would run past the
/// last representable year.
///
/// # Example
///
/// ```ignore
/// let start = Date::new(2000, 12, 30).unwrap();
/// let dates = date_sequence(start, 4).unwrap();
/// assert_eq!(dates.len(), 4);
/// // Dec 30, Dec 31, Jan 1 (2001), Jan 2 (2001)
/// ```
pub fn date_sequence(start: Date, n_days: usize) -> Result<Vec<Date>, CalendarError> {
    if n_days == 0 {
        return Ok(Vec::new());
    }
    // Range-check the last date before allocating for all of them.
    let last_offset = i64::try_from(n_days - 1).unwrap_or(i64::MAX);
    start.checked_add(last_offset)?;

    let mut dates = Vec::with_capacity(n_days);
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next_day()?;
        dates.push(current);
    }
    Ok(dates)
}
