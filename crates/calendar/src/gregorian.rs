//! Leap-year rule, month lengths and day counting for the proleptic
//! Gregorian calendar anchored at January 1 of year 0.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in a common year preceding the first of each month (index 0 unused).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Length of one 400-year Gregorian cycle: 97 leap years and 303 common years.
pub(crate) const DAYS_PER_CYCLE: i64 = 97 * 366 + 303 * 365;

/// Returns `true` if `year` is a leap year.
///
/// Every fourth year is a leap year, except centuries that are not
/// multiples of 400. Year 0 is a leap year.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i64, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, month))
}

/// Returns 366 for leap years and 365 otherwise.
pub fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Month length for an already-validated month.
pub(crate) fn month_length(year: i64, month: u8) -> u8 {
    let base = DAYS_PER_MONTH[month as usize];
    if month == 2 && is_leap_year(year) {
        base + 1
    } else {
        base
    }
}

/// Days in `year` preceding the first of an already-validated `month`.
pub(crate) fn days_before_month(year: i64, month: u8) -> u16 {
    let base = DAYS_BEFORE_MONTH[month as usize];
    if month > 2 && is_leap_year(year) {
        base + 1
    } else {
        base
    }
}

/// Days from January 1 of year 0 to January 1 of `year` (`year >= 0`).
pub(crate) fn days_before_year(year: i64) -> i64 {
    // Leap years in 0..year: multiples of 4, minus centuries, plus multiples
    // of 400. Year 0 counts in all three.
    let leaps = (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400;
    365 * year + leaps
}

/// Ordinal of a validated triple; January 1 of year 0 is ordinal 0.
pub(crate) fn ordinal_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    days_before_year(year) + i64::from(days_before_month(year, month)) + i64::from(day) - 1
}

/// Inverse of [`ordinal_from_ymd`] for `ordinal >= 0`.
///
/// The returned year is unbounded; callers range-check it.
pub(crate) fn ymd_from_ordinal(ordinal: i64) -> (i64, u8, u8) {
    debug_assert!(ordinal >= 0, "ordinal must be non-negative");

    // Estimate from below: no year is longer than 366 days, so this never
    // overshoots and is at most one year short within a cycle.
    let mut year = ordinal / DAYS_PER_CYCLE * 400 + ordinal % DAYS_PER_CYCLE / 366;
    while days_before_year(year + 1) <= ordinal {
        year += 1;
    }

    let mut remaining = ordinal - days_before_year(year);
    let mut month = 1;
    loop {
        let length = i64::from(month_length(year, month));
        if remaining < length {
            break;
        }
        remaining -= length;
        month += 1;
    }
    // remaining < 31 here
    (year, month, remaining as u8 + 1)
}
