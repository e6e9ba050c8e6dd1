//! Proleptic Gregorian date value type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use tracing::{debug, trace};

use crate::component::Component;
use crate::error::CalendarError;
use crate::gregorian::{self, days_before_month, month_length, ordinal_from_ymd, ymd_from_ordinal};

/// Largest year a [`Date`] can hold.
const MAX_YEAR: i64 = i32::MAX as i64;

/// Year reported when arithmetic steps past December 31 of [`MAX_YEAR`].
const YEAR_AFTER_MAX: i64 = MAX_YEAR + 1;

/// Year reported when arithmetic steps before January 1 of year 0.
const YEAR_BEFORE_MIN: i64 = -1;

/// A calendar date in the proleptic Gregorian calendar, year 0 onward.
///
/// The `(year, month, day)` triple is validated on construction and on
/// [`Date::reset`], so every `Date` names a real day. Dates are ordered by
/// their [ordinal](Date::ordinal), the number of days since January 1 of
/// year 0.
///
/// `Display` prints `month/day/year` without padding and `Debug` prints the
/// constructor form `Date(year,month,day)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDate", into = "RawDate"))]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

/// Checks a triple in year, month, day order, stopping at the first failure.
fn validate(year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
    if year < 0 {
        return Err(CalendarError::InvalidYear {
            year: i64::from(year),
        });
    }
    let max_day = gregorian::days_in_month(i64::from(year), month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    Ok(())
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is negative,
    /// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, and
    /// [`CalendarError::InvalidDay`] if `day` is zero or past the end of the
    /// month in that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Creates the date lying `ordinal` days after January 1 of year 0.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] with `year: -1` for negative
    /// ordinals and with `year: i32::MAX + 1` past the last representable day.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        if ordinal < 0 {
            return Err(CalendarError::InvalidYear {
                year: YEAR_BEFORE_MIN,
            });
        }
        if ordinal > ordinal_from_ymd(MAX_YEAR, 12, 31) {
            return Err(CalendarError::InvalidYear {
                year: YEAR_AFTER_MAX,
            });
        }
        let (year, month, day) = ymd_from_ordinal(ordinal);
        let year = i32::try_from(year).map_err(|_| CalendarError::InvalidYear { year })?;
        Ok(Self { year, month, day })
    }

    /// Replaces all three fields at once.
    ///
    /// Runs the same checks as [`Date::new`]. On error `self` is left as it was.
    ///
    /// # Errors
    ///
    /// See [`Date::new`].
    pub fn reset(&mut self, year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
        let updated = Self::new(year, month, day)?;
        trace!(from = %self, to = %updated, "resetting date");
        *self = updated;
        Ok(())
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns one field selected by `component`.
    pub fn get(self, component: Component) -> i32 {
        match component {
            Component::Year => self.year,
            Component::Month => i32::from(self.month),
            Component::Day => i32::from(self.day),
        }
    }

    /// Returns the selected fields in the order requested. Repeats are kept.
    pub fn get_many(self, components: &[Component]) -> Vec<i32> {
        components.iter().map(|&c| self.get(c)).collect()
    }

    /// Like [`Date::get_many`], but with textual selectors such as `"y"` or
    /// `"Month"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSelector`] for the first selector that
    /// does not name a component.
    pub fn select<S: AsRef<str>>(self, selectors: &[S]) -> Result<Vec<i32>, CalendarError> {
        selectors
            .iter()
            .map(|s| s.as_ref().parse::<Component>().map(|c| self.get(c)))
            .collect()
    }

    /// Returns `true` if the date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        gregorian::is_leap_year(i64::from(self.year))
    }

    /// Returns the length of the date's month.
    pub fn days_in_month(self) -> u8 {
        month_length(i64::from(self.year), self.month)
    }

    /// Returns the day of the year (1..=366).
    pub fn day_of_year(self) -> u16 {
        days_before_month(i64::from(self.year), self.month) + u16::from(self.day)
    }

    /// Returns the number of days elapsed since January 1 of year 0.
    ///
    /// January 1 of year 0 itself has ordinal 0.
    pub fn ordinal(self) -> i64 {
        ordinal_from_ymd(i64::from(self.year), self.month, self.day)
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] after December 31 of `i32::MAX`.
    pub fn next_day(self) -> Result<Self, CalendarError> {
        if self.day < self.days_in_month() {
            Ok(Self {
                day: self.day + 1,
                ..self
            })
        } else if self.month < 12 {
            Ok(Self {
                month: self.month + 1,
                day: 1,
                ..self
            })
        } else {
            let year = self
                .year
                .checked_add(1)
                .ok_or(CalendarError::InvalidYear {
                    year: YEAR_AFTER_MAX,
                })?;
            Ok(Self {
                year,
                month: 1,
                day: 1,
            })
        }
    }

    /// Returns the preceding day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] with `year: -1` before
    /// January 1 of year 0.
    pub fn prev_day(self) -> Result<Self, CalendarError> {
        if self.day > 1 {
            Ok(Self {
                day: self.day - 1,
                ..self
            })
        } else if self.month > 1 {
            let month = self.month - 1;
            Ok(Self {
                month,
                day: month_length(i64::from(self.year), month),
                ..self
            })
        } else if self.year > 0 {
            Ok(Self {
                year: self.year - 1,
                month: 12,
                day: 31,
            })
        } else {
            Err(CalendarError::InvalidYear {
                year: YEAR_BEFORE_MIN,
            })
        }
    }

    /// Returns the date `days` days later (earlier for negative `days`).
    ///
    /// The result is the one reached by calling [`Date::next_day`] or
    /// [`Date::prev_day`] `|days|` times, computed without iterating.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the result would fall before
    /// January 1 of year 0 (`year: -1`) or after the last representable year.
    pub fn checked_add(self, days: i64) -> Result<Self, CalendarError> {
        trace!(date = %self, days, "shifting date");
        Self::from_ordinal(self.ordinal().saturating_add(days)).inspect_err(|err| {
            debug!(date = %self, days, %err, "date arithmetic left the supported range");
        })
    }

    /// Returns the date `days` days earlier. Same as `checked_add(-days)`.
    ///
    /// # Errors
    ///
    /// See [`Date::checked_add`].
    pub fn checked_sub(self, days: i64) -> Result<Self, CalendarError> {
        // -i64::MIN saturates; either offset is far outside the range.
        self.checked_add(days.checked_neg().unwrap_or(i64::MAX))
    }

    /// Returns the signed number of days from `other` to `self`.
    ///
    /// Positive when `self` is the later date.
    pub fn days_since(self, other: Date) -> i64 {
        self.ordinal() - other.ordinal()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({},{},{})", self.year, self.month, self.day)
    }
}

impl Add<i64> for Date {
    type Output = Result<Date, CalendarError>;

    fn add(self, days: i64) -> Self::Output {
        self.checked_add(days)
    }
}

impl Add<Date> for i64 {
    type Output = Result<Date, CalendarError>;

    fn add(self, date: Date) -> Self::Output {
        date.checked_add(self)
    }
}

impl Sub<i64> for Date {
    type Output = Result<Date, CalendarError>;

    fn sub(self, days: i64) -> Self::Output {
        self.checked_sub(days)
    }
}

impl Sub for Date {
    type Output = i64;

    fn sub(self, other: Date) -> i64 {
        self.days_since(other)
    }
}

/// Compares the date's ordinal with a raw day count.
///
/// Unlike `Date == Date`, which matches the `(year, month, day)` triple, this
/// is true whenever the ordinal equals the integer: `Date(0,1,1) == 0`. It
/// agrees with the `PartialOrd<i64>` impl.
impl PartialEq<i64> for Date {
    fn eq(&self, other: &i64) -> bool {
        self.ordinal() == *other
    }
}

impl PartialOrd<i64> for Date {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.ordinal().cmp(other))
    }
}

impl PartialEq<Date> for i64 {
    fn eq(&self, other: &Date) -> bool {
        *self == other.ordinal()
    }
}

impl PartialOrd<Date> for i64 {
    fn partial_cmp(&self, other: &Date) -> Option<Ordering> {
        Some(self.cmp(&other.ordinal()))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDate {
    year: i32,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for Date {
    type Error = CalendarError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Date::new(raw.year, raw.month, raw.day)
    }
}

#[cfg(feature = "serde")]
impl From<Date> for RawDate {
    fn from(date: Date) -> Self {
        RawDate {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}
