//! Comparison and arithmetic against operands whose type is only known at
//! runtime.
//!
//! The typed API (`Ord`, `PartialOrd<i64>`, `Add`, `Sub`) covers statically
//! typed callers. The methods here accept any `'static` value, so hosts that
//! hold loosely typed values get [`CalendarError::TypeMismatch`] or
//! [`CalendarError::UnsupportedOperand`] instead of a coerced answer.

use std::any::{Any, type_name};
use std::cmp::Ordering;

use crate::date::Date;
use crate::error::CalendarError;

/// Result of [`Date::try_sub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    /// Subtracting a day count yields an earlier (or later) date.
    Date(Date),
    /// Subtracting a date yields the signed number of days between them.
    Days(i64),
}

/// Reads a primitive integer as a day count. Values beyond `i64` saturate.
fn day_count(value: &dyn Any) -> Option<i64> {
    macro_rules! widen {
        ($($ty:ty),*) => {
            $(
                if let Some(&n) = value.downcast_ref::<$ty>() {
                    return Some(i64::try_from(n).unwrap_or(i64::MAX));
                }
            )*
        };
    }
    widen!(i64, i32, i16, i8, u32, u16, u8, isize, u64, usize);
    None
}

impl Date {
    /// Compares against another date (by ordinal) or a raw day count.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TypeMismatch`] for any other type.
    pub fn try_cmp<T: Any>(&self, other: &T) -> Result<Ordering, CalendarError> {
        let other: &dyn Any = other;
        if let Some(date) = other.downcast_ref::<Date>() {
            return Ok(self.cmp(date));
        }
        match day_count(other) {
            Some(n) => Ok(self.ordinal().cmp(&n)),
            None => Err(CalendarError::TypeMismatch {
                found: type_name::<T>(),
            }),
        }
    }

    /// Fallible `<`. See [`Date::try_cmp`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TypeMismatch`] for unsupported types.
    pub fn try_lt<T: Any>(&self, other: &T) -> Result<bool, CalendarError> {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    /// Fallible `<=`. See [`Date::try_cmp`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TypeMismatch`] for unsupported types.
    pub fn try_le<T: Any>(&self, other: &T) -> Result<bool, CalendarError> {
        self.try_cmp(other).map(Ordering::is_le)
    }

    /// Fallible `>`. See [`Date::try_cmp`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TypeMismatch`] for unsupported types.
    pub fn try_gt<T: Any>(&self, other: &T) -> Result<bool, CalendarError> {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    /// Fallible `>=`. See [`Date::try_cmp`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TypeMismatch`] for unsupported types.
    pub fn try_ge<T: Any>(&self, other: &T) -> Result<bool, CalendarError> {
        self.try_cmp(other).map(Ordering::is_ge)
    }

    /// Adds an integer day count held in an arbitrary value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedOperand`] if `rhs` is not a
    /// primitive integer (two dates cannot be added), and
    /// [`CalendarError::InvalidYear`] if the result leaves the year range.
    pub fn try_add<T: Any>(&self, rhs: &T) -> Result<Date, CalendarError> {
        match day_count(rhs) {
            Some(days) => self.checked_add(days),
            None => Err(CalendarError::UnsupportedOperand {
                operand: type_name::<T>(),
            }),
        }
    }

    /// Subtracts a day count or another date held in an arbitrary value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedOperand`] if `rhs` is neither a
    /// date nor a primitive integer, and [`CalendarError::InvalidYear`] if a
    /// shifted date leaves the year range.
    pub fn try_sub<T: Any>(&self, rhs: &T) -> Result<Difference, CalendarError> {
        let rhs: &dyn Any = rhs;
        if let Some(other) = rhs.downcast_ref::<Date>() {
            return Ok(Difference::Days(self.days_since(*other)));
        }
        match day_count(rhs) {
            Some(days) => self.checked_sub(days).map(Difference::Date),
            None => Err(CalendarError::UnsupportedOperand {
                operand: type_name::<T>(),
            }),
        }
    }
}
