//! Calendar date type.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::YearsDuration;
use crate::error::{CadenceError, CadenceResult};

/// Day number of 1970-01-01 counted from 0001-01-01 (proleptic Gregorian).
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// An immutable Gregorian calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. It can only be
/// built from a real civil date; there is no sentinel "error date".
///
/// # Example
///
/// ```rust
/// use cadence_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let later = date.add_months(6).unwrap();
/// assert_eq!(later.ymd(), (2025, 12, 15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the triple is not a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CadenceResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CadenceError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from its day ordinal (days since 1970-01-01).
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the ordinal is out of range.
    pub fn from_ordinal(ordinal: i64) -> CadenceResult<Self> {
        i32::try_from(ordinal + EPOCH_DAYS_FROM_CE)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Date)
            .ok_or_else(|| CadenceError::invalid_date(format!("day ordinal {ordinal} out of range")))
    }

    /// Projects the date back into its (year, month, day) fields.
    #[must_use]
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the signed number of days since 1970-01-01.
    #[must_use]
    pub fn ordinal(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        last_day_of_month(self.year(), self.month()).unwrap_or(31)
    }

    /// Checks if the date is the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Adds a number of days to the date.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's representable range
    /// (roughly +/- 262,000 years). Use [`Date::checked_add_days`] when the
    /// offset is untrusted.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the result is out of range.
    pub fn checked_add_days(&self, days: i64) -> CadenceResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Date)
            .ok_or_else(|| CadenceError::invalid_date(format!("{self} + {days} days out of range")))
    }

    /// Adds a (possibly negative) number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CadenceResult<Self> {
        let total_months = i64::from(self.year()) * 12 + i64::from(self.month()) - 1
            + i64::from(months);
        let new_year = i32::try_from(total_months.div_euclid(12))
            .map_err(|_| CadenceError::invalid_date(format!("{self} + {months} months out of range")))?;
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = last_day_of_month(new_year, new_month)
            .ok_or_else(|| CadenceError::invalid_date(format!("{self} + {months} months out of range")))?;
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// Elapsed time from `earlier` to `self` in Gregorian years.
    ///
    /// Negative when `earlier` is after `self`.
    #[must_use]
    pub fn years_since(&self, earlier: &Date) -> YearsDuration {
        YearsDuration::from_days(earlier.days_between(self))
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

impl Add<YearsDuration> for Date {
    type Output = Self;

    /// Moves the date by a duration in years, converted to whole days on
    /// the duration's own basis.
    fn add(self, years: YearsDuration) -> Self::Output {
        self.add_days(years.to_days())
    }
}

impl Sub<YearsDuration> for Date {
    type Output = Self;

    fn sub(self, years: YearsDuration) -> Self::Output {
        self.add_days(-years.to_days())
    }
}

/// Last day of the month, or `None` outside chrono's date range.
fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    if month == 12 {
        return NaiveDate::from_ymd_opt(year, 12, 31).map(|d| d.day());
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)?
        .pred_opt()
        .filter(|d| d.month() == month)
        .map(|d| d.day())
}
