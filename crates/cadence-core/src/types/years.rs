//! Durations measured in years.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Length of the mean Gregorian year in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

fn default_days_per_year() -> f64 {
    DAYS_PER_YEAR
}

/// A floating-point count of years on a given day basis.
///
/// Produced by day count conventions and by [`Date::years_since`]. Each
/// convention records the number of days in its year (365.2425 for actual
/// Gregorian years, 360 for Act/360 and 30/360, 365 for Act/365), and
/// [`YearsDuration::to_days`] converts back on that same basis. For the
/// actual conventions this recovers the calendar days exactly; for 30/360 it
/// recovers the 30/360 day count, which is not a calendar-day distance.
///
/// Equality and ordering compare the year value only.
///
/// [`Date::years_since`]: super::Date::years_since
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearsDuration {
    years: f64,
    #[serde(default = "default_days_per_year")]
    days_per_year: f64,
}

impl YearsDuration {
    /// Zero Gregorian years.
    pub const ZERO: YearsDuration = YearsDuration {
        years: 0.0,
        days_per_year: DAYS_PER_YEAR,
    };

    /// Converts a day count into Gregorian years.
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        Self::from_days_on_basis(days, DAYS_PER_YEAR)
    }

    /// Converts a day count into years of `days_per_year` days.
    #[must_use]
    pub fn from_days_on_basis(days: i64, days_per_year: f64) -> Self {
        Self {
            years: days as f64 / days_per_year,
            days_per_year,
        }
    }

    /// Returns the raw number of years.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.years
    }

    /// Days in one year of this duration's basis.
    #[must_use]
    pub fn days_per_year(&self) -> f64 {
        self.days_per_year
    }

    /// Converts back to whole days on the duration's basis, rounding to the
    /// nearest day.
    #[must_use]
    pub fn to_days(&self) -> i64 {
        (self.years * self.days_per_year).round() as i64
    }

    /// Re-expresses `other` in this duration's year length.
    #[allow(clippy::float_cmp)]
    fn rebased(&self, other: Self) -> f64 {
        if other.days_per_year == self.days_per_year {
            other.years
        } else {
            other.years * other.days_per_year / self.days_per_year
        }
    }
}

impl Default for YearsDuration {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for YearsDuration {
    fn eq(&self, other: &Self) -> bool {
        self.years == other.years
    }
}

impl PartialOrd for YearsDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.years.partial_cmp(&other.years)
    }
}

impl From<YearsDuration> for f64 {
    fn from(years: YearsDuration) -> Self {
        years.years
    }
}

impl Neg for YearsDuration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            years: -self.years,
            days_per_year: self.days_per_year,
        }
    }
}

impl Add for YearsDuration {
    type Output = Self;

    /// Adds on the left operand's basis.
    fn add(self, other: Self) -> Self::Output {
        Self {
            years: self.years + self.rebased(other),
            days_per_year: self.days_per_year,
        }
    }
}

impl Sub for YearsDuration {
    type Output = Self;

    /// Subtracts on the left operand's basis.
    fn sub(self, other: Self) -> Self::Output {
        Self {
            years: self.years - self.rebased(other),
            days_per_year: self.days_per_year,
        }
    }
}

impl std::iter::Sum for YearsDuration {
    /// Sums on the basis of the first element.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl fmt::Display for YearsDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Y", self.years)
    }
}
