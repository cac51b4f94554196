//! Day count conventions for accrual calculations.
//!
//! Day count conventions determine how elapsed time between two dates is
//! converted into a fraction of a year.
//!
//! # Supported Conventions
//!
//! - [`ActualYears`]: actual days / 365.2425 (mean Gregorian year)
//! - [`Thirty360`]: 30/360 bond basis
//! - [`Act360`]: Actual/360
//! - [`Act365`]: Actual/365 Fixed
//!
//! Every convention is antisymmetric:
//! `year_fraction(a, b) == -year_fraction(b, a)`.
//!
//! # Usage
//!
//! ```rust
//! use cadence_core::daycounts::{DayCount, DayCountConvention, Thirty360};
//! use cadence_core::types::Date;
//!
//! let start = Date::from_ymd(2023, 1, 2).unwrap();
//! let end = Date::from_ymd(2024, 1, 2).unwrap();
//!
//! assert_eq!(Thirty360.year_fraction(start, end).as_f64(), 1.0);
//! assert_eq!(
//!     DayCountConvention::Actual360.year_fraction(start, end).as_f64(),
//!     365.0 / 360.0
//! );
//! ```

mod actual;
mod thirty360;

pub use actual::{Act360, Act365, ActualYears};
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};

use crate::error::CadenceError;
use crate::types::{Date, YearsDuration};

/// Trait for day count conventions.
///
/// Implementations must be pure and thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> YearsDuration;

    /// Calculates the day count between two dates according to the
    /// convention.
    ///
    /// For actual conventions, this is calendar days. For 30/360 it uses
    /// the 30-day month assumption.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of all supported day count conventions.
///
/// The enum itself implements [`DayCount`] by dispatching to the unit
/// struct for each variant, so it can be used without boxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual days over the 365.2425-day Gregorian year.
    ActualYears,

    /// 30/360 bond basis.
    #[default]
    Thirty360,

    /// Actual/360.
    #[serde(alias = "Act360")]
    Actual360,

    /// Actual/365 Fixed.
    #[serde(alias = "Act365", alias = "Act365Fixed")]
    Actual365,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::ActualYears => Box::new(ActualYears),
            DayCountConvention::Thirty360 => Box::new(Thirty360),
            DayCountConvention::Actual360 => Box::new(Act360),
            DayCountConvention::Actual365 => Box::new(Act365),
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::ActualYears,
            DayCountConvention::Thirty360,
            DayCountConvention::Actual360,
            DayCountConvention::Actual365,
        ]
    }

    /// Returns the number of days in the convention's year.
    #[must_use]
    pub fn basis(&self) -> f64 {
        match self {
            DayCountConvention::ActualYears => crate::types::DAYS_PER_YEAR,
            DayCountConvention::Thirty360 | DayCountConvention::Actual360 => 360.0,
            DayCountConvention::Actual365 => 365.0,
        }
    }
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualYears => ActualYears.name(),
            DayCountConvention::Thirty360 => Thirty360.name(),
            DayCountConvention::Actual360 => Act360.name(),
            DayCountConvention::Actual365 => Act365.name(),
        }
    }

    fn year_fraction(&self, start: Date, end: Date) -> YearsDuration {
        match self {
            DayCountConvention::ActualYears => ActualYears.year_fraction(start, end),
            DayCountConvention::Thirty360 => Thirty360.year_fraction(start, end),
            DayCountConvention::Actual360 => Act360.year_fraction(start, end),
            DayCountConvention::Actual365 => Act365.year_fraction(start, end),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::ActualYears => ActualYears.day_count(start, end),
            DayCountConvention::Thirty360 => Thirty360.day_count(start, end),
            DayCountConvention::Actual360 => Act360.day_count(start, end),
            DayCountConvention::Actual365 => Act365.day_count(start, end),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CadenceError;

    /// Parses a day count convention from a string.
    ///
    /// Supports market names ("ACT/360", "30/360"), enum-style names
    /// ("Actual360") and common aliases ("BOND").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "ACT/YEARS" | "ACTUAL/YEARS" | "ACTUALYEARS" | "ACTUAL YEARS" | "YEARS" => {
                Ok(DayCountConvention::ActualYears)
            }

            "30/360" | "30/360 BOND" | "BOND" | "30U/360" | "THIRTY360" => {
                Ok(DayCountConvention::Thirty360)
            }

            "ACT/360" | "ACTUAL/360" | "ACT360" | "ACTUAL360" => Ok(DayCountConvention::Actual360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365" | "ACTUAL365" => Ok(DayCountConvention::Actual365),

            _ => Err(CadenceError::unknown_convention("day count", s)),
        }
    }
}
