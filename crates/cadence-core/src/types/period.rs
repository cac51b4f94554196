//! Signed schedule steps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

use super::Date;
use crate::error::{CadenceError, CadenceResult};

/// A signed step between schedule dates.
///
/// Month steps clamp the day to the end of the target month; day steps are
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// A number of calendar months.
    Months(i32),
    /// A number of calendar days.
    Days(i64),
}

impl Period {
    /// A step of `n` months.
    #[must_use]
    pub const fn months(n: i32) -> Self {
        Period::Months(n)
    }

    /// A step of `n` years, expressed in months.
    #[must_use]
    pub const fn years(n: i32) -> Self {
        Period::Months(12 * n)
    }

    /// A step of `n` days.
    #[must_use]
    pub const fn days(n: i64) -> Self {
        Period::Days(n)
    }

    /// A step of `n` weeks, expressed in days.
    #[must_use]
    pub const fn weeks(n: i64) -> Self {
        Period::Days(7 * n)
    }

    /// Returns -1, 0 or 1 according to the direction of the step.
    #[must_use]
    pub fn signum(&self) -> i32 {
        match self {
            Period::Months(m) => m.signum(),
            Period::Days(d) => d.signum() as i32,
        }
    }

    /// Returns true for a zero-length step.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    /// Moves `date` by `count` whole periods.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the result is out of range.
    pub fn shift(&self, date: Date, count: i64) -> CadenceResult<Date> {
        match *self {
            Period::Months(m) => {
                let months = i64::from(m)
                    .checked_mul(count)
                    .and_then(|total| i32::try_from(total).ok())
                    .ok_or_else(|| {
                        CadenceError::invalid_date(format!("{date} + {count} x {self} out of range"))
                    })?;
                date.add_months(months)
            }
            Period::Days(d) => {
                let days = d.checked_mul(count).ok_or_else(|| {
                    CadenceError::invalid_date(format!("{date} + {count} x {self} out of range"))
                })?;
                date.checked_add_days(days)
            }
        }
    }
}

impl Neg for Period {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Period::Months(m) => Period::Months(-m),
            Period::Days(d) => Period::Days(-d),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Months(m) => write!(f, "{m}M"),
            Period::Days(d) => write!(f, "{d}D"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Period::years(2), Period::Months(24));
        assert_eq!(Period::weeks(2), Period::Days(14));
        assert_eq!(-Period::months(3), Period::Months(-3));
    }

    #[test]
    fn test_signum() {
        assert_eq!(Period::months(6).signum(), 1);
        assert_eq!(Period::days(-1).signum(), -1);
        assert!(Period::days(0).is_zero());
        assert!(Period::months(0).is_zero());
    }

    #[test]
    fn test_shift() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(
            Period::months(1).shift(date, 1).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );
        assert_eq!(
            Period::months(1).shift(date, 2).unwrap(),
            Date::from_ymd(2025, 3, 31).unwrap()
        );
        assert_eq!(
            Period::weeks(1).shift(date, -1).unwrap(),
            Date::from_ymd(2025, 1, 24).unwrap()
        );
    }

    #[test]
    fn test_shift_overflow() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        assert!(Period::months(i32::MAX).shift(date, 2).is_err());
        assert!(Period::days(i64::MAX).shift(date, 2).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::years(1).to_string(), "12M");
        assert_eq!(Period::days(-7).to_string(), "-7D");
    }
}
