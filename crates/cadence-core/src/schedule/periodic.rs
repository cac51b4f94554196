//! Backward-anchored periodic date generation.

use std::iter::FusedIterator;

use crate::error::{CadenceError, CadenceResult};
use crate::types::{Date, Period};

/// A finite, restartable run of dates spaced one period apart and ending
/// exactly on the termination date.
///
/// The run is anchored at `termination`: the first date is the earliest
/// `termination - k * period` that does not pass `effective`. Effective is
/// only part of the run when the periods land on it exactly.
///
/// Each date is computed directly from termination, so month stepping
/// clamps against termination's day of month and never drifts.
///
/// # Example
///
/// ```
/// use cadence_core::schedule::PeriodicDates;
/// use cadence_core::types::{Date, Period};
///
/// let dates = PeriodicDates::new(
///     Date::from_ymd(2023, 3, 1).unwrap(),
///     Date::from_ymd(2025, 2, 1).unwrap(),
///     Period::years(1),
/// )
/// .unwrap();
///
/// assert_eq!(dates.anchor(), Date::from_ymd(2024, 2, 1).unwrap());
/// assert_eq!(dates.iter().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicDates {
    effective: Date,
    termination: Date,
    period: Period,
    /// Whole periods between the anchor and termination.
    count: i64,
}

impl PeriodicDates {
    /// Validates the request and locates the anchor.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidScheduleDirection` unless either
    /// `effective == termination` with a zero period, or the period points
    /// from effective toward termination.
    pub fn new(effective: Date, termination: Date, period: Period) -> CadenceResult<Self> {
        validate_direction(effective, termination, period)?;

        let mut count = 0i64;
        if !period.is_zero() {
            // Starts from the calendar estimate, which is off by at most one
            // period once month-end clamping is taken into account.
            let in_run = |k: i64| match period.shift(termination, -k) {
                Ok(candidate) if period.signum() > 0 => candidate >= effective,
                Ok(candidate) => candidate <= effective,
                Err(_) => false,
            };

            count = estimate_count(effective, termination, period);
            while count > 0 && !in_run(count) {
                count -= 1;
            }
            while in_run(count + 1) {
                count += 1;
            }
        }

        Ok(Self {
            effective,
            termination,
            period,
            count,
        })
    }

    /// The effective date the run was requested from.
    #[must_use]
    pub fn effective(&self) -> Date {
        self.effective
    }

    /// The termination date; always the last date of the run.
    #[must_use]
    pub fn termination(&self) -> Date {
        self.termination
    }

    /// The step between consecutive dates.
    #[must_use]
    pub fn period(&self) -> Period {
        self.period
    }

    /// The first date of the run.
    #[must_use]
    pub fn anchor(&self) -> Date {
        self.period
            .shift(self.termination, -self.count)
            .unwrap_or(self.termination)
    }

    /// Number of dates in the run (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.count as usize + 1
    }

    /// Always false; a valid run contains at least the termination date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Starts a fresh pass over the dates.
    #[must_use]
    pub fn iter(&self) -> PeriodicIter {
        PeriodicIter {
            termination: self.termination,
            period: self.period,
            offset: -self.count,
            exhausted: false,
        }
    }
}

impl IntoIterator for PeriodicDates {
    type Item = Date;
    type IntoIter = PeriodicIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PeriodicDates {
    type Item = Date;
    type IntoIter = PeriodicIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`PeriodicDates`] run.
///
/// Once termination has been yielded every further call to `next` returns
/// `None`.
#[derive(Debug, Clone)]
pub struct PeriodicIter {
    termination: Date,
    period: Period,
    /// Offset of the next date from termination, in whole periods.
    offset: i64,
    exhausted: bool,
}

impl Iterator for PeriodicIter {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let date = self.period.shift(self.termination, self.offset).ok();
        if self.offset == 0 || date.is_none() {
            self.exhausted = true;
        } else {
            self.offset += 1;
        }
        date
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.exhausted {
            0
        } else {
            self.offset.unsigned_abs() as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PeriodicIter {}

impl FusedIterator for PeriodicIter {}

/// Whole periods between effective and termination, ignoring day-of-month
/// clamping.
fn estimate_count(effective: Date, termination: Date, period: Period) -> i64 {
    let estimate = match period {
        Period::Months(months) => {
            let month_index = |d: Date| i64::from(d.year()) * 12 + i64::from(d.month());
            (month_index(termination) - month_index(effective)) / i64::from(months)
        }
        Period::Days(days) => (termination - effective) / days,
    };
    estimate.max(0)
}

fn validate_direction(effective: Date, termination: Date, period: Period) -> CadenceResult<()> {
    let consistent = match termination.cmp(&effective) {
        std::cmp::Ordering::Equal => period.is_zero(),
        std::cmp::Ordering::Greater => period.signum() > 0,
        std::cmp::Ordering::Less => period.signum() < 0,
    };

    if consistent {
        Ok(())
    } else {
        Err(CadenceError::invalid_direction(effective, termination, period))
    }
}
