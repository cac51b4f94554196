//! Actual-days day count conventions.
//!
//! All three count the literal number of days between the two dates and
//! differ only in the year basis.

use super::DayCount;
use crate::types::{Date, YearsDuration, DAYS_PER_YEAR};

/// Actual elapsed time in Gregorian years.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365.2425}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActualYears;

impl DayCount for ActualYears {
    fn name(&self) -> &'static str {
        "ACT/YEARS"
    }

    fn year_fraction(&self, start: Date, end: Date) -> YearsDuration {
        end.years_since(&start)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/360 day count convention.
///
/// Money market instruments and floating legs.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> YearsDuration {
        YearsDuration::from_days_on_basis(self.day_count(start, end), 360.0)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Fixed day count convention.
///
/// The denominator is always 365, leap year or not.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> YearsDuration {
        YearsDuration::from_days_on_basis(self.day_count(start, end), 365.0)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
