//! Accrual periods derived from a schedule.

use serde::{Deserialize, Serialize};

use crate::calendars::{Calendar, RollConvention};
use crate::daycounts::DayCount;
use crate::types::{Date, YearsDuration};

/// One accrual interval between consecutive schedule dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    /// Period start before business day adjustment
    pub unadjusted_start: Date,
    /// Period end before business day adjustment
    pub unadjusted_end: Date,
    /// Adjusted period start
    pub start: Date,
    /// Adjusted period end
    pub end: Date,
    /// Year fraction between the adjusted dates
    pub year_fraction: YearsDuration,
    /// True for the leading interval from the effective date to the anchor
    pub is_stub: bool,
}

impl AccrualPeriod {
    /// Rolls both ends and measures the adjusted interval.
    pub fn new<C, D>(
        unadjusted_start: Date,
        unadjusted_end: Date,
        roll: RollConvention,
        calendar: &C,
        day_count: &D,
    ) -> Self
    where
        C: Calendar + ?Sized,
        D: DayCount + ?Sized,
    {
        let start = calendar.adjust(unadjusted_start, roll);
        let end = calendar.adjust(unadjusted_end, roll);

        Self {
            unadjusted_start,
            unadjusted_end,
            start,
            end,
            year_fraction: day_count.year_fraction(start, end),
            is_stub: false,
        }
    }

    /// Marks the period as the leading stub.
    #[must_use]
    pub fn into_stub(mut self) -> Self {
        self.is_stub = true;
        self
    }

    /// Actual calendar days between the adjusted dates.
    #[must_use]
    pub fn days(&self) -> i64 {
        self.start.days_between(&self.end)
    }
}
