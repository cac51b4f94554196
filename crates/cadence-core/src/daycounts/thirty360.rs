//! 30/360 bond basis day count convention.

use super::DayCount;
use crate::types::{Date, YearsDuration};

/// 30/360 day count convention (Bond Basis).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 AND D1 is now greater than 29, change D2 to 30
///
/// Rule 1 is applied before rule 2 is tested. There is no special
/// February end-of-month handling.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
///
/// When `end` is before `start` the result is the negation of the ordered
/// count, so swapping the arguments always flips the sign.
///
/// The fraction is on a 360-day basis, so adding it to a date moves the date
/// by the 30/360 day count rather than the calendar distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> YearsDuration {
        YearsDuration::from_days_on_basis(self.day_count(start, end), 360.0)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        if end < start {
            return -self.day_count(end, start);
        }

        let (y1, m1, d1) = start.ymd();
        let (y2, m2, d2) = end.ymd();
        let (y1, m1, mut d1) = (i64::from(y1), i64::from(m1), i64::from(d1));
        let (y2, m2, mut d2) = (i64::from(y2), i64::from(m2), i64::from(d2));

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 > 29 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}
