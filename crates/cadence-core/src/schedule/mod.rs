//! Schedule generation for periodic date runs.
//!
//! Schedules are built backward from the termination date: every date is
//! `termination - k * period` for some whole `k`, and the run starts at the
//! earliest such date that does not pass the effective date. The effective
//! date is never inserted on its own; when the periods do not land on it,
//! [`Schedule::stub`] reports the uncovered leading interval.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::calendars::{RollConvention, WeekendCalendar};
//! use cadence_core::daycounts::DayCountConvention;
//! use cadence_core::schedule::Schedule;
//! use cadence_core::types::{Date, Period};
//!
//! let schedule = Schedule::generate(
//!     Date::from_ymd(2023, 1, 2).unwrap(),
//!     Date::from_ymd(2025, 1, 2).unwrap(),
//!     Period::months(12),
//! )
//! .unwrap();
//!
//! assert_eq!(schedule.len(), 3);
//! for period in schedule.accrual_periods(
//!     RollConvention::ModifiedFollowing,
//!     &WeekendCalendar,
//!     &DayCountConvention::Thirty360,
//! ) {
//!     println!("{} -> {}: {}", period.start, period.end, period.year_fraction);
//! }
//! ```

mod accrual;
mod periodic;

pub use accrual::AccrualPeriod;
pub use periodic::{PeriodicDates, PeriodicIter};

use serde::{Deserialize, Serialize};

use crate::calendars::{Calendar, RollConvention};
use crate::daycounts::DayCount;
use crate::error::{CadenceError, CadenceResult};
use crate::types::{Date, Frequency, Period};

/// A materialized run of unadjusted schedule dates.
///
/// Deserializing regenerates the dates from `effective`, `termination` and
/// `period` and rejects input whose stored dates differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleRepr")]
pub struct Schedule {
    /// Requested effective date
    effective: Date,
    /// Termination date (always the last date)
    termination: Date,
    /// Step between dates
    period: Period,
    /// Unadjusted dates, termination last
    dates: Vec<Date>,
}

/// Wire form of [`Schedule`] before its dates are checked.
#[derive(Deserialize)]
struct ScheduleRepr {
    effective: Date,
    termination: Date,
    period: Period,
    dates: Vec<Date>,
}

impl TryFrom<ScheduleRepr> for Schedule {
    type Error = CadenceError;

    fn try_from(repr: ScheduleRepr) -> CadenceResult<Self> {
        let schedule = Self::generate(repr.effective, repr.termination, repr.period)?;
        if schedule.dates != repr.dates {
            return Err(CadenceError::invalid_schedule(format!(
                "stored dates for {} -> {} by {} do not match the generated run of {} dates",
                repr.effective,
                repr.termination,
                repr.period,
                schedule.dates.len()
            )));
        }
        Ok(schedule)
    }
}

impl From<PeriodicDates> for Schedule {
    fn from(run: PeriodicDates) -> Self {
        let dates: Vec<Date> = run.iter().collect();

        log::debug!(
            "generated schedule {} -> {} by {}: {} dates from {}",
            run.effective(),
            run.termination(),
            run.period(),
            dates.len(),
            run.anchor()
        );

        Self {
            effective: run.effective(),
            termination: run.termination(),
            period: run.period(),
            dates,
        }
    }
}

impl Schedule {
    /// Generates the schedule for `effective .. termination` stepping by
    /// `period`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidScheduleDirection` when the period does
    /// not point from effective toward termination.
    pub fn generate(effective: Date, termination: Date, period: Period) -> CadenceResult<Self> {
        PeriodicDates::new(effective, termination, period).map(Self::from)
    }

    /// Generates a forward schedule at a coupon frequency.
    ///
    /// # Errors
    ///
    /// Returns an error if `termination` is not after `effective`.
    pub fn from_frequency(
        effective: Date,
        termination: Date,
        frequency: Frequency,
    ) -> CadenceResult<Self> {
        Self::generate(effective, termination, frequency.period())
    }

    /// Returns the unadjusted dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Iterates the unadjusted dates.
    pub fn iter(&self) -> std::slice::Iter<'_, Date> {
        self.dates.iter()
    }

    /// Returns consecutive `(start, end)` pairs of unadjusted dates.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the schedule holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First (anchor) date.
    #[must_use]
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Last date; equals the termination date.
    #[must_use]
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Requested effective date.
    #[must_use]
    pub fn effective(&self) -> Date {
        self.effective
    }

    /// Termination date.
    #[must_use]
    pub fn termination(&self) -> Date {
        self.termination
    }

    /// Step between dates.
    #[must_use]
    pub fn period(&self) -> Period {
        self.period
    }

    /// The leading interval `(effective, anchor)` when the anchor is not
    /// the effective date.
    #[must_use]
    pub fn stub(&self) -> Option<(Date, Date)> {
        self.first()
            .filter(|&anchor| anchor != self.effective)
            .map(|anchor| (self.effective, anchor))
    }

    /// Rolls every date onto a business day.
    ///
    /// Adjacent dates can collapse onto the same business day when the
    /// period is shorter than a run of holidays.
    pub fn adjusted<C: Calendar + ?Sized>(&self, roll: RollConvention, calendar: &C) -> Vec<Date> {
        self.dates
            .iter()
            .map(|&date| calendar.adjust(date, roll))
            .collect()
    }

    /// Builds accrual periods between consecutive dates.
    ///
    /// The leading stub, if any, is not included; see
    /// [`Schedule::stub_period`].
    pub fn accrual_periods<C, D>(
        &self,
        roll: RollConvention,
        calendar: &C,
        day_count: &D,
    ) -> Vec<AccrualPeriod>
    where
        C: Calendar + ?Sized,
        D: DayCount + ?Sized,
    {
        self.periods()
            .map(|(start, end)| AccrualPeriod::new(start, end, roll, calendar, day_count))
            .collect()
    }

    /// Accrual period for the leading stub, if there is one.
    pub fn stub_period<C, D>(
        &self,
        roll: RollConvention,
        calendar: &C,
        day_count: &D,
    ) -> Option<AccrualPeriod>
    where
        C: Calendar + ?Sized,
        D: DayCount + ?Sized,
    {
        self.stub()
            .map(|(start, end)| AccrualPeriod::new(start, end, roll, calendar, day_count).into_stub())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{example_calendar, WeekendCalendar};
    use crate::daycounts::{DayCountConvention, Thirty360};
    use crate::error::CadenceError;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_annual_schedule() {
        let schedule = Schedule::generate(ymd(2023, 1, 2), ymd(2025, 1, 2), Period::months(12)).unwrap();

        assert_eq!(schedule.dates(), &[ymd(2023, 1, 2), ymd(2024, 1, 2), ymd(2025, 1, 2)]);
        assert_eq!(schedule.first(), Some(ymd(2023, 1, 2)));
        assert_eq!(schedule.last(), Some(ymd(2025, 1, 2)));
        assert_eq!(schedule.stub(), None);
        assert_eq!(schedule.periods().count(), 2);
    }

    #[test]
    fn test_stub_reported() {
        let schedule = Schedule::generate(ymd(2023, 1, 1), ymd(2025, 1, 2), Period::months(12)).unwrap();
        assert_eq!(schedule.first(), Some(ymd(2023, 1, 2)));
        assert_eq!(schedule.stub(), Some((ymd(2023, 1, 1), ymd(2023, 1, 2))));

        let schedule = Schedule::generate(ymd(2023, 3, 1), ymd(2025, 2, 1), Period::months(12)).unwrap();
        assert_eq!(schedule.first(), Some(ymd(2024, 2, 1)));
        assert_eq!(schedule.stub(), Some((ymd(2023, 3, 1), ymd(2024, 2, 1))));
    }

    #[test]
    fn test_semiannual_from_frequency() {
        let schedule =
            Schedule::from_frequency(ymd(2020, 1, 15), ymd(2025, 1, 15), Frequency::SemiAnnual).unwrap();

        assert_eq!(schedule.len(), 11);
        assert_eq!(schedule.period(), Period::months(6));
        for (start, end) in schedule.periods() {
            assert_eq!(start.add_months(6).unwrap(), end);
        }
    }

    #[test]
    fn test_from_frequency_rejects_reversed_dates() {
        let result = Schedule::from_frequency(ymd(2025, 1, 15), ymd(2020, 1, 15), Frequency::Annual);
        assert!(matches!(result, Err(CadenceError::InvalidScheduleDirection { .. })));
    }

    #[test]
    fn test_backward_schedule() {
        let schedule = Schedule::generate(ymd(2025, 1, 2), ymd(2023, 1, 2), Period::years(-1)).unwrap();
        assert_eq!(schedule.dates(), &[ymd(2025, 1, 2), ymd(2024, 1, 2), ymd(2023, 1, 2)]);
    }

    #[test]
    fn test_single_date_schedule() {
        let date = ymd(2024, 6, 30);
        let schedule = Schedule::generate(date, date, Period::months(0)).unwrap();

        assert_eq!(schedule.dates(), &[date]);
        assert_eq!(schedule.periods().count(), 0);
        assert!(schedule.accrual_periods(RollConvention::Following, &WeekendCalendar, &Thirty360).is_empty());
    }

    #[test]
    fn test_adjusted_dates() {
        // 2022-01-01 Sat, 2023-01-01 Sun (New Year), 2024-01-01 Mon (New Year)
        let schedule = Schedule::generate(ymd(2022, 1, 1), ymd(2024, 1, 1), Period::years(1)).unwrap();
        let adjusted = schedule.adjusted(RollConvention::Following, &example_calendar());

        assert_eq!(adjusted, vec![ymd(2022, 1, 3), ymd(2023, 1, 2), ymd(2024, 1, 2)]);
        assert_eq!(schedule.dates()[0], ymd(2022, 1, 1));
    }

    #[test]
    fn test_accrual_periods() {
        let schedule = Schedule::generate(ymd(2023, 1, 2), ymd(2025, 1, 2), Period::months(12)).unwrap();
        let periods = schedule.accrual_periods(
            RollConvention::ModifiedFollowing,
            &WeekendCalendar,
            &DayCountConvention::Actual360,
        );

        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].year_fraction.as_f64(), 365.0 / 360.0);
        assert_eq!(periods[1].year_fraction.as_f64(), 366.0 / 360.0);
        assert!(periods.iter().all(|p| !p.is_stub));
    }

    #[test]
    fn test_stub_period() {
        let schedule = Schedule::generate(ymd(2024, 11, 15), ymd(2025, 6, 16), Period::months(6)).unwrap();
        let stub = schedule
            .stub_period(RollConvention::None, &WeekendCalendar, &Thirty360)
            .unwrap();

        assert_eq!(schedule.first(), Some(ymd(2024, 12, 16)));
        assert!(stub.is_stub);
        assert_eq!(stub.year_fraction.as_f64(), 31.0 / 360.0);
    }

    #[test]
    fn test_into_iterator() {
        let schedule = Schedule::generate(ymd(2025, 1, 1), ymd(2025, 4, 1), Period::months(1)).unwrap();
        let borrowed: Vec<Date> = (&schedule).into_iter().copied().collect();
        let owned: Vec<Date> = schedule.clone().into_iter().collect();

        assert_eq!(borrowed, owned);
        assert_eq!(owned.len(), 4);
    }

    #[test]
    fn test_from_periodic_dates() {
        let run = PeriodicDates::new(ymd(2023, 3, 1), ymd(2025, 2, 1), Period::years(1)).unwrap();
        let schedule = Schedule::from(run);

        assert_eq!(schedule.dates(), &[ymd(2024, 2, 1), ymd(2025, 2, 1)]);
        assert_eq!(schedule.effective(), ymd(2023, 3, 1));
        assert_eq!(schedule.stub(), Some((ymd(2023, 3, 1), ymd(2024, 2, 1))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let schedule = Schedule::generate(ymd(2025, 1, 1), ymd(2025, 4, 1), Period::months(1)).unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        let parsed: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, parsed);
    }

    #[test]
    fn test_deserialize_rejects_reversed_parameters() {
        let json = r#"{"effective":"2025-01-01","termination":"2024-01-01","period":{"Months":12},"dates":[]}"#;
        let err = serde_json::from_str::<Schedule>(json).unwrap_err();
        assert!(err.to_string().contains("direction"));
    }

    #[test]
    fn test_deserialize_rejects_tampered_dates() {
        let schedule = Schedule::generate(ymd(2025, 1, 1), ymd(2025, 4, 1), Period::months(1)).unwrap();
        let mut value = serde_json::to_value(&schedule).unwrap();

        value["dates"][1] = serde_json::json!("2025-02-15");
        let err = serde_json::from_value::<Schedule>(value.clone()).unwrap_err();
        assert!(err.to_string().contains("Invalid schedule"));

        value["dates"] = serde_json::json!(["2025-04-01"]);
        assert!(serde_json::from_value::<Schedule>(value).is_err());
    }
}
