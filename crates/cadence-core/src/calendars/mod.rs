//! Business day calendars and rolling conventions.
//!
//! This module provides:
//! - The [`Calendar`] capability (`is_non_business_day`)
//! - Weekend rules, holiday rules and composed calendars
//! - Business day rolling via [`adjust`]

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod conventions;
mod holidays;

pub use conventions::{adjust, RollConvention, MAX_ROLL_STEPS};
pub use holidays::{
    christmas_day, example_calendar, month_day, new_year_day, HolidayRule, RuleCalendar,
};

use crate::types::Date;

/// Trait for business day calendars.
///
/// A calendar is a pure predicate: it must answer the same way every time
/// it is asked about the same date. Rolling terminates only if the calendar
/// reports a business day somewhere near every date; a calendar that marks
/// every day as a holiday makes [`Calendar::adjust`] loop.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a weekend day or holiday.
    fn is_non_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_non_business_day(date)
    }

    /// Adjusts a date according to the given rolling convention.
    fn adjust(&self, date: Date, convention: RollConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        conventions::following(date, self)
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        conventions::previous(date, self)
    }

    /// Advances a date by a number of business days.
    ///
    /// Stops at the last representable date if the range runs out first.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            match result.checked_add_days(direction) {
                Ok(next) => result = next,
                Err(_) => break,
            }
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Counts business days between two dates (exclusive of start, inclusive of end).
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut current = start.checked_add_days(1);

        while let Ok(day) = current {
            if day > end {
                break;
            }
            if self.is_business_day(day) {
                count += 1;
            }
            current = day.checked_add_days(1);
        }

        count
    }
}

impl<C: Calendar + ?Sized> Calendar for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_non_business_day(&self, date: Date) -> bool {
        (**self).is_non_business_day(date)
    }
}

impl<C: Calendar + ?Sized> Calendar for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_non_business_day(&self, date: Date) -> bool {
        (**self).is_non_business_day(date)
    }
}

impl<C: Calendar + ?Sized> Calendar for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_non_business_day(&self, date: Date) -> bool {
        (**self).is_non_business_day(date)
    }
}

/// Weekend conventions for different markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekendRule {
    /// Saturday and Sunday (most markets)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (Middle East markets)
    FridaySaturday,
    /// Thursday and Friday
    ThursdayFriday,
    /// Sunday only
    SundayOnly,
    /// No weekends
    None,
}

impl WeekendRule {
    /// Check if a weekday is a weekend day under this rule.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendRule::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendRule::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendRule::ThursdayFriday => matches!(weekday, Weekday::Thu | Weekday::Fri),
            WeekendRule::SundayOnly => matches!(weekday, Weekday::Sun),
            WeekendRule::None => false,
        }
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_non_business_day(&self, date: Date) -> bool {
        WeekendRule::SaturdaySunday.is_weekend(date.weekday())
    }
}

/// A calendar backed by an arbitrary predicate.
///
/// ```
/// use cadence_core::calendars::{Calendar, PredicateCalendar};
/// use cadence_core::types::Date;
///
/// // Every 1st of the month is closed.
/// let cal = PredicateCalendar::new("Firsts", |d: Date| d.day() == 1);
/// assert!(cal.is_non_business_day(Date::from_ymd(2025, 3, 1).unwrap()));
/// ```
pub struct PredicateCalendar<F> {
    name: String,
    predicate: F,
}

impl<F> PredicateCalendar<F>
where
    F: Fn(Date) -> bool + Send + Sync,
{
    /// Wraps a non-business-day predicate.
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> std::fmt::Debug for PredicateCalendar<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateCalendar")
            .field("name", &self.name)
            .finish()
    }
}

impl<F> Calendar for PredicateCalendar<F>
where
    F: Fn(Date) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_non_business_day(&self, date: Date) -> bool {
        (self.predicate)(date)
    }
}

/// Calendar that combines multiple calendars (joint holidays).
///
/// A date is a non-business day if any member calendar says so.
pub struct JointCalendar {
    calendars: Vec<Box<dyn Calendar>>,
    name: String,
}

impl JointCalendar {
    /// Creates a new joint calendar from multiple calendars.
    pub fn new(calendars: Vec<Box<dyn Calendar>>) -> Self {
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(" + ");

        Self { calendars, name }
    }

    /// Returns the number of member calendars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Returns true if there are no member calendars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .finish()
    }
}

impl Calendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_non_business_day(&self, date: Date) -> bool {
        self.calendars.iter().any(|cal| cal.is_non_business_day(date))
    }
}
