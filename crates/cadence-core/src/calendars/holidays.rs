//! Holiday rules and rule-based calendars.
//!
//! Holidays are matched literally: a fixed month/day holiday that falls on
//! a weekend is not moved to an observed date.

use serde::{Deserialize, Serialize};

use super::{Calendar, WeekendRule};
use crate::error::{CadenceError, CadenceResult};
use crate::types::Date;

/// Returns true if `date` falls on the given month and day in any year.
#[must_use]
pub fn month_day(date: Date, month: u32, day: u32) -> bool {
    date.month() == month && date.day() == day
}

/// New Year's Day (January 1).
#[must_use]
pub fn new_year_day(date: Date) -> bool {
    month_day(date, 1, 1)
}

/// Christmas Day (December 25).
#[must_use]
pub fn christmas_day(date: Date) -> bool {
    month_day(date, 12, 25)
}

/// A single holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayRule {
    /// Recurs every year on the same month and day.
    MonthDay {
        /// Month (1-12)
        month: u32,
        /// Day of month (1-31)
        day: u32,
    },
    /// A one-off holiday.
    Fixed(Date),
}

impl HolidayRule {
    /// January 1 every year.
    pub const NEW_YEAR_DAY: HolidayRule = HolidayRule::MonthDay { month: 1, day: 1 };

    /// December 25 every year.
    pub const CHRISTMAS_DAY: HolidayRule = HolidayRule::MonthDay { month: 12, day: 25 };

    /// Returns true if the rule marks `date` as a holiday.
    #[must_use]
    pub fn matches(&self, date: Date) -> bool {
        match *self {
            HolidayRule::MonthDay { month, day } => month_day(date, month, day),
            HolidayRule::Fixed(holiday) => holiday == date,
        }
    }

    /// Checks that a recurring rule can occur at all.
    ///
    /// February 29 is accepted; it only matches in leap years.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::CalendarError` for impossible month/day pairs.
    pub fn validate(&self) -> CadenceResult<()> {
        match *self {
            HolidayRule::MonthDay { month, day } => Date::from_ymd(2000, month, day)
                .map(|_| ())
                .map_err(|_| {
                    CadenceError::calendar_error(format!(
                        "holiday rule {month:02}-{day:02} never occurs"
                    ))
                }),
            HolidayRule::Fixed(_) => Ok(()),
        }
    }
}

/// A calendar built from a weekend rule and a list of holiday rules.
///
/// A date is a non-business day if it is a weekend day OR matches any
/// holiday rule.
///
/// # Example
///
/// ```
/// use cadence_core::calendars::{Calendar, HolidayRule, RuleCalendar, WeekendRule};
/// use cadence_core::types::Date;
///
/// let cal = RuleCalendar::new("Custom", WeekendRule::SaturdaySunday)
///     .with_holiday(HolidayRule::NEW_YEAR_DAY)
///     .with_holiday(HolidayRule::CHRISTMAS_DAY);
///
/// assert!(cal.is_non_business_day(Date::from_ymd(2025, 12, 25).unwrap()));
/// assert!(cal.is_business_day(Date::from_ymd(2025, 12, 24).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCalendar {
    name: String,
    #[serde(default)]
    weekend: WeekendRule,
    #[serde(default)]
    holidays: Vec<HolidayRule>,
}

impl RuleCalendar {
    /// Creates a calendar with only a weekend rule.
    pub fn new(name: impl Into<String>, weekend: WeekendRule) -> Self {
        Self {
            name: name.into(),
            weekend,
            holidays: Vec::new(),
        }
    }

    /// Creates a calendar from holiday rules, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::CalendarError` if any rule can never occur.
    pub fn try_new(
        name: impl Into<String>,
        weekend: WeekendRule,
        holidays: impl IntoIterator<Item = HolidayRule>,
    ) -> CadenceResult<Self> {
        let holidays: Vec<HolidayRule> = holidays.into_iter().collect();
        for rule in &holidays {
            rule.validate()?;
        }
        Ok(Self {
            name: name.into(),
            weekend,
            holidays,
        })
    }

    /// Adds a holiday rule.
    #[must_use]
    pub fn with_holiday(mut self, rule: HolidayRule) -> Self {
        self.holidays.push(rule);
        self
    }

    /// Returns the weekend rule.
    #[must_use]
    pub fn weekend(&self) -> WeekendRule {
        self.weekend
    }

    /// Returns the holiday rules.
    #[must_use]
    pub fn holidays(&self) -> &[HolidayRule] {
        &self.holidays
    }

    /// Checks every holiday rule.
    ///
    /// # Errors
    ///
    /// Returns the first rule error found.
    pub fn validate(&self) -> CadenceResult<()> {
        self.holidays.iter().try_for_each(HolidayRule::validate)
    }
}

impl Calendar for RuleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_non_business_day(&self, date: Date) -> bool {
        self.weekend.is_weekend(date.weekday()) || self.holidays.iter().any(|h| h.matches(date))
    }
}

/// Weekend plus New Year's Day.
#[must_use]
pub fn example_calendar() -> RuleCalendar {
    RuleCalendar::new("Example", WeekendRule::SaturdaySunday).with_holiday(HolidayRule::NEW_YEAR_DAY)
}
