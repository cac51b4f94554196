//! Business day rolling conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::error::CadenceError;
use crate::types::Date;

/// Diagnostic cap on single-day steps taken by one roll in debug builds.
///
/// A calendar with weekends and a finite holiday set always yields a
/// business day within a few days; hitting this cap means the calendar
/// marks (almost) every day as a holiday.
pub const MAX_ROLL_STEPS: u32 = 3_660;

/// Business day rolling conventions.
///
/// These conventions specify how to move a date that falls on a
/// non-business day. A date that already is a business day is returned
/// unchanged by every convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RollConvention {
    /// No adjustment - use the date as-is even if not a business day.
    #[serde(alias = "Unadjusted")]
    None,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the previous business day.
    #[serde(alias = "Preceding")]
    Previous,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the previous business day.
    ModifiedFollowing,

    /// Move to the previous business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    #[serde(alias = "ModifiedPreceding")]
    ModifiedPrevious,
}

impl RollConvention {
    /// Returns all rolling conventions.
    #[must_use]
    pub fn all() -> &'static [RollConvention] {
        &[
            RollConvention::None,
            RollConvention::Following,
            RollConvention::Previous,
            RollConvention::ModifiedFollowing,
            RollConvention::ModifiedPrevious,
        ]
    }

    /// Returns the display name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RollConvention::None => "None",
            RollConvention::Following => "Following",
            RollConvention::Previous => "Previous",
            RollConvention::ModifiedFollowing => "Modified Following",
            RollConvention::ModifiedPrevious => "Modified Previous",
        }
    }
}

impl std::fmt::Display for RollConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for RollConvention {
    type Err = CadenceError;

    /// Parses a rolling convention.
    ///
    /// Accepts display names ("Modified Following"), enum-style names
    /// ("ModifiedFollowing"), market abbreviations ("MF") and the
    /// "Preceding" synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['_', '-'], " ");

        match normalized.as_str() {
            "NONE" | "UNADJUSTED" | "U" => Ok(RollConvention::None),
            "FOLLOWING" | "F" => Ok(RollConvention::Following),
            "PREVIOUS" | "PRECEDING" | "P" => Ok(RollConvention::Previous),
            "MODIFIED FOLLOWING" | "MODIFIEDFOLLOWING" | "MF" => {
                Ok(RollConvention::ModifiedFollowing)
            }
            "MODIFIED PREVIOUS" | "MODIFIEDPREVIOUS" | "MODIFIED PRECEDING"
            | "MODIFIEDPRECEDING" | "MP" => Ok(RollConvention::ModifiedPrevious),
            _ => Err(CadenceError::unknown_convention("roll", s)),
        }
    }
}

/// Adjusts a date according to the given rolling convention.
///
/// Terminates as long as the calendar reports a business day somewhere
/// ahead of (or behind) `date`. Debug builds assert after
/// [`MAX_ROLL_STEPS`] steps; release builds keep stepping. A roll that would
/// leave the representable date range stops at the last representable date,
/// even if that date is not a business day.
pub fn adjust<C: Calendar + ?Sized>(date: Date, convention: RollConvention, calendar: &C) -> Date {
    if !calendar.is_non_business_day(date) {
        return date;
    }

    let adjusted = match convention {
        RollConvention::None => date,

        RollConvention::Following => following(date, calendar),

        RollConvention::Previous => previous(date, calendar),

        RollConvention::ModifiedFollowing => {
            let forward = following(date, calendar);
            if forward.month() == date.month() {
                forward
            } else {
                previous(date, calendar)
            }
        }

        RollConvention::ModifiedPrevious => {
            let backward = previous(date, calendar);
            if backward.month() == date.month() {
                backward
            } else {
                following(date, calendar)
            }
        }
    };

    if adjusted != date {
        log::trace!(
            "rolled {date} to {adjusted} ({convention}, calendar {})",
            calendar.name()
        );
    }
    adjusted
}

/// Returns the next business day on or after the given date.
pub(crate) fn following<C: Calendar + ?Sized>(date: Date, calendar: &C) -> Date {
    step_to_business_day(date, 1, calendar)
}

/// Returns the previous business day on or before the given date.
pub(crate) fn previous<C: Calendar + ?Sized>(date: Date, calendar: &C) -> Date {
    step_to_business_day(date, -1, calendar)
}

fn step_to_business_day<C: Calendar + ?Sized>(mut date: Date, step: i64, calendar: &C) -> Date {
    let mut steps = 0u32;
    while calendar.is_non_business_day(date) {
        debug_assert!(
            steps < MAX_ROLL_STEPS,
            "calendar '{}' reported no business day within {} days of {}",
            calendar.name(),
            MAX_ROLL_STEPS,
            date
        );
        date = match date.checked_add_days(step) {
            Ok(next) => next,
            Err(_) => {
                log::warn!(
                    "calendar '{}' has no business day before the date range ends at {}",
                    calendar.name(),
                    date
                );
                return date;
            }
        };
        steps += 1;
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{HolidayRule, RuleCalendar, WeekendCalendar, WeekendRule};

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_following() {
        let cal = WeekendCalendar;

        // Saturday should roll to Monday
        let adjusted = adjust(ymd(2025, 1, 4), RollConvention::Following, &cal);
        assert_eq!(adjusted, ymd(2025, 1, 6));
    }

    #[test]
    fn test_previous_saturday_and_sunday() {
        let cal = WeekendCalendar;
        let friday = ymd(2025, 1, 3);

        assert_eq!(adjust(ymd(2025, 1, 4), RollConvention::Previous, &cal), friday);
        // Sunday needs two steps back
        assert_eq!(adjust(ymd(2025, 1, 5), RollConvention::Previous, &cal), friday);
    }

    #[test]
    fn test_modified_following_same_month() {
        let cal = WeekendCalendar;

        // Sunday Jan 5 should roll to Monday Jan 6 (same month)
        let adjusted = adjust(ymd(2025, 1, 5), RollConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, ymd(2025, 1, 6));
    }

    #[test]
    fn test_modified_following_month_end() {
        let cal = WeekendCalendar;

        // Saturday May 31 2025: following is Monday June 2, so roll back to Friday May 30
        let adjusted = adjust(ymd(2025, 5, 31), RollConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, ymd(2025, 5, 30));
        assert_eq!(adjusted, adjust(ymd(2025, 5, 31), RollConvention::Previous, &cal));
    }

    #[test]
    fn test_modified_previous_month_start() {
        let cal = WeekendCalendar;

        // Saturday March 1 2025: previous is Friday Feb 28, so roll forward to Monday March 3
        let adjusted = adjust(ymd(2025, 3, 1), RollConvention::ModifiedPrevious, &cal);
        assert_eq!(adjusted, ymd(2025, 3, 3));

        // Sunday March 16 2025 stays in month going back
        let adjusted = adjust(ymd(2025, 3, 16), RollConvention::ModifiedPrevious, &cal);
        assert_eq!(adjusted, ymd(2025, 3, 14));
    }

    #[test]
    fn test_none() {
        let cal = WeekendCalendar;

        let saturday = ymd(2025, 1, 4);
        assert_eq!(adjust(saturday, RollConvention::None, &cal), saturday);
    }

    #[test]
    fn test_business_day_unchanged() {
        let cal = WeekendCalendar;

        let monday = ymd(2025, 1, 6);
        for convention in RollConvention::all() {
            assert_eq!(adjust(monday, *convention, &cal), monday);
        }
    }

    #[test]
    fn test_holiday_after_weekend() {
        let cal = RuleCalendar::new("Test", WeekendRule::SaturdaySunday)
            .with_holiday(HolidayRule::Fixed(ymd(2025, 1, 6)));

        // Saturday Jan 4 -> Monday Jan 6 is a holiday -> Tuesday Jan 7
        assert_eq!(
            adjust(ymd(2025, 1, 4), RollConvention::Following, &cal),
            ymd(2025, 1, 7)
        );
    }

    #[test]
    fn test_roll_stops_at_range_limit() {
        let last = Date::from(chrono::NaiveDate::MAX);
        let first = Date::from(chrono::NaiveDate::MIN);
        let cal = RuleCalendar::new("Edge", WeekendRule::None)
            .with_holiday(HolidayRule::Fixed(last))
            .with_holiday(HolidayRule::Fixed(first));

        assert_eq!(adjust(last, RollConvention::Following, &cal), last);
        assert_eq!(adjust(last, RollConvention::Previous, &cal), last.add_days(-1));
        assert_eq!(adjust(first, RollConvention::Previous, &cal), first);
        assert_eq!(adjust(first, RollConvention::Following, &cal), first.add_days(1));
        assert_eq!(
            adjust(last, RollConvention::ModifiedFollowing, &cal),
            last
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("MF".parse::<RollConvention>().unwrap(), RollConvention::ModifiedFollowing);
        assert_eq!(
            "modified following".parse::<RollConvention>().unwrap(),
            RollConvention::ModifiedFollowing
        );
        assert_eq!(
            "Modified_Preceding".parse::<RollConvention>().unwrap(),
            RollConvention::ModifiedPrevious
        );
        assert_eq!("Preceding".parse::<RollConvention>().unwrap(), RollConvention::Previous);
        assert_eq!("unadjusted".parse::<RollConvention>().unwrap(), RollConvention::None);
        assert!("sideways".parse::<RollConvention>().is_err());
    }

    #[test]
    fn test_from_str_roundtrip() {
        for convention in RollConvention::all() {
            let parsed: RollConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }

    #[test]
    fn test_serde_aliases() {
        let parsed: RollConvention = serde_json::from_str("\"Preceding\"").unwrap();
        assert_eq!(parsed, RollConvention::Previous);
        let json = serde_json::to_string(&RollConvention::ModifiedPrevious).unwrap();
        assert_eq!(json, "\"ModifiedPrevious\"");
    }
}
