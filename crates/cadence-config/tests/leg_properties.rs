//! Property tests for leg configurations.

use cadence_config::{CalendarConfig, LegConfig, TenorConfig, Validate};
use cadence_core::calendars::RollConvention;
use cadence_core::daycounts::DayCountConvention;
use cadence_core::types::Date;
use proptest::prelude::*;

fn date() -> impl Strategy<Value = Date> {
    (0i64..40_000).prop_map(|n| Date::from_ordinal(n).unwrap())
}

proptest! {
    #[test]
    fn prop_unadjusted_accruals_cover_the_leg(
        effective in date(),
        span in 1i64..5_000,
        months in 1i32..=12,
    ) {
        let termination = effective + span;
        let leg = LegConfig::new("PROP", effective, termination)
            .with_tenor(TenorConfig::Months(months))
            .with_roll(RollConvention::None)
            .with_day_count(DayCountConvention::Actual365);

        let periods = leg.accrual_periods().unwrap();
        let days: i64 = periods.iter().map(|p| p.days()).sum();

        prop_assert_eq!(days, span);
        prop_assert_eq!(periods.first().map(|p| p.start), Some(effective));
        prop_assert_eq!(periods.last().map(|p| p.end), Some(termination));
        prop_assert!(periods.iter().skip(1).all(|p| !p.is_stub));
    }

    #[test]
    fn prop_adjusted_accruals_are_business_days(
        effective in date(),
        span in 30i64..3_000,
    ) {
        let leg = LegConfig::new("PROP", effective, effective + span)
            .with_tenor(TenorConfig::Months(1))
            .with_calendar(CalendarConfig::example());

        let calendar = leg.calendar.to_calendar().unwrap();
        for period in leg.accrual_periods().unwrap() {
            prop_assert!(cadence_core::calendars::Calendar::is_business_day(&calendar, period.start));
            prop_assert!(cadence_core::calendars::Calendar::is_business_day(&calendar, period.end));
        }
    }

    #[test]
    fn prop_json_preserves_validity(effective in date(), span in 0i64..2_000, months in -12i32..=12) {
        let leg = LegConfig::new("PROP", effective, effective + span)
            .with_tenor(TenorConfig::Months(months));
        let parsed = LegConfig::from_json(&leg.to_json().unwrap()).unwrap();

        prop_assert_eq!(parsed.is_valid(), leg.is_valid());
        prop_assert_eq!(parsed, leg);
    }
}
