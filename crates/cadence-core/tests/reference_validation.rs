//! Integration tests against hand-checked reference values.
//!
//! The fixture holds day count, rolling and schedule cases; every case must
//! match exactly (year fractions within a tight tolerance).

use cadence_core::calendars::{example_calendar, Calendar, RollConvention};
use cadence_core::daycounts::{DayCount, DayCountConvention};
use cadence_core::schedule::Schedule;
use cadence_core::types::{Date, Period};
use serde::Deserialize;
use std::fs;

/// Path to the reference fixture, relative to the crate root
const REFERENCE_FILE: &str = "tests/fixtures/reference_cases.json";

const YEAR_FRACTION_TOLERANCE: f64 = 1e-12;

// ============================================================================
// JSON Structures for Test Data
// ============================================================================

#[derive(Debug, Deserialize)]
struct ReferenceSuite {
    metadata: Metadata,
    day_counts: Vec<DayCountCase>,
    rolls: Vec<RollCase>,
    schedules: Vec<ScheduleCase>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    description: String,
}

#[derive(Debug, Deserialize)]
struct DayCountCase {
    convention: String,
    start: Date,
    end: Date,
    day_count: i64,
    year_fraction: f64,
}

#[derive(Debug, Deserialize)]
struct RollCase {
    date: Date,
    convention: RollConvention,
    expected: Date,
}

#[derive(Debug, Deserialize)]
struct ScheduleCase {
    effective: Date,
    termination: Date,
    period: Period,
    dates: Vec<Date>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn load_suite() -> ReferenceSuite {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let path = std::path::Path::new(&manifest_dir).join(REFERENCE_FILE);

    let data = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture at {:?}: {}", path, e));

    serde_json::from_str(&data).unwrap_or_else(|e| panic!("Failed to parse fixture JSON: {}", e))
}

// ============================================================================
// FIXTURE-DRIVEN TESTS
// ============================================================================

#[test]
fn test_day_counts_from_fixture() {
    let suite = load_suite();
    println!(
        "Running {} day count cases: {}",
        suite.day_counts.len(),
        suite.metadata.description
    );

    for case in &suite.day_counts {
        let dc: DayCountConvention = case.convention.parse().unwrap();

        assert_eq!(
            dc.day_count(case.start, case.end),
            case.day_count,
            "{} day count {} -> {}",
            case.convention,
            case.start,
            case.end
        );

        let yf = dc.year_fraction(case.start, case.end).as_f64();
        assert!(
            (yf - case.year_fraction).abs() <= YEAR_FRACTION_TOLERANCE,
            "{} year fraction {} -> {}: expected {}, got {}",
            case.convention,
            case.start,
            case.end,
            case.year_fraction,
            yf
        );
    }
}

#[test]
fn test_rolls_from_fixture() {
    let suite = load_suite();
    let calendar = example_calendar();

    for case in &suite.rolls {
        let adjusted = calendar.adjust(case.date, case.convention);
        assert_eq!(
            adjusted, case.expected,
            "{} rolled {}",
            case.date, case.convention
        );
        assert!(calendar.is_business_day(adjusted) || case.convention == RollConvention::None);
    }
}

#[test]
fn test_schedules_from_fixture() {
    let suite = load_suite();

    for case in &suite.schedules {
        let schedule = Schedule::generate(case.effective, case.termination, case.period).unwrap();
        assert_eq!(
            schedule.dates(),
            case.dates.as_slice(),
            "{} -> {} by {}",
            case.effective,
            case.termination,
            case.period
        );
        assert_eq!(schedule.last(), Some(case.termination));
    }
}

// ============================================================================
// END-TO-END
// ============================================================================

#[test]
fn test_schedule_to_accruals() {
    let calendar = example_calendar();
    let schedule = Schedule::generate(
        Date::from_ymd(2022, 1, 1).unwrap(),
        Date::from_ymd(2025, 1, 1).unwrap(),
        Period::years(1),
    )
    .unwrap();

    let periods = schedule.accrual_periods(
        RollConvention::ModifiedFollowing,
        &calendar,
        &DayCountConvention::Actual365,
    );

    // 2022-01-03, 2023-01-02, 2024-01-02, 2025-01-02
    let starts: Vec<Date> = periods.iter().map(|p| p.start).collect();
    assert_eq!(
        starts,
        vec![
            Date::from_ymd(2022, 1, 3).unwrap(),
            Date::from_ymd(2023, 1, 2).unwrap(),
            Date::from_ymd(2024, 1, 2).unwrap(),
        ]
    );
    assert_eq!(periods[0].days(), 364);
    assert_eq!(periods[1].days(), 365);
    assert_eq!(periods[2].days(), 366);

    let total: f64 = periods.iter().map(|p| p.year_fraction.as_f64()).sum();
    approx::assert_relative_eq!(total, 1095.0 / 365.0, max_relative = 1e-12);
}
