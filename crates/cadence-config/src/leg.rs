//! Leg configuration types.
//!
//! A leg configuration names everything needed to produce accrual periods:
//! the date range, the tenor, the roll convention, the day count and the
//! holiday calendar.

use serde::{Deserialize, Serialize};

use cadence_core::calendars::{HolidayRule, RollConvention, RuleCalendar, WeekendRule};
use cadence_core::daycounts::DayCountConvention;
use cadence_core::schedule::{AccrualPeriod, PeriodicDates, Schedule};
use cadence_core::types::{Date, Frequency, Period};
use cadence_core::CadenceResult;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// TENOR
// =============================================================================

/// Step between schedule dates.
///
/// Serialized as a single-key table, e.g. `{ frequency = "Quarterly" }` or
/// `{ months = 6 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenorConfig {
    /// Coupon frequency.
    Frequency(Frequency),
    /// Whole months; negative for backward legs.
    Months(i32),
    /// Whole days; negative for backward legs.
    Days(i64),
}

impl Default for TenorConfig {
    fn default() -> Self {
        TenorConfig::Frequency(Frequency::SemiAnnual)
    }
}

impl TenorConfig {
    /// The schedule period for this tenor.
    pub fn period(&self) -> Period {
        match *self {
            TenorConfig::Frequency(frequency) => frequency.period(),
            TenorConfig::Months(n) => Period::months(n),
            TenorConfig::Days(n) => Period::days(n),
        }
    }
}

impl std::fmt::Display for TenorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenorConfig::Frequency(frequency) => write!(f, "{frequency}"),
            TenorConfig::Months(_) | TenorConfig::Days(_) => write!(f, "{}", self.period()),
        }
    }
}

// =============================================================================
// CALENDAR
// =============================================================================

/// Holiday calendar description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Calendar name.
    #[serde(default = "default_calendar_name")]
    pub name: String,

    /// Weekend rule.
    #[serde(default)]
    pub weekend: WeekendRule,

    /// Holiday rules.
    #[serde(default)]
    pub holidays: Vec<HolidayRule>,
}

fn default_calendar_name() -> String {
    "Weekend Only".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::weekend_only()
    }
}

impl CalendarConfig {
    /// Saturday/Sunday weekends, no holidays.
    pub fn weekend_only() -> Self {
        Self {
            name: default_calendar_name(),
            weekend: WeekendRule::SaturdaySunday,
            holidays: Vec::new(),
        }
    }

    /// Saturday/Sunday weekends plus 1 January.
    pub fn example() -> Self {
        Self {
            name: "Example".to_string(),
            weekend: WeekendRule::SaturdaySunday,
            holidays: vec![HolidayRule::NEW_YEAR_DAY],
        }
    }

    /// Builder method to add a holiday rule.
    pub fn with_holiday(mut self, rule: HolidayRule) -> Self {
        self.holidays.push(rule);
        self
    }

    /// Builds the calendar, dropping repeated holiday rules.
    pub fn to_calendar(&self) -> ConfigResult<RuleCalendar> {
        let mut rules: Vec<HolidayRule> = Vec::with_capacity(self.holidays.len());
        for rule in &self.holidays {
            if rules.contains(rule) {
                log::warn!("calendar '{}' lists {:?} more than once", self.name, rule);
            } else {
                rules.push(*rule);
            }
        }

        Ok(RuleCalendar::try_new(self.name.clone(), self.weekend, rules)?)
    }
}

// =============================================================================
// LEG CONFIGURATION
// =============================================================================

/// Configuration for one periodic leg.
///
/// # Example
///
/// ```rust
/// use cadence_config::LegConfig;
///
/// let leg = LegConfig::from_toml(r#"
///     name = "ACME 2030"
///     effective = "2025-01-15"
///     termination = "2030-01-15"
///     tenor = { frequency = "SemiAnnual" }
/// "#).unwrap();
///
/// assert_eq!(leg.schedule().unwrap().len(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Description of this configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// First accrual date requested.
    pub effective: Date,

    /// Final schedule date.
    pub termination: Date,

    /// Business day convention for schedule dates.
    #[serde(default = "default_roll")]
    pub roll: RollConvention,

    /// Day count convention for accrual fractions.
    #[serde(default = "default_day_count")]
    pub day_count: DayCountConvention,

    /// Step between schedule dates.
    #[serde(default)]
    pub tenor: TenorConfig,

    /// Holiday calendar.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_roll() -> RollConvention {
    RollConvention::ModifiedFollowing
}

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Thirty360
}

impl LegConfig {
    /// Creates a leg with default conventions.
    pub fn new(name: impl Into<String>, effective: Date, termination: Date) -> Self {
        Self {
            name: name.into(),
            description: None,
            effective,
            termination,
            roll: default_roll(),
            day_count: default_day_count(),
            tenor: TenorConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }

    /// Annual fixed leg: 30/360, Following, weekends plus New Year.
    pub fn annual_bond(name: impl Into<String>, effective: Date, termination: Date) -> Self {
        Self::new(name, effective, termination)
            .with_description("Annual 30/360 bond leg")
            .with_tenor(TenorConfig::Frequency(Frequency::Annual))
            .with_roll(RollConvention::Following)
            .with_day_count(DayCountConvention::Thirty360)
            .with_calendar(CalendarConfig::example())
    }

    /// Quarterly floating leg: Act/360, Modified Following, weekends only.
    pub fn quarterly_swap(name: impl Into<String>, effective: Date, termination: Date) -> Self {
        Self::new(name, effective, termination)
            .with_description("Quarterly Act/360 swap leg")
            .with_tenor(TenorConfig::Frequency(Frequency::Quarterly))
            .with_roll(RollConvention::ModifiedFollowing)
            .with_day_count(DayCountConvention::Actual360)
            .with_calendar(CalendarConfig::weekend_only())
    }

    /// Builder method to set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the tenor.
    pub fn with_tenor(mut self, tenor: TenorConfig) -> Self {
        self.tenor = tenor;
        self
    }

    /// Builder method to set the roll convention.
    pub fn with_roll(mut self, roll: RollConvention) -> Self {
        self.roll = roll;
        self
    }

    /// Builder method to set the day count.
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Builder method to set the calendar.
    pub fn with_calendar(mut self, calendar: CalendarConfig) -> Self {
        self.calendar = calendar;
        self
    }

    /// Parses a leg from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a leg from TOML.
    pub fn from_toml(toml: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Serializes the leg as pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the leg as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// The schedule period.
    pub fn period(&self) -> Period {
        self.tenor.period()
    }

    /// Generates the unadjusted schedule after validating the leg.
    pub fn schedule(&self) -> ConfigResult<Schedule> {
        let (errors, run) = self.checked_run();
        ConfigError::from_validation(errors)?;
        Ok(Schedule::from(run?))
    }

    /// Validates the leg, keeping the date run built for the direction check.
    fn checked_run(&self) -> (Vec<ValidationError>, CadenceResult<PeriodicDates>) {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        let run = PeriodicDates::new(self.effective, self.termination, self.period());
        if let Err(err) = &run {
            errors.push(ValidationError::with_rule(
                "tenor",
                err.to_string(),
                "schedule_direction",
            ));
        }

        if self.calendar.name.trim().is_empty() {
            errors.push(ValidationError::new("calendar.name", "Calendar name cannot be empty"));
        }

        for (i, rule) in self.calendar.holidays.iter().enumerate() {
            if let Err(err) = rule.validate() {
                errors.push(ValidationError::with_rule(
                    format!("calendar.holidays[{i}]"),
                    err.to_string(),
                    "valid_holiday",
                ));
            }
        }

        (errors, run)
    }

    /// Rolls and measures every period of the leg.
    ///
    /// When the schedule does not start on the effective date the leading
    /// stub is returned first, flagged with `is_stub`.
    pub fn accrual_periods(&self) -> ConfigResult<Vec<AccrualPeriod>> {
        let schedule = self.schedule()?;
        let calendar = self.calendar.to_calendar()?;

        let mut periods = Vec::with_capacity(schedule.len());
        if let Some(stub) = schedule.stub_period(self.roll, &calendar, &self.day_count) {
            periods.push(stub);
        }
        periods.extend(schedule.accrual_periods(self.roll, &calendar, &self.day_count));

        log::debug!(
            "leg '{}': {} accrual periods ({} {} {})",
            self.name,
            periods.len(),
            self.tenor,
            self.roll,
            self.day_count
        );

        Ok(periods)
    }
}

impl Validate for LegConfig {
    fn validate(&self) -> Vec<ValidationError> {
        self.checked_run().0
    }
}
