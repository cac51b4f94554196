//! # Cadence Core
//!
//! Date arithmetic for periodic financial schedules.
//!
//! This crate provides three engines that compose into one data flow:
//!
//! - **Calendars**: business day predicates and the [`RollConvention`]
//!   rolling rules
//! - **Day Counts**: year fractions under 30/360, Act/360, Act/365 and
//!   actual Gregorian years
//! - **Schedules**: backward-anchored periodic date runs ending on a
//!   termination date
//!
//! A schedule yields unadjusted dates, a calendar rolls them onto business
//! days, and a day count turns consecutive adjusted dates into accrual
//! fractions.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::prelude::*;
//!
//! let effective = Date::from_ymd(2023, 1, 2).unwrap();
//! let termination = Date::from_ymd(2025, 1, 2).unwrap();
//!
//! let schedule = Schedule::generate(effective, termination, Period::months(12)).unwrap();
//! let periods = schedule.accrual_periods(
//!     RollConvention::ModifiedFollowing,
//!     &WeekendCalendar,
//!     &DayCountConvention::Thirty360,
//! );
//!
//! assert_eq!(periods.len(), 2);
//! assert_eq!(periods[0].year_fraction.as_f64(), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::len_without_is_empty)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        adjust, Calendar, JointCalendar, PredicateCalendar, RollConvention, RuleCalendar,
        WeekendCalendar, WeekendRule,
    };
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CadenceError, CadenceResult};
    pub use crate::schedule::{AccrualPeriod, PeriodicDates, Schedule};
    pub use crate::types::{Date, Frequency, Period, YearsDuration};
}

pub use error::{CadenceError, CadenceResult};
pub use types::Date;
