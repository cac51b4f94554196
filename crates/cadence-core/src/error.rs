//! Error types for the Cadence library.
//!
//! All failures are local and synchronous. The operations are pure, so
//! retrying with the same inputs never helps.

use thiserror::Error;

/// A specialized Result type for Cadence operations.
pub type CadenceResult<T> = Result<T, CadenceError>;

/// The main error type for Cadence operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadenceError {
    /// The (year, month, day) triple is not a Gregorian civil date, or date
    /// arithmetic left the representable range.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Effective date, termination date and period have inconsistent signs.
    #[error(
        "Invalid schedule direction: effective {effective}, termination {termination}, period {period}"
    )]
    InvalidScheduleDirection {
        /// Effective date of the requested schedule.
        effective: String,
        /// Termination date of the requested schedule.
        termination: String,
        /// Period of the requested schedule.
        period: String,
    },

    /// A period or frequency that cannot be used as a tenor.
    #[error("Invalid period: {reason}")]
    InvalidPeriod {
        /// Description of the problem.
        reason: String,
    },

    /// Stored schedule dates that do not follow from its own parameters.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the mismatch.
        reason: String,
    },

    /// Calendar construction error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// A convention name that is not recognised.
    #[error("unknown {kind} convention: '{name}'")]
    UnknownConvention {
        /// Which family of convention was being parsed.
        kind: &'static str,
        /// The text that failed to parse.
        name: String,
    },
}

impl CadenceError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid schedule direction error.
    #[must_use]
    pub fn invalid_direction(
        effective: impl ToString,
        termination: impl ToString,
        period: impl ToString,
    ) -> Self {
        Self::InvalidScheduleDirection {
            effective: effective.to_string(),
            termination: termination.to_string(),
            period: period.to_string(),
        }
    }

    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(reason: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            reason: reason.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownConvention {
            kind,
            name: name.into(),
        }
    }
}
