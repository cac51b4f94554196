//! Payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Period;
use crate::error::{CadenceError, CadenceResult};

/// Payment frequency for periodic schedules.
///
/// Each frequency maps to a tenor of `12 / periods_per_year` months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns the forward schedule step for this frequency.
    #[must_use]
    pub fn period(&self) -> Period {
        Period::Months(self.months_per_period() as i32)
    }

    /// Looks up the frequency paying `n` times a year.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidPeriod` if `n` is not 1, 2, 4 or 12.
    pub fn from_periods_per_year(n: u32) -> CadenceResult<Self> {
        match n {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            12 => Ok(Frequency::Monthly),
            _ => Err(CadenceError::invalid_period(format!(
                "no frequency pays {n} times a year"
            ))),
        }
    }

    /// Returns all supported frequencies.
    #[must_use]
    pub fn all() -> &'static [Frequency] {
        &[
            Frequency::Annual,
            Frequency::SemiAnnual,
            Frequency::Quarterly,
            Frequency::Monthly,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
