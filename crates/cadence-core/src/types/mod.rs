//! Value types shared by every component.
//!
//! - [`Date`]: Gregorian calendar date with a linear day ordinal
//! - [`YearsDuration`]: Elapsed time in years
//! - [`Period`]: Signed schedule step (months or days)
//! - [`Frequency`]: Payment frequency and its tenor

mod date;
mod frequency;
mod period;
mod years;

pub use date::Date;
pub use frequency::Frequency;
pub use period::Period;
pub use years::{YearsDuration, DAYS_PER_YEAR};
