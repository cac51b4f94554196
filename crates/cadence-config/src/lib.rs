//! Cadence Configuration Layer
//!
//! Serializable descriptions of periodic legs for the Cadence date engines.
//!
//! # Features
//!
//! - **Leg Configuration**: dates, tenor, roll convention, day count and
//!   calendar in one JSON or TOML document
//! - **Validation**: every rule violation is reported with its field
//! - **Registry**: thread-safe named storage of validated legs
//!
//! # Example
//!
//! ```rust
//! use cadence_config::{LegConfig, Validate};
//! use cadence_core::types::Date;
//!
//! let leg = LegConfig::quarterly_swap(
//!     "USD.SWAP.1Y",
//!     Date::from_ymd(2025, 3, 31).unwrap(),
//!     Date::from_ymd(2026, 3, 31).unwrap(),
//! );
//! assert!(leg.is_valid());
//!
//! let periods = leg.accrual_periods().unwrap();
//! assert_eq!(periods.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod leg;
pub mod registry;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use leg::{CalendarConfig, LegConfig, TenorConfig};
pub use registry::LegRegistry;
