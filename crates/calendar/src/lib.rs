//! # kairos-calendar
//!
//! Calendar definitions for climate time axes that do not follow the civil
//! Gregorian calendar.
//!
//! A [`Calendar`] describes how years divide into cycles (months, seasons, or
//! a single whole-year cycle) and how each cycle divides into days. The ten
//! built-in calendars cover the CF-convention set (`360_day`, `noleap`,
//! `all_leap`, `julian`, `proleptic_gregorian`, `gregorian`) plus a few
//! library extensions (`years_only`, `months_only`, `seasons`,
//! `365_days_no_months`).
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_calendar::{from_alias, CAL_GREGORIAN};
//!
//! let cal = from_alias("360_day")?;
//! assert_eq!(cal.count_days_in_year(2000), Some(360));
//!
//! // The historical Gregorian transition: October 5-14, 1582 do not exist.
//! let october = CAL_GREGORIAN.days_in_cycle(10, 1582);
//! assert!(!october.contains(5));
//! assert!(october.contains(15));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `cycles` | Cycle name tables (months, seasons, whole year) |
//! | `days` | Day tables and the [`DaySet`] type |
//! | `leap` | Leap-year predicates |
//! | `definition` | The [`Calendar`] type and derived counts |
//! | `catalog` | Built-in calendars and CF-alias lookup |
//! | `error` | Error types |

mod catalog;
mod cycles;
mod days;
mod definition;
mod error;
mod leap;

pub use catalog::{
    from_alias, CAL_360_DAY, CAL_365_NO_MONTHS, CAL_ALL_LEAP, CAL_GREGORIAN, CAL_JULIAN,
    CAL_MONTHS_ONLY, CAL_NOLEAP, CAL_PROLEPTIC, CAL_SEASONS, CAL_YEARS_ONLY,
};
pub use days::DaySet;
pub use definition::{Calendar, CalendarRef};
pub use error::CalendarError;
