//! # kairos-date
//!
//! Calendar-bound dates and vectorized date collections.
//!
//! A [`CalendarDate`] binds a partial-precision time vector to one calendar
//! definition: slots are validated against the calendar's cycle and day
//! tables, unset slots take calendar defaults, and arithmetic carries across
//! cycle and year boundaries by re-deriving the tables at every crossing
//! (cycle lengths are year-dependent in leap-bearing calendars).
//!
//! A [`DateCollection`] is a flat collection of dates, each potentially
//! bound to a different calendar, with bulk arithmetic running per
//! homogeneous-calendar partition.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_calendar::CAL_GREGORIAN;
//! use kairos_date::CalendarDate;
//! use kairos_timevec::{Duration, TimeVector};
//!
//! let tv = TimeVector::from_values(&[1582.0, 10.0, 4.0])?;
//! let date = CalendarDate::new(&tv, &CAL_GREGORIAN)?;
//! let next = date.add(&Duration::ONE_DAY)?;
//! assert_eq!(next.to_string(), "1582-10-15");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | [`CalendarDate`] construction, defaults, rendering |
//! | `arith` | Calendar-aware carry/borrow arithmetic |
//! | `compare` | Mask-aware and instant comparisons |
//! | `collection` | [`DateCollection`] and calendar partitions |
//! | `error` | Error types |

mod arith;
mod collection;
mod compare;
mod date;
mod error;

pub use collection::{DateCollection, RowError};
pub use date::CalendarDate;
pub use error::DateError;
