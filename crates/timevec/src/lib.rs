//! # kairos-timevec
//!
//! Partial-precision time vectors and calendar-free durations.
//!
//! The basic unit is a 6-slot time vector `[year, cycle, day, hour, minute,
//! second]`. The precision of a vector is left to the caller: each slot is
//! either set or unset, and once a slot is unset every finer slot must be
//! unset too. A fractional part is allowed only in the last set slot.
//!
//! A [`Duration`] reads the same six slots as signed relative offsets. It has
//! no partial-precision restriction (unset slots default to zero) and no
//! calendar attached: seconds, minutes and hours normalize among themselves,
//! but carrying days into cycles or years needs a calendar and lives in the
//! date layer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_timevec::{Duration, TimeVector};
//!
//! let tv = TimeVector::from_slots(&[Some(1980.0), Some(11.0)])?;
//! assert_eq!(tv.resolution(), 2);
//!
//! let delta = Duration::minutes(90.0).normalize_minutes_to_hours();
//! assert_eq!(delta.hours(), 1.0);
//! assert_eq!(delta.minutes(), 30.0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `vector` | The masked 6-slot [`TimeVector`] |
//! | `duration` | [`Duration`] arithmetic and normalization |
//! | `unit` | The [`Unit`] axis enum |
//! | `raw` | Values-plus-mask storage form for I/O |
//! | `error` | Error types |

mod duration;
mod error;
mod raw;
mod unit;
mod vector;

pub use duration::Duration;
pub use error::TimeVectorError;
pub use raw::RawTimeVector;
pub use unit::Unit;
pub use vector::TimeVector;
