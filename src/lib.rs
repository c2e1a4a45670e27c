//! # kairos
//!
//! Variable-precision date and time-interval arithmetic under pluggable
//! calendar definitions, for climate and earth-science datasets whose time
//! axes do not follow the civil Gregorian calendar.
//!
//! The workspace splits into four crates, re-exported here:
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `kairos-calendar` | Calendar definitions and CF-alias lookup |
//! | `kairos-timevec` | Partial-precision time vectors and durations |
//! | `kairos-date` | Calendar-bound dates and date collections |
//! | `kairos-period` | Open/closed periods, sampling and counting |
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos::{date, duration, period, Duration, Unit};
//!
//! let start = date(&[Some(1979.0), Some(1.0), Some(1.0), Some(0.0)], "gregorian")?;
//! let end = date(&[Some(1979.0), Some(1.0), Some(1.0), Some(6.0)], "gregorian")?;
//! let window = period(start, end, false, false)?;
//! let stamps = window.regular_sample(&Duration::ONE_HOUR, None)?;
//! assert_eq!(stamps.len(), 7);
//! ```

pub use kairos_calendar::{
    from_alias, Calendar, CalendarError, CalendarRef, DaySet, CAL_360_DAY, CAL_365_NO_MONTHS,
    CAL_ALL_LEAP, CAL_GREGORIAN, CAL_JULIAN, CAL_MONTHS_ONLY, CAL_NOLEAP, CAL_PROLEPTIC,
    CAL_SEASONS, CAL_YEARS_ONLY,
};
pub use kairos_date::{CalendarDate, DateCollection, DateError, RowError};
pub use kairos_period::{convex_hull, Hull, Period, PeriodError};
pub use kairos_timevec::{Duration, RawTimeVector, TimeVector, TimeVectorError, Unit};

/// Unified error type for the facade constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Time vector error.
    #[error(transparent)]
    TimeVector(#[from] TimeVectorError),

    /// Date error.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Period error.
    #[error(transparent)]
    Period(#[from] PeriodError),
}

/// Builds a date from raw optional slot values and a CF calendar alias.
///
/// A fractional value in the last set slot is resolved by exact calendar
/// day counts, so `[2007.25]` lands a quarter of the way into 2007.
///
/// # Errors
///
/// Returns an [`Error`] wrapping the alias lookup, vector validation or
/// date validation failure.
pub fn date(slots: &[Option<f64>], calendar_alias: &str) -> Result<CalendarDate, Error> {
    let calendar = from_alias(calendar_alias)?;
    let vector = TimeVector::from_slots(slots)?;
    Ok(CalendarDate::implicit(&vector, calendar)?)
}

/// Builds a date from fully set leading slot values and a CF calendar
/// alias.
///
/// # Errors
///
/// Same failure modes as [`date`].
pub fn date_from_values(values: &[f64], calendar_alias: &str) -> Result<CalendarDate, Error> {
    let calendar = from_alias(calendar_alias)?;
    let vector = TimeVector::from_values(values)?;
    Ok(CalendarDate::implicit(&vector, calendar)?)
}

/// Builds a duration from up to six raw slot values.
///
/// # Errors
///
/// Returns an [`Error`] for more than six slots or non-finite values.
pub fn duration(slots: &[f64]) -> Result<Duration, Error> {
    Ok(Duration::from_slots(slots)?)
}

/// Builds a period from two dates and its endpoint flags.
///
/// # Errors
///
/// Returns an [`Error`] when the calendars differ or the dates are not
/// strictly ordered.
pub fn period(
    initial: CalendarDate,
    terminal: CalendarDate,
    left_open: bool,
    right_open: bool,
) -> Result<Period, Error> {
    Ok(Period::new(initial, terminal, left_open, right_open)?)
}

/// Builds a date collection from N×k (k ≤ 6) rows of optional slot
/// values, all bound to one calendar alias.
///
/// This is the bulk boundary used for NetCDF time-vector arrays and
/// decoded GRIB date/time fields; use
/// [`DateCollection::from_rows_lossy`] directly to isolate malformed
/// rows instead of failing the batch.
///
/// # Errors
///
/// Fails on the alias lookup or the first invalid row.
pub fn dates_from_rows(
    rows: &[Vec<Option<f64>>],
    calendar_alias: &str,
) -> Result<DateCollection, Error> {
    let calendar = from_alias(calendar_alias)?;
    Ok(DateCollection::from_rows(rows, calendar)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_through_alias() {
        let d = date(&[Some(2010.0), Some(1.0), Some(10.0)], "gregorian").unwrap();
        assert_eq!(d.to_string(), "2010-01-10");
        assert_eq!(d.calendar().alias(), "gregorian");
    }

    #[test]
    fn unknown_alias_surfaces() {
        let err = date(&[Some(2010.0)], "metric_time").unwrap_err();
        assert!(matches!(err, Error::Calendar(_)));
        assert_eq!(err.to_string(), "unknown calendar: metric_time");
    }

    #[test]
    fn duration_shortcut() {
        let d = duration(&[0.0, 0.0, 0.0, 12.0]).unwrap();
        assert_eq!(d, Duration::hours(12.0));
    }

    #[test]
    fn period_construction() {
        let a = date(&[Some(2000.0)], "standard").unwrap();
        let b = date(&[Some(2001.0)], "standard").unwrap();
        let p = period(a, b, false, true).unwrap();
        assert_eq!(p.to_string(), "2000 to 2001");
    }

    #[test]
    fn bulk_rows() {
        let rows = vec![
            vec![Some(2000.0), Some(1.0), Some(1.0)],
            vec![Some(2000.0), Some(1.0), Some(2.0)],
        ];
        let c = dates_from_rows(&rows, "360_day").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.single_calendar().unwrap().alias(), "360_day");
    }
}
