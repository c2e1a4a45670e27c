//! Calendar-bound date construction, defaults, and rendering.

use kairos_calendar::CalendarRef;
use kairos_timevec::{Duration, RawTimeVector, TimeVector};

use crate::error::DateError;

/// A partial-precision date bound to one calendar definition.
///
/// Construction validates every set slot against the calendar and fills
/// unset slots with defaults (first cycle, first day of that cycle, zero
/// clock fields). The defaults materialize values without claiming
/// precision: the resolution still records how many leading slots were
/// explicitly set, and comparisons and rendering honor it.
///
/// Dates are immutable values; every arithmetic operation returns a new
/// date. Equality (`==`) is structural: same slot values, same resolution,
/// same calendar. For ordering with ambiguity detection see
/// [`CalendarDate::compare_checked`]; for the fully materialized instant
/// view see [`CalendarDate::cmp_instant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub(crate) values: [f64; 6],
    pub(crate) resolution: u8,
    pub(crate) calendar: CalendarRef,
}

impl CalendarDate {
    /// Builds a date from a validated time vector and a calendar.
    ///
    /// Fractional values are only accepted in the seconds slot; use
    /// [`CalendarDate::implicit`] for vectors with a fractional last slot at
    /// coarser precision.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::EmptyDate`] when no year is set,
    /// [`DateError::NegativeComponent`] for negative values outside the
    /// year, [`DateError::UnresolvedFraction`] for fractions outside the
    /// seconds slot, and the respective out-of-range error when a slot does
    /// not fit the calendar.
    pub fn new(vector: &TimeVector, calendar: CalendarRef) -> Result<Self, DateError> {
        let resolution = vector.resolution();
        if resolution == 0 {
            return Err(DateError::EmptyDate);
        }
        let slots = vector.slots();
        let mut values = [0.0; 6];
        for i in 0..resolution {
            let value = slots[i].expect("slots are set up to the resolution");
            if i > 0 && value < 0.0 {
                return Err(DateError::NegativeComponent { slot: i });
            }
            if i < 5 && value.fract() != 0.0 {
                return Err(DateError::UnresolvedFraction { slot: i });
            }
            values[i] = value;
        }
        let year = values[0] as i64;

        // Cycle: validate against the cycle keys, default to the first.
        if resolution >= 2 {
            let cycles = calendar.count_cycles_in_year(year) as i64;
            let cycle = values[1] as i64;
            if cycle < 1 || cycle > cycles {
                return Err(DateError::CycleOutOfRange { cycle, year });
            }
        } else {
            values[1] = 1.0;
        }
        let cycle = values[1] as u32;

        // Day: validate against the day table, default to its first entry.
        let day_set = calendar.days_in_cycle(cycle, year);
        if resolution >= 3 {
            let day = values[2] as i64;
            if day < 1 || day > u32::MAX as i64 || !day_set.contains(day as u32) {
                return Err(DateError::DayOutOfRange { day, cycle, year });
            }
        } else {
            values[2] = f64::from(day_set.first().unwrap_or(1));
        }

        if resolution >= 4 {
            let hour = values[3] as i64;
            if !(0..24).contains(&hour) {
                return Err(DateError::HourOutOfRange { hour });
            }
        }
        if resolution >= 5 {
            let minute = values[4] as i64;
            if !(0..60).contains(&minute) {
                return Err(DateError::MinuteOutOfRange { minute });
            }
        }
        if resolution >= 6 {
            let second = values[5];
            if !(0.0..60.0).contains(&second) {
                return Err(DateError::SecondOutOfRange { second });
            }
        }

        Ok(Self {
            values,
            resolution: resolution as u8,
            calendar,
        })
    }

    /// Builds a date from a vector whose last set slot may be fractional.
    ///
    /// The fraction is split off and applied as a duration, so `[2007.25]`
    /// lands a quarter of the way into 2007 by exact day count.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::new`] plus any arithmetic
    /// failure while applying the fractional remainder.
    pub fn implicit(vector: &TimeVector, calendar: CalendarRef) -> Result<Self, DateError> {
        let resolution = vector.resolution();
        if resolution == 0 {
            return Err(DateError::EmptyDate);
        }
        let slots = vector.slots();
        let mut integral = [None; 6];
        let mut fractions = [0.0; 6];
        let mut any_fraction = false;
        for i in 0..resolution {
            let value = slots[i].expect("slots are set up to the resolution");
            integral[i] = Some(value.trunc());
            fractions[i] = value.fract();
            if fractions[i] != 0.0 {
                any_fraction = true;
            }
        }
        let base = Self::new(&TimeVector::from_slots(&integral)?, calendar)?;
        if any_fraction {
            base.add(&Duration::from_slots(&fractions)?)
        } else {
            Ok(base)
        }
    }

    /// The bound calendar.
    pub fn calendar(&self) -> CalendarRef {
        self.calendar
    }

    /// Number of explicitly set slots (1 to 6).
    pub fn resolution(&self) -> usize {
        self.resolution as usize
    }

    /// Year value.
    pub fn year(&self) -> i64 {
        self.values[0] as i64
    }

    /// Cycle value (defaulted to 1 when unset).
    pub fn cycle(&self) -> u32 {
        self.values[1] as u32
    }

    /// Day value (defaulted to the first day of the cycle when unset).
    pub fn day(&self) -> u32 {
        self.values[2] as u32
    }

    /// Hour value (defaulted to 0 when unset).
    pub fn hour(&self) -> u32 {
        self.values[3] as u32
    }

    /// Minute value (defaulted to 0 when unset).
    pub fn minute(&self) -> u32 {
        self.values[4] as u32
    }

    /// Second value, possibly fractional (defaulted to 0 when unset).
    pub fn second(&self) -> f64 {
        self.values[5]
    }

    /// 1-based position of the day within its cycle's day table.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::DayOutOfRange`] if the day has left the table
    /// (only possible after a year or cycle jump onto a nonexistent day).
    pub fn day_number_in_cycle(&self) -> Result<u32, DateError> {
        let set = self.calendar.days_in_cycle(self.cycle(), self.year());
        set.day_number(self.day()).ok_or(DateError::DayOutOfRange {
            day: self.day() as i64,
            cycle: self.cycle(),
            year: self.year(),
        })
    }

    /// 1-based position of the day within its year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::DaysUncountable`] when an earlier cycle of the
    /// year is unbounded, or [`DateError::DayOutOfRange`] as in
    /// [`Self::day_number_in_cycle`].
    pub fn day_number_in_year(&self) -> Result<u64, DateError> {
        let year = self.year();
        let mut number = 0u64;
        for cycle in 1..self.cycle() {
            number += self
                .calendar
                .count_days_in_cycle(cycle, year)
                .ok_or(DateError::DaysUncountable {
                    alias: self.calendar.alias(),
                })?;
        }
        Ok(number + u64::from(self.day_number_in_cycle()?))
    }

    /// The explicitly set slots as a time vector (defaults are not
    /// reported).
    pub fn time_vector(&self) -> TimeVector {
        let mut slots = [None; 6];
        for i in 0..self.resolution() {
            slots[i] = Some(self.values[i]);
        }
        TimeVector::from_slots(&slots).expect("a validated date is a valid time vector")
    }

    /// Decomposes into the values-plus-mask storage form.
    pub fn to_raw(&self) -> RawTimeVector {
        self.time_vector().to_raw()
    }

    pub(crate) fn with_values(&self, values: [f64; 6], resolution: u8) -> Self {
        Self {
            values,
            resolution,
            calendar: self.calendar,
        }
    }
}

impl std::fmt::Display for CalendarDate {
    /// Canonical form `YYYY[-CC[-DD[THH[:MM[:SS]]]]]Z`, with components
    /// rendered only up to the resolution and the `Z` suffix only when the
    /// hour is set.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.year())?;
        if self.resolution >= 2 {
            write!(f, "-{:02}", self.cycle())?;
        }
        if self.resolution >= 3 {
            write!(f, "-{:02}", self.day())?;
        }
        if self.resolution >= 4 {
            write!(f, "T{:02}", self.hour())?;
        }
        if self.resolution >= 5 {
            write!(f, ":{:02}", self.minute())?;
        }
        if self.resolution >= 6 {
            let second = self.second();
            if second.fract() == 0.0 {
                write!(f, ":{:02}", second as i64)?;
            } else {
                write!(f, ":{}", second)?;
            }
        }
        if self.resolution >= 4 {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_calendar::{CAL_360_DAY, CAL_GREGORIAN, CAL_NOLEAP, CAL_YEARS_ONLY};

    fn tv(values: &[f64]) -> TimeVector {
        TimeVector::from_values(values).unwrap()
    }

    #[test]
    fn year_only_defaults() {
        let d = CalendarDate::new(&tv(&[2010.0]), &CAL_GREGORIAN).unwrap();
        assert_eq!(d.resolution(), 1);
        assert_eq!(d.year(), 2010);
        assert_eq!(d.cycle(), 1);
        assert_eq!(d.day(), 1);
        assert_eq!(d.hour(), 0);
        assert_eq!(d.second(), 0.0);
    }

    #[test]
    fn full_precision() {
        let d = CalendarDate::new(
            &tv(&[2002.0, 2.0, 28.0, 12.0, 30.0, 0.0]),
            &CAL_GREGORIAN,
        )
        .unwrap();
        assert_eq!(d.resolution(), 6);
        assert_eq!(d.cycle(), 2);
        assert_eq!(d.day(), 28);
    }

    #[test]
    fn empty_vector_rejected() {
        let err = CalendarDate::new(&TimeVector::empty(), &CAL_GREGORIAN).unwrap_err();
        assert_eq!(err, DateError::EmptyDate);
    }

    #[test]
    fn negative_component_rejected() {
        let vector = TimeVector::from_slots(&[Some(2000.0), Some(-1.0)]).unwrap();
        assert_eq!(
            CalendarDate::new(&vector, &CAL_GREGORIAN).unwrap_err(),
            DateError::NegativeComponent { slot: 1 }
        );
    }

    #[test]
    fn negative_year_allowed() {
        let d = CalendarDate::new(&tv(&[-1.0, 12.0, 31.0]), &CAL_NOLEAP).unwrap();
        assert_eq!(d.year(), -1);
    }

    #[test]
    fn cycle_out_of_range() {
        assert_eq!(
            CalendarDate::new(&tv(&[2000.0, 13.0]), &CAL_GREGORIAN).unwrap_err(),
            DateError::CycleOutOfRange {
                cycle: 13,
                year: 2000
            }
        );
        assert_eq!(
            CalendarDate::new(&tv(&[2000.0, 0.0]), &CAL_GREGORIAN).unwrap_err(),
            DateError::CycleOutOfRange { cycle: 0, year: 2000 }
        );
    }

    #[test]
    fn day_out_of_range() {
        assert_eq!(
            CalendarDate::new(&tv(&[2001.0, 2.0, 29.0]), &CAL_NOLEAP).unwrap_err(),
            DateError::DayOutOfRange {
                day: 29,
                cycle: 2,
                year: 2001
            }
        );
    }

    #[test]
    fn removed_gregorian_day_rejected() {
        assert_eq!(
            CalendarDate::new(&tv(&[1582.0, 10.0, 10.0]), &CAL_GREGORIAN).unwrap_err(),
            DateError::DayOutOfRange {
                day: 10,
                cycle: 10,
                year: 1582
            }
        );
    }

    #[test]
    fn clock_fields_validated() {
        assert_eq!(
            CalendarDate::new(&tv(&[2000.0, 1.0, 1.0, 24.0]), &CAL_GREGORIAN).unwrap_err(),
            DateError::HourOutOfRange { hour: 24 }
        );
        assert_eq!(
            CalendarDate::new(&tv(&[2000.0, 1.0, 1.0, 0.0, 60.0]), &CAL_GREGORIAN)
                .unwrap_err(),
            DateError::MinuteOutOfRange { minute: 60 }
        );
        assert_eq!(
            CalendarDate::new(&tv(&[2000.0, 1.0, 1.0, 0.0, 0.0, 60.0]), &CAL_GREGORIAN)
                .unwrap_err(),
            DateError::SecondOutOfRange { second: 60.0 }
        );
    }

    #[test]
    fn fractional_seconds_allowed() {
        let d = CalendarDate::new(
            &tv(&[2000.0, 1.0, 1.0, 0.0, 0.0, 30.5]),
            &CAL_GREGORIAN,
        )
        .unwrap();
        assert_eq!(d.second(), 30.5);
    }

    #[test]
    fn fractional_minute_rejected_by_strict_constructor() {
        let vector = tv(&[1943.0, 5.0, 3.0, 0.0, 5.5]);
        assert_eq!(
            CalendarDate::new(&vector, &CAL_GREGORIAN).unwrap_err(),
            DateError::UnresolvedFraction { slot: 4 }
        );
    }

    #[test]
    fn implicit_resolves_fractional_minute() {
        // [1943, 5, 3, 0, 5.5] is equivalent to [1943, 5, 3, 0, 5, 30].
        let d =
            CalendarDate::implicit(&tv(&[1943.0, 5.0, 3.0, 0.0, 5.5]), &CAL_GREGORIAN)
                .unwrap();
        assert_eq!(d.minute(), 5);
        assert_eq!(d.second(), 30.0);
    }

    #[test]
    fn implicit_fractional_year() {
        // A quarter of the way into a 360-day year is day 91 (90 full days).
        let d = CalendarDate::implicit(&tv(&[2007.25]), &CAL_360_DAY).unwrap();
        assert_eq!(d.year(), 2007);
        assert_eq!(d.cycle(), 4);
        assert_eq!(d.day(), 1);
    }

    #[test]
    fn day_numbers() {
        let d = CalendarDate::new(&tv(&[2000.0, 3.0, 15.0]), &CAL_NOLEAP).unwrap();
        assert_eq!(d.day_number_in_cycle().unwrap(), 15);
        assert_eq!(d.day_number_in_year().unwrap(), 74);
    }

    #[test]
    fn day_number_across_transition() {
        let d = CalendarDate::new(&tv(&[1582.0, 10.0, 15.0]), &CAL_GREGORIAN).unwrap();
        assert_eq!(d.day_number_in_cycle().unwrap(), 5);
    }

    #[test]
    fn years_only_dates() {
        let d = CalendarDate::new(&tv(&[2000.0]), &CAL_YEARS_ONLY).unwrap();
        assert_eq!(d.cycle(), 1);
        assert_eq!(d.day(), 1);
    }

    #[test]
    fn display_partial() {
        let d = CalendarDate::new(&tv(&[2010.0]), &CAL_GREGORIAN).unwrap();
        assert_eq!(d.to_string(), "2010");
        let d = CalendarDate::new(&tv(&[1980.0, 11.0]), &CAL_GREGORIAN).unwrap();
        assert_eq!(d.to_string(), "1980-11");
        let d = CalendarDate::new(&tv(&[2010.0, 1.0, 10.0]), &CAL_GREGORIAN).unwrap();
        assert_eq!(d.to_string(), "2010-01-10");
    }

    #[test]
    fn display_with_clock() {
        let d = CalendarDate::new(&tv(&[1979.0, 1.0, 1.0, 6.0]), &CAL_GREGORIAN).unwrap();
        assert_eq!(d.to_string(), "1979-01-01T06Z");
        let d = CalendarDate::new(
            &tv(&[2002.0, 2.0, 28.0, 12.0, 30.0, 0.0]),
            &CAL_GREGORIAN,
        )
        .unwrap();
        assert_eq!(d.to_string(), "2002-02-28T12:30:00Z");
    }

    #[test]
    fn display_fractional_second() {
        let d = CalendarDate::new(
            &tv(&[2000.0, 1.0, 1.0, 0.0, 0.0, 30.5]),
            &CAL_GREGORIAN,
        )
        .unwrap();
        assert_eq!(d.to_string(), "2000-01-01T00:00:30.5Z");
    }

    #[test]
    fn structural_equality() {
        let a = CalendarDate::new(&tv(&[2000.0, 1.0]), &CAL_GREGORIAN).unwrap();
        let b = CalendarDate::new(&tv(&[2000.0, 1.0]), &CAL_GREGORIAN).unwrap();
        let c = CalendarDate::new(&tv(&[2000.0]), &CAL_GREGORIAN).unwrap();
        assert_eq!(a, b);
        // Same instant, different resolution: not structurally equal.
        assert_ne!(a, c);
        // Same vector, different calendar: not equal.
        let d = CalendarDate::new(&tv(&[2000.0, 1.0]), &CAL_360_DAY).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn raw_round_trip() {
        let d = CalendarDate::new(&tv(&[1979.0, 1.0, 1.0, 6.0]), &CAL_GREGORIAN).unwrap();
        let raw = d.to_raw();
        assert_eq!(raw.set, [true, true, true, true, false, false]);
        let back = CalendarDate::new(&raw.to_vector().unwrap(), &CAL_GREGORIAN).unwrap();
        assert_eq!(back, d);
    }
}
