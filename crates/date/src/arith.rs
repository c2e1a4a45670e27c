//! Calendar-aware carry/borrow arithmetic on dates.
//!
//! Each `add_*` method splits its increment into integral and fractional
//! parts, applies the integral part with calendar-aware carry (boundary
//! crossings re-derive the cycle and day tables, since cycle lengths are
//! year-dependent), and pushes the fractional remainder down to the next
//! finer unit using exact calendar day counts.

use kairos_timevec::{Duration, Unit};

use crate::date::CalendarDate;
use crate::error::DateError;

/// Seconds within this distance of a whole minute snap to it.
const SECOND_SNAP: f64 = 1e-3;

impl CalendarDate {
    /// Adds (or subtracts) a number of years.
    ///
    /// A fractional year is interpreted as that fraction of the day count
    /// of the resulting year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::CycleOutOfRange`] or [`DateError::DayOutOfRange`]
    /// when the current cycle or day does not exist in the target year
    /// (e.g. February 29 plus one year), and
    /// [`DateError::DaysUncountable`] for fractional years on an unbounded
    /// calendar.
    pub fn add_years(self, increment: f64) -> Result<Self, DateError> {
        if increment == 0.0 {
            return Ok(self);
        }
        let fraction = increment.fract();
        let mut values = self.values;
        values[0] += increment.trunc();
        let date = self.with_values(values, self.resolution);

        let year = date.year();
        let cycles = date.calendar().count_cycles_in_year(year) as i64;
        let cycle = date.cycle() as i64;
        if cycle > cycles {
            return Err(DateError::CycleOutOfRange { cycle, year });
        }
        if !date
            .calendar()
            .days_in_cycle(date.cycle(), year)
            .contains(date.day())
        {
            return Err(DateError::DayOutOfRange {
                day: date.day() as i64,
                cycle: date.cycle(),
                year,
            });
        }
        if fraction != 0.0 {
            let days = date
                .calendar()
                .count_days_in_year(year)
                .ok_or(DateError::DaysUncountable {
                    alias: date.calendar().alias(),
                })?;
            date.add_days(fraction * days as f64)
        } else {
            Ok(date)
        }
    }

    /// Adds (or subtracts) a number of cycles, carrying across year
    /// boundaries.
    ///
    /// A fractional cycle is interpreted as that fraction of the day count
    /// of the resulting cycle.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::DayOutOfRange`] when the current day does not
    /// exist in the target cycle (e.g. January 31 plus one cycle), and
    /// [`DateError::DaysUncountable`] for fractional cycles on an unbounded
    /// calendar.
    pub fn add_cycles(self, increment: f64) -> Result<Self, DateError> {
        if increment == 0.0 {
            return Ok(self);
        }
        let fraction = increment.fract();
        let mut inc = increment.trunc() as i64;
        let cal = self.calendar();
        let mut year = self.year();
        let mut cycle = self.cycle() as i64;

        let mut cycles_in_year = cal.count_cycles_in_year(year) as i64;
        while cycle + inc > cycles_in_year {
            inc -= cycles_in_year - cycle + 1;
            year += 1;
            cycle = 1;
            cycles_in_year = cal.count_cycles_in_year(year) as i64;
        }
        while cycle + inc < 1 {
            inc += cycle;
            year -= 1;
            cycle = cal.count_cycles_in_year(year) as i64;
        }
        cycle += inc;

        let mut values = self.values;
        values[0] = year as f64;
        values[1] = cycle as f64;
        let date = self.with_values(values, self.resolution.max(2));

        let day_set = cal.days_in_cycle(cycle as u32, year);
        if !day_set.contains(date.day()) {
            return Err(DateError::DayOutOfRange {
                day: date.day() as i64,
                cycle: cycle as u32,
                year,
            });
        }
        if fraction != 0.0 {
            let days = day_set.count().ok_or(DateError::DaysUncountable {
                alias: cal.alias(),
            })?;
            date.add_days(fraction * days as f64)
        } else {
            Ok(date)
        }
    }

    /// Adds (or subtracts) a number of days, carrying across cycle and
    /// year boundaries.
    ///
    /// A fractional day becomes hours. On an unbounded cycle the increment
    /// applies directly to the day value.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::DaysUncountable`] when a boundary crossing
    /// needs the day count of an unbounded cycle, and
    /// [`DateError::DayOutOfRange`] when the walk leaves the calendar.
    pub fn add_days(self, increment: f64) -> Result<Self, DateError> {
        if increment == 0.0 {
            return Ok(self);
        }
        let fraction = increment.fract();
        let mut inc = increment.trunc() as i64;
        let cal = self.calendar();
        let resolution = self.resolution.max(3);
        let mut values = self.values;

        if cal.days_in_cycle(self.cycle(), self.year()).is_unbounded() {
            let day = self.day() as i64 + inc;
            if day < 1 {
                return Err(DateError::DayOutOfRange {
                    day,
                    cycle: self.cycle(),
                    year: self.year(),
                });
            }
            values[2] = day as f64;
            let date = self.with_values(values, resolution);
            return if fraction != 0.0 {
                date.add_hours(24.0 * fraction)
            } else {
                Ok(date)
            };
        }

        let uncountable = || DateError::DaysUncountable { alias: cal.alias() };
        let mut year = self.year();
        let mut cycle = self.cycle();
        let mut day = self.day();

        // Walk whole years until the target day number fits the year.
        let mut day_in_year = self.day_number_in_year()? as i64;
        let mut days_in_year = cal.count_days_in_year(year).ok_or_else(uncountable)? as i64;
        while day_in_year + inc > days_in_year {
            inc -= days_in_year - day_in_year + 1;
            year += 1;
            cycle = 1;
            day = cal
                .days_in_cycle(1, year)
                .first()
                .ok_or(DateError::DayOutOfRange {
                    day: 1,
                    cycle: 1,
                    year,
                })?;
            day_in_year = 1;
            days_in_year = cal.count_days_in_year(year).ok_or_else(uncountable)? as i64;
        }
        while day_in_year + inc < 1 {
            inc += day_in_year;
            year -= 1;
            cycle = cal.count_cycles_in_year(year);
            day = cal
                .days_in_cycle(cycle, year)
                .last()
                .ok_or_else(uncountable)?;
            day_in_year = cal.count_days_in_year(year).ok_or_else(uncountable)? as i64;
        }

        // Walk cycles within the year.
        let mut set = cal.days_in_cycle(cycle, year);
        let mut days_in_cycle = set.count().ok_or_else(uncountable)? as i64;
        let mut day_in_cycle = set.day_number(day).ok_or(DateError::DayOutOfRange {
            day: day as i64,
            cycle,
            year,
        })? as i64;
        while day_in_cycle + inc > days_in_cycle {
            inc -= days_in_cycle - day_in_cycle + 1;
            cycle += 1;
            set = cal.days_in_cycle(cycle, year);
            day_in_cycle = 1;
            days_in_cycle = set.count().ok_or_else(uncountable)? as i64;
        }
        while day_in_cycle + inc < 1 {
            inc += day_in_cycle;
            cycle -= 1;
            set = cal.days_in_cycle(cycle, year);
            days_in_cycle = set.count().ok_or_else(uncountable)? as i64;
            day_in_cycle = days_in_cycle;
        }
        day = set
            .value_at((day_in_cycle + inc) as u32)
            .ok_or(DateError::DayOutOfRange {
                day: day_in_cycle + inc,
                cycle,
                year,
            })?;

        values[0] = year as f64;
        values[1] = f64::from(cycle);
        values[2] = f64::from(day);
        let date = self.with_values(values, resolution);
        if fraction != 0.0 {
            date.add_hours(24.0 * fraction)
        } else {
            Ok(date)
        }
    }

    /// Adds (or subtracts) a number of hours; a fractional hour becomes
    /// minutes.
    ///
    /// # Errors
    ///
    /// Propagates day-carry failures from [`Self::add_days`].
    pub fn add_hours(self, increment: f64) -> Result<Self, DateError> {
        if increment == 0.0 {
            return Ok(self);
        }
        let fraction = increment.fract();
        let new = self.values[3] + increment.trunc();
        let mut date = self;
        date.resolution = date.resolution.max(4);
        if !(0.0..24.0).contains(&new) {
            date = date.add_days((new / 24.0).floor())?;
            date.values[3] = new.rem_euclid(24.0);
        } else {
            date.values[3] = new;
        }
        if fraction != 0.0 {
            date.add_minutes(60.0 * fraction)
        } else {
            Ok(date)
        }
    }

    /// Adds (or subtracts) a number of minutes; a fractional minute becomes
    /// seconds.
    ///
    /// # Errors
    ///
    /// Propagates carry failures from [`Self::add_hours`].
    pub fn add_minutes(self, increment: f64) -> Result<Self, DateError> {
        if increment == 0.0 {
            return Ok(self);
        }
        let fraction = increment.fract();
        let new = self.values[4] + increment.trunc();
        let mut date = self;
        date.resolution = date.resolution.max(5);
        if !(0.0..60.0).contains(&new) {
            date = date.add_hours((new / 60.0).floor())?;
            date.values[4] = new.rem_euclid(60.0);
        } else {
            date.values[4] = new;
        }
        if fraction != 0.0 {
            date.add_seconds(60.0 * fraction)
        } else {
            Ok(date)
        }
    }

    /// Adds (or subtracts) a number of seconds, fractional or not.
    ///
    /// After carrying, a result within 10⁻³ of a whole minute snaps to it;
    /// sub-millisecond residue is not representable on the time axes this
    /// library serves.
    ///
    /// # Errors
    ///
    /// Propagates carry failures from [`Self::add_minutes`].
    pub fn add_seconds(self, increment: f64) -> Result<Self, DateError> {
        let mut date = self;
        if increment != 0.0 {
            date.resolution = date.resolution.max(6);
        }
        let mut new = date.values[5] + increment;
        if !(0.0..60.0).contains(&new) {
            date = date.add_minutes((new / 60.0).floor())?;
            new = new.rem_euclid(60.0);
        }
        if new < SECOND_SNAP {
            new = 0.0;
        } else if new > 60.0 - SECOND_SNAP {
            new = 0.0;
            date = date.add_minutes(1.0)?;
        }
        date.values[5] = new;
        Ok(date)
    }

    /// Adds a duration, applying its components in strict order: years,
    /// cycles, days, hours, minutes, seconds.
    ///
    /// The order matters: combining several calendar units in one duration
    /// gives a result that depends on this application order, so it is not
    /// commutative with differently-split durations. Callers mixing years
    /// or cycles with finer units should add one component at a time if
    /// they need different semantics.
    ///
    /// # Errors
    ///
    /// Propagates the first failing component.
    pub fn add(self, delta: &Duration) -> Result<Self, DateError> {
        self.add_years(delta.get(Unit::Years))?
            .add_cycles(delta.get(Unit::Cycles))?
            .add_days(delta.get(Unit::Days))?
            .add_hours(delta.get(Unit::Hours))?
            .add_minutes(delta.get(Unit::Minutes))?
            .add_seconds(delta.get(Unit::Seconds))
    }

    /// Subtracts a duration; equivalent to adding its negation.
    ///
    /// # Errors
    ///
    /// Propagates the first failing component.
    pub fn sub(self, delta: &Duration) -> Result<Self, DateError> {
        self.add(&delta.negate())
    }
}
