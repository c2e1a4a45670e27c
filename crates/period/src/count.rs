//! Unit counting over a period, with open-endpoint exclusions.
//!
//! Counts are inclusive tick counts: the closed period from midnight to
//! 06:00 of the same day counts 7 hour marks, 361 minute marks and 21601
//! second marks, while its right-open variant counts 6, 360 and 21600. An
//! open endpoint sitting exactly on the last (or first) instant of a year,
//! cycle, day, hour or minute excludes that whole unit at the matching
//! granularity.

use kairos_date::DateError;
use kairos_timevec::Unit;

use crate::error::PeriodError;
use crate::period::Period;

impl Period {
    /// Number of years touched by the period, honoring the open flags.
    ///
    /// # Errors
    ///
    /// Propagates day-table failures from the boundary checks.
    pub fn count_years(&self) -> Result<i64, PeriodError> {
        let initial = self.initial_date();
        let terminal = self.final_date();
        let mut exclusions = 0;
        if !self.has_decimals() {
            let calendar = self.calendar();
            let last_cycle = calendar.count_cycles_in_year(initial.year());
            if self.left_open()
                && initial.cycle() == last_cycle
                && self.at_last_day_of_cycle(&initial)
                && Self::at_last_clock_instant(&initial)
            {
                exclusions += 1;
            }
            if self.right_open()
                && terminal.cycle() == 1
                && self.at_first_day_of_cycle(&terminal)
                && Self::at_first_clock_instant(&terminal)
            {
                exclusions += 1;
            }
        }
        Ok(terminal.year() - initial.year() + 1 - exclusions)
    }

    /// Number of cycles touched by the period, honoring the open flags.
    ///
    /// # Errors
    ///
    /// Propagates day-table failures from the boundary checks.
    pub fn count_cycles(&self) -> Result<i64, PeriodError> {
        let initial = self.initial_date();
        let terminal = self.final_date();
        let calendar = self.calendar();
        let mut exclusions = 0;
        if !self.has_decimals() {
            if self.left_open()
                && self.at_last_day_of_cycle(&initial)
                && Self::at_last_clock_instant(&initial)
            {
                exclusions += 1;
            }
            if self.right_open()
                && self.at_first_day_of_cycle(&terminal)
                && Self::at_first_clock_instant(&terminal)
            {
                exclusions += 1;
            }
        }
        let mut count = 0i64;
        for year in initial.year()..=terminal.year() {
            count += i64::from(calendar.count_cycles_in_year(year));
        }
        count -= i64::from(initial.cycle()) - 1;
        count -= i64::from(calendar.count_cycles_in_year(terminal.year()))
            - i64::from(terminal.cycle());
        Ok(count - exclusions)
    }

    /// Number of days touched by the period, honoring the open flags.
    ///
    /// Decomposes into whole-year contributions minus the head of the
    /// initial year and the tail of the final year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::DaysUncountable`] (wrapped) on unbounded
    /// cycles.
    pub fn count_days(&self) -> Result<i64, PeriodError> {
        let initial = self.initial_date();
        let terminal = self.final_date();
        let calendar = self.calendar();
        let uncountable = || -> PeriodError {
            DateError::DaysUncountable {
                alias: calendar.alias(),
            }
            .into()
        };
        let mut exclusions = 0;
        if !self.has_decimals() {
            if self.left_open() && Self::at_last_clock_instant(&initial) {
                exclusions += 1;
            }
            if self.right_open() && Self::at_first_clock_instant(&terminal) {
                exclusions += 1;
            }
        }
        let mut count = 0i64;
        for year in initial.year()..=terminal.year() {
            count += calendar.count_days_in_year(year).ok_or_else(uncountable)? as i64;
        }
        count -= initial.day_number_in_year().map_err(PeriodError::from)? as i64 - 1;
        count -= calendar
            .count_days_in_year(terminal.year())
            .ok_or_else(uncountable)? as i64
            - terminal.day_number_in_year().map_err(PeriodError::from)? as i64;
        Ok(count - exclusions)
    }

    /// Number of hour marks covered by the period, honoring the open
    /// flags.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::count_days`].
    pub fn count_hours(&self) -> Result<i64, PeriodError> {
        let initial = self.initial_date();
        let terminal = self.final_date();
        let decimals = self.has_decimals();
        let left_day =
            !decimals && self.left_open() && Self::at_last_clock_instant(&initial);
        let right_day =
            !decimals && self.right_open() && Self::at_first_clock_instant(&terminal);
        let left_hour = !decimals
            && self.left_open()
            && initial.minute() == 59
            && initial.second() == 59.0;
        let right_hour = !decimals
            && self.right_open()
            && terminal.minute() == 0
            && terminal.second() == 0.0;

        let mut count = self.count_days()? * 24;
        if !left_day {
            count -= i64::from(initial.hour()) + i64::from(left_hour);
        }
        if !right_day {
            count -= 23 - i64::from(terminal.hour()) + i64::from(right_hour);
        }
        Ok(count)
    }

    /// Number of minute marks covered by the period, honoring the open
    /// flags.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::count_days`].
    pub fn count_minutes(&self) -> Result<i64, PeriodError> {
        let initial = self.initial_date();
        let terminal = self.final_date();
        let decimals = self.has_decimals();
        let left_hour = !decimals
            && self.left_open()
            && initial.minute() == 59
            && initial.second() == 59.0;
        let right_hour = !decimals
            && self.right_open()
            && terminal.minute() == 0
            && terminal.second() == 0.0;
        let left_minute = !decimals && self.left_open() && initial.second() == 59.0;
        let right_minute = !decimals && self.right_open() && terminal.second() == 0.0;

        let mut count = self.count_hours()? * 60;
        if !left_hour {
            count -= i64::from(initial.minute()) + i64::from(left_minute);
        }
        if !right_hour {
            count -= 59 - i64::from(terminal.minute()) + i64::from(right_minute);
        }
        Ok(count)
    }

    /// Number of second marks covered by the period, honoring the open
    /// flags. Fractional endpoint seconds yield a fractional count.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::count_days`].
    pub fn count_seconds(&self) -> Result<f64, PeriodError> {
        let initial = self.initial_date();
        let terminal = self.final_date();
        let decimals = self.has_decimals();
        let left_second = !decimals && self.left_open() && initial.second() == 59.0;
        let right_second = !decimals && self.right_open() && terminal.second() == 0.0;

        let mut count = self.count_minutes()? as f64 * 60.0;
        if !left_second {
            count -= initial.second() + f64::from(u8::from(self.left_open()));
        }
        if !right_second {
            count -= 59.0 - terminal.second() + f64::from(u8::from(self.right_open()));
        }
        Ok(count)
    }

    /// Length of the period in the requested unit, reduced through
    /// [`Self::count_seconds`].
    ///
    /// Cycle and year lengths are anchored at the initial endpoint: a
    /// cycle is the day count of the initial date's cycle, a year the day
    /// count of its year.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::count_seconds`], plus
    /// [`DateError::DaysUncountable`] (wrapped) for cycle or year lengths
    /// on unbounded cycles.
    pub fn len(&self, unit: Unit) -> Result<f64, PeriodError> {
        let seconds = self.count_seconds()?;
        let initial = self.initial_date();
        let calendar = self.calendar();
        let uncountable = || -> PeriodError {
            DateError::DaysUncountable {
                alias: calendar.alias(),
            }
            .into()
        };
        Ok(match unit {
            Unit::Seconds => seconds,
            Unit::Minutes => seconds / 60.0,
            Unit::Hours => seconds / 3600.0,
            Unit::Days => seconds / 86_400.0,
            Unit::Cycles => {
                let days = calendar
                    .count_days_in_cycle(initial.cycle(), initial.year())
                    .ok_or_else(uncountable)?;
                seconds / (86_400.0 * days as f64)
            }
            Unit::Years => {
                let days = calendar
                    .count_days_in_year(initial.year())
                    .ok_or_else(uncountable)?;
                seconds / (86_400.0 * days as f64)
            }
        })
    }

    fn has_decimals(&self) -> bool {
        self.initial_date().second().fract() != 0.0
            || self.final_date().second().fract() != 0.0
    }

    fn at_last_day_of_cycle(&self, date: &kairos_date::CalendarDate) -> bool {
        self.calendar()
            .days_in_cycle(date.cycle(), date.year())
            .last()
            .is_some_and(|last| date.day() == last)
    }

    fn at_first_day_of_cycle(&self, date: &kairos_date::CalendarDate) -> bool {
        self.calendar()
            .days_in_cycle(date.cycle(), date.year())
            .first()
            .is_some_and(|first| date.day() == first)
    }

    fn at_last_clock_instant(date: &kairos_date::CalendarDate) -> bool {
        date.hour() == 23 && date.minute() == 59 && date.second() == 59.0
    }

    fn at_first_clock_instant(date: &kairos_date::CalendarDate) -> bool {
        date.hour() == 0 && date.minute() == 0 && date.second() == 0.0
    }
}
