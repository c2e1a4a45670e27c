//! The [`Calendar`] type and its derived counts.

use crate::days::DaySet;
use crate::error::CalendarError;

/// Shared reference to a process-wide calendar definition.
///
/// Calendars are immutable statics; handing out `&'static` references keeps
/// every date type `Copy` and makes calendar identity a pointer-free alias
/// comparison.
pub type CalendarRef = &'static Calendar;

/// A calendar definition.
///
/// The calendar describes the relation between years, cycles (months,
/// seasons, or other year subdivisions) and days. Cycle keys are the
/// contiguous integers `1..=n` implied by the ordered name table, and day
/// tables are strictly increasing 1-based day values. Defining the concept
/// of leap year is optional.
///
/// Two calendars are equal when their aliases are equal; the alias is the
/// identity, not the structure.
#[derive(Debug)]
pub struct Calendar {
    alias: &'static str,
    cycles_alias: Option<&'static str>,
    year_cycles: fn(i64) -> &'static [&'static str],
    days_in_cycle: fn(u32, i64) -> DaySet,
    is_leap: Option<fn(i64) -> bool>,
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.alias == other.alias
    }
}

impl Eq for Calendar {}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alias)
    }
}

impl Calendar {
    /// Defines a calendar from its structural functions.
    ///
    /// `year_cycles` must return the ordered cycle names of a year (keys
    /// are the contiguous integers `1..=len`), and `days_in_cycle` the
    /// strictly increasing 1-based day values of a valid cycle. Pass
    /// `None` for `is_leap` when the calendar has no leap-year concept.
    /// The alias is the calendar's identity: pick one that collides with
    /// no other calendar in the process.
    pub const fn new(
        alias: &'static str,
        cycles_alias: Option<&'static str>,
        year_cycles: fn(i64) -> &'static [&'static str],
        days_in_cycle: fn(u32, i64) -> DaySet,
        is_leap: Option<fn(i64) -> bool>,
    ) -> Self {
        Self {
            alias,
            cycles_alias,
            year_cycles,
            days_in_cycle,
            is_leap,
        }
    }

    /// Unique identifier of the calendar.
    pub fn alias(&self) -> &'static str {
        self.alias
    }

    /// Name of the cycle concept (e.g. "month"), if the calendar has one.
    pub fn cycles_alias(&self) -> Option<&'static str> {
        self.cycles_alias
    }

    /// Ordered cycle names of the given year; cycle keys are `1..=len`.
    pub fn year_cycles(&self, year: i64) -> &'static [&'static str] {
        (self.year_cycles)(year)
    }

    /// Ordered set of valid day values in the given cycle of the given year.
    ///
    /// The cycle must be a valid key for `year` (see [`Self::year_cycles`]);
    /// out-of-range cycles yield an empty set.
    pub fn days_in_cycle(&self, cycle: u32, year: i64) -> DaySet {
        (self.days_in_cycle)(cycle, year)
    }

    /// Check whether the given year is a leap year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::LeapUndefined`] if the calendar has no
    /// leap-year concept.
    pub fn is_leap(&self, year: i64) -> Result<bool, CalendarError> {
        match self.is_leap {
            Some(predicate) => Ok(predicate(year)),
            None => Err(CalendarError::LeapUndefined { alias: self.alias }),
        }
    }

    /// Number of cycles in the given year.
    pub fn count_cycles_in_year(&self, year: i64) -> u32 {
        self.year_cycles(year).len() as u32
    }

    /// Number of days in the given cycle, or `None` for an unbounded cycle.
    pub fn count_days_in_cycle(&self, cycle: u32, year: i64) -> Option<u64> {
        self.days_in_cycle(cycle, year).count()
    }

    /// Number of days in the given year, or `None` when any cycle is
    /// unbounded.
    pub fn count_days_in_year(&self, year: i64) -> Option<u64> {
        let mut total = 0u64;
        for cycle in 1..=self.count_cycles_in_year(year) {
            total += self.count_days_in_cycle(cycle, year)?;
        }
        Some(total)
    }
}
