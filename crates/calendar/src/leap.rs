//! Leap-year predicates.
//!
//! A year is a leap year when the last day of its second cycle is the 29th.
//! Calendars whose cycles carry no real day table (seasons, years-only) fall
//! out of this rule as never-leap; calendars without any leap concept omit
//! the predicate entirely and fail the query instead.

use crate::days::{
    days_in_month_360, days_in_month_365, days_in_month_366, days_in_month_gregorian,
    days_in_month_julian, days_in_month_proleptic, days_in_year_365, single_day, DaySet,
};

/// Check whether the second cycle of `year` ends on a 29th.
fn feb_ends_on_29(days_in_cycle: fn(u32, i64) -> DaySet, year: i64) -> bool {
    days_in_cycle(2, year).last() == Some(29)
}

pub(crate) fn is_leap_360(year: i64) -> bool {
    feb_ends_on_29(days_in_month_360, year)
}

pub(crate) fn is_leap_noleap(year: i64) -> bool {
    feb_ends_on_29(days_in_month_365, year)
}

pub(crate) fn is_leap_all_leap(year: i64) -> bool {
    feb_ends_on_29(days_in_month_366, year)
}

pub(crate) fn is_leap_julian(year: i64) -> bool {
    feb_ends_on_29(days_in_month_julian, year)
}

pub(crate) fn is_leap_proleptic(year: i64) -> bool {
    feb_ends_on_29(days_in_month_proleptic, year)
}

pub(crate) fn is_leap_gregorian(year: i64) -> bool {
    feb_ends_on_29(days_in_month_gregorian, year)
}

pub(crate) fn is_leap_single_day(year: i64) -> bool {
    feb_ends_on_29(single_day, year)
}

pub(crate) fn is_leap_year_365(year: i64) -> bool {
    feb_ends_on_29(days_in_year_365, year)
}
