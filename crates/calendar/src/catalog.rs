//! Built-in calendars and CF-alias lookup.

use crate::cycles::{gregorian_months, temperate_seasons, year_cycle};
use crate::days::{
    days_in_month_360, days_in_month_365, days_in_month_366, days_in_month_gregorian,
    days_in_month_julian, days_in_month_proleptic, days_in_year_365, single_day,
};
use crate::definition::{Calendar, CalendarRef};
use crate::error::CalendarError;
use crate::leap::{
    is_leap_360, is_leap_all_leap, is_leap_gregorian, is_leap_julian, is_leap_noleap,
    is_leap_proleptic, is_leap_single_day, is_leap_year_365,
};

/// 360-day calendar: twelve 30-day months, never a leap year.
pub static CAL_360_DAY: Calendar = Calendar::new(
    "360_day",
    Some("month"),
    gregorian_months,
    days_in_month_360,
    Some(is_leap_360),
);

/// 365-day calendar: Gregorian month lengths, February always 28.
pub static CAL_NOLEAP: Calendar = Calendar::new(
    "noleap",
    Some("month"),
    gregorian_months,
    days_in_month_365,
    Some(is_leap_noleap),
);

/// 366-day calendar: Gregorian month lengths, February always 29.
pub static CAL_ALL_LEAP: Calendar = Calendar::new(
    "all_leap",
    Some("month"),
    gregorian_months,
    days_in_month_366,
    Some(is_leap_all_leap),
);

/// Julian calendar: leap year every 4 years.
pub static CAL_JULIAN: Calendar = Calendar::new(
    "julian",
    Some("month"),
    gregorian_months,
    days_in_month_julian,
    Some(is_leap_julian),
);

/// Proleptic Gregorian calendar: the Gregorian leap rule over all years.
pub static CAL_PROLEPTIC: Calendar = Calendar::new(
    "proleptic_gregorian",
    Some("month"),
    gregorian_months,
    days_in_month_proleptic,
    Some(is_leap_proleptic),
);

/// Historical Gregorian calendar with the October 1582 transition.
pub static CAL_GREGORIAN: Calendar = Calendar::new(
    "gregorian",
    Some("month"),
    gregorian_months,
    days_in_month_gregorian,
    Some(is_leap_gregorian),
);

/// Years without any finer subdivision.
pub static CAL_YEARS_ONLY: Calendar = Calendar::new(
    "years_only",
    None,
    year_cycle,
    single_day,
    Some(is_leap_single_day),
);

/// Months without a day or leap concept.
pub static CAL_MONTHS_ONLY: Calendar = Calendar::new(
    "months_only",
    Some("month"),
    gregorian_months,
    single_day,
    None,
);

/// Four temperate seasons per year.
pub static CAL_SEASONS: Calendar = Calendar::new(
    "seasons",
    Some("season"),
    temperate_seasons,
    single_day,
    Some(is_leap_single_day),
);

/// 365 days per year without months.
pub static CAL_365_NO_MONTHS: Calendar = Calendar::new(
    "365_days_no_months",
    None,
    year_cycle,
    days_in_year_365,
    Some(is_leap_year_365),
);

/// Resolve a calendar from its CF-convention alias.
///
/// This is mostly a mapping from the calendar names of the CF conventions to
/// built-in calendars; `years_only`, `months_only`, `seasons` and
/// `365_days_no_months` are library extensions.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownCalendar`] for any other alias.
pub fn from_alias(alias: &str) -> Result<CalendarRef, CalendarError> {
    match alias {
        "360_day" => Ok(&CAL_360_DAY),
        "noleap" | "365_day" => Ok(&CAL_NOLEAP),
        "all_leap" | "366_day" => Ok(&CAL_ALL_LEAP),
        "julian" => Ok(&CAL_JULIAN),
        "proleptic_gregorian" => Ok(&CAL_PROLEPTIC),
        "gregorian" | "standard" => Ok(&CAL_GREGORIAN),
        "years_only" => Ok(&CAL_YEARS_ONLY),
        "months_only" => Ok(&CAL_MONTHS_ONLY),
        "seasons" => Ok(&CAL_SEASONS),
        "365_days_no_months" => Ok(&CAL_365_NO_MONTHS),
        _ => Err(CalendarError::UnknownCalendar {
            alias: alias.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cf_aliases_resolve() {
        assert_eq!(from_alias("360_day").unwrap(), &CAL_360_DAY);
        assert_eq!(from_alias("noleap").unwrap(), &CAL_NOLEAP);
        assert_eq!(from_alias("365_day").unwrap(), &CAL_NOLEAP);
        assert_eq!(from_alias("all_leap").unwrap(), &CAL_ALL_LEAP);
        assert_eq!(from_alias("366_day").unwrap(), &CAL_ALL_LEAP);
        assert_eq!(from_alias("julian").unwrap(), &CAL_JULIAN);
        assert_eq!(from_alias("proleptic_gregorian").unwrap(), &CAL_PROLEPTIC);
        assert_eq!(from_alias("gregorian").unwrap(), &CAL_GREGORIAN);
        assert_eq!(from_alias("standard").unwrap(), &CAL_GREGORIAN);
    }

    #[test]
    fn extension_aliases_resolve() {
        assert_eq!(from_alias("years_only").unwrap(), &CAL_YEARS_ONLY);
        assert_eq!(from_alias("months_only").unwrap(), &CAL_MONTHS_ONLY);
        assert_eq!(from_alias("seasons").unwrap(), &CAL_SEASONS);
        assert_eq!(from_alias("365_days_no_months").unwrap(), &CAL_365_NO_MONTHS);
    }

    #[test]
    fn unknown_alias() {
        assert_eq!(
            from_alias("lunar").unwrap_err(),
            CalendarError::UnknownCalendar {
                alias: "lunar".to_string()
            }
        );
    }

    #[test]
    fn aliases_are_unique() {
        let calendars: [CalendarRef; 10] = [
            &CAL_360_DAY,
            &CAL_NOLEAP,
            &CAL_ALL_LEAP,
            &CAL_JULIAN,
            &CAL_PROLEPTIC,
            &CAL_GREGORIAN,
            &CAL_YEARS_ONLY,
            &CAL_MONTHS_ONLY,
            &CAL_SEASONS,
            &CAL_365_NO_MONTHS,
        ];
        for (i, a) in calendars.iter().enumerate() {
            for b in &calendars[i + 1..] {
                assert_ne!(a.alias(), b.alias());
            }
        }
    }

    #[test]
    fn round_trip_through_alias() {
        for alias in [
            "360_day",
            "noleap",
            "all_leap",
            "julian",
            "proleptic_gregorian",
            "gregorian",
            "years_only",
            "months_only",
            "seasons",
            "365_days_no_months",
        ] {
            let cal = from_alias(alias).unwrap();
            assert_eq!(cal.alias(), alias);
        }
    }
}
