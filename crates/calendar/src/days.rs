//! Day tables and the [`DaySet`] type.
//!
//! A day table maps `(cycle, year)` to the ordered set of valid day values in
//! that cycle. Day values are 1-based and strictly increasing, but not
//! necessarily contiguous: October 1582 of the historical Gregorian calendar
//! skips the values 5 through 14.

/// Ordered set of valid day values within one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySet {
    /// Contiguous day values `1..=n`.
    Contiguous(u32),
    /// Explicit strictly increasing day values.
    Explicit(&'static [u32]),
    /// Open cycle with no fixed day table (days grow without bound).
    Unbounded,
}

/// Days per month in the 365-day (no-leap) month table.
pub(crate) const DAYS_PER_MONTH_365: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days per month in the 366-day (all-leap) month table.
pub(crate) const DAYS_PER_MONTH_366: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// October 1582 of the historical Gregorian calendar: the papal reform
/// removed October 5 through October 14.
pub(crate) const OCTOBER_1582: [u32; 21] = [
    1, 2, 3, 4, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
];

impl DaySet {
    /// Number of days in the set, or `None` for an unbounded cycle.
    pub fn count(self) -> Option<u64> {
        match self {
            DaySet::Contiguous(n) => Some(u64::from(n)),
            DaySet::Explicit(values) => Some(values.len() as u64),
            DaySet::Unbounded => None,
        }
    }

    /// First day value, or `None` for an empty or unbounded set.
    pub fn first(self) -> Option<u32> {
        match self {
            DaySet::Contiguous(0) => None,
            DaySet::Contiguous(_) => Some(1),
            DaySet::Explicit(values) => values.first().copied(),
            DaySet::Unbounded => None,
        }
    }

    /// Last day value, or `None` for an empty or unbounded set.
    pub fn last(self) -> Option<u32> {
        match self {
            DaySet::Contiguous(0) => None,
            DaySet::Contiguous(n) => Some(n),
            DaySet::Explicit(values) => values.last().copied(),
            DaySet::Unbounded => None,
        }
    }

    /// Day value at the given 1-based position within the set.
    pub fn value_at(self, day_number: u32) -> Option<u32> {
        if day_number == 0 {
            return None;
        }
        match self {
            DaySet::Contiguous(n) => (day_number <= n).then_some(day_number),
            DaySet::Explicit(values) => values.get(day_number as usize - 1).copied(),
            DaySet::Unbounded => Some(day_number),
        }
    }

    /// 1-based position of the given day value within the set.
    pub fn day_number(self, value: u32) -> Option<u32> {
        match self {
            DaySet::Contiguous(n) => (value >= 1 && value <= n).then_some(value),
            DaySet::Explicit(values) => values
                .iter()
                .position(|&d| d == value)
                .map(|i| i as u32 + 1),
            DaySet::Unbounded => (value >= 1).then_some(value),
        }
    }

    /// Whether the given day value belongs to the set.
    pub fn contains(self, value: u32) -> bool {
        self.day_number(value).is_some()
    }

    /// Whether the cycle has no fixed day table.
    pub fn is_unbounded(self) -> bool {
        matches!(self, DaySet::Unbounded)
    }
}

/// 360-day calendar: every month has 30 days.
pub(crate) fn days_in_month_360(_cycle: u32, _year: i64) -> DaySet {
    DaySet::Contiguous(30)
}

/// 365-day calendar: Gregorian month lengths, February always 28.
pub(crate) fn days_in_month_365(cycle: u32, _year: i64) -> DaySet {
    month_table(&DAYS_PER_MONTH_365, cycle)
}

/// 366-day calendar: Gregorian month lengths, February always 29.
pub(crate) fn days_in_month_366(cycle: u32, _year: i64) -> DaySet {
    month_table(&DAYS_PER_MONTH_366, cycle)
}

/// Julian calendar: leap year every 4 years.
pub(crate) fn days_in_month_julian(cycle: u32, year: i64) -> DaySet {
    if year.rem_euclid(4) == 0 {
        days_in_month_366(cycle, year)
    } else {
        days_in_month_365(cycle, year)
    }
}

/// Proleptic Gregorian calendar: leap year every 4 years, except every
/// 100 years, but still every 400 years, extended over all years.
pub(crate) fn days_in_month_proleptic(cycle: u32, year: i64) -> DaySet {
    if year.rem_euclid(100) == 0 && year.rem_euclid(400) != 0 {
        days_in_month_365(cycle, year)
    } else {
        days_in_month_julian(cycle, year)
    }
}

/// Historical Gregorian calendar: Julian before October 1582, the 21-day
/// October 1582 table at the transition, proleptic Gregorian after.
pub(crate) fn days_in_month_gregorian(cycle: u32, year: i64) -> DaySet {
    if year > 1582 || (year == 1582 && cycle > 10) {
        days_in_month_proleptic(cycle, year)
    } else if year == 1582 && cycle == 10 {
        DaySet::Explicit(&OCTOBER_1582)
    } else {
        days_in_month_julian(cycle, year)
    }
}

/// 365 days directly in the single whole-year cycle.
pub(crate) fn days_in_year_365(_cycle: u32, _year: i64) -> DaySet {
    DaySet::Contiguous(365)
}

/// Single placeholder day, for calendars whose cycles carry no day concept.
pub(crate) fn single_day(_cycle: u32, _year: i64) -> DaySet {
    DaySet::Contiguous(1)
}

fn month_table(lengths: &[u32; 12], cycle: u32) -> DaySet {
    match lengths.get((cycle as usize).wrapping_sub(1)) {
        Some(&n) => DaySet::Contiguous(n),
        None => DaySet::Contiguous(0),
    }
}
