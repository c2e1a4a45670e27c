//! Error types for the kairos-date crate.

/// Error type for all fallible operations in the kairos-date crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Returned when a date is built from a vector with no year element.
    #[error("time vector has no year element")]
    EmptyDate,

    /// Returned when a slot other than the year holds a negative value.
    #[error("negative value in date slot {slot}")]
    NegativeComponent {
        /// 0-based slot index of the negative value.
        slot: usize,
    },

    /// Returned when a slot other than the seconds holds a fractional part.
    /// Use the implicit constructor to resolve coarse fractions first.
    #[error("unresolved fractional value in date slot {slot}")]
    UnresolvedFraction {
        /// 0-based slot index of the fractional value.
        slot: usize,
    },

    /// Returned when the cycle value is outside the calendar's cycle keys.
    #[error("cycle {cycle} outside of calendar for year {year}")]
    CycleOutOfRange {
        /// The invalid cycle value.
        cycle: i64,
        /// The year whose cycle table was consulted.
        year: i64,
    },

    /// Returned when the day value is not in the calendar's day table.
    #[error("day {day} outside of calendar for cycle {cycle} of year {year}")]
    DayOutOfRange {
        /// The invalid day value.
        day: i64,
        /// The cycle whose day table was consulted.
        cycle: u32,
        /// The year whose day table was consulted.
        year: i64,
    },

    /// Returned when the hour value is outside `[0, 24)`.
    #[error("hour {hour} outside of range 0..24")]
    HourOutOfRange {
        /// The invalid hour value.
        hour: i64,
    },

    /// Returned when the minute value is outside `[0, 60)`.
    #[error("minute {minute} outside of range 0..60")]
    MinuteOutOfRange {
        /// The invalid minute value.
        minute: i64,
    },

    /// Returned when the second value is outside `[0, 60)`.
    #[error("second {second} outside of range 0..60")]
    SecondOutOfRange {
        /// The invalid second value.
        second: f64,
    },

    /// Returned when an operation mixes two different calendars.
    #[error("incompatible calendars: '{left}' and '{right}'")]
    IncompatibleCalendars {
        /// Alias of the left-hand calendar.
        left: &'static str,
        /// Alias of the right-hand calendar.
        right: &'static str,
    },

    /// Returned when a comparison cannot be decided: no mutually set slot
    /// differs, yet the two resolutions differ.
    #[error("ambiguous comparison between dates of different resolutions")]
    AmbiguousComparison,

    /// Returned when an operation needs a day count on an unbounded cycle.
    #[error("cannot count days in an unbounded cycle of '{alias}' calendar")]
    DaysUncountable {
        /// Alias of the calendar with the unbounded cycle.
        alias: &'static str,
    },

    /// Returned when paired inputs have different lengths.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched input.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when an aggregate is taken over an empty collection.
    #[error("empty date collection")]
    EmptyCollection,

    /// Time vector error.
    #[error(transparent)]
    TimeVector(#[from] kairos_timevec::TimeVectorError),

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] kairos_calendar::CalendarError),
}
