//! Error types for the kairos-calendar crate.

/// Error type for all fallible operations in the kairos-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a calendar alias does not name any built-in calendar.
    #[error("unknown calendar: {alias}")]
    UnknownCalendar {
        /// The alias that failed to resolve.
        alias: String,
    },

    /// Returned when a leap-year query is made on a calendar that has no
    /// leap-year concept.
    #[error("leap year concept not defined for '{alias}' calendar")]
    LeapUndefined {
        /// Alias of the calendar lacking a leap rule.
        alias: &'static str,
    },
}
