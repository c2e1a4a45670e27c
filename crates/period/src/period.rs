//! The period type: two ordered endpoints with open/closed flags.

use std::cmp::Ordering;

use kairos_calendar::CalendarRef;
use kairos_date::{CalendarDate, DateCollection, DateError};
use kairos_timevec::{Duration, TimeVector, Unit};

use crate::error::PeriodError;

/// An ordered pair of same-calendar dates with independently open or
/// closed endpoints.
///
/// The endpoint flags govern sampling and length semantics; the
/// [`Period::contains`] interior test is strict regardless of the flags.
/// Periods are immutable: the endpoints never change after construction.
#[derive(Debug, Clone, Copy)]
pub struct Period {
    start: CalendarDate,
    end: CalendarDate,
    left_open: bool,
    right_open: bool,
}

/// The convex hull of a date collection: a single date when the collection
/// collapses to one instant, otherwise the closed min..max period.
#[derive(Debug, Clone, Copy)]
pub enum Hull {
    /// All elements materialize to the same instant.
    Point(CalendarDate),
    /// The closed period from the earliest to the latest element.
    Span(Period),
}

impl Period {
    /// Builds a period from two dates of the same calendar.
    ///
    /// A `false` flag means the endpoint is included.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::IncompatibleCalendars`] (wrapped) when the
    /// calendars differ and [`PeriodError::MisorderedEndpoints`] unless the
    /// initial instant strictly precedes the final instant.
    pub fn new(
        initial: CalendarDate,
        terminal: CalendarDate,
        left_open: bool,
        right_open: bool,
    ) -> Result<Self, PeriodError> {
        if initial.calendar() != terminal.calendar() {
            return Err(DateError::IncompatibleCalendars {
                left: initial.calendar().alias(),
                right: terminal.calendar().alias(),
            }
            .into());
        }
        if initial.cmp_instant(&terminal) != Ordering::Less {
            return Err(PeriodError::MisorderedEndpoints {
                initial: initial.to_string(),
                last: terminal.to_string(),
            });
        }
        Ok(Self {
            start: initial,
            end: terminal,
            left_open,
            right_open,
        })
    }

    /// Builds the period implied by a partial time vector: an increment of
    /// one at the vector's resolution, left-closed and right-open, so
    /// `[1961]` denotes `[1961, 1962)` and `[2010, 2]` the month of
    /// February 2010.
    ///
    /// # Errors
    ///
    /// Propagates date construction and arithmetic failures.
    pub fn implicit(vector: &TimeVector, calendar: CalendarRef) -> Result<Self, PeriodError> {
        let initial = CalendarDate::new(vector, calendar)?;
        let step = match Unit::ALL[initial.resolution() - 1] {
            Unit::Years => Duration::ONE_YEAR,
            Unit::Cycles => Duration::ONE_CYCLE,
            Unit::Days => Duration::ONE_DAY,
            Unit::Hours => Duration::ONE_HOUR,
            Unit::Minutes => Duration::ONE_MINUTE,
            Unit::Seconds => Duration::ONE_SECOND,
        };
        let terminal = initial.add(&step)?;
        Self::new(initial, terminal, false, true)
    }

    /// Builds the closed period reaching one duration on both sides of a
    /// date. The duration is assumed positive.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures and
    /// [`PeriodError::MisorderedEndpoints`] for a zero buffer.
    pub fn around(date: CalendarDate, delta: &Duration) -> Result<Self, PeriodError> {
        Self::new(date.sub(delta)?, date.add(delta)?, false, false)
    }

    /// The initial endpoint.
    pub fn initial_date(&self) -> CalendarDate {
        self.start
    }

    /// The final endpoint.
    pub fn final_date(&self) -> CalendarDate {
        self.end
    }

    /// Whether the initial endpoint is excluded.
    pub fn left_open(&self) -> bool {
        self.left_open
    }

    /// Whether the final endpoint is excluded.
    pub fn right_open(&self) -> bool {
        self.right_open
    }

    /// The calendar shared by both endpoints.
    pub fn calendar(&self) -> CalendarRef {
        self.start.calendar()
    }

    /// Whether two periods overlap; matching endpoints count as overlap.
    pub fn overlap(&self, other: &Self) -> bool {
        !(self.start.cmp_instant(&other.end) == Ordering::Greater
            || other.start.cmp_instant(&self.end) == Ordering::Greater)
    }

    /// Strict interior test: true only when the date falls strictly
    /// between the endpoints, independent of the open flags.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        if date.calendar() != self.calendar() {
            tracing::warn!(
                period_calendar = self.calendar().alias(),
                date_calendar = date.calendar().alias(),
                "interior test across calendars is unsafe"
            );
        }
        self.start.cmp_instant(date) == Ordering::Less
            && self.end.cmp_instant(date) == Ordering::Greater
    }

    /// Whether `other` follows this period without a gap: its initial date
    /// equals this period's final date, or equals it after the allowed
    /// `gap`.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures while applying the gap.
    pub fn continuous(&self, other: &Self, gap: Option<&Duration>) -> Result<bool, PeriodError> {
        if self.end.same_instant(&other.start) {
            return Ok(true);
        }
        if let Some(gap) = gap {
            if self.end.add(gap)?.same_instant(&other.start) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl PartialEq for Period {
    /// Periods are equal when their endpoints are equal; the open flags
    /// carry sampling semantics, not identity.
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// The convex hull of a collection: its min..max closed period, or a
/// single date when every element is the same instant.
///
/// # Errors
///
/// Propagates the single-calendar requirement of
/// [`DateCollection::min`]/[`DateCollection::max`].
pub fn convex_hull(dates: &DateCollection) -> Result<Hull, PeriodError> {
    let min = dates.min()?;
    let max = dates.max()?;
    if min.same_instant(&max) {
        Ok(Hull::Point(min))
    } else {
        Ok(Hull::Span(Period::new(min, max, false, false)?))
    }
}
