//! Regular sampling, division into windows, and membership indices.

use std::cmp::Ordering;

use kairos_date::{CalendarDate, DateCollection};
use kairos_timevec::Duration;
use tracing::debug;

use crate::error::PeriodError;
use crate::period::Period;

impl Period {
    /// Samples the period at a regular step, eagerly materializing the
    /// sequence of dates.
    ///
    /// The sequence starts at the initial date, shifted by `buffer` when
    /// one is given. When the period is left-open and the buffered start
    /// still equals the true initial instant, the start advances by one
    /// step — the adjustment applies only in that case, so a buffer that
    /// moves the start never combines with an extra left-open step. The
    /// sequence then grows by `step` while it stays within the period per
    /// the endpoint flags; a right-open period excludes a sample landing
    /// exactly on the final date. A start already outside the period
    /// yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::NonProgressingStep`] at entry when `step`
    /// does not strictly advance the start date, and propagates arithmetic
    /// failures.
    pub fn regular_sample(
        &self,
        step: &Duration,
        buffer: Option<&Duration>,
    ) -> Result<DateCollection, PeriodError> {
        let start = self.sample_start(step, buffer)?;
        let terminal = self.final_date();
        if self.outside(&start, &terminal) {
            return Ok(DateCollection::default());
        }
        let mut dates = vec![start];
        let mut next = start.add(step)?;
        while next.cmp_instant(&terminal) != Ordering::Greater {
            if self.right_open() && next.same_instant(&terminal) {
                break;
            }
            dates.push(next);
            next = next.add(step)?;
        }
        debug!(n = dates.len(), period = %self, "materialized regular sample");
        Ok(DateCollection::from_dates(dates))
    }

    /// Divides the period into sub-periods of fixed `length`, anchored at
    /// the same sample points [`Self::regular_sample`] would produce.
    ///
    /// Used to build e.g. successive month-long windows over a multi-year
    /// period.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::regular_sample`]; a zero `length`
    /// fails with [`PeriodError::MisorderedEndpoints`] on the first window.
    pub fn regular_division(
        &self,
        step: &Duration,
        buffer: Option<&Duration>,
        length: &Duration,
    ) -> Result<Vec<Period>, PeriodError> {
        let start = self.sample_start(step, buffer)?;
        let terminal = self.final_date();
        if self.outside(&start, &terminal) {
            return Ok(Vec::new());
        }
        let mut windows = vec![Period::new(start, start.add(length)?, false, false)?];
        let mut next = start.add(step)?;
        while next.cmp_instant(&terminal) != Ordering::Greater {
            if self.right_open() && next.same_instant(&terminal) {
                break;
            }
            windows.push(Period::new(next, next.add(length)?, false, false)?);
            next = next.add(step)?;
        }
        Ok(windows)
    }

    /// Indices of the collection elements falling inside the period per
    /// the endpoint flags.
    ///
    /// Elements bound to a different calendar are compared anyway on their
    /// materialized instants, with a warning; this mirrors the tolerant
    /// bulk path used for subsetting file time axes.
    #[tracing::instrument(skip(self, dates), fields(n = dates.len()))]
    pub fn member_indices(&self, dates: &DateCollection) -> Vec<usize> {
        let mut mismatch = false;
        let indices = dates
            .iter()
            .enumerate()
            .filter(|(_, date)| {
                if date.calendar() != self.calendar() {
                    mismatch = true;
                }
                let lower = match date.cmp_instant(&self.initial_date()) {
                    Ordering::Greater => true,
                    Ordering::Equal => !self.left_open(),
                    Ordering::Less => false,
                };
                let upper = match date.cmp_instant(&self.final_date()) {
                    Ordering::Less => true,
                    Ordering::Equal => !self.right_open(),
                    Ordering::Greater => false,
                };
                lower && upper
            })
            .map(|(index, _)| index)
            .collect();
        if mismatch {
            tracing::warn!(
                period_calendar = self.calendar().alias(),
                "membership test across calendars is unsafe"
            );
        }
        indices
    }

    fn sample_start(
        &self,
        step: &Duration,
        buffer: Option<&Duration>,
    ) -> Result<CalendarDate, PeriodError> {
        let initial = self.initial_date();
        let start = match buffer {
            Some(buffer) => initial.add(buffer)?,
            None => initial,
        };
        // A step that does not advance the date would sample forever.
        if start.add(step)?.cmp_instant(&start) != Ordering::Greater {
            return Err(PeriodError::NonProgressingStep);
        }
        if self.left_open() && start.same_instant(&initial) {
            Ok(start.add(step)?)
        } else {
            Ok(start)
        }
    }

    fn outside(&self, start: &CalendarDate, terminal: &CalendarDate) -> bool {
        match start.cmp_instant(terminal) {
            Ordering::Greater => true,
            Ordering::Equal => self.right_open(),
            Ordering::Less => false,
        }
    }
}
