//! Vectorized date collections with per-element calendars.

use kairos_calendar::CalendarRef;
use kairos_timevec::{Duration, RawTimeVector, TimeVector};
use tracing::warn;

use crate::date::CalendarDate;
use crate::error::DateError;

/// A failed row from a lossy bulk construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// Index of the row in the input.
    pub index: usize,
    /// Why the row was rejected.
    pub error: DateError,
}

/// A collection of dates, each potentially bound to a different calendar.
///
/// Bulk operations follow the same rules as [`CalendarDate`], applied per
/// element. Operations that depend on calendar rules run per
/// homogeneous-calendar partition (see [`DateCollection::partitions`]);
/// aggregates that order elements require a single calendar across the
/// collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateCollection {
    dates: Vec<CalendarDate>,
}

impl DateCollection {
    /// Wraps an existing list of dates.
    pub fn from_dates(dates: Vec<CalendarDate>) -> Self {
        Self { dates }
    }

    /// Builds a collection from N×k (k ≤ 6) rows of optional slot values,
    /// all bound to one calendar.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid row, with the row's own error.
    pub fn from_rows(
        rows: &[Vec<Option<f64>>],
        calendar: CalendarRef,
    ) -> Result<Self, DateError> {
        let mut dates = Vec::with_capacity(rows.len());
        for row in rows {
            dates.push(CalendarDate::new(&TimeVector::from_slots(row)?, calendar)?);
        }
        Ok(Self { dates })
    }

    /// Builds a collection from rows, isolating per-row failures.
    ///
    /// Invalid rows are dropped from the collection and reported with their
    /// index, so one malformed record does not fail the batch.
    pub fn from_rows_lossy(
        rows: &[Vec<Option<f64>>],
        calendar: CalendarRef,
    ) -> (Self, Vec<RowError>) {
        let mut dates = Vec::with_capacity(rows.len());
        let mut failures = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let parsed = TimeVector::from_slots(row)
                .map_err(DateError::from)
                .and_then(|tv| CalendarDate::new(&tv, calendar));
            match parsed {
                Ok(date) => dates.push(date),
                Err(error) => failures.push(RowError { index, error }),
            }
        }
        if !failures.is_empty() {
            warn!(
                dropped = failures.len(),
                kept = dates.len(),
                "dropped malformed time-vector rows"
            );
        }
        (Self { dates }, failures)
    }

    /// Builds a collection with one calendar per row.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::LengthMismatch`] when `calendars` does not
    /// match `rows`, otherwise fails on the first invalid row.
    pub fn from_rows_per_calendar(
        rows: &[Vec<Option<f64>>],
        calendars: &[CalendarRef],
    ) -> Result<Self, DateError> {
        if calendars.len() != rows.len() {
            return Err(DateError::LengthMismatch {
                field: "calendars",
                expected: rows.len(),
                got: calendars.len(),
            });
        }
        let mut dates = Vec::with_capacity(rows.len());
        for (row, calendar) in rows.iter().zip(calendars) {
            dates.push(CalendarDate::new(&TimeVector::from_slots(row)?, calendar)?);
        }
        Ok(Self { dates })
    }

    /// Builds a collection from raw values-plus-mask rows.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid row.
    pub fn from_raw(raws: &[RawTimeVector], calendar: CalendarRef) -> Result<Self, DateError> {
        let mut dates = Vec::with_capacity(raws.len());
        for raw in raws {
            dates.push(CalendarDate::new(&raw.to_vector()?, calendar)?);
        }
        Ok(Self { dates })
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The date at the given index.
    pub fn get(&self, index: usize) -> Option<&CalendarDate> {
        self.dates.get(index)
    }

    /// All dates, in order.
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Iterates over the dates.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.dates.iter()
    }

    /// Groups element indices by calendar identity, in order of first
    /// appearance.
    ///
    /// Calendar-dependent bulk logic runs scalar per partition and
    /// scatters results back by index, which keeps mixed-calendar
    /// collections from leaking one calendar's rules into another's
    /// elements.
    pub fn partitions(&self) -> Vec<(CalendarRef, Vec<usize>)> {
        let mut partitions: Vec<(CalendarRef, Vec<usize>)> = Vec::new();
        for (index, date) in self.dates.iter().enumerate() {
            match partitions
                .iter_mut()
                .find(|(calendar, _)| *calendar == date.calendar())
            {
                Some((_, indices)) => indices.push(index),
                None => partitions.push((date.calendar(), vec![index])),
            }
        }
        partitions
    }

    /// The single calendar shared by every element.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::EmptyCollection`] for an empty collection and
    /// [`DateError::IncompatibleCalendars`] when calendars are mixed.
    pub fn single_calendar(&self) -> Result<CalendarRef, DateError> {
        let partitions = self.partitions();
        match partitions.as_slice() {
            [] => Err(DateError::EmptyCollection),
            [(calendar, _)] => Ok(*calendar),
            [(first, _), (second, _), ..] => Err(DateError::IncompatibleCalendars {
                left: first.alias(),
                right: second.alias(),
            }),
        }
    }

    /// Leap status of every element's year, evaluated per calendar
    /// partition.
    ///
    /// # Errors
    ///
    /// Returns [`kairos_calendar::CalendarError::LeapUndefined`] (wrapped)
    /// when any partition's calendar lacks a leap concept.
    pub fn is_leap(&self) -> Result<Vec<bool>, DateError> {
        let mut out = vec![false; self.dates.len()];
        for (calendar, indices) in self.partitions() {
            for index in indices {
                out[index] = calendar.is_leap(self.dates[index].year())?;
            }
        }
        Ok(out)
    }

    fn try_map(
        &self,
        op: impl Fn(CalendarDate) -> Result<CalendarDate, DateError>,
    ) -> Result<Self, DateError> {
        let mut dates = Vec::with_capacity(self.dates.len());
        for date in &self.dates {
            dates.push(op(*date)?);
        }
        Ok(Self { dates })
    }

    /// Adds the same duration to every element.
    ///
    /// # Errors
    ///
    /// Fails on the first element whose arithmetic fails.
    #[tracing::instrument(skip(self, delta), fields(n = self.len()))]
    pub fn add_duration(&self, delta: &Duration) -> Result<Self, DateError> {
        self.try_map(|date| date.add(delta))
    }

    /// Adds one duration per element.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::LengthMismatch`] when `deltas` does not match
    /// the collection, otherwise fails on the first failing element.
    pub fn add_duration_each(&self, deltas: &[Duration]) -> Result<Self, DateError> {
        if deltas.len() != self.dates.len() {
            return Err(DateError::LengthMismatch {
                field: "deltas",
                expected: self.dates.len(),
                got: deltas.len(),
            });
        }
        let mut dates = Vec::with_capacity(self.dates.len());
        for (date, delta) in self.dates.iter().zip(deltas) {
            dates.push(date.add(delta)?);
        }
        Ok(Self { dates })
    }

    /// Adds a number of years to every element.
    ///
    /// # Errors
    ///
    /// Fails on the first element whose arithmetic fails.
    pub fn add_years(&self, increment: f64) -> Result<Self, DateError> {
        self.try_map(|date| date.add_years(increment))
    }

    /// Adds a number of cycles to every element.
    ///
    /// # Errors
    ///
    /// Fails on the first element whose arithmetic fails.
    pub fn add_cycles(&self, increment: f64) -> Result<Self, DateError> {
        self.try_map(|date| date.add_cycles(increment))
    }

    /// Adds a number of days to every element.
    ///
    /// # Errors
    ///
    /// Fails on the first element whose arithmetic fails.
    pub fn add_days(&self, increment: f64) -> Result<Self, DateError> {
        self.try_map(|date| date.add_days(increment))
    }

    /// Adds a number of hours to every element.
    ///
    /// # Errors
    ///
    /// Fails on the first element whose arithmetic fails.
    pub fn add_hours(&self, increment: f64) -> Result<Self, DateError> {
        self.try_map(|date| date.add_hours(increment))
    }

    /// Adds a number of minutes to every element.
    ///
    /// # Errors
    ///
    /// Fails on the first element whose arithmetic fails.
    pub fn add_minutes(&self, increment: f64) -> Result<Self, DateError> {
        self.try_map(|date| date.add_minutes(increment))
    }

    /// Adds a number of seconds to every element.
    ///
    /// # Errors
    ///
    /// Fails on the first element whose arithmetic fails.
    pub fn add_seconds(&self, increment: f64) -> Result<Self, DateError> {
        self.try_map(|date| date.add_seconds(increment))
    }

    /// The earliest element by lexicographic slot-wise reduction (minimal
    /// year, then among ties minimal cycle, and so on).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::EmptyCollection`] or
    /// [`DateError::IncompatibleCalendars`] as in
    /// [`Self::single_calendar`].
    pub fn min(&self) -> Result<CalendarDate, DateError> {
        self.single_calendar()?;
        self.dates
            .iter()
            .copied()
            .min_by(|a, b| a.cmp_instant(b))
            .ok_or(DateError::EmptyCollection)
    }

    /// The latest element, by the same reduction as [`Self::min`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::min`].
    pub fn max(&self) -> Result<CalendarDate, DateError> {
        self.single_calendar()?;
        self.dates
            .iter()
            .copied()
            .max_by(|a, b| a.cmp_instant(b))
            .ok_or(DateError::EmptyCollection)
    }

    /// Decomposes every element into the values-plus-mask storage form.
    pub fn to_raw(&self) -> Vec<RawTimeVector> {
        self.dates.iter().map(CalendarDate::to_raw).collect()
    }
}

impl FromIterator<CalendarDate> for DateCollection {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DateCollection {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_calendar::{CAL_360_DAY, CAL_GREGORIAN, CAL_MONTHS_ONLY, CAL_NOLEAP};
    use kairos_timevec::Unit;

    fn rows(values: &[&[f64]]) -> Vec<Vec<Option<f64>>> {
        values
            .iter()
            .map(|row| row.iter().copied().map(Some).collect())
            .collect()
    }

    #[test]
    fn from_rows_and_len() {
        let c = DateCollection::from_rows(
            &rows(&[&[2000.0, 1.0, 1.0], &[2000.0, 1.0, 2.0]]),
            &CAL_NOLEAP,
        )
        .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1).unwrap().day(), 2);
    }

    #[test]
    fn from_rows_fails_on_bad_row() {
        let err = DateCollection::from_rows(
            &rows(&[&[2000.0, 1.0, 1.0], &[2000.0, 2.0, 30.0]]),
            &CAL_NOLEAP,
        )
        .unwrap_err();
        assert!(matches!(err, DateError::DayOutOfRange { .. }));
    }

    #[test]
    fn lossy_construction_isolates_failures() {
        let (c, failures) = DateCollection::from_rows_lossy(
            &rows(&[
                &[2000.0, 1.0, 1.0],
                &[2000.0, 2.0, 30.0],
                &[2000.0, 3.0, 1.0],
            ]),
            &CAL_NOLEAP,
        );
        assert_eq!(c.len(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index, 1);
        assert!(matches!(failures[0].error, DateError::DayOutOfRange { .. }));
    }

    #[test]
    fn per_calendar_rows() {
        let c = DateCollection::from_rows_per_calendar(
            &rows(&[&[2000.0, 2.0, 29.0], &[2000.0, 2.0, 30.0]]),
            &[&CAL_GREGORIAN, &CAL_360_DAY],
        )
        .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.partitions().len(), 2);
    }

    #[test]
    fn per_calendar_length_mismatch() {
        let err = DateCollection::from_rows_per_calendar(
            &rows(&[&[2000.0]]),
            &[&CAL_GREGORIAN, &CAL_360_DAY],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DateError::LengthMismatch {
                field: "calendars",
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn partitions_group_by_calendar() {
        let c = DateCollection::from_rows_per_calendar(
            &rows(&[&[2000.0], &[2001.0], &[2002.0]]),
            &[&CAL_GREGORIAN, &CAL_360_DAY, &CAL_GREGORIAN],
        )
        .unwrap();
        let partitions = c.partitions();
        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[0].0.alias(), "gregorian");
        assert_eq!(partitions[0].1, vec![0, 2]);
        assert_eq!(partitions[1].1, vec![1]);
    }

    #[test]
    fn single_calendar_enforced() {
        let mixed = DateCollection::from_rows_per_calendar(
            &rows(&[&[2000.0], &[2001.0]]),
            &[&CAL_GREGORIAN, &CAL_360_DAY],
        )
        .unwrap();
        assert!(matches!(
            mixed.single_calendar().unwrap_err(),
            DateError::IncompatibleCalendars { .. }
        ));
        assert!(matches!(
            DateCollection::default().single_calendar().unwrap_err(),
            DateError::EmptyCollection
        ));
    }

    #[test]
    fn bulk_add_duration() {
        let c = DateCollection::from_rows(
            &rows(&[&[2000.0, 12.0, 31.0], &[2000.0, 1.0, 1.0]]),
            &CAL_NOLEAP,
        )
        .unwrap();
        let shifted = c.add_duration(&Duration::ONE_DAY).unwrap();
        assert_eq!(shifted.get(0).unwrap().year(), 2001);
        assert_eq!(shifted.get(1).unwrap().day(), 2);
    }

    #[test]
    fn bulk_add_mixed_calendars_uses_each_calendar() {
        let c = DateCollection::from_rows_per_calendar(
            &rows(&[&[2000.0, 2.0, 28.0], &[2000.0, 2.0, 28.0]]),
            &[&CAL_NOLEAP, &CAL_GREGORIAN],
        )
        .unwrap();
        let shifted = c.add_days(1.0).unwrap();
        // noleap: Feb 28 -> Mar 1; gregorian 2000: Feb 28 -> Feb 29.
        assert_eq!(shifted.get(0).unwrap().cycle(), 3);
        assert_eq!(shifted.get(1).unwrap().cycle(), 2);
        assert_eq!(shifted.get(1).unwrap().day(), 29);
    }

    #[test]
    fn add_duration_each() {
        let c = DateCollection::from_rows(
            &rows(&[&[2000.0, 1.0, 1.0], &[2000.0, 1.0, 1.0]]),
            &CAL_NOLEAP,
        )
        .unwrap();
        let shifted = c
            .add_duration_each(&[Duration::days(1.0), Duration::days(2.0)])
            .unwrap();
        assert_eq!(shifted.get(0).unwrap().day(), 2);
        assert_eq!(shifted.get(1).unwrap().day(), 3);

        let err = c.add_duration_each(&[Duration::ONE_DAY]).unwrap_err();
        assert!(matches!(err, DateError::LengthMismatch { .. }));
    }

    #[test]
    fn min_max_lexicographic() {
        let c = DateCollection::from_rows(
            &rows(&[
                &[2001.0, 6.0, 15.0],
                &[2000.0, 12.0, 31.0],
                &[2001.0, 1.0, 1.0],
            ]),
            &CAL_NOLEAP,
        )
        .unwrap();
        let min = c.min().unwrap();
        let max = c.max().unwrap();
        assert_eq!((min.year(), min.cycle(), min.day()), (2000, 12, 31));
        assert_eq!((max.year(), max.cycle(), max.day()), (2001, 6, 15));
        for date in &c {
            assert_ne!(min.cmp_instant(date), std::cmp::Ordering::Greater);
            assert_ne!(max.cmp_instant(date), std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn min_requires_single_calendar() {
        let mixed = DateCollection::from_rows_per_calendar(
            &rows(&[&[2000.0], &[2001.0]]),
            &[&CAL_GREGORIAN, &CAL_360_DAY],
        )
        .unwrap();
        assert!(matches!(
            mixed.min().unwrap_err(),
            DateError::IncompatibleCalendars { .. }
        ));
    }

    #[test]
    fn is_leap_per_partition() {
        let c = DateCollection::from_rows_per_calendar(
            &rows(&[&[2000.0], &[2000.0]]),
            &[&CAL_GREGORIAN, &CAL_360_DAY],
        )
        .unwrap();
        assert_eq!(c.is_leap().unwrap(), vec![true, false]);
    }

    #[test]
    fn is_leap_undefined_fails() {
        let c = DateCollection::from_rows(&rows(&[&[2000.0]]), &CAL_MONTHS_ONLY).unwrap();
        assert!(matches!(c.is_leap().unwrap_err(), DateError::Calendar(_)));
    }

    #[test]
    fn raw_round_trip() {
        let c = DateCollection::from_rows(
            &rows(&[&[2000.0, 1.0, 1.0], &[2000.0, 1.0, 2.0]]),
            &CAL_NOLEAP,
        )
        .unwrap();
        let raws = c.to_raw();
        assert_eq!(raws.len(), 2);
        let back = DateCollection::from_raw(&raws, &CAL_NOLEAP).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn unit_axis_untouched_by_bulk_ops() {
        let c = DateCollection::from_rows(&rows(&[&[2000.0, 1.0, 1.0]]), &CAL_NOLEAP).unwrap();
        let shifted = c.add_hours(6.0).unwrap();
        assert_eq!(shifted.get(0).unwrap().time_vector().get(Unit::Hours), Some(6.0));
        // The original is unchanged: collections are immutable values.
        assert_eq!(c.get(0).unwrap().resolution(), 3);
    }
}
