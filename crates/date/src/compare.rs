//! Mask-aware and instant comparisons between dates.

use std::cmp::Ordering;

use crate::date::CalendarDate;
use crate::error::DateError;

impl CalendarDate {
    /// Orders two dates of the same calendar, honoring resolution.
    ///
    /// Slots are compared lexicographically; slots unset on either side are
    /// skipped. When no mutually set slot differs, equal resolutions mean
    /// equal dates, while differing resolutions leave the order undecidable.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::IncompatibleCalendars`] across calendars and
    /// [`DateError::AmbiguousComparison`] when the resolutions differ and
    /// no mutually set slot decides the order (e.g. `[2001]` against
    /// `[2001, 6]`).
    pub fn compare_checked(&self, other: &Self) -> Result<Ordering, DateError> {
        if self.calendar != other.calendar {
            return Err(DateError::IncompatibleCalendars {
                left: self.calendar.alias(),
                right: other.calendar.alias(),
            });
        }
        let shared = self.resolution().min(other.resolution());
        for i in 0..shared {
            if self.values[i] != other.values[i] {
                return Ok(self.values[i].total_cmp(&other.values[i]));
            }
        }
        if self.resolution == other.resolution {
            Ok(Ordering::Equal)
        } else {
            Err(DateError::AmbiguousComparison)
        }
    }

    /// `self < other` under [`Self::compare_checked`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::compare_checked`].
    pub fn lt_checked(&self, other: &Self) -> Result<bool, DateError> {
        Ok(self.compare_checked(other)? == Ordering::Less)
    }

    /// `self <= other` under [`Self::compare_checked`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::compare_checked`].
    pub fn le_checked(&self, other: &Self) -> Result<bool, DateError> {
        Ok(self.compare_checked(other)? != Ordering::Greater)
    }

    /// `self > other` under [`Self::compare_checked`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::compare_checked`].
    pub fn gt_checked(&self, other: &Self) -> Result<bool, DateError> {
        Ok(self.compare_checked(other)? == Ordering::Greater)
    }

    /// `self >= other` under [`Self::compare_checked`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::compare_checked`].
    pub fn ge_checked(&self, other: &Self) -> Result<bool, DateError> {
        Ok(self.compare_checked(other)? != Ordering::Less)
    }

    /// `self == other` under [`Self::compare_checked`].
    ///
    /// Unlike the structural `==`, this treats dates with differing
    /// resolutions as undecidable rather than unequal.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::compare_checked`].
    pub fn eq_checked(&self, other: &Self) -> Result<bool, DateError> {
        Ok(self.compare_checked(other)? == Ordering::Equal)
    }

    /// Orders the fully materialized instants, defaults included.
    ///
    /// An unset cycle compares as the first cycle, an unset hour as 0, and
    /// so on; resolution plays no role. This is the comparison that period
    /// boundary semantics and collection aggregates run on. The caller is
    /// responsible for calendar agreement.
    pub fn cmp_instant(&self, other: &Self) -> Ordering {
        for i in 0..6 {
            let order = self.values[i].total_cmp(&other.values[i]);
            if order != Ordering::Equal {
                return order;
            }
        }
        Ordering::Equal
    }

    /// Whether two dates of the same calendar materialize to the same
    /// instant, regardless of resolution.
    pub fn same_instant(&self, other: &Self) -> bool {
        self.calendar == other.calendar && self.cmp_instant(other) == Ordering::Equal
    }
}
