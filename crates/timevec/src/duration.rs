//! Calendar-free durations over the six time-vector slots.

use crate::error::TimeVectorError;
use crate::unit::Unit;
use crate::vector::TimeVector;

/// A signed time interval `[years, cycles, days, hours, minutes, seconds]`.
///
/// Unlike a time vector, a duration has no partial-precision restriction:
/// unset input slots default to zero. No calendar is attached, so seconds,
/// minutes and hours normalize among themselves, but days never carry into
/// cycles or years here (a month has no fixed day count — that conversion
/// needs a calendar-bound date).
///
/// Adding a duration to a date applies its components in a fixed order
/// (years, cycles, days, hours, minutes, seconds); see the date layer for
/// the ordering contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    slots: [f64; 6],
}

impl Duration {
    /// One year.
    pub const ONE_YEAR: Duration = Duration {
        slots: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };
    /// One cycle (a month, in month-bearing calendars).
    pub const ONE_CYCLE: Duration = Duration {
        slots: [0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    };
    /// One day.
    pub const ONE_DAY: Duration = Duration {
        slots: [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    };
    /// One hour.
    pub const ONE_HOUR: Duration = Duration {
        slots: [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };
    /// One minute.
    pub const ONE_MINUTE: Duration = Duration {
        slots: [0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };
    /// One second.
    pub const ONE_SECOND: Duration = Duration {
        slots: [0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// The zero duration.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a duration from up to six slot values (missing slots are
    /// zero).
    ///
    /// # Errors
    ///
    /// Returns [`TimeVectorError::TooLong`] for more than six elements and
    /// [`TimeVectorError::NonFinite`] for NaN or infinite values.
    pub fn from_slots(slots: &[f64]) -> Result<Self, TimeVectorError> {
        if slots.len() > 6 {
            return Err(TimeVectorError::TooLong { len: slots.len() });
        }
        let mut padded = [0.0; 6];
        for (i, value) in slots.iter().enumerate() {
            if !value.is_finite() {
                return Err(TimeVectorError::NonFinite { slot: i });
            }
            padded[i] = *value;
        }
        Ok(Self { slots: padded })
    }

    /// Reads a time vector as a duration; unset slots default to zero.
    pub fn from_vector(vector: &TimeVector) -> Self {
        let mut slots = [0.0; 6];
        for (i, slot) in vector.slots().iter().enumerate() {
            if let Some(value) = slot {
                slots[i] = *value;
            }
        }
        Self { slots }
    }

    /// A duration of the given number of years.
    pub fn years(value: f64) -> Self {
        Self::single(Unit::Years, value)
    }

    /// A duration of the given number of cycles.
    pub fn cycles(value: f64) -> Self {
        Self::single(Unit::Cycles, value)
    }

    /// A duration of the given number of days.
    pub fn days(value: f64) -> Self {
        Self::single(Unit::Days, value)
    }

    /// A duration of the given number of hours.
    pub fn hours(value: f64) -> Self {
        Self::single(Unit::Hours, value)
    }

    /// A duration of the given number of minutes.
    pub fn minutes(value: f64) -> Self {
        Self::single(Unit::Minutes, value)
    }

    /// A duration of the given number of seconds.
    pub fn seconds(value: f64) -> Self {
        Self::single(Unit::Seconds, value)
    }

    fn single(unit: Unit, value: f64) -> Self {
        let mut slots = [0.0; 6];
        slots[unit.index()] = value;
        Self { slots }
    }

    /// Value of the given unit's slot.
    pub fn get(&self, unit: Unit) -> f64 {
        self.slots[unit.index()]
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.slots.iter().all(|&v| v == 0.0)
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        let mut slots = self.slots;
        for i in 0..6 {
            slots[i] += other.slots[i];
        }
        Self { slots }
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Multiplies every component by a scalar.
    pub fn scale(&self, multiplier: f64) -> Self {
        let mut slots = self.slots;
        for value in slots.iter_mut() {
            *value *= multiplier;
        }
        Self { slots }
    }

    /// The duration with every component negated.
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Folds an overloaded or negative seconds value into minutes.
    ///
    /// Floor division keeps the seconds in `[0, 60)`: −5 seconds becomes
    /// −1 minute + 55 seconds, not −0 minutes − 5 seconds. Idempotent once
    /// the slot is in range.
    pub fn normalize_seconds_to_minutes(&self) -> Self {
        self.fold(Unit::Seconds, Unit::Minutes, 60.0)
    }

    /// Folds an overloaded or negative minutes value into hours.
    pub fn normalize_minutes_to_hours(&self) -> Self {
        self.fold(Unit::Minutes, Unit::Hours, 60.0)
    }

    /// Folds an overloaded or negative hours value into days.
    pub fn normalize_hours_to_days(&self) -> Self {
        self.fold(Unit::Hours, Unit::Days, 24.0)
    }

    fn fold(&self, fine: Unit, coarse: Unit, modulus: f64) -> Self {
        let mut slots = self.slots;
        let value = slots[fine.index()];
        if value < 0.0 || value >= modulus {
            slots[coarse.index()] += value.div_euclid(modulus);
            slots[fine.index()] = value.rem_euclid(modulus);
        }
        Self { slots }
    }

    /// Canonical form used for comparisons: day, hour and minute fractions
    /// are pushed down, then seconds, minutes and hours are folded up.
    /// Year and cycle values are left untouched (no fixed day count).
    pub fn canonicalized(&self) -> Self {
        let mut slots = self.slots;
        let day_fraction = slots[2].fract();
        slots[2] = slots[2].trunc();
        slots[3] += 24.0 * day_fraction;
        let hour_fraction = slots[3].fract();
        slots[3] = slots[3].trunc();
        slots[4] += 60.0 * hour_fraction;
        let minute_fraction = slots[4].fract();
        slots[4] = slots[4].trunc();
        slots[5] += 60.0 * minute_fraction;
        Self { slots }
            .normalize_seconds_to_minutes()
            .normalize_minutes_to_hours()
            .normalize_hours_to_days()
    }

    /// Compares two durations for equality.
    ///
    /// Both sides are canonicalized first; exact slot-wise equality wins
    /// outright. Otherwise, mixing a nonzero year value with nonzero cycle
    /// or day values on the other side, or a nonzero cycle with a nonzero
    /// day, is inherently ambiguous (a month has no fixed day count) and
    /// fails rather than silently approximating. These pairwise checks are
    /// the complete ambiguity contract.
    ///
    /// # Errors
    ///
    /// Returns [`TimeVectorError::AmbiguousComparison`] as described above.
    pub fn eq_checked(&self, other: &Self) -> Result<bool, TimeVectorError> {
        let a = self.canonicalized();
        let b = other.canonicalized();
        if a.slots == b.slots {
            return Ok(true);
        }
        let year_mix = (a.slots[0] != 0.0 && (b.slots[1] != 0.0 || b.slots[2] != 0.0))
            || (b.slots[0] != 0.0 && (a.slots[1] != 0.0 || a.slots[2] != 0.0));
        let cycle_mix = (a.slots[1] != 0.0 && b.slots[2] != 0.0)
            || (b.slots[1] != 0.0 && a.slots[2] != 0.0);
        if year_mix || cycle_mix {
            return Err(TimeVectorError::AmbiguousComparison);
        }
        Ok(false)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for unit in Unit::ALL {
            let value = self.slots[unit.index()];
            if value != 0.0 {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{} {}", value, unit.label())?;
                first = false;
            }
        }
        if first {
            f.write_str("0 seconds")?;
        }
        Ok(())
    }
}
