//! The masked 6-slot time vector.

use crate::error::TimeVectorError;
use crate::raw::RawTimeVector;
use crate::unit::Unit;

/// A partial-precision time vector `[year, cycle, day, hour, minute,
/// second]`.
///
/// Each slot is either set or unset; unset is an explicit marker, never a
/// sentinel value, so a set zero and an unset slot are distinct. Once a slot
/// is unset, every finer slot is unset too, and only the last set slot may
/// carry a fractional part. These invariants are established at construction
/// and hold for every vector handed out by this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeVector {
    slots: [Option<f64>; 6],
}

impl TimeVector {
    /// Builds a vector from up to six optional slot values.
    ///
    /// Missing trailing slots are unset.
    ///
    /// # Errors
    ///
    /// Returns [`TimeVectorError::TooLong`] for more than six elements,
    /// [`TimeVectorError::NonFinite`] for NaN or infinite values,
    /// [`TimeVectorError::SetAfterUnset`] when a set slot follows an unset
    /// one, and [`TimeVectorError::UnresolvedFraction`] when any slot other
    /// than the last set slot holds a fractional part.
    pub fn from_slots(slots: &[Option<f64>]) -> Result<Self, TimeVectorError> {
        if slots.len() > 6 {
            return Err(TimeVectorError::TooLong { len: slots.len() });
        }
        let mut padded = [None; 6];
        padded[..slots.len()].copy_from_slice(slots);

        let mut resolution = 0;
        let mut seen_unset = false;
        for (i, slot) in padded.iter().enumerate() {
            match slot {
                Some(value) => {
                    if seen_unset {
                        return Err(TimeVectorError::SetAfterUnset { slot: i });
                    }
                    if !value.is_finite() {
                        return Err(TimeVectorError::NonFinite { slot: i });
                    }
                    resolution = i + 1;
                }
                None => seen_unset = true,
            }
        }
        for i in 0..resolution.saturating_sub(1) {
            let value = padded[i].expect("leading slots are set up to the resolution");
            if value.fract() != 0.0 {
                return Err(TimeVectorError::UnresolvedFraction { slot: i });
            }
        }
        Ok(Self { slots: padded })
    }

    /// Builds a vector whose leading slots are all set.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::from_slots`].
    pub fn from_values(values: &[f64]) -> Result<Self, TimeVectorError> {
        let slots: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        Self::from_slots(&slots)
    }

    /// The vector with every slot unset.
    pub fn empty() -> Self {
        Self { slots: [None; 6] }
    }

    /// All six slots, coarsest first.
    pub fn slots(&self) -> &[Option<f64>; 6] {
        &self.slots
    }

    /// Value of the given unit's slot, if set.
    pub fn get(&self, unit: Unit) -> Option<f64> {
        self.slots[unit.index()]
    }

    /// Number of leading set slots (0 to 6).
    pub fn resolution(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    /// Whether every slot is unset.
    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    /// Slot-wise sum of two vectors.
    ///
    /// Result slots are set only where both operands are set.
    ///
    /// # Errors
    ///
    /// Returns [`TimeVectorError::MaskedOperand`] when either side holds
    /// non-zero data where the other side is unset; adding into an unset
    /// slot would silently invent precision.
    pub fn checked_add(&self, other: &Self) -> Result<Self, TimeVectorError> {
        self.combine(other, |a, b| a + b)
    }

    /// Slot-wise difference of two vectors.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::checked_add`].
    pub fn checked_sub(&self, other: &Self) -> Result<Self, TimeVectorError> {
        self.combine(other, |a, b| a - b)
    }

    fn combine(
        &self,
        other: &Self,
        op: fn(f64, f64) -> f64,
    ) -> Result<Self, TimeVectorError> {
        let mut out = [None; 6];
        for i in 0..6 {
            out[i] = match (self.slots[i], other.slots[i]) {
                (Some(a), Some(b)) => Some(op(a, b)),
                (Some(a), None) if a != 0.0 => {
                    return Err(TimeVectorError::MaskedOperand { slot: i });
                }
                (None, Some(b)) if b != 0.0 => {
                    return Err(TimeVectorError::MaskedOperand { slot: i });
                }
                _ => None,
            };
        }
        Ok(Self { slots: out })
    }

    /// Multiplies every set slot by a scalar.
    pub fn scale(&self, multiplier: f64) -> Self {
        let mut out = self.slots;
        for slot in out.iter_mut().flatten() {
            *slot *= multiplier;
        }
        Self { slots: out }
    }

    /// Decomposes into the values-plus-mask storage form.
    pub fn to_raw(&self) -> RawTimeVector {
        let mut values = [0.0; 6];
        let mut set = [false; 6];
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(value) = slot {
                values[i] = *value;
                set[i] = true;
            }
        }
        RawTimeVector { values, set }
    }
}
