//! Values-plus-mask storage form for the I/O boundary.

use serde::{Deserialize, Serialize};

use crate::error::TimeVectorError;
use crate::vector::TimeVector;

/// Raw six-number-plus-mask form of a time vector.
///
/// This is the exchange format with NetCDF `time_vectors` arrays and decoded
/// GRIB date/time fields: a dense `values` row with a parallel validity mask
/// (`set[i]` is `true` where slot `i` holds real data). Unset slots carry a
/// zero placeholder in `values`, which is why the mask, not the value, is
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawTimeVector {
    /// Slot values; unset slots hold 0.
    pub values: [f64; 6],
    /// Validity mask: `true` where the slot is set.
    pub set: [bool; 6],
}

impl RawTimeVector {
    /// Reassembles a validated [`TimeVector`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`TimeVector::from_slots`].
    pub fn to_vector(&self) -> Result<TimeVector, TimeVectorError> {
        let mut slots = [None; 6];
        for i in 0..6 {
            if self.set[i] {
                slots[i] = Some(self.values[i]);
            }
        }
        TimeVector::from_slots(&slots)
    }
}

impl From<TimeVector> for RawTimeVector {
    fn from(vector: TimeVector) -> Self {
        vector.to_raw()
    }
}
