//! Error types for the kairos-timevec crate.

/// Error type for all fallible operations in the kairos-timevec crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeVectorError {
    /// Returned when more than six slots are supplied.
    #[error("time vector has {len} elements (at most 6)")]
    TooLong {
        /// Number of elements supplied.
        len: usize,
    },

    /// Returned when a slot holds a NaN or infinite value.
    #[error("non-finite value in time vector slot {slot}")]
    NonFinite {
        /// 0-based slot index of the offending value.
        slot: usize,
    },

    /// Returned when a set slot follows an unset slot.
    #[error("set value in slot {slot} follows an unset slot")]
    SetAfterUnset {
        /// 0-based slot index of the set value.
        slot: usize,
    },

    /// Returned when a slot other than the last set slot carries a
    /// fractional part.
    #[error("fractional value outside the last set slot (slot {slot})")]
    UnresolvedFraction {
        /// 0-based slot index of the fractional value.
        slot: usize,
    },

    /// Returned when arithmetic would combine a non-zero value with an
    /// unset slot.
    #[error("arithmetic combines a non-zero value with unset slot {slot}")]
    MaskedOperand {
        /// 0-based slot index of the unset operand.
        slot: usize,
    },

    /// Returned when a duration comparison mixes units without a fixed
    /// ratio (years against cycles or days, cycles against days).
    #[error("ambiguous comparison: years, cycles and days have no fixed ratio")]
    AmbiguousComparison,
}
