//! The six time-vector axes.

/// One of the six time-vector slots, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Years,
    Cycles,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// All units, coarsest first.
    pub const ALL: [Unit; 6] = [
        Unit::Years,
        Unit::Cycles,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// 0-based slot index of this unit in a time vector.
    pub fn index(self) -> usize {
        match self {
            Unit::Years => 0,
            Unit::Cycles => 1,
            Unit::Days => 2,
            Unit::Hours => 3,
            Unit::Minutes => 4,
            Unit::Seconds => 5,
        }
    }

    /// Plural label used in rendered durations.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Cycles => "cycles",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
