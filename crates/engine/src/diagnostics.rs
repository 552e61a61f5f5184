//! Warn-once tracking for definition defects
//!
//! Conversions never fail; defective definitions degrade to documented
//! fallbacks instead. Each distinct defect is logged the first time it is
//! hit and stays silent afterwards, so a conversion running every frame
//! cannot flood the log.

use std::sync::atomic::{AtomicBool, Ordering};

/// Everything the engine can degrade around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FallbackCause {
    MissingMonths,
    MissingWeekdays,
    MissingLeapYear,
    UnusableTimeUnits,
    ZeroLengthMonth,
    ZeroLengthIntercalary,
    DanglingIntercalary,
    InvalidDaysPerWeek,
    LeapRuleDefect,
    UnknownLeapMonth,
    MonthOutOfRange,
    DayOutOfRange,
    UnknownIntercalary,
    InvalidMoonCycle,
    EmptyMoonPhases,
}

impl FallbackCause {
    const COUNT: usize = 15;

    fn index(self) -> usize {
        match self {
            Self::MissingMonths => 0,
            Self::MissingWeekdays => 1,
            Self::MissingLeapYear => 2,
            Self::UnusableTimeUnits => 3,
            Self::ZeroLengthMonth => 4,
            Self::ZeroLengthIntercalary => 5,
            Self::DanglingIntercalary => 6,
            Self::InvalidDaysPerWeek => 7,
            Self::LeapRuleDefect => 8,
            Self::UnknownLeapMonth => 9,
            Self::MonthOutOfRange => 10,
            Self::DayOutOfRange => 11,
            Self::UnknownIntercalary => 12,
            Self::InvalidMoonCycle => 13,
            Self::EmptyMoonPhases => 14,
        }
    }
}

/// A set of sticky flags, one per [`FallbackCause`].
///
/// Lock-free so the engine stays usable from any thread.
#[derive(Debug)]
pub(crate) struct FallbackFlags {
    flags: [AtomicBool; FallbackCause::COUNT],
}

impl FallbackFlags {
    pub fn new() -> Self {
        Self {
            flags: std::array::from_fn(|_| AtomicBool::new(false)),
        }
    }

    /// True exactly once per cause. Callers gate their warn log on this.
    pub fn first(&self, cause: FallbackCause) -> bool {
        !self.flags[cause.index()].swap(true, Ordering::Relaxed)
    }

    /// Whether the cause has been hit at all.
    #[cfg(test)]
    pub fn hit(&self, cause: FallbackCause) -> bool {
        self.flags[cause.index()].load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fires_once_per_cause() {
        let flags = FallbackFlags::new();
        assert!(flags.first(FallbackCause::MonthOutOfRange));
        assert!(!flags.first(FallbackCause::MonthOutOfRange));
        assert!(!flags.first(FallbackCause::MonthOutOfRange));
    }

    #[test]
    fn test_causes_are_independent() {
        let flags = FallbackFlags::new();
        assert!(flags.first(FallbackCause::MonthOutOfRange));
        assert!(flags.first(FallbackCause::DayOutOfRange));
        assert!(flags.hit(FallbackCause::MonthOutOfRange));
        assert!(!flags.hit(FallbackCause::UnknownIntercalary));
    }
}
