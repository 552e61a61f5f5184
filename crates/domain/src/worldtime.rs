//! World time value object

use serde::{Deserialize, Serialize};

/// Absolute game time as whole seconds elapsed since the world epoch.
///
/// This is the single flat timeline everything converts to and from.
/// Negative values are ordinary and mean "before the epoch"; arithmetic
/// saturates at the i64 range instead of wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorldTime(i64);

impl WorldTime {
    pub const ZERO: WorldTime = WorldTime(0);

    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn as_seconds(self) -> i64 {
        self.0
    }
}

impl From<i64> for WorldTime {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl From<WorldTime> for i64 {
    fn from(time: WorldTime) -> Self {
        time.0
    }
}

impl std::ops::Add<i64> for WorldTime {
    type Output = WorldTime;

    fn add(self, seconds: i64) -> WorldTime {
        WorldTime(self.0.saturating_add(seconds))
    }
}

impl std::ops::Sub<i64> for WorldTime {
    type Output = WorldTime;

    fn sub(self, seconds: i64) -> WorldTime {
        WorldTime(self.0.saturating_sub(seconds))
    }
}

impl std::ops::Sub<WorldTime> for WorldTime {
    type Output = i64;

    /// Elapsed seconds between two instants.
    fn sub(self, other: WorldTime) -> i64 {
        self.0.saturating_sub(other.0)
    }
}
