//! Time subdivision units and clock-time values

use serde::{Deserialize, Serialize};

/// How a calendar subdivides a day.
///
/// Nothing assumes 24/60/60; a calendar may run 20-hour days or 100-minute
/// hours. All world-time arithmetic derives from these three numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeUnits {
    #[serde(default = "default_hours_in_day")]
    pub hours_in_day: u32,
    #[serde(default = "default_minutes_in_hour")]
    pub minutes_in_hour: u32,
    #[serde(default = "default_seconds_in_minute")]
    pub seconds_in_minute: u32,
}

fn default_hours_in_day() -> u32 {
    24
}

fn default_minutes_in_hour() -> u32 {
    60
}

fn default_seconds_in_minute() -> u32 {
    60
}

impl Default for TimeUnits {
    fn default() -> Self {
        Self {
            hours_in_day: 24,
            minutes_in_hour: 60,
            seconds_in_minute: 60,
        }
    }
}

impl TimeUnits {
    pub fn new(hours_in_day: u32, minutes_in_hour: u32, seconds_in_minute: u32) -> Self {
        Self {
            hours_in_day,
            minutes_in_hour,
            seconds_in_minute,
        }
    }

    pub fn seconds_per_minute(&self) -> i64 {
        i64::from(self.seconds_in_minute)
    }

    pub fn seconds_per_hour(&self) -> i64 {
        i64::from(self.minutes_in_hour) * i64::from(self.seconds_in_minute)
    }

    pub fn seconds_per_day(&self) -> i64 {
        i64::from(self.hours_in_day) * self.seconds_per_hour()
    }

    /// True when every unit is positive. Zero units cannot subdivide a day
    /// and callers substitute defaults instead.
    pub fn is_usable(&self) -> bool {
        self.hours_in_day > 0 && self.minutes_in_hour > 0 && self.seconds_in_minute > 0
    }
}

/// Time of day within a calendar's units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn midnight() -> Self {
        Self::new(0, 0, 0)
    }

    /// Seconds since the start of the day under the given units.
    pub fn seconds_into_day(&self, units: &TimeUnits) -> i64 {
        i64::from(self.hour) * units.seconds_per_hour()
            + i64::from(self.minute) * units.seconds_per_minute()
            + i64::from(self.second)
    }

    /// Zero-padded `HH:MM:SS`.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::midnight()
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
