//! Canonical hour definitions
//!
//! Canonical hours are named stretches of the day: Matins, Dawn, Highsun.
//! Ranges are half-open and may wrap past midnight (23:00 to 02:00).

use serde::{Deserialize, Serialize};

use super::time::TimeUnits;

/// A named range of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalHour {
    pub name: String,
    pub start_hour: u32,
    #[serde(default)]
    pub start_minute: u32,
    pub end_hour: u32,
    #[serde(default)]
    pub end_minute: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CanonicalHour {
    pub fn new(name: impl Into<String>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            name: name.into(),
            start_hour,
            start_minute: 0,
            end_hour,
            end_minute: 0,
            description: None,
        }
    }

    pub fn with_minutes(mut self, start_minute: u32, end_minute: u32) -> Self {
        self.start_minute = start_minute;
        self.end_minute = end_minute;
        self
    }

    /// Range start in minutes since midnight.
    pub fn start_in_minutes(&self, units: &TimeUnits) -> i64 {
        i64::from(self.start_hour) * i64::from(units.minutes_in_hour) + i64::from(self.start_minute)
    }

    /// Range end in minutes since midnight.
    pub fn end_in_minutes(&self, units: &TimeUnits) -> i64 {
        i64::from(self.end_hour) * i64::from(units.minutes_in_hour) + i64::from(self.end_minute)
    }

    /// True when the range passes through midnight (start later than end).
    pub fn wraps_midnight(&self, units: &TimeUnits) -> bool {
        self.start_in_minutes(units) > self.end_in_minutes(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_positions() {
        let units = TimeUnits::default();
        let hour = CanonicalHour::new("Dawn", 5, 8).with_minutes(30, 15);
        assert_eq!(hour.start_in_minutes(&units), 330);
        assert_eq!(hour.end_in_minutes(&units), 495);
        assert!(!hour.wraps_midnight(&units));
    }

    #[test]
    fn test_wraps_midnight() {
        let units = TimeUnits::default();
        assert!(CanonicalHour::new("Deepnight", 23, 2).wraps_midnight(&units));
        assert!(!CanonicalHour::new("Morning", 5, 12).wraps_midnight(&units));
    }

    #[test]
    fn test_nonstandard_minutes_in_hour() {
        let units = TimeUnits::new(20, 100, 100);
        let hour = CanonicalHour::new("Highsun", 10, 11);
        assert_eq!(hour.start_in_minutes(&units), 1_000);
        assert_eq!(hour.end_in_minutes(&units), 1_100);
    }

    #[test]
    fn test_deserialize_minimal() {
        let hour: CanonicalHour =
            serde_json::from_str(r#"{"name": "Matins", "startHour": 0, "endHour": 3}"#).unwrap();
        assert_eq!(hour.name, "Matins");
        assert_eq!(hour.start_minute, 0);
        assert_eq!(hour.end_minute, 0);
    }
}
