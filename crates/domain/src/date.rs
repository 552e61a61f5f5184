//! Structured calendar dates

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDefinition, ClockTime};

/// A position on a calendar: year, month, day, and optionally a weekday,
/// an intercalary marker, and a time of day.
///
/// For intercalary dates `month` holds the anchor month the group is
/// attached to and `day` counts within the group, so "Midwinter 2" after
/// Hammer is `{month: 1, day: 2, intercalary: Some("Midwinter")}`.
/// Intercalary days outside the weekday cycle carry `weekday: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDate {
    pub year: i64,
    /// 1-based month index; the anchor month for intercalary dates.
    pub month: u32,
    /// 1-based day of month, or day within the intercalary group.
    pub day: u32,
    /// 0-based index into the weekday cycle. None for days outside it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u32>,
    /// Name of the intercalary group this date falls on, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercalary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<ClockTime>,
}

impl CalendarDate {
    pub fn new(year: i64, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            weekday: None,
            intercalary: None,
            time: None,
        }
    }

    /// Date on an intercalary day, anchored to the given month.
    pub fn intercalary_day(name: impl Into<String>, year: i64, month: u32, day: u32) -> Self {
        Self {
            intercalary: Some(name.into()),
            ..Self::new(year, month, day)
        }
    }

    pub fn at_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.time = Some(ClockTime::new(hour, minute, second));
        self
    }

    pub fn with_time(mut self, time: ClockTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_weekday(mut self, weekday: u32) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn is_intercalary(&self) -> bool {
        self.intercalary.is_some()
    }

    pub fn time_or_midnight(&self) -> ClockTime {
        self.time.unwrap_or_default()
    }

    /// Full display form: "15th of Mirtul, 1492 DR" or "Midwinter, 1492 DR".
    pub fn display_full(&self, calendar: &CalendarDefinition) -> String {
        let year = calendar.year().display_year(self.year);
        match &self.intercalary {
            Some(name) if self.day > 1 => format!("{name} {}, {year}", self.day),
            Some(name) => format!("{name}, {year}"),
            None => {
                let month = calendar.month_name(self.month).unwrap_or("Unknown");
                format!("{}{} of {month}, {year}", self.day, ordinal_suffix(self.day))
            }
        }
    }

    /// Compact display form: "15 Mir 1492" or "Midwinter 1492".
    pub fn display_short(&self, calendar: &CalendarDefinition) -> String {
        match &self.intercalary {
            Some(name) => format!("{name} {}", self.year),
            None => {
                let month = calendar
                    .month(self.month)
                    .map(|m| m.short_name())
                    .unwrap_or_else(|| "???".to_string());
                format!("{} {month} {}", self.day, self.year)
            }
        }
    }

    /// Time display, midnight when no time is set.
    pub fn display_time(&self) -> String {
        self.time_or_midnight().display()
    }
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, with the 11th/12th/13th
/// exceptions.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarId, MonthDefinition, YearConfig};

    fn test_calendar() -> CalendarDefinition {
        CalendarDefinition::new(CalendarId::new("realms").unwrap(), "Realms")
            .with_months(vec![
                MonthDefinition::new("Hammer", 30).with_abbreviation("Ham"),
                MonthDefinition::new("Alturiak", 30),
            ])
            .with_year(YearConfig::new(0, 0).with_suffix(" DR"))
    }

    mod ordinal {
        use super::*;

        #[test]
        fn test_basic_suffixes() {
            assert_eq!(ordinal_suffix(1), "st");
            assert_eq!(ordinal_suffix(2), "nd");
            assert_eq!(ordinal_suffix(3), "rd");
            assert_eq!(ordinal_suffix(4), "th");
            assert_eq!(ordinal_suffix(20), "th");
            assert_eq!(ordinal_suffix(21), "st");
            assert_eq!(ordinal_suffix(22), "nd");
            assert_eq!(ordinal_suffix(23), "rd");
        }

        #[test]
        fn test_teen_exceptions() {
            assert_eq!(ordinal_suffix(11), "th");
            assert_eq!(ordinal_suffix(12), "th");
            assert_eq!(ordinal_suffix(13), "th");
            assert_eq!(ordinal_suffix(111), "th");
            assert_eq!(ordinal_suffix(112), "th");
        }

        #[test]
        fn test_above_one_hundred() {
            assert_eq!(ordinal_suffix(101), "st");
            assert_eq!(ordinal_suffix(122), "nd");
        }
    }

    mod display {
        use super::*;

        #[test]
        fn test_display_full() {
            let cal = test_calendar();
            let date = CalendarDate::new(1492, 1, 15);
            assert_eq!(date.display_full(&cal), "15th of Hammer, 1492 DR");
        }

        #[test]
        fn test_display_full_intercalary() {
            let cal = test_calendar();
            let date = CalendarDate::intercalary_day("Midwinter", 1492, 1, 1);
            assert_eq!(date.display_full(&cal), "Midwinter, 1492 DR");
        }

        #[test]
        fn test_display_full_multi_day_intercalary() {
            let cal = test_calendar();
            let date = CalendarDate::intercalary_day("The Long Feast", 1492, 2, 3);
            assert_eq!(date.display_full(&cal), "The Long Feast 3, 1492 DR");
        }

        #[test]
        fn test_display_full_unknown_month() {
            let cal = test_calendar();
            let date = CalendarDate::new(1492, 9, 1);
            assert_eq!(date.display_full(&cal), "1st of Unknown, 1492 DR");
        }

        #[test]
        fn test_display_short() {
            let cal = test_calendar();
            assert_eq!(CalendarDate::new(1492, 1, 15).display_short(&cal), "15 Ham 1492");
            assert_eq!(CalendarDate::new(1492, 2, 3).display_short(&cal), "3 Alt 1492");
        }

        #[test]
        fn test_display_time() {
            let date = CalendarDate::new(1492, 1, 15).at_time(9, 30, 5);
            assert_eq!(date.display_time(), "09:30:05");
            assert_eq!(CalendarDate::new(1492, 1, 15).display_time(), "00:00:00");
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn test_optional_fields_skipped() {
            let json = serde_json::to_value(CalendarDate::new(2024, 1, 1)).unwrap();
            assert!(json.get("weekday").is_none());
            assert!(json.get("intercalary").is_none());
            assert!(json.get("time").is_none());
        }

        #[test]
        fn test_round_trip_full_date() {
            let date = CalendarDate::intercalary_day("Shieldmeet", 1372, 7, 1)
                .at_time(12, 0, 0);
            let json = serde_json::to_string(&date).unwrap();
            let back: CalendarDate = serde_json::from_str(&json).unwrap();
            assert_eq!(back, date);
        }

        #[test]
        fn test_deserialize_document_form() {
            let date: CalendarDate = serde_json::from_str(
                r#"{"year": 2024, "month": 1, "day": 1, "weekday": 1}"#,
            )
            .unwrap();
            assert_eq!(date.year, 2024);
            assert_eq!(date.weekday, Some(1));
            assert!(!date.is_intercalary());
        }
    }
}
