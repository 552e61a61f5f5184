//! Calendar definition aggregate
//!
//! A [`CalendarDefinition`] is the parsed form of a calendar document:
//! months, weekdays, leap rule, intercalary days, time units, week
//! grouping, canonical hours, moons, and seasons. It is pure data with
//! accessors and structural checks; calendar arithmetic lives in the
//! engine crate.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::hours::CanonicalHour;
use super::id::CalendarId;
use super::intercalary::IntercalaryDayDefinition;
use super::leap::LeapYearConfig;
use super::month::MonthDefinition;
use super::moons::MoonDefinition;
use super::seasons::SeasonDefinition;
use super::time::TimeUnits;
use super::weekday::WeekdayDefinition;
use super::weeks::WeekConfig;
use super::year::YearConfig;

/// Weekday cycle length used when a calendar defines no weekdays.
pub const DEFAULT_WEEK_LENGTH: u32 = 7;

/// A complete calendar definition.
///
/// Sections that a document may omit entirely (`leapYear`, `time`) are
/// optional here so consumers can tell "absent" apart from "explicitly
/// configured"; the engine substitutes defaults for absent sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDefinition {
    id: CalendarId,
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default)]
    months: Vec<MonthDefinition>,
    #[serde(default)]
    weekdays: Vec<WeekdayDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    leap_year: Option<LeapYearConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    intercalary: Vec<IntercalaryDayDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<TimeUnits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weeks: Option<WeekConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    canonical_hours: Vec<CanonicalHour>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    moons: Vec<MoonDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    seasons: Vec<SeasonDefinition>,
    #[serde(default)]
    year: YearConfig,
}

impl CalendarDefinition {
    pub fn new(id: CalendarId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            months: Vec::new(),
            weekdays: Vec::new(),
            leap_year: None,
            intercalary: Vec::new(),
            time: None,
            weeks: None,
            canonical_hours: Vec::new(),
            moons: Vec::new(),
            seasons: Vec::new(),
            year: YearConfig::default(),
        }
    }

    // ============================================================
    // Builder methods
    // ============================================================

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_months(mut self, months: Vec<MonthDefinition>) -> Self {
        self.months = months;
        self
    }

    pub fn with_weekdays(mut self, weekdays: Vec<WeekdayDefinition>) -> Self {
        self.weekdays = weekdays;
        self
    }

    pub fn with_leap_year(mut self, leap_year: LeapYearConfig) -> Self {
        self.leap_year = Some(leap_year);
        self
    }

    pub fn with_intercalary(mut self, intercalary: Vec<IntercalaryDayDefinition>) -> Self {
        self.intercalary = intercalary;
        self
    }

    pub fn with_time(mut self, time: TimeUnits) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_weeks(mut self, weeks: WeekConfig) -> Self {
        self.weeks = Some(weeks);
        self
    }

    pub fn with_canonical_hours(mut self, canonical_hours: Vec<CanonicalHour>) -> Self {
        self.canonical_hours = canonical_hours;
        self
    }

    pub fn with_moons(mut self, moons: Vec<MoonDefinition>) -> Self {
        self.moons = moons;
        self
    }

    pub fn with_seasons(mut self, seasons: Vec<SeasonDefinition>) -> Self {
        self.seasons = seasons;
        self
    }

    pub fn with_year(mut self, year: YearConfig) -> Self {
        self.year = year;
        self
    }

    // ============================================================
    // Accessors
    // ============================================================

    pub fn id(&self) -> &CalendarId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn months(&self) -> &[MonthDefinition] {
        &self.months
    }

    pub fn weekdays(&self) -> &[WeekdayDefinition] {
        &self.weekdays
    }

    pub fn leap_year(&self) -> Option<&LeapYearConfig> {
        self.leap_year.as_ref()
    }

    pub fn intercalary(&self) -> &[IntercalaryDayDefinition] {
        &self.intercalary
    }

    pub fn time(&self) -> Option<&TimeUnits> {
        self.time.as_ref()
    }

    pub fn weeks(&self) -> Option<&WeekConfig> {
        self.weeks.as_ref()
    }

    pub fn canonical_hours(&self) -> &[CanonicalHour] {
        &self.canonical_hours
    }

    pub fn moons(&self) -> &[MoonDefinition] {
        &self.moons
    }

    pub fn seasons(&self) -> &[SeasonDefinition] {
        &self.seasons
    }

    pub fn year(&self) -> &YearConfig {
        &self.year
    }

    // ============================================================
    // Computed properties
    // ============================================================

    pub fn months_in_year(&self) -> u32 {
        self.months.len() as u32
    }

    /// Month definition by 1-based index.
    pub fn month(&self, index: u32) -> Option<&MonthDefinition> {
        if index == 0 {
            return None;
        }
        self.months.get(index as usize - 1)
    }

    /// 1-based index of the month with the given name.
    pub fn month_index(&self, name: &str) -> Option<u32> {
        self.months
            .iter()
            .position(|m| m.name == name)
            .map(|i| i as u32 + 1)
    }

    /// Month name by 1-based index.
    pub fn month_name(&self, index: u32) -> Option<&str> {
        self.month(index).map(|m| m.name.as_str())
    }

    /// Length of the weekday cycle, falling back to
    /// [`DEFAULT_WEEK_LENGTH`] when no weekdays are defined.
    pub fn weekday_cycle_len(&self) -> u32 {
        if self.weekdays.is_empty() {
            DEFAULT_WEEK_LENGTH
        } else {
            self.weekdays.len() as u32
        }
    }

    /// Weekday name by 0-based index into the cycle.
    pub fn weekday_name(&self, index: u32) -> Option<&str> {
        self.weekdays.get(index as usize).map(|d| d.name.as_str())
    }

    /// Sum of base month lengths, before leap adjustments and
    /// intercalary days.
    pub fn base_days_in_year(&self) -> i64 {
        self.months.iter().map(|m| i64::from(m.days)).sum()
    }

    /// Intercalary groups attached before the month at the 1-based index,
    /// in definition order, ignoring leap-year applicability.
    pub fn intercalary_before_month(
        &self,
        month: u32,
    ) -> impl Iterator<Item = &IntercalaryDayDefinition> {
        let month_name = self.month_name(month).unwrap_or_default();
        self.intercalary
            .iter()
            .filter(move |d| d.attachment.is_before() && d.attachment.month_name() == month_name)
    }

    /// Intercalary groups attached after the month at the 1-based index,
    /// in definition order, ignoring leap-year applicability.
    pub fn intercalary_after_month(
        &self,
        month: u32,
    ) -> impl Iterator<Item = &IntercalaryDayDefinition> {
        let month_name = self.month_name(month).unwrap_or_default();
        self.intercalary
            .iter()
            .filter(move |d| d.attachment.is_after() && d.attachment.month_name() == month_name)
    }

    /// Intercalary group by name.
    pub fn intercalary_by_name(&self, name: &str) -> Option<&IntercalaryDayDefinition> {
        self.intercalary.iter().find(|d| d.name == name)
    }

    // ============================================================
    // Structural validation
    // ============================================================

    /// Check the structural invariants a well-formed document satisfies.
    ///
    /// Intended for loaders at ingest time. The engine does not require a
    /// validated definition; it degrades around defects instead.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.months.is_empty() {
            return Err(DomainError::validation("calendar must define at least one month"));
        }
        if let Some(month) = self.months.iter().find(|m| m.days == 0) {
            return Err(DomainError::validation(format!(
                "month '{}' must have at least one day",
                month.name
            )));
        }
        for (i, month) in self.months.iter().enumerate() {
            if self.months[..i].iter().any(|m| m.name == month.name) {
                return Err(DomainError::validation(format!(
                    "duplicate month name '{}'",
                    month.name
                )));
            }
        }
        if self.weekdays.is_empty() {
            return Err(DomainError::validation(
                "calendar must define at least one weekday",
            ));
        }
        if let Some(time) = &self.time {
            if !time.is_usable() {
                return Err(DomainError::validation(
                    "time units must all be positive",
                ));
            }
        }
        for day in &self.intercalary {
            let month_name = day.attachment.month_name();
            if self.month_index(month_name).is_none() {
                return Err(DomainError::constraint(format!(
                    "intercalary day '{}' references unknown month '{month_name}'",
                    day.name
                )));
            }
        }
        if let Some(leap) = &self.leap_year {
            if let Some(month_name) = &leap.month {
                if self.month_index(month_name).is_none() {
                    return Err(DomainError::constraint(format!(
                        "leap-year config references unknown month '{month_name}'"
                    )));
                }
            }
        }
        if let Some(weeks) = &self.weeks {
            if weeks.days_per_week == Some(0) {
                return Err(DomainError::validation("daysPerWeek must be positive"));
            }
        }
        for moon in &self.moons {
            if moon.cycle_length <= 0.0 {
                return Err(DomainError::validation(format!(
                    "moon '{}' must have a positive cycle length",
                    moon.name
                )));
            }
        }
        for season in &self.seasons {
            if self.month(season.start_month).is_none() {
                return Err(DomainError::constraint(format!(
                    "season '{}' starts in unknown month {}",
                    season.name, season.start_month
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::weeks::WeekConfig;

    fn minimal() -> CalendarDefinition {
        CalendarDefinition::new(CalendarId::new("test").unwrap(), "Test Calendar")
            .with_months(vec![
                MonthDefinition::new("Thaw", 30),
                MonthDefinition::new("Harvest", 31),
            ])
            .with_weekdays(vec![
                WeekdayDefinition::new("Oneday"),
                WeekdayDefinition::new("Twoday"),
            ])
    }

    mod accessors {
        use super::*;

        #[test]
        fn test_month_lookups() {
            let cal = minimal();
            assert_eq!(cal.months_in_year(), 2);
            assert_eq!(cal.month_index("Harvest"), Some(2));
            assert_eq!(cal.month_index("Frost"), None);
            assert_eq!(cal.month_name(1), Some("Thaw"));
            assert_eq!(cal.month_name(0), None);
            assert_eq!(cal.month_name(3), None);
        }

        #[test]
        fn test_weekday_cycle_len_falls_back() {
            let cal = minimal();
            assert_eq!(cal.weekday_cycle_len(), 2);

            let bare = CalendarDefinition::new(CalendarId::new("bare").unwrap(), "Bare");
            assert_eq!(bare.weekday_cycle_len(), DEFAULT_WEEK_LENGTH);
        }

        #[test]
        fn test_base_days_in_year() {
            assert_eq!(minimal().base_days_in_year(), 61);
        }

        #[test]
        fn test_intercalary_filters_by_attachment() {
            let cal = minimal().with_intercalary(vec![
                IntercalaryDayDefinition::after("Midpoint", "Thaw"),
                IntercalaryDayDefinition::before("Harvest Eve", "Harvest"),
            ]);
            let after: Vec<_> = cal.intercalary_after_month(1).collect();
            assert_eq!(after.len(), 1);
            assert_eq!(after[0].name, "Midpoint");

            let before: Vec<_> = cal.intercalary_before_month(2).collect();
            assert_eq!(before.len(), 1);
            assert_eq!(before[0].name, "Harvest Eve");

            assert_eq!(cal.intercalary_before_month(1).count(), 0);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_minimal_is_valid() {
            assert!(minimal().validate().is_ok());
        }

        #[test]
        fn test_rejects_empty_months() {
            let cal = CalendarDefinition::new(CalendarId::new("empty").unwrap(), "Empty")
                .with_weekdays(vec![WeekdayDefinition::new("Oneday")]);
            assert!(cal.validate().is_err());
        }

        #[test]
        fn test_rejects_zero_length_month() {
            let cal = minimal().with_months(vec![MonthDefinition::new("Void", 0)]);
            assert!(cal.validate().is_err());
        }

        #[test]
        fn test_rejects_duplicate_month_names() {
            let cal = minimal().with_months(vec![
                MonthDefinition::new("Thaw", 30),
                MonthDefinition::new("Thaw", 31),
            ]);
            assert!(cal.validate().is_err());
        }

        #[test]
        fn test_rejects_dangling_intercalary_reference() {
            let cal = minimal()
                .with_intercalary(vec![IntercalaryDayDefinition::after("Lost Day", "Frost")]);
            let err = cal.validate().unwrap_err();
            assert!(matches!(err, DomainError::Constraint(_)));
        }

        #[test]
        fn test_rejects_dangling_leap_month() {
            let cal = minimal().with_leap_year(LeapYearConfig::gregorian("Frost"));
            assert!(cal.validate().is_err());
        }

        #[test]
        fn test_rejects_zero_days_per_week() {
            let cal = minimal().with_weeks(WeekConfig::month_based().with_days_per_week(0));
            assert!(cal.validate().is_err());
        }

        #[test]
        fn test_rejects_nonpositive_moon_cycle() {
            let cal = minimal().with_moons(vec![MoonDefinition::new(
                "Void Moon",
                0.0,
                crate::calendar::moons::ReferenceDate::new(0, 1, 1),
            )]);
            assert!(cal.validate().is_err());
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn test_document_round_trip() {
            let cal = minimal()
                .with_leap_year(LeapYearConfig::custom(4, 0))
                .with_intercalary(vec![IntercalaryDayDefinition::after("Midpoint", "Thaw")])
                .with_time(TimeUnits::new(20, 100, 100));
            let json = serde_json::to_string(&cal).unwrap();
            let back: CalendarDefinition = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cal);
        }

        #[test]
        fn test_deserialize_minimal_document() {
            let cal: CalendarDefinition = serde_json::from_str(
                r#"{
                    "id": "sparse",
                    "name": "Sparse",
                    "months": [{"name": "Only", "days": 40}],
                    "weekdays": [{"name": "Day"}]
                }"#,
            )
            .unwrap();
            assert_eq!(cal.id().as_str(), "sparse");
            assert!(cal.leap_year().is_none());
            assert!(cal.time().is_none());
            assert!(cal.weeks().is_none());
            assert_eq!(cal.year().epoch, 0);
        }

        #[test]
        fn test_keys_are_camel_case() {
            let cal = minimal().with_canonical_hours(vec![CanonicalHour::new("Dawn", 5, 8)]);
            let json = serde_json::to_value(&cal).unwrap();
            assert!(json.get("canonicalHours").is_some());
            assert!(json["canonicalHours"][0].get("startHour").is_some());
        }
    }
}
