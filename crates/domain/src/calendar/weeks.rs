//! Week grouping configuration and week display metadata

use serde::{Deserialize, Serialize};

/// What weeks are counted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekType {
    /// Week numbers restart at 1 on the first day of each month.
    MonthBased,
    /// Weeks run across the whole year. Month-scoped week queries do not
    /// apply to these calendars.
    YearBased,
}

/// How trailing days that do not fill a whole week are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemainderHandling {
    /// Trailing days form a shorter final week.
    #[default]
    PartialLast,
    /// Trailing days extend the last full week past its nominal length.
    ExtendLast,
    /// Trailing days belong to no week.
    None,
}

/// How week labels are generated when no explicit names are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekNamingPattern {
    /// "1st Week", "2nd Week", ...
    Ordinal,
    /// "Week 1", "Week 2", ...
    Numeric,
    /// Weeks have numbers but no display metadata.
    #[default]
    None,
}

/// Explicit display name for one week position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WeekName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            prefix: None,
            suffix: None,
            description: None,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }
}

/// Week grouping section of a calendar document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekConfig {
    #[serde(rename = "type")]
    pub week_type: WeekType,
    /// Caps how many week numbers a month can produce. Days past the cap
    /// fold into the final week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_month: Option<u32>,
    /// Days per week. Defaults to the weekday cycle length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_week: Option<u32>,
    #[serde(default)]
    pub remainder_handling: RemainderHandling,
    #[serde(default)]
    pub naming_pattern: WeekNamingPattern,
    /// Explicit names by week position, overriding the naming pattern.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<WeekName>,
}

impl WeekConfig {
    pub fn month_based() -> Self {
        Self {
            week_type: WeekType::MonthBased,
            per_month: None,
            days_per_week: None,
            remainder_handling: RemainderHandling::PartialLast,
            naming_pattern: WeekNamingPattern::None,
            names: Vec::new(),
        }
    }

    pub fn year_based() -> Self {
        Self {
            week_type: WeekType::YearBased,
            ..Self::month_based()
        }
    }

    pub fn with_days_per_week(mut self, days: u32) -> Self {
        self.days_per_week = Some(days);
        self
    }

    pub fn with_remainder_handling(mut self, handling: RemainderHandling) -> Self {
        self.remainder_handling = handling;
        self
    }

    pub fn with_naming_pattern(mut self, pattern: WeekNamingPattern) -> Self {
        self.naming_pattern = pattern;
        self
    }

    pub fn with_names(mut self, names: Vec<WeekName>) -> Self {
        self.names = names;
        self
    }
}

/// Display metadata for a resolved week, as returned by week queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekInfo {
    /// 1-based week number within the month.
    pub number: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WeekInfo {
    /// Week info carrying only a generated label.
    pub fn generated(number: u32, label: impl Into<String>) -> Self {
        Self {
            number,
            label: label.into(),
            abbreviation: None,
            prefix: None,
            suffix: None,
            description: None,
        }
    }

    /// Week info populated from an explicit week name entry.
    pub fn from_name(number: u32, name: &WeekName) -> Self {
        Self {
            number,
            label: name.name.clone(),
            abbreviation: name.abbreviation.clone(),
            prefix: name.prefix.clone(),
            suffix: name.suffix.clone(),
            description: name.description.clone(),
        }
    }
}
