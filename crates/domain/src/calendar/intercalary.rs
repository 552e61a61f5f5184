//! Intercalary day definitions
//!
//! Intercalary days are festival days that sit between months rather than
//! inside them: Midwinter between Hammer and Alturiak, leap-only days like
//! Shieldmeet, multi-day festivals. They belong to a year but to no month,
//! and may stand outside the weekday cycle entirely.

use serde::{Deserialize, Serialize};

/// Where an intercalary group sits relative to its anchor month.
///
/// Serializes as exactly one of `{"after": "<month>"}` or
/// `{"before": "<month>"}`; a document carrying both keys is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntercalaryAttachment {
    #[serde(rename = "after")]
    After(String),
    #[serde(rename = "before")]
    Before(String),
}

impl IntercalaryAttachment {
    /// Name of the month this group is anchored to.
    pub fn month_name(&self) -> &str {
        match self {
            Self::After(name) | Self::Before(name) => name,
        }
    }

    pub fn is_after(&self) -> bool {
        matches!(self, Self::After(_))
    }

    pub fn is_before(&self) -> bool {
        matches!(self, Self::Before(_))
    }
}

/// A named group of one or more intercalary days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntercalaryDayDefinition {
    pub name: String,
    #[serde(flatten)]
    pub attachment: IntercalaryAttachment,
    /// Consecutive days in the group. Always at least 1.
    #[serde(default = "default_days")]
    pub days: u32,
    /// Present only in leap years of the calendar's leap rule.
    #[serde(default)]
    pub leap_year_only: bool,
    /// Whether these days advance the weekday cycle. Festivals that stand
    /// outside the week set this to false.
    #[serde(default = "default_counts_for_weekdays")]
    pub counts_for_weekdays: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_days() -> u32 {
    1
}

fn default_counts_for_weekdays() -> bool {
    true
}

impl IntercalaryDayDefinition {
    /// Single day after the named month.
    pub fn after(name: impl Into<String>, month: impl Into<String>) -> Self {
        Self::new(name, IntercalaryAttachment::After(month.into()))
    }

    /// Single day before the named month.
    pub fn before(name: impl Into<String>, month: impl Into<String>) -> Self {
        Self::new(name, IntercalaryAttachment::Before(month.into()))
    }

    fn new(name: impl Into<String>, attachment: IntercalaryAttachment) -> Self {
        Self {
            name: name.into(),
            attachment,
            days: 1,
            leap_year_only: false,
            counts_for_weekdays: true,
            description: None,
        }
    }

    /// Extend the group to `days` consecutive days.
    pub fn spanning(mut self, days: u32) -> Self {
        self.days = days.max(1);
        self
    }

    /// Only present in leap years.
    pub fn only_in_leap_years(mut self) -> Self {
        self.leap_year_only = true;
        self
    }

    /// Days in this group do not advance the weekday cycle.
    pub fn outside_weekday_cycle(mut self) -> Self {
        self.counts_for_weekdays = false;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this group exists in the given year, given the calendar's
    /// leap verdict for that year.
    pub fn applies_in(&self, is_leap_year: bool) -> bool {
        !self.leap_year_only || is_leap_year
    }
}
