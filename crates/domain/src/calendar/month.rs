//! Month definitions

use serde::{Deserialize, Serialize};

/// A single month in a calendar year.
///
/// `days` is the base length in a common year; leap-year adjustments are
/// described by [`LeapYearConfig`](super::LeapYearConfig), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    pub days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MonthDefinition {
    pub fn new(name: impl Into<String>, days: u32) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            days,
            description: None,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Display abbreviation, falling back to the first three characters of the name.
    pub fn short_name(&self) -> String {
        match &self.abbreviation {
            Some(abbr) => abbr.clone(),
            None => self.name.chars().take(3).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_month() {
        let month = MonthDefinition::new("January", 31);
        assert_eq!(month.name, "January");
        assert_eq!(month.days, 31);
        assert!(month.abbreviation.is_none());
    }

    #[test]
    fn test_short_name_prefers_abbreviation() {
        let month = MonthDefinition::new("January", 31).with_abbreviation("Jan");
        assert_eq!(month.short_name(), "Jan");
    }

    #[test]
    fn test_short_name_falls_back_to_prefix() {
        let month = MonthDefinition::new("Hammer", 30);
        assert_eq!(month.short_name(), "Ham");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let month = MonthDefinition::new("January", 31).with_abbreviation("Jan");
        let json = serde_json::to_value(&month).unwrap();
        assert_eq!(json["name"], "January");
        assert_eq!(json["abbreviation"], "Jan");
        assert_eq!(json["days"], 31);
    }

    #[test]
    fn test_deserialize_minimal() {
        let month: MonthDefinition =
            serde_json::from_str(r#"{"name": "Hammer", "days": 30}"#).unwrap();
        assert_eq!(month.name, "Hammer");
        assert_eq!(month.days, 30);
        assert!(month.abbreviation.is_none());
        assert!(month.description.is_none());
    }
}
