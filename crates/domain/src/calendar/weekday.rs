//! Weekday definitions

use serde::{Deserialize, Serialize};

/// A named day in the repeating weekday cycle.
///
/// The cycle length is simply the number of weekday definitions in the
/// calendar; nothing ties it to seven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WeekdayDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            description: None,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Display abbreviation, falling back to the first two characters of the name.
    pub fn short_name(&self) -> String {
        match &self.abbreviation {
            Some(abbr) => abbr.clone(),
            None => self.name.chars().take(2).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_weekday() {
        let day = WeekdayDefinition::new("Sunday");
        assert_eq!(day.name, "Sunday");
        assert!(day.abbreviation.is_none());
    }

    #[test]
    fn test_short_name() {
        let day = WeekdayDefinition::new("Sunday").with_abbreviation("Sun");
        assert_eq!(day.short_name(), "Sun");
        assert_eq!(WeekdayDefinition::new("Moonday").short_name(), "Mo");
    }

    #[test]
    fn test_deserialize_minimal() {
        let day: WeekdayDefinition = serde_json::from_str(r#"{"name": "First-day"}"#).unwrap();
        assert_eq!(day.name, "First-day");
    }
}
