//! Year numbering and display configuration

use serde::{Deserialize, Serialize};

/// How a calendar numbers and displays its years.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearConfig {
    /// Year containing world time zero.
    #[serde(default)]
    pub epoch: i64,
    /// Weekday index of the first counting day of the epoch year. Anchors
    /// the entire weekday cycle.
    #[serde(default)]
    pub start_day: u32,
    /// Text placed before the year number, e.g. "Year ".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Text placed after the year number, e.g. " DR".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suffix: String,
}

impl YearConfig {
    pub fn new(epoch: i64, start_day: u32) -> Self {
        Self {
            epoch,
            start_day,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Year number wrapped in the configured prefix and suffix.
    pub fn display_year(&self, year: i64) -> String {
        format!("{}{}{}", self.prefix, year, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = YearConfig::default();
        assert_eq!(config.epoch, 0);
        assert_eq!(config.start_day, 0);
        assert_eq!(config.display_year(1492), "1492");
    }

    #[test]
    fn test_display_year_with_affixes() {
        let config = YearConfig::new(0, 0).with_suffix(" DR");
        assert_eq!(config.display_year(1492), "1492 DR");

        let config = YearConfig::new(0, 0).with_prefix("Year ").with_suffix(" AV");
        assert_eq!(config.display_year(-12), "Year -12 AV");
    }

    #[test]
    fn test_empty_affixes_skipped_in_serialization() {
        let json = serde_json::to_value(YearConfig::new(2000, 6)).unwrap();
        assert!(json.get("prefix").is_none());
        assert!(json.get("suffix").is_none());
        assert_eq!(json["epoch"], 2000);
    }
}
