//! Season definitions

use serde::{Deserialize, Serialize};

/// A season starting at a fixed month and day, running until the next
/// season starts. The latest-starting season wraps across the year
/// boundary into the new year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDefinition {
    pub name: String,
    /// 1-based month index.
    pub start_month: u32,
    /// 1-based day of month.
    #[serde(default = "default_start_day")]
    pub start_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn default_start_day() -> u32 {
    1
}

impl SeasonDefinition {
    pub fn new(name: impl Into<String>, start_month: u32, start_day: u32) -> Self {
        Self {
            name: name.into(),
            start_month,
            start_day,
            icon: None,
            color: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Start position as a (month, day) pair for ordering comparisons.
    pub fn start_position(&self) -> (u32, u32) {
        (self.start_month, self.start_day)
    }
}
