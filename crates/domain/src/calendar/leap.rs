//! Leap-year rule configuration and resolution
//!
//! Documents carry a [`LeapYearConfig`] as written by the calendar author.
//! At engine startup the config is resolved once into a [`LeapRule`], a
//! closed set of rules the arithmetic layer can evaluate without looking
//! at strings again. Unknown or incomplete configs resolve to
//! [`LeapRule::Never`] and report a [`LeapRuleDefect`] so the caller can
//! log it.

use serde::{Deserialize, Serialize};

/// Rule name as it appears in calendar documents.
///
/// Future rule names deserialize to `Unknown` instead of failing, so a
/// newer document still loads on an older engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapRuleKind {
    #[default]
    None,
    Gregorian,
    Custom,
    #[serde(other)]
    Unknown,
}

/// Leap-year section of a calendar document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeapYearConfig {
    #[serde(default)]
    pub rule: LeapRuleKind,
    /// Cycle length for `custom` rules. Required for `custom`, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Shifts which years in a `custom` cycle are leap years.
    #[serde(default)]
    pub offset: i64,
    /// Name of the month that receives `extra_days` in leap years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// Days added to (or removed from, when negative) the leap month.
    #[serde(default = "default_extra_days")]
    pub extra_days: i64,
}

fn default_extra_days() -> i64 {
    1
}

impl Default for LeapYearConfig {
    fn default() -> Self {
        Self {
            rule: LeapRuleKind::None,
            interval: None,
            offset: 0,
            month: None,
            extra_days: 1,
        }
    }
}

impl LeapYearConfig {
    pub fn never() -> Self {
        Self::default()
    }

    pub fn gregorian(month: impl Into<String>) -> Self {
        Self {
            rule: LeapRuleKind::Gregorian,
            month: Some(month.into()),
            ..Self::default()
        }
    }

    pub fn custom(interval: u32, offset: i64) -> Self {
        Self {
            rule: LeapRuleKind::Custom,
            interval: Some(interval),
            offset,
            ..Self::default()
        }
    }

    pub fn with_month(mut self, month: impl Into<String>, extra_days: i64) -> Self {
        self.month = Some(month.into());
        self.extra_days = extra_days;
        self
    }

    /// Resolve the document config into an evaluable rule.
    ///
    /// Never fails: defective configs resolve to [`LeapRule::Never`] and
    /// the defect is returned alongside for the caller to report.
    pub fn resolve(&self) -> (LeapRule, Option<LeapRuleDefect>) {
        match self.rule {
            LeapRuleKind::None => (LeapRule::Never, None),
            LeapRuleKind::Gregorian => (LeapRule::Gregorian, None),
            LeapRuleKind::Custom => match self.interval {
                Some(0) => (LeapRule::Never, Some(LeapRuleDefect::ZeroInterval)),
                Some(interval) => (
                    LeapRule::Periodic {
                        interval,
                        offset: self.offset,
                    },
                    None,
                ),
                None => (LeapRule::Never, Some(LeapRuleDefect::MissingInterval)),
            },
            LeapRuleKind::Unknown => (LeapRule::Never, Some(LeapRuleDefect::UnknownRule)),
        }
    }
}

/// Resolved, evaluable leap rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeapRule {
    /// No year is ever a leap year.
    Never,
    /// Divisible by 4, except centuries unless divisible by 400.
    Gregorian,
    /// Every `interval` years, shifted by `offset`.
    Periodic { interval: u32, offset: i64 },
}

/// Why a config failed to resolve into a real rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeapRuleDefect {
    UnknownRule,
    MissingInterval,
    ZeroInterval,
}

impl std::fmt::Display for LeapRuleDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRule => write!(f, "unrecognized leap-year rule"),
            Self::MissingInterval => write!(f, "custom leap-year rule without an interval"),
            Self::ZeroInterval => write!(f, "custom leap-year rule with a zero interval"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod leap_rule_kind {
        use super::*;

        #[test]
        fn test_deserialize_known_kinds() {
            assert_eq!(
                serde_json::from_str::<LeapRuleKind>("\"none\"").unwrap(),
                LeapRuleKind::None
            );
            assert_eq!(
                serde_json::from_str::<LeapRuleKind>("\"gregorian\"").unwrap(),
                LeapRuleKind::Gregorian
            );
            assert_eq!(
                serde_json::from_str::<LeapRuleKind>("\"custom\"").unwrap(),
                LeapRuleKind::Custom
            );
        }

        #[test]
        fn test_unrecognized_kind_maps_to_unknown() {
            let kind: LeapRuleKind = serde_json::from_str("\"metonic\"").unwrap();
            assert_eq!(kind, LeapRuleKind::Unknown);
        }
    }

    mod resolution {
        use super::*;

        #[test]
        fn test_none_resolves_to_never() {
            let (rule, defect) = LeapYearConfig::never().resolve();
            assert_eq!(rule, LeapRule::Never);
            assert!(defect.is_none());
        }

        #[test]
        fn test_gregorian_resolves() {
            let (rule, defect) = LeapYearConfig::gregorian("February").resolve();
            assert_eq!(rule, LeapRule::Gregorian);
            assert!(defect.is_none());
        }

        #[test]
        fn test_custom_resolves_to_periodic() {
            let (rule, defect) = LeapYearConfig::custom(4, 1).resolve();
            assert_eq!(
                rule,
                LeapRule::Periodic {
                    interval: 4,
                    offset: 1
                }
            );
            assert!(defect.is_none());
        }

        #[test]
        fn test_custom_without_interval_degrades() {
            let config = LeapYearConfig {
                rule: LeapRuleKind::Custom,
                ..LeapYearConfig::default()
            };
            let (rule, defect) = config.resolve();
            assert_eq!(rule, LeapRule::Never);
            assert_eq!(defect, Some(LeapRuleDefect::MissingInterval));
        }

        #[test]
        fn test_custom_with_zero_interval_degrades() {
            let (rule, defect) = LeapYearConfig::custom(0, 0).resolve();
            assert_eq!(rule, LeapRule::Never);
            assert_eq!(defect, Some(LeapRuleDefect::ZeroInterval));
        }

        #[test]
        fn test_unknown_rule_degrades() {
            let config: LeapYearConfig =
                serde_json::from_str(r#"{"rule": "lunisolar"}"#).unwrap();
            let (rule, defect) = config.resolve();
            assert_eq!(rule, LeapRule::Never);
            assert_eq!(defect, Some(LeapRuleDefect::UnknownRule));
        }
    }

    mod config_serde {
        use super::*;

        #[test]
        fn test_defaults_fill_missing_fields() {
            let config: LeapYearConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(config.rule, LeapRuleKind::None);
            assert_eq!(config.interval, None);
            assert_eq!(config.offset, 0);
            assert_eq!(config.extra_days, 1);
        }

        #[test]
        fn test_full_document_section() {
            let config: LeapYearConfig = serde_json::from_str(
                r#"{"rule": "custom", "interval": 8, "offset": 2, "month": "Thaw", "extraDays": 2}"#,
            )
            .unwrap();
            assert_eq!(config.rule, LeapRuleKind::Custom);
            assert_eq!(config.interval, Some(8));
            assert_eq!(config.offset, 2);
            assert_eq!(config.month.as_deref(), Some("Thaw"));
            assert_eq!(config.extra_days, 2);
        }
    }
}
