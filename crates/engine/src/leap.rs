//! Leap-year evaluation
//!
//! The document-level [`LeapYearConfig`] is resolved once at construction
//! into a [`LeapSpec`]: an evaluable rule plus the pre-resolved index of
//! the month that stretches in leap years. Everything here is closed-form
//! so counting leap years across millennia costs the same as across one.

use almanack_domain::{CalendarDefinition, LeapRule};

use crate::diagnostics::{FallbackCause, FallbackFlags};

/// Resolved leap behavior for one calendar.
#[derive(Debug)]
pub(crate) struct LeapSpec {
    pub rule: LeapRule,
    /// 1-based index of the month receiving `extra_days`, when it exists.
    pub month_index: Option<u32>,
    pub extra_days: i64,
}

impl LeapSpec {
    /// Resolve from a normalized definition, degrading defective configs
    /// to "no leap years" with a warning.
    pub fn resolve(calendar: &CalendarDefinition, warnings: &FallbackFlags) -> Self {
        let Some(config) = calendar.leap_year() else {
            // Normalization always supplies a section; stay safe anyway.
            return Self {
                rule: LeapRule::Never,
                month_index: None,
                extra_days: 0,
            };
        };

        let (rule, defect) = config.resolve();
        if let Some(defect) = defect {
            if warnings.first(FallbackCause::LeapRuleDefect) {
                tracing::warn!(
                    calendar = %calendar.id(),
                    "{defect}; treating every year as common"
                );
            }
        }

        let month_index = match &config.month {
            Some(name) => {
                let index = calendar.month_index(name);
                if index.is_none() && warnings.first(FallbackCause::UnknownLeapMonth) {
                    tracing::warn!(
                        calendar = %calendar.id(),
                        month = %name,
                        "leap-year config names an unknown month; no month will stretch"
                    );
                }
                index
            }
            None => None,
        };

        Self {
            rule,
            month_index,
            extra_days: config.extra_days,
        }
    }
}

/// Whether `year` is a leap year under `rule`.
pub(crate) fn is_leap_year(rule: LeapRule, year: i64) -> bool {
    match rule {
        LeapRule::Never => false,
        LeapRule::Gregorian => (year % 4 == 0 && year % 100 != 0) || year % 400 == 0,
        LeapRule::Periodic { interval, offset } => {
            (year - offset).rem_euclid(i64::from(interval)) == 0
        }
    }
}

/// Number of leap years in the half-open range `[from, to)`.
pub(crate) fn leap_years_in(rule: LeapRule, from: i64, to: i64) -> i64 {
    if to <= from {
        return 0;
    }
    match rule {
        LeapRule::Never => 0,
        LeapRule::Gregorian => {
            multiples_in(from, to, 4) - multiples_in(from, to, 100) + multiples_in(from, to, 400)
        }
        LeapRule::Periodic { interval, offset } => multiples_in(
            from.saturating_sub(offset),
            to.saturating_sub(offset),
            i64::from(interval),
        ),
    }
}

/// Fraction of years that are leap years, for year-length estimation.
pub(crate) fn leap_fraction(rule: LeapRule) -> f64 {
    match rule {
        LeapRule::Never => 0.0,
        LeapRule::Gregorian => 97.0 / 400.0,
        LeapRule::Periodic { interval, .. } => 1.0 / f64::from(interval),
    }
}

/// Count of multiples of `step` in the half-open range `[from, to)`.
fn multiples_in(from: i64, to: i64, step: i64) -> i64 {
    if to <= from {
        return 0;
    }
    (to.saturating_sub(1)).div_euclid(step) - (from.saturating_sub(1)).div_euclid(step)
}
