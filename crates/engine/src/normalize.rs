//! Definition normalization
//!
//! Documents arrive pre-validated in the happy path, but the engine must
//! answer deterministically for whatever it is handed. Normalization runs
//! once at construction and substitutes Gregorian-shaped defaults for
//! missing or unusable sections, warning as it goes. After it runs, the
//! rest of the engine can rely on: months and weekdays are non-empty,
//! every month and intercalary group spans at least one day, time units
//! are positive, and a leap-year section is present.

use almanack_domain::{defaults, CalendarDefinition, TimeUnits, WeekConfig};

use crate::diagnostics::{FallbackCause, FallbackFlags};

pub(crate) fn normalize(
    calendar: CalendarDefinition,
    warnings: &FallbackFlags,
) -> CalendarDefinition {
    let mut calendar = calendar;

    if calendar.months().is_empty() {
        if warnings.first(FallbackCause::MissingMonths) {
            tracing::warn!(
                calendar = %calendar.id(),
                "calendar defines no months; substituting Gregorian months"
            );
        }
        calendar = calendar.with_months(defaults::gregorian_months());
    } else if calendar.months().iter().any(|m| m.days == 0) {
        if warnings.first(FallbackCause::ZeroLengthMonth) {
            tracing::warn!(
                calendar = %calendar.id(),
                "calendar has zero-length months; clamping them to one day"
            );
        }
        let months = calendar
            .months()
            .iter()
            .cloned()
            .map(|mut m| {
                m.days = m.days.max(1);
                m
            })
            .collect();
        calendar = calendar.with_months(months);
    }

    if calendar.weekdays().is_empty() {
        if warnings.first(FallbackCause::MissingWeekdays) {
            tracing::warn!(
                calendar = %calendar.id(),
                "calendar defines no weekdays; substituting the seven-day week"
            );
        }
        calendar = calendar.with_weekdays(defaults::gregorian_weekdays());
    }

    match calendar.time() {
        Some(units) if units.is_usable() => {}
        Some(_) => {
            if warnings.first(FallbackCause::UnusableTimeUnits) {
                tracing::warn!(
                    calendar = %calendar.id(),
                    "calendar has zero time units; substituting 24-hour days"
                );
            }
            calendar = calendar.with_time(TimeUnits::default());
        }
        None => {
            if warnings.first(FallbackCause::UnusableTimeUnits) {
                tracing::warn!(
                    calendar = %calendar.id(),
                    "calendar defines no time units; substituting 24-hour days"
                );
            }
            calendar = calendar.with_time(TimeUnits::default());
        }
    }

    if calendar.leap_year().is_none() {
        if warnings.first(FallbackCause::MissingLeapYear) {
            tracing::warn!(
                calendar = %calendar.id(),
                "calendar defines no leap-year section; substituting the Gregorian rule"
            );
        }
        calendar = calendar.with_leap_year(defaults::gregorian_leap_year());
    }

    if calendar.intercalary().iter().any(|d| d.days == 0) {
        if warnings.first(FallbackCause::ZeroLengthIntercalary) {
            tracing::warn!(
                calendar = %calendar.id(),
                "calendar has zero-length intercalary groups; clamping them to one day"
            );
        }
        let intercalary = calendar
            .intercalary()
            .iter()
            .cloned()
            .map(|mut d| {
                d.days = d.days.max(1);
                d
            })
            .collect();
        calendar = calendar.with_intercalary(intercalary);
    }

    for day in calendar.intercalary() {
        if calendar.month_index(day.attachment.month_name()).is_none()
            && warnings.first(FallbackCause::DanglingIntercalary)
        {
            tracing::warn!(
                calendar = %calendar.id(),
                intercalary = %day.name,
                month = %day.attachment.month_name(),
                "intercalary day is attached to an unknown month and will never occur"
            );
        }
    }

    if let Some(weeks) = calendar.weeks() {
        if weeks.days_per_week == Some(0) {
            if warnings.first(FallbackCause::InvalidDaysPerWeek) {
                tracing::warn!(
                    calendar = %calendar.id(),
                    "daysPerWeek is zero; falling back to the weekday cycle length"
                );
            }
            let weeks = WeekConfig {
                days_per_week: None,
                ..weeks.clone()
            };
            calendar = calendar.with_weeks(weeks);
        }
    }

    calendar
}
