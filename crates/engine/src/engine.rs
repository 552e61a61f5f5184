//! Engine construction and structural queries

use almanack_domain::{CalendarDefinition, IntercalaryDayDefinition};

use crate::diagnostics::{FallbackCause, FallbackFlags};
use crate::leap::{self, LeapSpec};
use crate::normalize::normalize;
use crate::segments::month_span;
use crate::year_math::YearMath;

/// Calendar arithmetic over one calendar definition.
///
/// Construction normalizes the definition, resolves the leap rule, and
/// precomputes the per-year aggregates every query runs on. After that
/// the engine is immutable and shares freely across threads.
///
/// Queries never fail. Malformed input degrades to a documented fallback
/// and the first occurrence of each defect is logged as a warning.
#[derive(Debug)]
pub struct CalendarEngine {
    pub(crate) calendar: CalendarDefinition,
    pub(crate) leap: LeapSpec,
    pub(crate) math: YearMath,
    pub(crate) warnings: FallbackFlags,
}

impl CalendarEngine {
    pub fn new(calendar: CalendarDefinition) -> Self {
        let warnings = FallbackFlags::new();
        let calendar = normalize(calendar, &warnings);
        let leap = LeapSpec::resolve(&calendar, &warnings);
        let math = YearMath::build(&calendar, &leap);
        Self {
            calendar,
            leap,
            math,
            warnings,
        }
    }

    /// The normalized definition this engine answers for.
    pub fn calendar(&self) -> &CalendarDefinition {
        &self.calendar
    }

    pub fn is_leap_year(&self, year: i64) -> bool {
        leap::is_leap_year(self.leap.rule, year)
    }

    /// Total days in the given year: month days plus every intercalary
    /// day present that year.
    pub fn year_length(&self, year: i64) -> u32 {
        u32::try_from(self.math.year_days(year)).unwrap_or(u32::MAX)
    }

    /// Days in the given month of the given year, leap stretch applied.
    /// Out-of-range month indexes clamp to the nearest valid month.
    pub fn month_length(&self, month: u32, year: i64) -> u32 {
        let month = self.clamp_month(month);
        let span = month_span(&self.calendar, &self.leap, self.is_leap_year(year), month);
        u32::try_from(span).unwrap_or(u32::MAX)
    }

    /// Lengths of every month in the given year, in month order.
    pub fn month_lengths(&self, year: i64) -> Vec<u32> {
        let is_leap = self.is_leap_year(year);
        (1..=self.calendar.months_in_year())
            .map(|month| {
                u32::try_from(month_span(&self.calendar, &self.leap, is_leap, month))
                    .unwrap_or(u32::MAX)
            })
            .collect()
    }

    /// Intercalary groups that fall before the given month in the given
    /// year, honoring leap-year-only flags, in definition order.
    pub fn intercalary_days_before_month(
        &self,
        year: i64,
        month: u32,
    ) -> Vec<&IntercalaryDayDefinition> {
        let is_leap = self.is_leap_year(year);
        self.calendar
            .intercalary_before_month(self.clamp_month(month))
            .filter(|d| d.applies_in(is_leap))
            .collect()
    }

    /// Intercalary groups that fall after the given month in the given
    /// year, honoring leap-year-only flags, in definition order.
    pub fn intercalary_days_after_month(
        &self,
        year: i64,
        month: u32,
    ) -> Vec<&IntercalaryDayDefinition> {
        let is_leap = self.is_leap_year(year);
        self.calendar
            .intercalary_after_month(self.clamp_month(month))
            .filter(|d| d.applies_in(is_leap))
            .collect()
    }

    /// Clamp a 1-based month index into the valid range, warning once.
    pub(crate) fn clamp_month(&self, month: u32) -> u32 {
        let count = self.calendar.months_in_year();
        if (1..=count).contains(&month) {
            return month;
        }
        if self.warnings.first(FallbackCause::MonthOutOfRange) {
            tracing::warn!(
                calendar = %self.calendar.id(),
                month,
                "month index out of range; clamping to the nearest month"
            );
        }
        month.clamp(1, count)
    }
}
