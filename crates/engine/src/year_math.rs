//! Precomputed per-year aggregates
//!
//! Built once per engine from the normalized definition. A year's length
//! only depends on whether it is a leap year, so two totals (plus two
//! weekday-counting totals) are enough to position any year on the day
//! line in closed form. Locating the year containing a day index starts
//! from an average-length estimate and corrects with exact comparisons,
//! so the result is always exact and never scans year by year.

use almanack_domain::{CalendarDefinition, LeapRule};

use crate::leap::{self, LeapSpec};

#[derive(Debug)]
pub(crate) struct YearMath {
    pub seconds_per_day: i64,
    pub seconds_per_hour: i64,
    pub seconds_per_minute: i64,
    /// Days in a common year, intercalary included.
    pub common_year_days: i64,
    /// Days in a leap year, intercalary included.
    pub leap_year_days: i64,
    /// Days in a common year that advance the weekday cycle.
    pub common_counting_days: i64,
    /// Days in a leap year that advance the weekday cycle.
    pub leap_counting_days: i64,
    avg_year_days: f64,
    rule: LeapRule,
    epoch: i64,
}

impl YearMath {
    pub fn build(calendar: &CalendarDefinition, spec: &LeapSpec) -> Self {
        let mut common_months = 0i64;
        let mut leap_months = 0i64;
        for (i, month) in calendar.months().iter().enumerate() {
            let base = i64::from(month.days);
            common_months += base;
            leap_months += if spec.month_index == Some(i as u32 + 1) {
                // A leap adjustment may not empty a month
                (base + spec.extra_days).max(1)
            } else {
                base
            };
        }

        let mut common_intercalary = 0i64;
        let mut all_intercalary = 0i64;
        let mut common_counting_intercalary = 0i64;
        let mut all_counting_intercalary = 0i64;
        for day in calendar.intercalary() {
            // Groups attached to unknown months never occur
            if calendar.month_index(day.attachment.month_name()).is_none() {
                continue;
            }
            let span = i64::from(day.days);
            all_intercalary += span;
            if day.counts_for_weekdays {
                all_counting_intercalary += span;
            }
            if !day.leap_year_only {
                common_intercalary += span;
                if day.counts_for_weekdays {
                    common_counting_intercalary += span;
                }
            }
        }

        let units = calendar.time().copied().unwrap_or_default();
        let rule = spec.rule;
        let common_year_days = common_months + common_intercalary;
        let leap_year_days = leap_months + all_intercalary;
        let fraction = leap::leap_fraction(rule);
        let avg_year_days = common_year_days as f64
            + fraction * (leap_year_days - common_year_days) as f64;

        Self {
            seconds_per_day: units.seconds_per_day(),
            seconds_per_hour: units.seconds_per_hour(),
            seconds_per_minute: units.seconds_per_minute(),
            common_year_days,
            leap_year_days,
            common_counting_days: common_months + common_counting_intercalary,
            leap_counting_days: leap_months + all_counting_intercalary,
            avg_year_days,
            rule,
            epoch: calendar.year().epoch,
        }
    }

    pub fn is_leap_year(&self, year: i64) -> bool {
        leap::is_leap_year(self.rule, year)
    }

    /// Total days in the given year.
    pub fn year_days(&self, year: i64) -> i64 {
        if self.is_leap_year(year) {
            self.leap_year_days
        } else {
            self.common_year_days
        }
    }

    /// Days in the given year that advance the weekday cycle.
    pub fn counting_year_days(&self, year: i64) -> i64 {
        if self.is_leap_year(year) {
            self.leap_counting_days
        } else {
            self.common_counting_days
        }
    }

    /// Day index of the first day of `year`, relative to the epoch year's
    /// first day. Negative before the epoch.
    pub fn days_from_epoch(&self, year: i64) -> i64 {
        self.signed_span(self.epoch, year, self.common_year_days, self.leap_year_days)
    }

    /// Weekday-counting days between the epoch year's first day and the
    /// first day of `year`.
    pub fn counting_days_from_epoch(&self, year: i64) -> i64 {
        self.signed_span(
            self.epoch,
            year,
            self.common_counting_days,
            self.leap_counting_days,
        )
    }

    /// Year containing the given day index, and the 0-based day offset
    /// within that year.
    pub fn year_for_day(&self, day_index: i64) -> (i64, i64) {
        let mut year = self
            .epoch
            .saturating_add((day_index as f64 / self.avg_year_days).floor() as i64);
        loop {
            let start = self.days_from_epoch(year);
            if day_index < start {
                year -= 1;
                continue;
            }
            let next = self.days_from_epoch(year.saturating_add(1));
            if day_index >= next && next > start {
                year += 1;
                continue;
            }
            return (year, day_index - start);
        }
    }

    fn signed_span(&self, from: i64, to: i64, common: i64, leap: i64) -> i64 {
        if from <= to {
            self.span(from, to, common, leap)
        } else {
            -self.span(to, from, common, leap)
        }
    }

    /// Total over `[from, to)` of a per-year quantity that takes the value
    /// `common` in common years and `leap` in leap years.
    fn span(&self, from: i64, to: i64, common: i64, leap: i64) -> i64 {
        let years = to.saturating_sub(from);
        let leaps = leap::leap_years_in(self.rule, from, to);
        years
            .saturating_mul(common)
            .saturating_add(leaps.saturating_mul(leap - common))
    }
}
