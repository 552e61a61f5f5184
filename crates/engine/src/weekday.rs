//! Weekday cycle arithmetic
//!
//! The cycle advances one step per counting day and never resets at
//! month or year boundaries. Intercalary days outside the cycle leave
//! it untouched, so a ten-day week can stay aligned with month starts
//! across festivals.

use almanack_domain::CalendarDate;

use crate::engine::CalendarEngine;

impl CalendarEngine {
    /// Weekday index for a regular day of a month.
    pub fn weekday(&self, year: i64, month: u32, day: u32) -> Option<u32> {
        self.weekday_of(&CalendarDate::new(year, month, day))
    }

    /// Weekday index for a full date.
    ///
    /// Returns `None` when the date falls on an intercalary day that
    /// does not count for weekdays.
    pub fn weekday_of(&self, date: &CalendarDate) -> Option<u32> {
        let position = self.resolve_day_position(date);
        position
            .counts_for_weekdays
            .then(|| self.weekday_at(date.year, position.counting_before))
    }

    /// Weekday reached after `counting_days` cycle-advancing days into
    /// `year`.
    pub(crate) fn weekday_at(&self, year: i64, counting_days: i64) -> u32 {
        let cycle = i64::from(self.calendar.weekday_cycle_len());
        i64::from(self.calendar.year().start_day)
            .saturating_add(self.math.counting_days_from_epoch(year))
            .saturating_add(counting_days)
            .rem_euclid(cycle) as u32
    }
}
