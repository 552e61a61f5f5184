//! Date and world-time conversion
//!
//! Both directions walk the same year layout, so they are exact inverses:
//! converting a date to world time and back yields the identical date, at
//! any distance from the epoch. Conversions are total; malformed dates
//! resolve to the start of the year instead of failing.

use almanack_domain::{CalendarDate, ClockTime, WorldTime};

use crate::diagnostics::FallbackCause;
use crate::engine::CalendarEngine;
use crate::segments::{year_segments, Segment, SegmentKind};

/// Resolved position of a date within its year.
pub(crate) struct DayPosition {
    /// 0-based day offset from the year's first day.
    pub day_of_year: i64,
    /// Weekday-counting days in the year before this day.
    pub counting_before: i64,
    /// Whether the day itself advances the weekday cycle.
    pub counts_for_weekdays: bool,
}

impl DayPosition {
    fn start_of_year() -> Self {
        Self {
            day_of_year: 0,
            counting_before: 0,
            counts_for_weekdays: true,
        }
    }
}

impl CalendarEngine {
    /// Seconds since the world epoch for the given date.
    ///
    /// Intercalary dates are located by group name; the anchor month is
    /// only used if the name cannot be found in the date's year.
    pub fn date_to_world_time(&self, date: &CalendarDate) -> WorldTime {
        let position = self.resolve_day_position(date);
        let day_index = self
            .math
            .days_from_epoch(date.year)
            .saturating_add(position.day_of_year);
        let seconds = day_index
            .saturating_mul(self.math.seconds_per_day)
            .saturating_add(self.second_of_day(date.time_or_midnight()));
        WorldTime::from_seconds(seconds)
    }

    /// The calendar date containing the given instant.
    ///
    /// Works for any instant, before or after the epoch. The returned
    /// date always carries a time of day, and a weekday exactly when the
    /// day is part of the weekday cycle.
    pub fn world_time_to_date(&self, time: WorldTime) -> CalendarDate {
        let seconds = time.as_seconds();
        let day_index = seconds.div_euclid(self.math.seconds_per_day);
        let second_of_day = seconds.rem_euclid(self.math.seconds_per_day);
        let (year, day_of_year) = self.math.year_for_day(day_index);
        let is_leap = self.is_leap_year(year);

        let mut remaining = day_of_year;
        let mut counting = 0i64;
        for segment in year_segments(&self.calendar, &self.leap, is_leap) {
            if remaining < segment.length {
                return self.materialize(year, &segment, remaining, counting, second_of_day);
            }
            remaining -= segment.length;
            if segment.counts_for_weekdays {
                counting += segment.length;
            }
        }

        // Year totals equal the segment sum, so the loop always returns.
        CalendarDate::new(year, 1, 1)
            .with_weekday(self.weekday_at(year, 0))
            .with_time(self.clock_from_second_of_day(second_of_day))
    }

    /// Day index of a date relative to the epoch year's first day.
    pub(crate) fn day_index_of(&self, date: &CalendarDate) -> i64 {
        self.math
            .days_from_epoch(date.year)
            .saturating_add(self.resolve_day_position(date).day_of_year)
    }

    pub(crate) fn resolve_day_position(&self, date: &CalendarDate) -> DayPosition {
        let is_leap = self.is_leap_year(date.year);
        if let Some(name) = &date.intercalary {
            if let Some(position) = self.locate_intercalary(name, date.day, is_leap) {
                return position;
            }
            if self.warnings.first(FallbackCause::UnknownIntercalary) {
                tracing::warn!(
                    calendar = %self.calendar.id(),
                    intercalary = %name,
                    year = date.year,
                    "intercalary day not present in year; treating date as a regular day"
                );
            }
        }
        self.locate_regular(date.month, date.day, is_leap)
    }

    fn locate_intercalary(&self, name: &str, day: u32, is_leap: bool) -> Option<DayPosition> {
        let mut day_of_year = 0i64;
        let mut counting = 0i64;
        for segment in year_segments(&self.calendar, &self.leap, is_leap) {
            if let SegmentKind::Intercalary(def) = segment.kind {
                if def.name == name {
                    if day < 1 || i64::from(day) > segment.length {
                        if self.warnings.first(FallbackCause::DayOutOfRange) {
                            tracing::warn!(
                                calendar = %self.calendar.id(),
                                intercalary = %name,
                                day,
                                "day outside intercalary group; using the start of the year"
                            );
                        }
                        return Some(DayPosition::start_of_year());
                    }
                    let offset = i64::from(day) - 1;
                    let counted_offset = if segment.counts_for_weekdays { offset } else { 0 };
                    return Some(DayPosition {
                        day_of_year: day_of_year + offset,
                        counting_before: counting + counted_offset,
                        counts_for_weekdays: segment.counts_for_weekdays,
                    });
                }
            }
            day_of_year += segment.length;
            if segment.counts_for_weekdays {
                counting += segment.length;
            }
        }
        None
    }

    fn locate_regular(&self, month: u32, day: u32, is_leap: bool) -> DayPosition {
        let mut day_of_year = 0i64;
        let mut counting = 0i64;
        for segment in year_segments(&self.calendar, &self.leap, is_leap) {
            if let SegmentKind::Month(index) = segment.kind {
                if index == month {
                    if day < 1 || i64::from(day) > segment.length {
                        if self.warnings.first(FallbackCause::DayOutOfRange) {
                            tracing::warn!(
                                calendar = %self.calendar.id(),
                                month,
                                day,
                                "day outside month; using the start of the year"
                            );
                        }
                        return DayPosition::start_of_year();
                    }
                    let offset = i64::from(day) - 1;
                    return DayPosition {
                        day_of_year: day_of_year + offset,
                        counting_before: counting + offset,
                        counts_for_weekdays: true,
                    };
                }
            }
            day_of_year += segment.length;
            if segment.counts_for_weekdays {
                counting += segment.length;
            }
        }

        if self.warnings.first(FallbackCause::MonthOutOfRange) {
            tracing::warn!(
                calendar = %self.calendar.id(),
                month,
                "month index out of range; using the start of the year"
            );
        }
        DayPosition::start_of_year()
    }

    fn materialize(
        &self,
        year: i64,
        segment: &Segment<'_>,
        offset: i64,
        counting_before: i64,
        second_of_day: i64,
    ) -> CalendarDate {
        let day = (offset + 1) as u32;
        let mut date = match segment.kind {
            SegmentKind::Month(month) => CalendarDate::new(year, month, day),
            SegmentKind::Intercalary(def) => {
                let anchor = self
                    .calendar
                    .month_index(def.attachment.month_name())
                    .unwrap_or(1);
                CalendarDate::intercalary_day(def.name.clone(), year, anchor, day)
            }
        };
        if segment.counts_for_weekdays {
            date.weekday = Some(self.weekday_at(year, counting_before + offset));
        }
        date.time = Some(self.clock_from_second_of_day(second_of_day));
        date
    }

    fn second_of_day(&self, time: ClockTime) -> i64 {
        i64::from(time.hour) * self.math.seconds_per_hour
            + i64::from(time.minute) * self.math.seconds_per_minute
            + i64::from(time.second)
    }

    pub(crate) fn clock_from_second_of_day(&self, second_of_day: i64) -> ClockTime {
        let hour = second_of_day / self.math.seconds_per_hour;
        let rest = second_of_day % self.math.seconds_per_hour;
        ClockTime::new(
            hour as u32,
            (rest / self.math.seconds_per_minute) as u32,
            (rest % self.math.seconds_per_minute) as u32,
        )
    }
}
