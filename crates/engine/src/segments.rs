//! Year layout
//!
//! A year is an ordered sequence of day runs: for each month, first the
//! intercalary groups attached before it, then the month itself, then the
//! groups attached after it. Groups keep their definition order within
//! one attachment point. Both conversion directions walk this one layout,
//! which is what makes them exact inverses.

use almanack_domain::{CalendarDefinition, IntercalaryDayDefinition};

use crate::leap::LeapSpec;

pub(crate) enum SegmentKind<'a> {
    /// 1-based month index.
    Month(u32),
    Intercalary(&'a IntercalaryDayDefinition),
}

pub(crate) struct Segment<'a> {
    pub kind: SegmentKind<'a>,
    pub length: i64,
    pub counts_for_weekdays: bool,
}

/// Length of one month in one year, leap stretch applied.
pub(crate) fn month_span(
    calendar: &CalendarDefinition,
    spec: &LeapSpec,
    is_leap: bool,
    month: u32,
) -> i64 {
    let base = calendar.month(month).map_or(0, |m| i64::from(m.days));
    if is_leap && spec.month_index == Some(month) {
        (base + spec.extra_days).max(1)
    } else {
        base
    }
}

/// The complete layout of one year.
pub(crate) fn year_segments<'a>(
    calendar: &'a CalendarDefinition,
    spec: &LeapSpec,
    is_leap: bool,
) -> Vec<Segment<'a>> {
    let month_count = calendar.months_in_year();
    let mut segments = Vec::with_capacity(month_count as usize + calendar.intercalary().len());
    for month in 1..=month_count {
        for day in calendar.intercalary_before_month(month) {
            if day.applies_in(is_leap) {
                segments.push(Segment {
                    kind: SegmentKind::Intercalary(day),
                    length: i64::from(day.days),
                    counts_for_weekdays: day.counts_for_weekdays,
                });
            }
        }
        segments.push(Segment {
            kind: SegmentKind::Month(month),
            length: month_span(calendar, spec, is_leap, month),
            counts_for_weekdays: true,
        });
        for day in calendar.intercalary_after_month(month) {
            if day.applies_in(is_leap) {
                segments.push(Segment {
                    kind: SegmentKind::Intercalary(day),
                    length: i64::from(day.days),
                    counts_for_weekdays: day.counts_for_weekdays,
                });
            }
        }
    }
    segments
}
