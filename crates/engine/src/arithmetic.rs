//! Calendar-aware date arithmetic
//!
//! Month and year steps preserve the time of day, clamp the day to the
//! target month, and recompute the weekday from scratch. Intercalary
//! dates collapse into their anchor month when the step would strand
//! them: after-groups land on the month's last day, before-groups on
//! day one.

use almanack_domain::CalendarDate;

use crate::diagnostics::FallbackCause;
use crate::engine::CalendarEngine;

impl CalendarEngine {
    /// Moves a date by whole months. Negative counts move backward.
    ///
    /// The day clamps to the target month's length, so the 31st plus one
    /// month lands on the 28th, 29th, or 30th as the calendar dictates.
    /// Intercalary dates always collapse into their anchor month first;
    /// a month step is a move through the month sequence, which the
    /// groups sit outside of.
    pub fn add_months(&self, date: &CalendarDate, months: i64) -> CalendarDate {
        let (month, day) = self.collapse_to_month(date, date.year);
        let month = self.clamp_month(month);
        let months_in_year = i64::from(self.calendar.months_in_year().max(1));
        let index = (i64::from(month) - 1).saturating_add(months);
        let year = date.year.saturating_add(index.div_euclid(months_in_year));
        let month = (index.rem_euclid(months_in_year) + 1) as u32;
        let day = day.clamp(1, self.month_length(month, year));
        self.rebuild(CalendarDate::new(year, month, day), date)
    }

    /// Moves a date by whole years. Negative counts move backward.
    ///
    /// An intercalary date stays on its group when the group occurs in
    /// the target year; otherwise it collapses into the anchor month.
    /// February 29th plus one year clamps to the 28th.
    pub fn add_years(&self, date: &CalendarDate, years: i64) -> CalendarDate {
        let year = date.year.saturating_add(years);
        if let Some(name) = &date.intercalary {
            let survives = self.calendar.intercalary_by_name(name).and_then(|def| {
                let anchor = self.calendar.month_index(def.attachment.month_name())?;
                def.applies_in(self.is_leap_year(year))
                    .then(|| (anchor, date.day.clamp(1, def.days.max(1))))
            });
            if let Some((anchor, day)) = survives {
                let result = CalendarDate::intercalary_day(name.clone(), year, anchor, day);
                return self.rebuild(result, date);
            }
        }
        let (month, day) = self.collapse_to_month(date, year);
        let month = self.clamp_month(month);
        let day = day.clamp(1, self.month_length(month, year));
        self.rebuild(CalendarDate::new(year, month, day), date)
    }

    /// Regular month and day a date occupies in `year` once its
    /// intercalary marker is stripped.
    fn collapse_to_month(&self, date: &CalendarDate, year: i64) -> (u32, u32) {
        let Some(name) = &date.intercalary else {
            return (date.month, date.day);
        };
        match self.calendar.intercalary_by_name(name) {
            Some(def) => match self.calendar.month_index(def.attachment.month_name()) {
                Some(anchor) if def.attachment.is_after() => {
                    (anchor, self.month_length(anchor, year))
                }
                Some(anchor) => (anchor, 1),
                None => (1, 1),
            },
            None => {
                if self.warnings.first(FallbackCause::UnknownIntercalary) {
                    tracing::warn!(
                        calendar = %self.calendar.id(),
                        intercalary = %name,
                        "unknown intercalary day; treating date as a regular day"
                    );
                }
                (date.month, date.day)
            }
        }
    }

    fn rebuild(&self, mut result: CalendarDate, source: &CalendarDate) -> CalendarDate {
        result.time = source.time;
        result.weekday = self.weekday_of(&result);
        result
    }
}
