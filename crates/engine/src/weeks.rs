//! Week-of-month queries

use almanack_domain::{
    ordinal_suffix, CalendarDate, RemainderHandling, WeekInfo, WeekNamingPattern, WeekType,
};

use crate::diagnostics::FallbackCause;
use crate::engine::CalendarEngine;

impl CalendarEngine {
    /// 1-based week of the month for a date.
    ///
    /// `None` when the calendar has no week grouping, groups weeks by
    /// year instead of month, the date is intercalary, or the day falls
    /// in a remainder the configuration assigns to no week.
    pub fn week_of_month(&self, date: &CalendarDate) -> Option<u32> {
        let config = self.calendar.weeks()?;
        if config.week_type != WeekType::MonthBased || date.is_intercalary() {
            return None;
        }
        let month = self.clamp_month(date.month);
        let month_length = self.month_length(month, date.year);
        if date.day < 1 || date.day > month_length {
            if self.warnings.first(FallbackCause::DayOutOfRange) {
                tracing::warn!(
                    calendar = %self.calendar.id(),
                    month,
                    day = date.day,
                    "day outside month; no week assigned"
                );
            }
            return None;
        }

        let days_per_week = config
            .days_per_week
            .unwrap_or_else(|| self.calendar.weekday_cycle_len())
            .max(1);
        let week = (date.day - 1) / days_per_week + 1;
        let full_weeks = month_length / days_per_week;
        let week = match config.remainder_handling {
            RemainderHandling::PartialLast => week,
            RemainderHandling::ExtendLast => week.min(full_weeks.max(1)),
            RemainderHandling::None => {
                if date.day > full_weeks * days_per_week {
                    return None;
                }
                week
            }
        };
        match config.per_month {
            Some(cap) if cap >= 1 => Some(week.min(cap)),
            _ => Some(week),
        }
    }

    /// Display metadata for week `number`.
    ///
    /// Explicit names win over the naming pattern; a `None` pattern with
    /// no name for the position yields no metadata at all.
    pub fn week_info(&self, number: u32) -> Option<WeekInfo> {
        let config = self.calendar.weeks()?;
        if number < 1 {
            return None;
        }
        if let Some(name) = config.names.get(number as usize - 1) {
            return Some(WeekInfo::from_name(number, name));
        }
        match config.naming_pattern {
            WeekNamingPattern::Ordinal => Some(WeekInfo::generated(
                number,
                format!("{number}{} Week", ordinal_suffix(number)),
            )),
            WeekNamingPattern::Numeric => {
                Some(WeekInfo::generated(number, format!("Week {number}")))
            }
            WeekNamingPattern::None => None,
        }
    }

    /// Week metadata for the week containing `date`.
    pub fn week_info_of(&self, date: &CalendarDate) -> Option<WeekInfo> {
        self.week_of_month(date)
            .and_then(|week| self.week_info(week))
    }
}
