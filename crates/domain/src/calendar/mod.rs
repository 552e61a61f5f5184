//! Calendar definition model
//!
//! Everything a calendar document can declare, one section per module.

mod definition;
mod hours;
mod id;
mod intercalary;
mod leap;
mod month;
mod moons;
mod seasons;
mod time;
mod weekday;
mod weeks;
mod year;

pub use definition::{CalendarDefinition, DEFAULT_WEEK_LENGTH};
pub use hours::CanonicalHour;
pub use id::CalendarId;
pub use intercalary::{IntercalaryAttachment, IntercalaryDayDefinition};
pub use leap::{LeapRule, LeapRuleDefect, LeapRuleKind, LeapYearConfig};
pub use month::MonthDefinition;
pub use moons::{
    standard_phases, MoonDefinition, MoonPhaseDefinition, MoonPhaseInfo, ReferenceDate,
};
pub use seasons::SeasonDefinition;
pub use time::{ClockTime, TimeUnits};
pub use weekday::WeekdayDefinition;
pub use weeks::{
    RemainderHandling, WeekConfig, WeekInfo, WeekName, WeekNamingPattern, WeekType,
};
pub use year::YearConfig;
