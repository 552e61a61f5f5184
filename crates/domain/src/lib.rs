extern crate self as almanack_domain;

pub mod calendar;
pub mod date;
pub mod defaults;
pub mod error;
pub mod worldtime;

// Preset constructors live in their own module but attach to CalendarDefinition
mod presets;

// Re-export the calendar definition model (explicit list in calendar/mod.rs)
pub use calendar::{
    standard_phases, CalendarDefinition, CalendarId, CanonicalHour, ClockTime,
    IntercalaryAttachment, IntercalaryDayDefinition, LeapRule, LeapRuleDefect, LeapRuleKind,
    LeapYearConfig, MonthDefinition, MoonDefinition, MoonPhaseDefinition, MoonPhaseInfo,
    ReferenceDate, RemainderHandling, SeasonDefinition, TimeUnits, WeekConfig, WeekInfo, WeekName,
    WeekNamingPattern, WeekType, WeekdayDefinition, YearConfig, DEFAULT_WEEK_LENGTH,
};

pub use date::{ordinal_suffix, CalendarDate};
pub use error::DomainError;
pub use worldtime::WorldTime;
