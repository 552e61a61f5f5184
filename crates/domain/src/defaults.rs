//! Gregorian-shaped fallback sections
//!
//! When a calendar document omits a required section, the engine
//! substitutes these so every query still has a deterministic answer.
//! They double as the building blocks of the Gregorian preset.

use crate::calendar::{LeapYearConfig, MonthDefinition, TimeUnits, WeekdayDefinition};

/// The twelve Gregorian months with common-year lengths.
pub fn gregorian_months() -> Vec<MonthDefinition> {
    [
        ("January", "Jan", 31),
        ("February", "Feb", 28),
        ("March", "Mar", 31),
        ("April", "Apr", 30),
        ("May", "May", 31),
        ("June", "Jun", 30),
        ("July", "Jul", 31),
        ("August", "Aug", 31),
        ("September", "Sep", 30),
        ("October", "Oct", 31),
        ("November", "Nov", 30),
        ("December", "Dec", 31),
    ]
    .into_iter()
    .map(|(name, abbr, days)| MonthDefinition::new(name, days).with_abbreviation(abbr))
    .collect()
}

/// The seven-day week starting on Sunday.
pub fn gregorian_weekdays() -> Vec<WeekdayDefinition> {
    [
        ("Sunday", "Sun"),
        ("Monday", "Mon"),
        ("Tuesday", "Tue"),
        ("Wednesday", "Wed"),
        ("Thursday", "Thu"),
        ("Friday", "Fri"),
        ("Saturday", "Sat"),
    ]
    .into_iter()
    .map(|(name, abbr)| WeekdayDefinition::new(name).with_abbreviation(abbr))
    .collect()
}

/// Gregorian leap rule adding one day to February.
pub fn gregorian_leap_year() -> LeapYearConfig {
    LeapYearConfig::gregorian("February")
}

/// 24-hour, 60-minute, 60-second days.
pub fn earth_time_units() -> TimeUnits {
    TimeUnits::default()
}
