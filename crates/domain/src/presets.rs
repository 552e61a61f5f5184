//! Built-in calendar presets
//!
//! Two complete definitions ship with the crate: the Gregorian calendar
//! and the Calendar of Harptos from the Forgotten Realms. Both carry
//! every section explicitly, so loading them never triggers fallback
//! substitution.

use crate::calendar::{
    CalendarDefinition, CalendarId, CanonicalHour, IntercalaryDayDefinition, LeapYearConfig,
    MonthDefinition, MoonDefinition, ReferenceDate, SeasonDefinition, TimeUnits, WeekConfig,
    WeekName, WeekNamingPattern, WeekdayDefinition, YearConfig,
};
use crate::defaults;

impl CalendarDefinition {
    /// Standard Earth calendar with Gregorian leap years.
    ///
    /// Year 0 starts on a Saturday, which anchors the proleptic weekday
    /// cycle so that real-world dates come out right.
    pub fn gregorian() -> Self {
        Self::new(
            CalendarId::new("gregorian").expect("gregorian is a valid calendar ID"),
            "Gregorian Calendar",
        )
        .with_description("The standard Earth calendar with leap years every four years")
        .with_months(defaults::gregorian_months())
        .with_weekdays(defaults::gregorian_weekdays())
        .with_leap_year(defaults::gregorian_leap_year())
        .with_time(TimeUnits::default())
        .with_weeks(WeekConfig::month_based().with_naming_pattern(WeekNamingPattern::Ordinal))
        .with_canonical_hours(vec![
            CanonicalHour::new("Morning", 5, 12),
            CanonicalHour::new("Afternoon", 12, 18),
            CanonicalHour::new("Evening", 18, 22),
            CanonicalHour::new("Night", 22, 5),
        ])
        .with_moons(vec![MoonDefinition::new(
            "Luna",
            29.53059,
            ReferenceDate::new(2000, 1, 6),
        )])
        .with_seasons(vec![
            SeasonDefinition::new("Spring", 3, 20),
            SeasonDefinition::new("Summer", 6, 21),
            SeasonDefinition::new("Autumn", 9, 22),
            SeasonDefinition::new("Winter", 12, 21),
        ])
        .with_year(YearConfig::new(0, 6).with_suffix(" AD"))
    }

    /// The Calendar of Harptos from the Forgotten Realms.
    ///
    /// Twelve 30-day months with festival days between them. Festivals
    /// stand outside the tenday cycle, so every month opens on First-day.
    /// Shieldmeet follows Midsummer once every four years.
    pub fn harptos() -> Self {
        let months = [
            "Hammer", "Alturiak", "Ches", "Tarsakh", "Mirtul", "Kythorn", "Flamerule", "Eleasis",
            "Eleint", "Marpenoth", "Uktar", "Nightal",
        ]
        .into_iter()
        .map(|name| MonthDefinition::new(name, 30))
        .collect();

        let weekdays = [
            "First-day",
            "Second-day",
            "Third-day",
            "Fourth-day",
            "Fifth-day",
            "Sixth-day",
            "Seventh-day",
            "Eighth-day",
            "Ninth-day",
            "Tenth-day",
        ]
        .into_iter()
        .map(WeekdayDefinition::new)
        .collect();

        Self::new(
            CalendarId::new("harptos").expect("harptos is a valid calendar ID"),
            "Calendar of Harptos",
        )
        .with_description("The calendar of the Forgotten Realms, with festival days between months")
        .with_months(months)
        .with_weekdays(weekdays)
        .with_leap_year(LeapYearConfig::custom(4, 0))
        .with_intercalary(vec![
            IntercalaryDayDefinition::after("Midwinter", "Hammer")
                .outside_weekday_cycle()
                .with_description("Festival marking the midpoint of winter"),
            IntercalaryDayDefinition::after("Greengrass", "Tarsakh")
                .outside_weekday_cycle()
                .with_description("Festival welcoming the first day of spring"),
            IntercalaryDayDefinition::after("Midsummer", "Flamerule")
                .outside_weekday_cycle()
                .with_description("Festival of love and music"),
            IntercalaryDayDefinition::after("Shieldmeet", "Flamerule")
                .only_in_leap_years()
                .outside_weekday_cycle()
                .with_description("Day of open council between rulers and their people"),
            IntercalaryDayDefinition::after("Highharvestide", "Eleint")
                .outside_weekday_cycle()
                .with_description("Festival of the harvest"),
            IntercalaryDayDefinition::after("Feast of the Moon", "Uktar")
                .outside_weekday_cycle()
                .with_description("Festival honoring the dead"),
        ])
        .with_time(TimeUnits::default())
        .with_weeks(WeekConfig::month_based().with_names(vec![
            WeekName::new("First Tenday").with_abbreviation("1T"),
            WeekName::new("Second Tenday").with_abbreviation("2T"),
            WeekName::new("Third Tenday").with_abbreviation("3T"),
        ]))
        .with_canonical_hours(vec![
            CanonicalHour::new("Godswake", 3, 6),
            CanonicalHour::new("Harbright", 6, 9),
            CanonicalHour::new("Highsun", 11, 13),
            CanonicalHour::new("Eventide", 17, 19),
            CanonicalHour::new("Deepnight", 23, 3),
        ])
        .with_moons(vec![MoonDefinition::new(
            "Selûne",
            30.4375,
            ReferenceDate::new(1372, 1, 1),
        )])
        .with_seasons(vec![
            SeasonDefinition::new("Spring", 3, 19),
            SeasonDefinition::new("Summer", 6, 20),
            SeasonDefinition::new("Autumn", 9, 21),
            SeasonDefinition::new("Winter", 12, 20),
        ])
        .with_year(YearConfig::new(0, 0).with_suffix(" DR"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod gregorian {
        use super::*;

        #[test]
        fn test_is_valid() {
            assert!(CalendarDefinition::gregorian().validate().is_ok());
        }

        #[test]
        fn test_has_365_base_days() {
            assert_eq!(CalendarDefinition::gregorian().base_days_in_year(), 365);
        }

        #[test]
        fn test_has_12_months_and_7_weekdays() {
            let cal = CalendarDefinition::gregorian();
            assert_eq!(cal.months_in_year(), 12);
            assert_eq!(cal.weekday_cycle_len(), 7);
        }

        #[test]
        fn test_leap_rule_targets_february() {
            let cal = CalendarDefinition::gregorian();
            let leap = cal.leap_year().unwrap();
            assert_eq!(leap.month.as_deref(), Some("February"));
            assert_eq!(leap.extra_days, 1);
        }

        #[test]
        fn test_year_zero_starts_saturday() {
            let cal = CalendarDefinition::gregorian();
            assert_eq!(cal.year().start_day, 6);
            assert_eq!(cal.weekday_name(6), Some("Saturday"));
        }
    }

    mod harptos {
        use super::*;

        #[test]
        fn test_is_valid() {
            assert!(CalendarDefinition::harptos().validate().is_ok());
        }

        #[test]
        fn test_has_360_base_days() {
            assert_eq!(CalendarDefinition::harptos().base_days_in_year(), 360);
        }

        #[test]
        fn test_has_tenday_week() {
            assert_eq!(CalendarDefinition::harptos().weekday_cycle_len(), 10);
        }

        #[test]
        fn test_six_festivals_one_leap_only() {
            let cal = CalendarDefinition::harptos();
            assert_eq!(cal.intercalary().len(), 6);
            let leap_only: Vec<_> = cal
                .intercalary()
                .iter()
                .filter(|d| d.leap_year_only)
                .collect();
            assert_eq!(leap_only.len(), 1);
            assert_eq!(leap_only[0].name, "Shieldmeet");
        }

        #[test]
        fn test_festivals_stand_outside_tendays() {
            let cal = CalendarDefinition::harptos();
            assert!(cal.intercalary().iter().all(|d| !d.counts_for_weekdays));
        }

        #[test]
        fn test_year_suffix_is_dr() {
            assert_eq!(CalendarDefinition::harptos().year().display_year(1492), "1492 DR");
        }
    }
}
