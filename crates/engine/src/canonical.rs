//! Canonical hour resolution

use almanack_domain::{CalendarDate, CanonicalHour, TimeUnits};

use crate::engine::CalendarEngine;

/// Finds the canonical hour containing a clock position.
///
/// Ranges own their start and give up their end, so back-to-back hours
/// never overlap. A range whose start is later than its end wraps past
/// midnight. A zero-width range matches nothing. Earlier entries win
/// when ranges overlap.
pub fn find_canonical_hour<'a>(
    hours: &'a [CanonicalHour],
    hour: u32,
    minute: u32,
    units: &TimeUnits,
) -> Option<&'a CanonicalHour> {
    let now = i64::from(hour) * i64::from(units.minutes_in_hour) + i64::from(minute);
    hours.iter().find(|entry| {
        let start = entry.start_in_minutes(units);
        let end = entry.end_in_minutes(units);
        if start < end {
            now >= start && now < end
        } else if start > end {
            now >= start || now <= end
        } else {
            false
        }
    })
}

impl CalendarEngine {
    /// Canonical hour active at the date's time of day. Dates without a
    /// time resolve at midnight.
    pub fn canonical_hour_for(&self, date: &CalendarDate) -> Option<&CanonicalHour> {
        let units = self.calendar.time().copied().unwrap_or_default();
        let time = date.time_or_midnight();
        find_canonical_hour(
            self.calendar.canonical_hours(),
            time.hour,
            time.minute,
            &units,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanack_domain::CalendarDefinition;

    fn named(result: Option<&CanonicalHour>) -> Option<&str> {
        result.map(|hour| hour.name.as_str())
    }

    #[test]
    fn test_start_owned_end_given_up() {
        let hours = vec![
            CanonicalHour::new("Matins", 0, 6),
            CanonicalHour::new("Prime", 6, 9),
        ];
        let units = TimeUnits::default();
        assert_eq!(named(find_canonical_hour(&hours, 5, 59, &units)), Some("Matins"));
        assert_eq!(named(find_canonical_hour(&hours, 6, 0, &units)), Some("Prime"));
        assert_eq!(named(find_canonical_hour(&hours, 9, 0, &units)), None);
    }

    #[test]
    fn test_wrapping_range_spans_midnight() {
        let hours = vec![CanonicalHour::new("Deepnight", 23, 2)];
        let units = TimeUnits::default();
        assert_eq!(named(find_canonical_hour(&hours, 23, 30, &units)), Some("Deepnight"));
        assert_eq!(named(find_canonical_hour(&hours, 0, 0, &units)), Some("Deepnight"));
        assert_eq!(named(find_canonical_hour(&hours, 1, 30, &units)), Some("Deepnight"));
        assert_eq!(named(find_canonical_hour(&hours, 3, 0, &units)), None);
        assert_eq!(named(find_canonical_hour(&hours, 22, 59, &units)), None);
    }

    #[test]
    fn test_minute_precision() {
        let hours = vec![CanonicalHour::new("Dawn", 5, 6).with_minutes(30, 15)];
        let units = TimeUnits::default();
        assert_eq!(named(find_canonical_hour(&hours, 5, 29, &units)), None);
        assert_eq!(named(find_canonical_hour(&hours, 5, 30, &units)), Some("Dawn"));
        assert_eq!(named(find_canonical_hour(&hours, 6, 14, &units)), Some("Dawn"));
        assert_eq!(named(find_canonical_hour(&hours, 6, 15, &units)), None);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let hours = vec![
            CanonicalHour::new("Watch", 4, 8),
            CanonicalHour::new("Dawn", 5, 7),
        ];
        let units = TimeUnits::default();
        assert_eq!(named(find_canonical_hour(&hours, 6, 0, &units)), Some("Watch"));
    }

    #[test]
    fn test_zero_width_range_matches_nothing() {
        let hours = vec![CanonicalHour::new("Stuck", 7, 7)];
        let units = TimeUnits::default();
        assert_eq!(named(find_canonical_hour(&hours, 7, 0, &units)), None);
    }

    #[test]
    fn test_empty_hour_list() {
        let units = TimeUnits::default();
        assert_eq!(find_canonical_hour(&[], 12, 0, &units), None);
    }

    mod on_engine {
        use super::*;
        use almanack_domain::CalendarDate;

        #[test]
        fn test_gregorian_hours_at_times() {
            let engine = CalendarEngine::new(CalendarDefinition::gregorian());
            let date = CalendarDate::new(2024, 6, 1);
            for (hour, expected) in [
                (5, Some("Morning")),
                (11, Some("Morning")),
                (12, Some("Afternoon")),
                (18, Some("Evening")),
                (23, Some("Night")),
                (2, Some("Night")),
            ] {
                let at = date.clone().at_time(hour, 0, 0);
                assert_eq!(
                    named(engine.canonical_hour_for(&at)),
                    expected,
                    "hour {hour}"
                );
            }
        }

        #[test]
        fn test_untimed_date_resolves_at_midnight() {
            let engine = CalendarEngine::new(CalendarDefinition::harptos());
            // Deepnight runs 23 to 3 and covers midnight
            assert_eq!(
                named(engine.canonical_hour_for(&CalendarDate::new(1492, 1, 1))),
                Some("Deepnight")
            );
        }
    }
}
