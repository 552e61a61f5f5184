//! Season lookup

use almanack_domain::{CalendarDate, SeasonDefinition};

use crate::engine::CalendarEngine;

impl CalendarEngine {
    /// Season containing the given date, or `None` when the calendar
    /// defines no seasons.
    ///
    /// The latest season start at or before the date wins. Dates before
    /// the year's first start belong to the season carried over from the
    /// previous year. Intercalary dates resolve at their anchor month.
    pub fn season_on(&self, date: &CalendarDate) -> Option<&SeasonDefinition> {
        let seasons = self.calendar.seasons();
        let position = (date.month, date.day);
        seasons
            .iter()
            .filter(|season| season.start_position() <= position)
            .max_by_key(|season| season.start_position())
            .or_else(|| seasons.iter().max_by_key(|season| season.start_position()))
    }
}
