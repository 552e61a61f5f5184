//! Moon phase queries
//!
//! Phases come from day counts alone: days since the anchor new moon,
//! folded into the cycle, then walked through the phase lengths.
//! Fractional cycle lengths are respected, so phases drift across
//! calendar dates instead of snapping to a whole-day period.

use almanack_domain::{
    standard_phases, CalendarDate, MoonDefinition, MoonPhaseDefinition, MoonPhaseInfo, WorldTime,
};

use crate::diagnostics::FallbackCause;
use crate::engine::CalendarEngine;

impl CalendarEngine {
    /// Phase of every configured moon on the given date.
    ///
    /// Moons whose cycle length is not a positive finite number are
    /// skipped.
    pub fn moon_phases_on(&self, date: &CalendarDate) -> Vec<MoonPhaseInfo> {
        let day_index = self.day_index_of(date);
        self.calendar
            .moons()
            .iter()
            .filter_map(|moon| self.phase_of(moon, day_index))
            .collect()
    }

    /// Phase of every configured moon at the given instant.
    pub fn moon_phases_at(&self, time: WorldTime) -> Vec<MoonPhaseInfo> {
        self.moon_phases_on(&self.world_time_to_date(time))
    }

    fn phase_of(&self, moon: &MoonDefinition, day_index: i64) -> Option<MoonPhaseInfo> {
        let cycle = moon.cycle_length;
        if !cycle.is_finite() || cycle <= 0.0 {
            if self.warnings.first(FallbackCause::InvalidMoonCycle) {
                tracing::warn!(
                    calendar = %self.calendar.id(),
                    moon = %moon.name,
                    cycle,
                    "moon cycle length is not positive; skipping moon"
                );
            }
            return None;
        }

        let anchor = moon.first_new_moon;
        let anchor_index =
            self.day_index_of(&CalendarDate::new(anchor.year, anchor.month, anchor.day));
        let elapsed = day_index.saturating_sub(anchor_index) as f64;
        let mut cycle_day = elapsed.rem_euclid(cycle);
        // Float folding can land exactly on the cycle boundary
        if cycle_day >= cycle {
            cycle_day = 0.0;
        }

        let fallback;
        let phases: &[MoonPhaseDefinition] = if moon.phases.is_empty() {
            if self.warnings.first(FallbackCause::EmptyMoonPhases) {
                tracing::warn!(
                    calendar = %self.calendar.id(),
                    moon = %moon.name,
                    "moon has no phases; using the standard eight"
                );
            }
            fallback = standard_phases(cycle);
            &fallback
        } else {
            &moon.phases
        };

        let mut phase_index = phases.len() - 1;
        let mut cumulative = 0.0;
        for (index, phase) in phases.iter().enumerate() {
            cumulative += phase.length;
            if cycle_day < cumulative {
                phase_index = index;
                break;
            }
        }

        let fraction = cycle_day / cycle;
        let illumination = if fraction <= 0.5 {
            2.0 * fraction
        } else {
            2.0 * (1.0 - fraction)
        };

        Some(MoonPhaseInfo {
            moon: moon.name.clone(),
            phase: phases[phase_index].name.clone(),
            phase_index: phase_index as u32,
            cycle_day,
            illumination,
        })
    }
}
