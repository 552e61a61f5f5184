//! Moon definitions and phase metadata

use serde::{Deserialize, Serialize};

/// A fixed calendar date used to anchor a repeating cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDate {
    pub year: i64,
    /// 1-based month index.
    pub month: u32,
    /// 1-based day of month.
    pub day: u32,
}

impl ReferenceDate {
    pub fn new(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// One named phase within a moon's cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseDefinition {
    pub name: String,
    /// Length of this phase in days. Phase lengths should sum to the
    /// moon's cycle length.
    pub length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MoonPhaseDefinition {
    pub fn new(name: impl Into<String>, length: f64) -> Self {
        Self {
            name: name.into(),
            length,
            icon: None,
        }
    }
}

/// A moon with a repeating phase cycle anchored at a known new moon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonDefinition {
    pub name: String,
    /// Full cycle length in days. Fractional lengths are respected, so
    /// phases drift across calendar dates exactly as they should.
    pub cycle_length: f64,
    pub first_new_moon: ReferenceDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<MoonPhaseDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MoonDefinition {
    pub fn new(name: impl Into<String>, cycle_length: f64, first_new_moon: ReferenceDate) -> Self {
        let phases = standard_phases(cycle_length);
        Self {
            name: name.into(),
            cycle_length,
            first_new_moon,
            phases,
            color: None,
        }
    }

    pub fn with_phases(mut self, phases: Vec<MoonPhaseDefinition>) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The familiar eight-phase breakdown, each phase an eighth of the cycle.
pub fn standard_phases(cycle_length: f64) -> Vec<MoonPhaseDefinition> {
    const NAMES: [&str; 8] = [
        "New Moon",
        "Waxing Crescent",
        "First Quarter",
        "Waxing Gibbous",
        "Full Moon",
        "Waning Gibbous",
        "Last Quarter",
        "Waning Crescent",
    ];
    let length = cycle_length / 8.0;
    NAMES
        .iter()
        .map(|name| MoonPhaseDefinition::new(*name, length))
        .collect()
}

/// Phase state of one moon on one date, as returned by moon queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseInfo {
    pub moon: String,
    pub phase: String,
    /// 0-based index into the moon's phase list.
    pub phase_index: u32,
    /// Days into the current cycle, in `[0, cycle_length)`.
    pub cycle_day: f64,
    /// Illuminated fraction in `[0, 1]`: 0 at new moon, 1 at full moon.
    pub illumination: f64,
}
