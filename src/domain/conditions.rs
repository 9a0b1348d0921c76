use serde::Serialize;

use super::hardware::LocalizedText;
use super::selection::Season;

/// Seasonal solar conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarCondition {
    /// Fraction of nameplate irradiance actually realized (0-1)
    pub sunlight_factor: f64,
    /// Fraction of power kept after thermal derating (0-1)
    pub temperature_efficiency: f64,
    pub description: LocalizedText,
}

impl SolarCondition {
    pub fn for_season(season: Season) -> &'static SolarCondition {
        match season {
            Season::Winter => &WINTER,
            Season::Summer => &SUMMER,
        }
    }
}

pub const WINTER: SolarCondition = SolarCondition {
    sunlight_factor: 0.7,
    temperature_efficiency: 0.9,
    description: LocalizedText {
        english: "~4.5 peak sun hours",
        russian: "~4.5 пиковых солнечных часов",
    },
};

// Hot panels lose more to heat, so summer derates harder than winter.
pub const SUMMER: SolarCondition = SolarCondition {
    sunlight_factor: 0.9,
    temperature_efficiency: 0.8,
    description: LocalizedText {
        english: "~6.5 peak sun hours",
        russian: "~6.5 пиковых солнечных часов",
    },
};
