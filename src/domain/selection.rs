use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Hardware quality bundle
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HardwareTier {
    #[default]
    Budget,
    Premium,
}

impl HardwareTier {
    /// The other tier
    pub fn toggled(self) -> Self {
        match self {
            HardwareTier::Budget => HardwareTier::Premium,
            HardwareTier::Premium => HardwareTier::Budget,
        }
    }
}

/// Season driving the solar conditions
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Season {
    #[default]
    Winter,
    Summer,
}

impl Season {
    pub fn toggled(self) -> Self {
        match self {
            Season::Winter => Season::Summer,
            Season::Summer => Season::Winter,
        }
    }
}

/// Display language. Affects labels only, never numbers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    English,
    #[default]
    Russian,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Russian,
            Language::Russian => Language::English,
        }
    }

    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Russian => "RU",
        }
    }
}

/// The three selector flags as one immutable value.
///
/// Toggling produces a new selection; nothing is mutated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub tier: HardwareTier,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub language: Language,
}

impl Selection {
    pub fn new(tier: HardwareTier, season: Season, language: Language) -> Self {
        Self {
            tier,
            season,
            language,
        }
    }

    pub fn toggle_tier(self) -> Self {
        Self {
            tier: self.tier.toggled(),
            ..self
        }
    }

    pub fn toggle_season(self) -> Self {
        Self {
            season: self.season.toggled(),
            ..self
        }
    }

    pub fn toggle_language(self) -> Self {
        Self {
            language: self.language.toggled(),
            ..self
        }
    }
}
