//! Weather conditions along the route

use parcelrisk_types::LabelMatching;
use serde::{Deserialize, Serialize};

use super::matches_label;

/// Weather category. Anything outside the known labels is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Weather {
    Clear,
    Rain,
    Snow,
    Windy,
    Unrecognized(String),
}

impl Weather {
    pub const KNOWN: [Weather; 4] = [Weather::Clear, Weather::Rain, Weather::Snow, Weather::Windy];

    /// Classify raw input into a weather category
    pub fn parse(raw: &str, matching: LabelMatching) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| matches_label(raw, known.label(), matching))
            .unwrap_or_else(|| Weather::Unrecognized(raw.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Weather::Clear => "Clear",
            Weather::Rain => "Rain",
            Weather::Snow => "Snow",
            Weather::Windy => "Windy",
            Weather::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Weather::Unrecognized(_))
    }
}

impl From<String> for Weather {
    fn from(raw: String) -> Self {
        Weather::parse(&raw, LabelMatching::Exact)
    }
}

impl From<Weather> for String {
    fn from(weather: Weather) -> Self {
        weather.label().to_string()
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
