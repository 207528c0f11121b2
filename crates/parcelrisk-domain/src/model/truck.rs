//! Truck type used for transport

use parcelrisk_types::LabelMatching;
use serde::{Deserialize, Serialize};

use super::matches_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TruckType {
    Standard,
    Refrigerated,
    /// Air-suspension truck
    AirRide,
    Unrecognized(String),
}

impl TruckType {
    pub const KNOWN: [TruckType; 3] = [
        TruckType::Standard,
        TruckType::Refrigerated,
        TruckType::AirRide,
    ];

    pub fn parse(raw: &str, matching: LabelMatching) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| matches_label(raw, known.label(), matching))
            .unwrap_or_else(|| TruckType::Unrecognized(raw.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            TruckType::Standard => "Standard",
            TruckType::Refrigerated => "Refrigerated",
            TruckType::AirRide => "AirRide",
            TruckType::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TruckType::Unrecognized(_))
    }
}

impl From<String> for TruckType {
    fn from(raw: String) -> Self {
        TruckType::parse(&raw, LabelMatching::Exact)
    }
}

impl From<TruckType> for String {
    fn from(truck: TruckType) -> Self {
        truck.label().to_string()
    }
}

impl std::fmt::Display for TruckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
