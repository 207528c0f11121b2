//! Shipment record

use serde::Serialize;

use super::{TruckType, Weather};
use crate::service::risk_calculator::risk_score;

/// A shipment with its derived damage risk score.
///
/// The score is computed once in [`Shipment::new`]; fields are read-only
/// afterwards so the score can never drift from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    id: String,
    #[serde(rename = "type")]
    category: String,
    /// 1 = very sturdy, 10 = extremely fragile (not enforced)
    fragility: i32,
    weather: Weather,
    truck_type: TruckType,
    risk_score: f64,
}

impl Shipment {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        fragility: i32,
        weather: Weather,
        truck_type: TruckType,
    ) -> Self {
        let risk_score = risk_score(fragility, &weather, &truck_type);
        Self {
            id: id.into(),
            category: category.into(),
            fragility,
            weather,
            truck_type,
            risk_score,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn fragility(&self) -> i32 {
        self.fragility
    }

    pub fn weather(&self) -> &Weather {
        &self.weather
    }

    pub fn truck_type(&self) -> &TruckType {
        &self.truck_type
    }

    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }
}
