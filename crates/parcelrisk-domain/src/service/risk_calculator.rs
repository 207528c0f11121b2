//! Damage risk score calculation

use crate::model::{TruckType, Weather};

/// Base risk contributed by each fragility point
pub const RISK_PER_FRAGILITY: f64 = 10.0;

/// Factor used for any label outside the known set
pub const NEUTRAL_FACTOR: f64 = 1.0;

pub fn weather_factor(weather: &Weather) -> f64 {
    match weather {
        Weather::Clear => 0.9,
        Weather::Rain => 1.2,
        Weather::Snow => 1.5,
        Weather::Windy => 1.3,
        Weather::Unrecognized(_) => NEUTRAL_FACTOR,
    }
}

pub fn truck_factor(truck: &TruckType) -> f64 {
    match truck {
        TruckType::Standard => 1.0,
        TruckType::Refrigerated => 0.85,
        TruckType::AirRide => 0.75,
        TruckType::Unrecognized(_) => NEUTRAL_FACTOR,
    }
}

pub fn risk_score(fragility: i32, weather: &Weather, truck: &TruckType) -> f64 {
    f64::from(fragility) * RISK_PER_FRAGILITY * weather_factor(weather) * truck_factor(truck)
}

/// Known weather categories with their factors, in display order
pub fn weather_factor_table() -> Vec<(Weather, f64)> {
    Weather::KNOWN
        .into_iter()
        .map(|w| {
            let factor = weather_factor(&w);
            (w, factor)
        })
        .collect()
}

/// Known truck types with their factors, in display order
pub fn truck_factor_table() -> Vec<(TruckType, f64)> {
    TruckType::KNOWN
        .into_iter()
        .map(|t| {
            let factor = truck_factor(&t);
            (t, factor)
        })
        .collect()
}
