//! Risk tier classification
//!
//! The dashboard uses three color tiers and the suggestion list uses four
//! tiers. The two are classified independently over the same score, so a
//! score of 50 is a low dashboard tier but a standard-packing suggestion.

use serde::{Deserialize, Serialize};

/// Dashboard color tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTier {
    /// risk > 80
    High,
    /// 60 < risk <= 80
    Moderate,
    /// risk <= 60
    Low,
}

impl DashboardTier {
    pub fn from_score(risk: f64) -> Self {
        match risk {
            r if r > 80.0 => DashboardTier::High,
            r if r > 60.0 => DashboardTier::Moderate,
            _ => DashboardTier::Low,
        }
    }
}

/// Packing suggestion tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionTier {
    /// risk > 80
    ExtraCushioning,
    /// 60 < risk <= 80
    PaddingWeatherproofing,
    /// 40 < risk <= 60
    StandardPacking,
    /// risk <= 40
    MinimalPrecautions,
}

impl SuggestionTier {
    pub fn from_score(risk: f64) -> Self {
        match risk {
            r if r > 80.0 => SuggestionTier::ExtraCushioning,
            r if r > 60.0 => SuggestionTier::PaddingWeatherproofing,
            r if r > 40.0 => SuggestionTier::StandardPacking,
            _ => SuggestionTier::MinimalPrecautions,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SuggestionTier::ExtraCushioning => {
                "- High risk: Extra cushioning and AirRide truck recommended."
            }
            SuggestionTier::PaddingWeatherproofing => {
                "- Moderate risk: Add padding and weatherproof wrapping."
            }
            SuggestionTier::StandardPacking => "- Low risk: Standard packing acceptable.",
            SuggestionTier::MinimalPrecautions => "- Very low risk: Minimal precautions required.",
        }
    }

    /// Dashboard tier whose color the suggestion is printed in
    pub fn display_tier(&self) -> DashboardTier {
        match self {
            SuggestionTier::ExtraCushioning => DashboardTier::High,
            SuggestionTier::PaddingWeatherproofing => DashboardTier::Moderate,
            SuggestionTier::StandardPacking | SuggestionTier::MinimalPrecautions => {
                DashboardTier::Low
            }
        }
    }
}
