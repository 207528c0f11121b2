//! Assessment report built from ranked shipments

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::tiers::{DashboardTier, SuggestionTier};
use crate::model::Shipment;

/// A shipment annotated with its position and tiers
#[derive(Debug, Clone, Serialize)]
pub struct RankedShipment {
    /// 1-based position after ranking
    pub rank: usize,
    #[serde(flatten)]
    pub shipment: Shipment,
    pub dashboard_tier: DashboardTier,
    pub suggestion_tier: SuggestionTier,
    pub suggestion: String,
}

/// Per-tier counts and score statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskSummary {
    pub total: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub extra_cushioning: usize,
    pub padding_weatherproofing: usize,
    pub standard_packing: usize,
    pub minimal_precautions: usize,
    pub highest_score: Option<f64>,
    pub mean_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub generated_at: DateTime<Utc>,
    pub shipments: Vec<RankedShipment>,
    pub summary: RiskSummary,
}

/// Build a report from shipments that are already ranked
pub fn build_report(ranked: &[Shipment]) -> RiskReport {
    let shipments = ranked
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let suggestion_tier = SuggestionTier::from_score(s.risk_score());
            RankedShipment {
                rank: i + 1,
                shipment: s.clone(),
                dashboard_tier: DashboardTier::from_score(s.risk_score()),
                suggestion_tier,
                suggestion: suggestion_tier.message().to_string(),
            }
        })
        .collect();

    RiskReport {
        generated_at: Utc::now(),
        shipments,
        summary: summarize(ranked),
    }
}

pub fn summarize(shipments: &[Shipment]) -> RiskSummary {
    let mut summary = RiskSummary {
        total: shipments.len(),
        ..Default::default()
    };

    for s in shipments {
        match DashboardTier::from_score(s.risk_score()) {
            DashboardTier::High => summary.high += 1,
            DashboardTier::Moderate => summary.moderate += 1,
            DashboardTier::Low => summary.low += 1,
        }
        match SuggestionTier::from_score(s.risk_score()) {
            SuggestionTier::ExtraCushioning => summary.extra_cushioning += 1,
            SuggestionTier::PaddingWeatherproofing => summary.padding_weatherproofing += 1,
            SuggestionTier::StandardPacking => summary.standard_packing += 1,
            SuggestionTier::MinimalPrecautions => summary.minimal_precautions += 1,
        }
    }

    if !shipments.is_empty() {
        summary.highest_score = shipments
            .iter()
            .map(Shipment::risk_score)
            .max_by(|a, b| a.total_cmp(b));
        let total: f64 = shipments.iter().map(Shipment::risk_score).sum();
        summary.mean_score = Some(total / shipments.len() as f64);
    }

    summary
}
