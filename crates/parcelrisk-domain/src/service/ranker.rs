//! Ranking shipments by risk

use crate::model::Shipment;

/// Sort by descending risk score. Stable: equal scores keep input order.
pub fn rank_by_risk(shipments: &mut [Shipment]) {
    shipments.sort_by(|a, b| b.risk_score().total_cmp(&a.risk_score()));
}
