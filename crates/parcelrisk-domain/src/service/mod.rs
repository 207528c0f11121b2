//! Domain services

pub mod ranker;
pub mod report;
pub mod risk_calculator;
pub mod tiers;

pub use ranker::rank_by_risk;
pub use report::{build_report, summarize, RankedShipment, RiskReport, RiskSummary};
pub use risk_calculator::{risk_score, truck_factor, weather_factor};
pub use tiers::{DashboardTier, SuggestionTier};
