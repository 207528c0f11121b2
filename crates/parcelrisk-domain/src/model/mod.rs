//! Domain model types

pub mod shipment;
pub mod truck;
pub mod weather;

pub use shipment::Shipment;
pub use truck::TruckType;
pub use weather::Weather;

use parcelrisk_types::LabelMatching;

/// Compare raw user input against a canonical category label
fn matches_label(raw: &str, label: &str, matching: LabelMatching) -> bool {
    match matching {
        LabelMatching::Exact => raw == label,
        LabelMatching::Normalized => raw.trim().eq_ignore_ascii_case(label),
    }
}
