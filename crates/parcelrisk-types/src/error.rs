//! Error types for parcelrisk

use thiserror::Error;

/// Which field of a shipment record was being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Id,
    Type,
    Fragility,
    Weather,
    TruckType,
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordField::Id => write!(f, "shipment ID"),
            RecordField::Type => write!(f, "shipment type"),
            RecordField::Fragility => write!(f, "fragility"),
            RecordField::Weather => write!(f, "weather"),
            RecordField::TruckType => write!(f, "truck type"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Number of shipments must be a non-negative integer, got {0:?}")]
    MalformedCount(String),

    #[error("No shipment count provided (input ended)")]
    MissingCount,

    #[error("Fragility for shipment {record} must be an integer, got {value:?}")]
    MalformedFragility { record: usize, value: String },

    #[error("Fragility for shipment {record} is out of range, got {value:?}")]
    FragilityOutOfRange { record: usize, value: String },

    #[error("Input ended while reading {field} for shipment {record}")]
    TruncatedInput { record: usize, field: RecordField },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_input_names_record_and_field() {
        let err = Error::TruncatedInput {
            record: 2,
            field: RecordField::Weather,
        };
        assert_eq!(
            err.to_string(),
            "Input ended while reading weather for shipment 2"
        );
    }

    #[test]
    fn test_malformed_fragility_message() {
        let err = Error::MalformedFragility {
            record: 1,
            value: "high".to_string(),
        };
        assert!(err.to_string().contains("\"high\""));
        assert!(err.to_string().contains("shipment 1"));
    }

    #[test]
    fn test_fragility_out_of_range_message() {
        let err = Error::FragilityOutOfRange {
            record: 3,
            value: "3000000000".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Fragility for shipment 3 is out of range, got \"3000000000\""
        );
    }
}
