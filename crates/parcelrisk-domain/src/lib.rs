//! Domain models and services for shipment damage risk

pub mod model;
pub mod service;
