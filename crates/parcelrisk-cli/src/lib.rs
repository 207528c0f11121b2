//! Parcel Risk - package damage risk predictor
//!
//! Collects shipments from stdin, scores and ranks them, and renders a
//! color-coded dashboard with packing suggestions.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod output;
pub mod style;
