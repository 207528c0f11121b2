//! Output formatting module

use crate::style::{Painter, ACCENT};
use parcelrisk_domain::model::Shipment;
use parcelrisk_domain::service::risk_calculator::{
    truck_factor_table, weather_factor_table, NEUTRAL_FACTOR,
};
use parcelrisk_domain::service::{build_report, DashboardTier, SuggestionTier};
use parcelrisk_types::{OutputFormat, Result};
use serde::Serialize;
use std::io::Write;

/// Number of slots in the risk bar
pub const BAR_SLOTS: usize = 25;
/// Risk points represented by one filled slot
pub const POINTS_PER_SLOT: f64 = 4.0;

const RULE_WIDTH: usize = 62;

/// Filled slots for a score, clamped to `0..=BAR_SLOTS`
pub fn bar_fill(risk: f64) -> usize {
    let slots = (risk / POINTS_PER_SLOT).floor();
    if slots.is_nan() || slots <= 0.0 {
        0
    } else {
        (slots as usize).min(BAR_SLOTS)
    }
}

pub fn risk_bar(risk: f64) -> String {
    let filled = bar_fill(risk);
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_SLOTS - filled))
}

pub fn render_dashboard_header(painter: &Painter) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&painter.paint(&rule, ACCENT));
    out.push('\n');
    out.push_str(&painter.paint(
        "                      SHIPMENT RISK DASHBOARD                 ",
        ACCENT,
    ));
    out.push('\n');
    out.push_str(&painter.paint(&rule, ACCENT));
    out.push('\n');
    out.push_str(&format!(
        "{:<8}{:<15}{:<10}{:<12}{:<12}{:<10} Risk Bar\n",
        "ID", "Type", "Fragility", "Weather", "Truck", "Risk"
    ));
    out.push_str(&painter.paint(&"-".repeat(RULE_WIDTH), ACCENT));
    out.push('\n');
    out
}

pub fn render_shipment_row(shipment: &Shipment, painter: &Painter) -> String {
    let risk = shipment.risk_score();
    let tier = DashboardTier::from_score(risk);
    format!(
        "{:<8}{:<15}{:<10}{:<12}{:<12}{} {}\n",
        shipment.id(),
        shipment.category(),
        shipment.fragility(),
        shipment.weather(),
        shipment.truck_type(),
        painter.tier(&format!("{:<10.2}", risk), tier),
        painter.tier(&risk_bar(risk), tier),
    )
}

pub fn render_dashboard(shipments: &[Shipment], painter: &Painter) -> String {
    let mut out = render_dashboard_header(painter);
    for shipment in shipments {
        out.push_str(&render_shipment_row(shipment, painter));
    }
    out
}

pub fn render_suggestions(shipments: &[Shipment], painter: &Painter) -> String {
    let mut out = String::new();
    out.push_str(&painter.paint("=== SUGGESTIONS ===", ACCENT));
    out.push('\n');
    for shipment in shipments {
        let tier = SuggestionTier::from_score(shipment.risk_score());
        out.push_str(&format!(
            "{}: {}\n",
            shipment.id(),
            painter.tier(tier.message(), tier.display_tier())
        ));
    }
    out
}

/// Dashboard, suggestions and closing line for ranked shipments
pub fn render_table_report(shipments: &[Shipment], painter: &Painter) -> String {
    let mut out = String::from("\n");
    out.push_str(&render_dashboard(shipments, painter));
    out.push('\n');
    out.push_str(&render_suggestions(shipments, painter));
    out.push('\n');
    out.push_str(&painter.paint("Dashboard complete.", ACCENT));
    out.push('\n');
    out
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    id: &'a str,
    #[serde(rename = "type")]
    category: &'a str,
    fragility: i32,
    weather: &'a str,
    truck_type: &'a str,
    risk_score: f64,
    dashboard_tier: DashboardTier,
    suggestion_tier: SuggestionTier,
}

pub fn write_csv<W: Write>(shipments: &[Shipment], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, s) in shipments.iter().enumerate() {
        csv_writer.serialize(CsvRow {
            rank: i + 1,
            id: s.id(),
            category: s.category(),
            fragility: s.fragility(),
            weather: s.weather().label(),
            truck_type: s.truck_type().label(),
            risk_score: s.risk_score(),
            dashboard_tier: DashboardTier::from_score(s.risk_score()),
            suggestion_tier: SuggestionTier::from_score(s.risk_score()),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write ranked shipments in the requested format
pub fn output_assessment<W: Write>(
    output_format: OutputFormat,
    shipments: &[Shipment],
    painter: &Painter,
    out: &mut W,
) -> Result<()> {
    match output_format {
        OutputFormat::Table => {
            write!(out, "{}", render_table_report(shipments, painter))?;
        }
        OutputFormat::Json => {
            let report = build_report(shipments);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Csv => write_csv(shipments, &mut *out)?,
    }
    out.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct FactorEntry {
    category: &'static str,
    label: String,
    factor: f64,
}

fn factor_entries() -> Vec<FactorEntry> {
    let weather = weather_factor_table().into_iter().map(|(w, factor)| FactorEntry {
        category: "weather",
        label: w.label().to_string(),
        factor,
    });
    let trucks = truck_factor_table().into_iter().map(|(t, factor)| FactorEntry {
        category: "truck_type",
        label: t.label().to_string(),
        factor,
    });
    weather.chain(trucks).collect()
}

pub fn render_factor_table(painter: &Painter) -> String {
    let mut out = String::new();
    out.push_str(&painter.paint("=== RISK FACTORS ===", ACCENT));
    out.push('\n');
    out.push_str(&format!("{:<14}{}\n", "Weather", "Factor"));
    for (weather, factor) in weather_factor_table() {
        out.push_str(&format!("{:<14}{:.2}\n", weather, factor));
    }
    out.push('\n');
    out.push_str(&format!("{:<14}{}\n", "Truck", "Factor"));
    for (truck, factor) in truck_factor_table() {
        out.push_str(&format!("{:<14}{:.2}\n", truck, factor));
    }
    out.push('\n');
    out.push_str(&format!(
        "Any other label uses {:.2}. Risk = fragility x 10 x weather x truck.\n",
        NEUTRAL_FACTOR
    ));
    out
}

pub fn output_factors<W: Write>(
    output_format: OutputFormat,
    painter: &Painter,
    out: &mut W,
) -> Result<()> {
    match output_format {
        OutputFormat::Table => write!(out, "{}", render_factor_table(painter))?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&factor_entries())?)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *out);
            for entry in factor_entries() {
                csv_writer.serialize(entry)?;
            }
            csv_writer.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcelrisk_domain::model::{TruckType, Weather};
    use parcelrisk_domain::service::rank_by_risk;

    fn ranked_sample() -> Vec<Shipment> {
        let mut shipments = vec![
            Shipment::new("B2", "Furniture", 2, Weather::Clear, TruckType::AirRide),
            Shipment::new("A1", "Electronics", 8, Weather::Snow, TruckType::Standard),
        ];
        rank_by_risk(&mut shipments);
        shipments
    }

    #[test]
    fn test_bar_fill_floor_and_clamp() {
        assert_eq!(bar_fill(0.0), 0);
        assert_eq!(bar_fill(3.99), 0);
        assert_eq!(bar_fill(13.5), 3);
        assert_eq!(bar_fill(50.0), 12);
        assert_eq!(bar_fill(99.99), 24);
        assert_eq!(bar_fill(100.0), 25);
        assert_eq!(bar_fill(120.0), 25);
        assert_eq!(bar_fill(150.0), 25);
        assert_eq!(bar_fill(-20.0), 0);
    }

    #[test]
    fn test_risk_bar_width() {
        let full = risk_bar(120.0);
        assert_eq!(full, format!("[{}]", "#".repeat(25)));
        let partial = risk_bar(13.5);
        assert_eq!(partial.len(), 27);
        assert!(partial.starts_with("[### "));
        assert!(partial.ends_with(" ]"));
    }

    #[test]
    fn test_header_columns() {
        let header = render_dashboard_header(&Painter::plain());
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "=".repeat(62));
        assert!(lines[1].contains("SHIPMENT RISK DASHBOARD"));
        assert_eq!(
            lines[3],
            "ID      Type           Fragility Weather     Truck       Risk       Risk Bar"
        );
        assert_eq!(lines[4], "-".repeat(62));
    }

    #[test]
    fn test_row_layout() {
        let shipment = Shipment::new("A1", "Electronics", 8, Weather::Snow, TruckType::Standard);
        let row = render_shipment_row(&shipment, &Painter::plain());
        let expected = format!(
            "A1      Electronics    8         Snow        Standard    120.00     [{}]\n",
            "#".repeat(25)
        );
        assert_eq!(row, expected);
    }

    #[test]
    fn test_row_shows_unrecognized_label_verbatim() {
        let shipment = Shipment::new(
            "C3",
            "Glass",
            5,
            Weather::Unrecognized("Foggy".into()),
            TruckType::Standard,
        );
        let row = render_shipment_row(&shipment, &Painter::plain());
        let expected = "C3      Glass          5         Foggy       Standard    50.00     ";
        assert!(row.starts_with(expected));
    }

    #[test]
    fn test_suggestions_follow_ranked_order() {
        let text = render_suggestions(&ranked_sample(), &Painter::plain());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=== SUGGESTIONS ===");
        assert_eq!(lines[1], "A1: - High risk: Extra cushioning and AirRide truck recommended.");
        assert_eq!(lines[2], "B2: - Very low risk: Minimal precautions required.");
    }

    #[test]
    fn test_table_report_sections() {
        let text = render_table_report(&ranked_sample(), &Painter::plain());
        let dashboard = text.find("SHIPMENT RISK DASHBOARD").unwrap();
        let suggestions = text.find("=== SUGGESTIONS ===").unwrap();
        let done = text.find("Dashboard complete.").unwrap();
        assert!(dashboard < suggestions && suggestions < done);
        assert!(text.find("A1      ").unwrap() < text.find("B2      ").unwrap());
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_empty_table_report() {
        let text = render_table_report(&[], &Painter::plain());
        assert!(text.contains("Risk Bar"));
        assert!(text.ends_with("Dashboard complete.\n"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        output_assessment(OutputFormat::Json, &ranked_sample(), &Painter::plain(), &mut out)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["shipments"][0]["id"], "A1");
        assert_eq!(value["shipments"][1]["suggestion_tier"], "minimal_precautions");
        assert_eq!(value["summary"]["high"], 1);
    }

    #[test]
    fn test_csv_output() {
        let mut out = Vec::new();
        output_assessment(OutputFormat::Csv, &ranked_sample(), &Painter::plain(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "rank,id,type,fragility,weather,truck_type,risk_score,dashboard_tier,suggestion_tier"
        );
        assert!(lines[1].starts_with("1,A1,Electronics,8,Snow,Standard,120"));
        assert!(lines[1].ends_with(",high,extra_cushioning"));
        assert!(lines[2].starts_with("2,B2,Furniture,2,Clear,AirRide,13.5"));
    }

    #[test]
    fn test_factor_table() {
        let text = render_factor_table(&Painter::plain());
        assert!(text.contains("Snow          1.50"));
        assert!(text.contains("AirRide       0.75"));
        assert!(text.contains("Any other label uses 1.00"));
    }

    #[test]
    fn test_factor_json() {
        let mut out = Vec::new();
        output_factors(OutputFormat::Json, &Painter::plain(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0]["category"], "weather");
        assert_eq!(entries[6]["label"], "AirRide");
    }
}
