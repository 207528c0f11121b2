//! Interactive shipment entry

use crate::style::{Painter, ACCENT, PROMPT};
use parcelrisk_domain::model::{Shipment, TruckType, Weather};
use parcelrisk_types::{Error, LabelMatching, RecordField, Result};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

/// Upper bound on up-front allocation; larger counts grow as records arrive
const MAX_PREALLOC: usize = 1024;

/// Prompt for a shipment count and that many records.
///
/// String fields are taken verbatim apart from the line terminator; bytes
/// that are not valid UTF-8 are replaced rather than rejected.
/// Malformed numbers and early end of input are errors; unknown weather
/// and truck labels are not.
pub fn collect_shipments<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    painter: &Painter,
    matching: LabelMatching,
) -> Result<Vec<Shipment>> {
    writeln!(prompts)?;
    writeln!(
        prompts,
        "{}\n",
        painter.paint("=== PACKAGE DAMAGE RISK PREDICTOR WITH DASHBOARD ===", ACCENT)
    )?;

    write!(
        prompts,
        "{}",
        painter.paint("Enter number of shipments to process: ", PROMPT)
    )?;
    prompts.flush()?;
    let raw_count = read_line(input)?.ok_or(Error::MissingCount)?;
    let count = parse_count(&raw_count)?;
    debug!(count, "shipment count accepted");

    let mut shipments = Vec::with_capacity(count.min(MAX_PREALLOC));
    for record in 1..=count {
        writeln!(prompts)?;
        writeln!(
            prompts,
            "{}",
            painter.paint(&format!("Entering data for shipment {}:", record), PROMPT)
        )?;

        let id = prompt_field(input, prompts, "Shipment ID: ", record, RecordField::Id)?;
        let category = prompt_field(
            input,
            prompts,
            "Shipment Type: (e.g., Electronics, Furniture): ",
            record,
            RecordField::Type,
        )?;
        let raw_fragility = prompt_field(
            input,
            prompts,
            "Fragility (1=very sturdy, 10=extremely fragile): ",
            record,
            RecordField::Fragility,
        )?;
        let fragility = parse_fragility(&raw_fragility, record)?;
        let raw_weather = prompt_field(
            input,
            prompts,
            "Weather (Clear, Rain, Snow, Windy): ",
            record,
            RecordField::Weather,
        )?;
        let raw_truck = prompt_field(
            input,
            prompts,
            "Truck Type (Standard, Refrigerated, AirRide): ",
            record,
            RecordField::TruckType,
        )?;

        let shipment = Shipment::new(
            id,
            category,
            fragility,
            Weather::parse(&raw_weather, matching),
            TruckType::parse(&raw_truck, matching),
        );
        debug!(
            record,
            id = shipment.id(),
            risk_score = shipment.risk_score(),
            weather_recognized = shipment.weather().is_recognized(),
            truck_recognized = shipment.truck_type().is_recognized(),
            "shipment recorded"
        );
        shipments.push(shipment);
    }

    Ok(shipments)
}

fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    prompt: &str,
    record: usize,
    field: RecordField,
) -> Result<String> {
    write!(prompts, "{}", prompt)?;
    prompts.flush()?;
    read_line(input)?.ok_or(Error::TruncatedInput { record, field })
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn parse_count(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| Error::MalformedCount(raw.trim().to_string()))
}

fn parse_fragility(raw: &str, record: usize) -> Result<i32> {
    let value = raw.trim();
    value.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::FragilityOutOfRange {
            record,
            value: value.to_string(),
        },
        _ => Error::MalformedFragility {
            record,
            value: value.to_string(),
        },
    })
}
