use crate::amount::Amount;
use crate::fee_calculator::{RateTable, ValidationError};
use crate::vehicle::VehicleType;
use anyhow::{Context, Result, bail};
use csv::StringRecord;
use std::io::Read;
use std::sync::LazyLock;

/// Everything the attendant types into the form for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSession {
    pub plate: Option<String>,
    pub vehicle_type: VehicleType,
    pub is_electric: bool,
    pub entry_time: String,
    pub exit_time: String,
}

impl ParkingSession {
    pub fn fee(&self, rates: &RateTable) -> Result<Amount, ValidationError> {
        rates.calculate(
            self.vehicle_type,
            self.is_electric,
            &self.entry_time,
            &self.exit_time,
        )
    }

    pub fn plate_or_placeholder(&self) -> &str {
        self.plate.as_deref().unwrap_or("-")
    }
}

static EXPECTED_HEADERS: LazyLock<StringRecord> = LazyLock::new(|| {
    StringRecord::from(vec!["PLATE", "VEHICLE TYPE", "ELECTRIC", "ENTRY", "EXIT"])
});

pub fn read_sessions(reader: impl Read) -> Result<Vec<ParkingSession>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("failed to read the session headers")?
        .clone();
    if headers != *EXPECTED_HEADERS {
        bail!(
            "unexpected headers in sessions CSV: {:?}, expected: {:?}",
            headers,
            *EXPECTED_HEADERS
        );
    }
    csv_reader
        .into_records()
        .enumerate()
        .map(|(index, record)| -> Result<ParkingSession> {
            // Header is line 1.
            let line = index + 2;
            let record =
                record.with_context(|| format!("failed to read session on line {line}"))?;
            let is_electric = parse_electric_flag(&record[2]).with_context(|| {
                format!("invalid electric flag on line {line}: {:?}", &record[2])
            })?;
            Ok(ParkingSession {
                plate: Some(record[0].to_string()).filter(|plate| !plate.is_empty()),
                vehicle_type: VehicleType::from_label_or_unselected(&record[1]),
                is_electric,
                entry_time: record[3].to_string(),
                exit_time: record[4].to_string(),
            })
        })
        .collect()
}

fn parse_electric_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "" | "no" | "false" | "nao" | "não" | "0" => Some(false),
        "yes" | "true" | "sim" | "1" => Some(true),
        _ => None,
    }
}
