//! Status command implementation.
//!
//! This module implements the `status` command, which displays the full
//! slot inventory in various formats (table, JSON, CSV).

use std::io::Write;

use clap::{Args, ValueEnum};
use serde::Serialize;

use carpark::{status, Slot};

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "slot_id",
    "category",
    "reserved",
    "occupied",
    "license_plate",
    "vehicle_type",
    "entry_time",
];

/// Show the full slot inventory.
#[derive(Args)]
pub struct StatusCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "CARPARK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only show occupied slots
    #[arg(long)]
    pub occupied_only: bool,
}

/// Output format for the status command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// A single slot row in machine-readable output.
#[derive(Serialize)]
struct SlotRow {
    slot_id: String,
    category: String,
    reserved: bool,
    occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry_time: Option<String>,
}

impl From<&Slot> for SlotRow {
    fn from(slot: &Slot) -> Self {
        Self {
            slot_id: slot.id().to_string(),
            category: slot.category().to_string(),
            reserved: slot.reserved(),
            occupied: slot.occupied(),
            license_plate: slot.vehicle().map(|v| v.license_plate().to_string()),
            vehicle_type: slot.vehicle().map(|v| v.vehicle_type().to_string()),
            entry_time: slot.vehicle().map(|v| format_timestamp(v.entry_time())),
        }
    }
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let snapshot = status(&db).map_err(CliError::from)?;

        let mut slots: Vec<&Slot> = snapshot.slots().iter().collect();
        if self.occupied_only {
            slots.retain(|s| s.occupied());
        }

        match self.format {
            OutputFormat::Table => format_as_table(&slots, &snapshot)?,
            OutputFormat::Json => format_as_json(&slots)?,
            OutputFormat::Csv => format_as_csv(&slots)?,
        }

        Ok(())
    }
}

/// Format slots as a human-readable table.
fn format_as_table(slots: &[&Slot], snapshot: &carpark::LotStatus) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for slot in slots {
        let row = SlotRow::from(*slot);
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.slot_id,
            row.category,
            row.reserved,
            row.occupied,
            row.license_plate.as_deref().unwrap_or("-"),
            row.vehicle_type.as_deref().unwrap_or("-"),
            row.entry_time.as_deref().unwrap_or("-"),
        )?;
    }

    writeln!(
        handle,
        "\n{} slots, {} occupied, {} available",
        snapshot.total(),
        snapshot.occupied_count(),
        snapshot.available_count()
    )?;

    Ok(())
}

/// Format slots as JSON.
fn format_as_json(slots: &[&Slot]) -> Result<(), CliError> {
    let rows: Vec<SlotRow> = slots.iter().map(|s| SlotRow::from(*s)).collect();
    let json = serde_json::to_string_pretty(&rows)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    println!("{json}");
    Ok(())
}

/// Format slots as CSV.
fn format_as_csv(slots: &[&Slot]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());

    writer
        .write_record(COLUMN_HEADERS)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    for slot in slots {
        let row = SlotRow::from(*slot);
        writer
            .write_record([
                row.slot_id.as_str(),
                row.category.as_str(),
                if row.reserved { "true" } else { "false" },
                if row.occupied { "true" } else { "false" },
                row.license_plate.as_deref().unwrap_or(""),
                row.vehicle_type.as_deref().unwrap_or(""),
                row.entry_time.as_deref().unwrap_or(""),
            ])
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    }

    writer
        .flush()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    Ok(())
}
