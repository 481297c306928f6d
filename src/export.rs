//! Comma-separated export of the turn log.
//!
//! Column order and units are fixed so files stay interchangeable with
//! earlier exports:
//! `Turn,Time (s),Gamma,Momentum (kg·m/s),Kinetic Energy (J),Total Energy (J),Period (s)`.

use std::io::Write;

use log::debug;

use crate::{
    core::{turn_log::TurnLog, types::TurnEvent},
    error::{CyclotronError, CyclotronResult},
    utils::math::format_exponential,
};

pub const CSV_HEADERS: [&str; 7] = [
    "Turn",
    "Time (s)",
    "Gamma",
    "Momentum (kg·m/s)",
    "Kinetic Energy (J)",
    "Total Energy (J)",
    "Period (s)",
];

const EXPONENT_DIGITS: usize = 6;
const GAMMA_DECIMALS: usize = 6;

/// Formats the fields of one event in column order.
pub fn format_fields(event: &TurnEvent) -> [String; 7] {
    [
        event.turn.to_string(),
        format_exponential(event.time, EXPONENT_DIGITS),
        format!("{:.prec$}", event.gamma, prec = GAMMA_DECIMALS),
        format_exponential(event.momentum, EXPONENT_DIGITS),
        format_exponential(event.kinetic_energy, EXPONENT_DIGITS),
        format_exponential(event.total_energy, EXPONENT_DIGITS),
        format_exponential(event.period, EXPONENT_DIGITS),
    ]
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, log: &TurnLog) -> CyclotronResult<()> {
    if log.is_empty() {
        return Err(CyclotronError::NoData);
    }

    writer.write_record(CSV_HEADERS)?;
    for event in log {
        writer.write_record(format_fields(event))?;
    }
    writer.flush()?;
    debug!("exported {} turn records", log.len());
    Ok(())
}

/// Writes the header and one record per event, each terminated by `\n`.
/// Fails with [`CyclotronError::NoData`] on an empty log.
pub fn write_csv<W: Write>(writer: W, log: &TurnLog) -> CyclotronResult<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(writer);
    write_records(&mut writer, log)
}

pub fn to_csv_string(log: &TurnLog) -> CyclotronResult<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    write_records(&mut writer, log)?;
    let buffer = writer
        .into_inner()
        .map_err(|err| CyclotronError::Io(err.into_error()))?;
    Ok(String::from_utf8(buffer)?)
}

/// Download name for an export taken at `unix_millis`.
pub fn file_name(unix_millis: u128) -> String {
    format!("cyclotron_data_{unix_millis}.csv")
}

/// Export-when-complete toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoExport {
    pub enabled: bool,
}

impl AutoExport {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether an export is due: enabled, not running, and something recorded.
    pub fn is_due(&self, running: bool, recorded_turns: usize) -> bool {
        self.enabled && !running && recorded_turns > 0
    }
}
