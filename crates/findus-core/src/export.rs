//! Flat exports of the final station list.
//!
//! JSON is one nested object per station; CSV is one row per charger with
//! station-level fields duplicated, matching the fixed Korean column header
//! downstream consumers expect.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::Station;

/// Fixed CSV column header, in order.
pub const CSV_HEADER: [&str; 9] = [
    "충전소명",
    "위도",
    "경도",
    "연중 무휴 여부",
    "충전기 타입",
    "충전 속도",
    "충전기 개수",
    "지번 주소",
    "도로명 주소",
];

/// Serialize the station list as pretty-printed JSON.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_json(stations: &[Station]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stations)
}

/// Write the station list as CSV, one row per charger.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv<W: Write>(mut writer: W, stations: &[Station]) -> io::Result<()> {
    write_row(&mut writer, &CSV_HEADER.map(ToString::to_string))?;

    for station in stations {
        let always_open = if station.is_always_open { "O" } else { "X" };
        let lot_address = station.address.region3.as_deref().unwrap_or("");

        for charger in &station.chargers {
            let row = [
                station.name.clone(),
                station.coordinate.latitude.to_string(),
                station.coordinate.longitude.to_string(),
                always_open.to_string(),
                station.charger_type.korean_label().to_string(),
                charger.max_power_kw.to_string(),
                charger.port_count.to_string(),
                lot_address.to_string(),
                station.address.name.clone(),
            ];
            write_row(&mut writer, &row)?;
        }
    }
    Ok(())
}

/// Write the station list as a CSV file at `path`.
///
/// # Errors
///
/// Returns an `io::Error` if the file cannot be created or written.
pub fn write_csv_file<P: AsRef<Path>>(path: P, stations: &[Station]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, stations)?;
    writer.flush()
}

/// Write one quote-aware CSV row.
fn write_row<W: Write>(writer: &mut W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(writer, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(writer, "\"{escaped}\"")?;
        } else {
            write!(writer, "{cell}")?;
        }
    }
    writeln!(writer)
}

fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
