//! CSV loading
//!
//! Reads the launch CSV into a [`LaunchTable`]. Loading is strict: a
//! missing file, a missing column, or a malformed row aborts startup
//! (there is no partial-load or recovery path).

use std::path::Path;

use crate::data::error::{DataError, DataResult};
use crate::data::record::LaunchRecord;
use crate::data::table::LaunchTable;

/// Columns the dashboard requires; extra columns are ignored
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Load the launch table from a CSV file
pub fn load_csv(path: &Path) -> DataResult<LaunchTable> {
    let reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let table = read_table(reader)?;
    tracing::info!(
        path = %path.display(),
        records = table.len(),
        sites = table.sites().len(),
        "Launch dataset loaded"
    );
    Ok(table)
}

/// Load the launch table from a CSV string (useful for testing)
pub fn load_csv_str(csv_data: &str) -> DataResult<LaunchTable> {
    read_table(csv::Reader::from_reader(csv_data.as_bytes()))
}

fn read_table<R: std::io::Read>(mut reader: csv::Reader<R>) -> DataResult<LaunchTable> {
    let headers = reader.headers().map_err(csv_error)?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataError::MissingColumn(col.to_string()));
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<LaunchRecord>() {
        records.push(result.map_err(csv_error)?);
    }

    LaunchTable::from_records(records)
}

/// Map a csv crate error, preserving the offending line where known
fn csv_error(err: csv::Error) -> DataError {
    if let Some(io) = err_as_io(&err) {
        return DataError::Io(io);
    }
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    DataError::Csv {
        line,
        message: err.to_string(),
    }
}

fn err_as_io(err: &csv::Error) -> Option<std::io::Error> {
    match err.kind() {
        csv::ErrorKind::Io(io) => Some(std::io::Error::new(io.kind(), io.to_string())),
        _ => None,
    }
}
