//! CSV reading for the ratings dataset.
//!
//! The input is a headered CSV with the columns of
//! [`RatingRecord`](crate::types::RatingRecord). The header row is checked
//! before any row is deserialized so that a renamed or missing required
//! column fails fast with the column's name, rather than surfacing as a
//! confusing per-row deserialization error. Extra columns are ignored.

use crate::error::{DataError, Result};
use crate::types::RatingRecord;
use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use std::path::Path;

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 6] = ["title", "genres", "rating", "age", "year", "decade"];

/// Read and deserialize all rating records from a CSV file.
pub fn read_records(path: &Path) -> Result<Vec<RatingRecord>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataError::Io(err),
    })?;
    read_records_from(file)
}

/// Read and deserialize rating records from any reader.
///
/// Split out from [`read_records`] so tests can feed in-memory CSV without
/// touching the filesystem.
pub fn read_records_from<R: io::Read>(reader: R) -> Result<Vec<RatingRecord>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize().enumerate() {
        // Line 1 is the header row
        let record: RatingRecord = row.map_err(|err| DataError::ParseError {
            line: idx + 2,
            reason: err.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}
