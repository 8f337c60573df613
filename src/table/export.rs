//! Export of the selected rows
//!
//! `export_selection` projects rendered-view indices onto flat records in
//! ascending index order. The CSV helpers below turn those records into text
//! with the `Name,Gender,Email` header and standard quoting.

use super::record::{Field, FieldAccess};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name for exports
pub const DEFAULT_EXPORT_FILE: &str = "selected_users.csv";

/// One exported row; field names double as the CSV header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl ExportRecord {
    pub fn from_fields<T: FieldAccess + ?Sized>(record: &T) -> Self {
        Self {
            name: record.field(Field::Name).to_string(),
            gender: record.field(Field::Gender).to_string(),
            email: record.field(Field::Email).to_string(),
        }
    }
}

/// Errors that can occur while writing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Project `indices` (positions in `rendered`) onto flat export records
///
/// Output follows ascending index order regardless of the order rows were
/// selected in. Indices past the end of `rendered` are skipped.
pub fn export_selection<T: FieldAccess>(
    rendered: &[T],
    indices: &BTreeSet<usize>,
) -> Vec<ExportRecord> {
    indices
        .iter()
        .filter_map(|&i| rendered.get(i))
        .map(ExportRecord::from_fields)
        .collect()
}

/// Write records as CSV, header first
///
/// The header is emitted even when `records` is empty.
pub fn write_csv<W: Write>(records: &[ExportRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(Field::all().iter().map(Field::header))?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render records to a CSV string
pub fn to_csv_string(records: &[ExportRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Write records to a CSV file, replacing any existing file
pub fn export_to_file(path: &Path, records: &[ExportRecord]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(records, std::io::BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = records.len(), "Exported selection");
    Ok(())
}
