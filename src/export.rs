//! CSV export of the full collection.

use std::fmt;

use crate::config::CSV_HEADER;
use crate::student::Student;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Error type for export rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportError(String);

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "csv export failed: {}", self.0)
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError(err.to_string())
    }
}

/// Render `students` as CSV: header row, then one row per record in
/// collection order. Rows end in CRLF; fields are quoted only when needed.
pub fn to_csv(students: &[Student]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for s in students {
        writer.write_record([
            s.id.to_string(),
            s.roll.clone(),
            s.name.clone(),
            s.email.clone(),
            s.department.clone(),
            s.year.to_string(),
            s.created_at.format(TIMESTAMP_FORMAT).to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError(e.to_string()))
}
