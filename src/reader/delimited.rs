//! CSV input.

use std::io::Read;

use tracing::debug;

use crate::{Cell, Result, Sheet};

/// Read comma-separated rows into a sheet called `name`.
///
/// Records may have different lengths; short rows are padded with empty
/// cells. No row is treated as a header.
///
/// # Errors
/// Returns [`Error::Csv`](crate::Error::Csv) on malformed input.
pub fn read_csv<R: Read>(reader: R, name: &str) -> Result<Sheet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::infer).collect::<Vec<_>>());
    }
    debug!(sheet = name, rows = rows.len(), "read csv");
    Ok(Sheet::new(name, rows))
}
