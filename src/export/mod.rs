//! CSV file output for listing tables.

use crate::ebay::models::ListingTable;
use crate::error::ExportError;
use std::io::Write;
use std::path::Path;
use tracing::{error, info};

/// Writes `table` to `path` as CSV with a header row, replacing any existing
/// file. Success and failure are both logged; the error is also returned.
pub fn save_csv(table: &ListingTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();

    let result = csv::Writer::from_path(path).and_then(|mut writer| {
        write_table(&mut writer, table)?;
        writer.flush().map_err(csv::Error::from)
    });

    match result {
        Ok(()) => {
            info!("Data saved to {}", path.display());
            Ok(())
        }
        Err(source) => {
            let err = ExportError::Write { path: path.to_path_buf(), source };
            error!("Error saving data: {}", err);
            Err(err)
        }
    }
}

/// Writes the header and rows of `table` to any CSV writer.
pub fn write_table<W: Write>(
    writer: &mut csv::Writer<W>,
    table: &ListingTable,
) -> Result<(), csv::Error> {
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.record())?;
    }
    Ok(())
}

/// Renders `table` as a CSV string, header included.
pub fn to_csv_string(table: &ListingTable) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_table(&mut writer, table)?;
    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
