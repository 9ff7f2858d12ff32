//! Record set serialization

use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::models::CellRecord;
use crate::constants::{DATA_OUTPUT_FILENAME, OUTPUT_COLUMNS};
use crate::{Error, Result};

/// Write the record set to `Data.csv` inside the given folder
///
/// Creates or overwrites the file. One header line, then one line per
/// record in row-major grid order, every field rendered by the uniform
/// [`FieldValue`](crate::app::models::FieldValue) conversion. An unwritable
/// destination yields [`Error::OutputWrite`]; no retries, and no partial
/// file is left open.
pub fn write_dataset(records: &[CellRecord], folder: &Path) -> Result<PathBuf> {
    let path = folder.join(DATA_OUTPUT_FILENAME);
    info!("Writing {} records to {}", records.len(), path.display());

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| Error::output_write(path.display().to_string(), e.to_string()))?;

    // The trailing separator on every line is rendered as a final empty field
    writer
        .write_record(OUTPUT_COLUMNS.iter().copied().chain(std::iter::once("")))
        .map_err(|e| Error::output_write(path.display().to_string(), e.to_string()))?;

    for record in records {
        let mut fields: Vec<String> = record
            .fields()
            .iter()
            .map(|field| field.to_string())
            .collect();
        fields.push(String::new());

        writer
            .write_record(&fields)
            .map_err(|e| Error::output_write(path.display().to_string(), e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| Error::output_write(path.display().to_string(), e.to_string()))?;

    info!("Data file generated successfully");
    Ok(path)
}
