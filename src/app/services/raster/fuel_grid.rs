//! Fuel raster parsing and per-cell classification
//!
//! Each data token of the fuel raster is looked up in the fuel classification
//! mapping: recognized codes keep their integer value and mapped model code,
//! everything else normalizes to the non-fuel cell (raw code 0, model "NF").

use std::path::Path;
use tracing::{debug, info};

use super::header::read_raster;
use crate::app::models::{FuelGrid, FuelLookup};
use crate::constants::{NON_FUEL_CODE, NON_FUEL_RAW_CODE};
use crate::{Error, Result};

/// Parse the fuel raster into a classified row-major grid
///
/// Column count is the maximum token count observed across all data rows;
/// row count is the number of data lines. A recognized token that fails to
/// parse as an integer is a [`Error::ValueParse`] for this raster.
pub fn parse_fuel_grid(path: &Path, lookup: &FuelLookup) -> Result<FuelGrid> {
    info!("Parsing fuel raster: {}", path.display());

    let (header, data_lines) = read_raster(path)?;

    let mut raw_codes = Vec::new();
    let mut model_codes = Vec::new();
    let mut cols = 0;

    for line in &data_lines {
        let mut row_width = 0;

        for token in line.split_whitespace() {
            row_width += 1;

            match lookup.model_code(token) {
                Some(model_code) => {
                    let raw_code = token.parse::<i32>().map_err(|_| {
                        Error::value_parse(path.display().to_string(), token)
                    })?;
                    raw_codes.push(raw_code);
                    model_codes.push(model_code.to_string());
                }
                None => {
                    raw_codes.push(NON_FUEL_RAW_CODE);
                    model_codes.push(NON_FUEL_CODE.to_string());
                }
            }
        }

        cols = cols.max(row_width);
    }

    let grid = FuelGrid {
        raw_codes,
        model_codes,
        rows: data_lines.len(),
        cols,
        cell_size: header.cell_size,
    };

    debug!(
        "Fuel grid parsed: {} cells ({} rows x {} cols), cell size {}",
        grid.cell_count(),
        grid.rows,
        grid.cols,
        grid.cell_size
    );

    Ok(grid)
}
