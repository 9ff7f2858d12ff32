//! Sequential data-generation pipeline
//!
//! Orchestrates the five services in order: lookup-table parsing, fuel
//! raster ingestion, attribute layer loading, record assembly, and CSV
//! serialization. Fully single-threaded and synchronous; every failure
//! surfaces as a structured [`Error`](crate::Error) rather than a process
//! abort.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::models::{FuelLookup, SimulatorFamily};
use crate::app::services::attribute_layers::AttributeLayers;
use crate::app::services::dataset_writer::write_dataset;
use crate::app::services::fuel_lookup::parse_lookup_table;
use crate::app::services::raster::parse_fuel_grid;
use crate::app::services::record_builder::build_records;
use crate::constants::FUELS_RASTER_FILENAME;
use crate::{Error, Result};

/// Summary of one generation run, for operator reporting
#[derive(Debug, Clone)]
pub struct GenerationStats {
    /// Total number of grid cells (= output data rows)
    pub cells: usize,
    /// Number of raster data rows
    pub rows: usize,
    /// Maximum raster row width
    pub cols: usize,
    /// Map units per cell edge
    pub cell_size: f32,
    /// Number of fuel codes loaded from the lookup table
    pub fuel_codes_loaded: usize,
    /// Path of the written dataset
    pub output_path: PathBuf,
}

/// Generate the per-cell attribute dataset for one landscape folder
///
/// Reads the simulator family's lookup table and the `fuels` raster, loads
/// the nine optional attribute rasters, assembles one 24-field record per
/// cell, and writes `Data.csv` into the same folder.
///
/// A missing lookup table is not fatal: the run proceeds loudly with no
/// classification data, so every cell is emitted as non-fuel. All other
/// input failures propagate as structured errors.
pub fn generate_dataset(
    input_folder: &Path,
    simulator: SimulatorFamily,
) -> Result<GenerationStats> {
    info!(
        "Generating dataset for {} with {} fuel models",
        input_folder.display(),
        simulator
    );

    let lookup_path = input_folder.join(simulator.lookup_filename());
    let lookup = match parse_lookup_table(&lookup_path) {
        Ok(lookup) => lookup,
        Err(Error::MissingLookupTable { path }) => {
            warn!(
                "No classification data at {}; every cell will be classified as non-fuel",
                path
            );
            FuelLookup::default()
        }
        Err(e) => return Err(e),
    };

    let fuels_path = input_folder.join(FUELS_RASTER_FILENAME);
    let grid = parse_fuel_grid(&fuels_path, &lookup)?;
    info!(
        "Fuel grid: {} cells ({} rows x {} cols), cell size {}",
        grid.cell_count(),
        grid.rows,
        grid.cols,
        grid.cell_size
    );

    let layers = AttributeLayers::load(input_folder, grid.cell_count())?;
    let records = build_records(&grid, &layers);
    let output_path = write_dataset(&records, input_folder)?;

    Ok(GenerationStats {
        cells: grid.cell_count(),
        rows: grid.rows,
        cols: grid.cols,
        cell_size: grid.cell_size,
        fuel_codes_loaded: lookup.len(),
        output_path,
    })
}
