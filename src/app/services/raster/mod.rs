//! ESRI-ASCII raster parsing for landscape grids
//!
//! This module handles the plain-text raster convention shared by every
//! landscape input: a fixed 6-line header (of which only the cell-size line
//! is validated) followed by row-major whitespace-separated cell values.
//!
//! ## Architecture
//!
//! - [`header`] - Raster file reading and cell-size header validation
//! - [`fuel_grid`] - Fuel raster parsing and per-cell fuel classification

pub mod fuel_grid;
pub mod header;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fuel_grid::parse_fuel_grid;
pub use header::{RasterHeader, read_raster};
