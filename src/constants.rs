//! Application constants for the fuelgrid processor
//!
//! This module contains the fixed filenames, the output column schema,
//! and the domain constants used throughout the data-generation pipeline.

// =============================================================================
// Input File Names
// =============================================================================

/// Fuel raster filename within the input folder
pub const FUELS_RASTER_FILENAME: &str = "fuels.asc";

/// Lookup table filename for the Canadian FBP simulator family
pub const FBP_LOOKUP_FILENAME: &str = "fbp_lookup_table.csv";

/// Lookup table filename for the Kitral simulator family
pub const KITRAL_LOOKUP_FILENAME: &str = "kitral_lookup_table.csv";

/// Lookup table filename for the Spain simulator family
pub const SPAIN_LOOKUP_FILENAME: &str = "spain_lookup_table.csv";

// =============================================================================
// Raster Format Constants
// =============================================================================

/// Number of header lines in an ESRI-ASCII style raster
pub const RASTER_HEADER_LINES: usize = 6;

/// Zero-based index of the validated cell-size header line (line 5)
pub const CELL_SIZE_LINE_INDEX: usize = 4;

/// Keyword expected as the first token of the cell-size header line
pub const CELL_SIZE_KEYWORD: &str = "cellsize";

// =============================================================================
// Output Schema
// =============================================================================

/// Output dataset filename, written into the input folder
pub const DATA_OUTPUT_FILENAME: &str = "Data.csv";

/// The 24 output column names, in serialization order
pub const OUTPUT_COLUMNS: &[&str; 24] = &[
    "fueltype", "lat", "lon", "elev", "ws", "waz", "ps", "saz", "cur", "cbd", "cbh", "ccf",
    "ftypeN", "fmc", "py", "jd", "jd_min", "pc", "pdf", "time", "ffmc", "bui", "gfl", "pattern",
];

// =============================================================================
// Domain Constants
// =============================================================================

/// Model code assigned to cells with no fuel classification
pub const NON_FUEL_CODE: &str = "NF";

/// Raw fuel code assigned to cells with no fuel classification
pub const NON_FUEL_RAW_CODE: i32 = 0;

/// Placeholder latitude emitted for every cell
pub const DEFAULT_LATITUDE: f32 = 51.621_244;

/// Placeholder longitude emitted for every cell
pub const DEFAULT_LONGITUDE: f32 = -115.608_378;

/// Fixed time-of-day value emitted for every cell
pub const FIXED_OBSERVATION_TIME: i32 = 20;

/// Default curing percentage for open/grass fuel types with no curing data
pub const DEFAULT_GRASS_CURING: i32 = 60;

/// The open/grass model codes eligible for the curing default
pub const GRASS_FUEL_CODES: &[&str] = &["O1a", "O1b"];

/// Divisor converting 0-255 color channels to the [0, 1] range
pub const COLOR_CHANNEL_MAX: f32 = 255.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_schema_shape() {
        assert_eq!(OUTPUT_COLUMNS.len(), 24);
        assert_eq!(OUTPUT_COLUMNS[0], "fueltype");
        assert_eq!(OUTPUT_COLUMNS[23], "pattern");
    }

    #[test]
    fn test_grass_codes() {
        assert!(GRASS_FUEL_CODES.contains(&"O1a"));
        assert!(GRASS_FUEL_CODES.contains(&"O1b"));
        assert_eq!(GRASS_FUEL_CODES.len(), 2);
    }
}
