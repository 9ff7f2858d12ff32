//! Fuelgrid Processor Library
//!
//! A Rust library for converting gridded wildfire landscape data (fuel type,
//! terrain, and canopy rasters in the ESRI-ASCII convention) plus a fuel-code
//! lookup table into one normalized per-cell attribute record set, serialized
//! as CSV for consumption by a downstream fire-spread model.
//!
//! This library provides tools for:
//! - Parsing fuel-code lookup tables into model-code and display-color mappings
//! - Parsing ESRI-ASCII fuel rasters with validated cell-size headers
//! - Loading nine optional physical-attribute rasters into cell-aligned buffers
//! - Assembling the fixed 24-field per-cell record schema
//! - Writing the record set as a delimited `Data.csv` file
//! - Structured error handling and recovery

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod pipeline;
    pub mod services {
        pub mod attribute_layers;
        pub mod dataset_writer;
        pub mod fuel_lookup;
        pub mod raster;
        pub mod record_builder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellRecord, FieldValue, FuelGrid, FuelLookup, SimulatorFamily};
pub use app::pipeline::{GenerationStats, generate_dataset};

/// Result type alias for the fuelgrid processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for landscape data generation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Fuel lookup table absent or unreadable
    ///
    /// Signals "no classification data" to the caller, which decides whether
    /// to abort or to proceed with every cell classified as non-fuel.
    #[error("Fuel lookup table not found or unreadable: {path}")]
    MissingLookupTable { path: String },

    /// Raster header line 5 absent or not of the form `cellsize <number>`
    #[error("Malformed raster header in '{path}': expected 'cellsize <number>', got '{line}'")]
    MalformedRasterHeader { path: String, line: String },

    /// A data token expected to be numeric could not be parsed
    #[error("Invalid numeric token '{token}' in '{path}'")]
    ValueParse { path: String, token: String },

    /// Output file could not be created or written
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite { path: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a missing lookup table error
    pub fn missing_lookup_table(path: impl Into<String>) -> Self {
        Self::MissingLookupTable { path: path.into() }
    }

    /// Create a malformed raster header error
    pub fn malformed_raster_header(path: impl Into<String>, line: impl Into<String>) -> Self {
        Self::MalformedRasterHeader {
            path: path.into(),
            line: line.into(),
        }
    }

    /// Create a value parse error
    pub fn value_parse(path: impl Into<String>, token: impl Into<String>) -> Self {
        Self::ValueParse {
            path: path.into(),
            token: token.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutputWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
