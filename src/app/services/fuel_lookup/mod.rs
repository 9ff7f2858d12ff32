//! Fuel lookup table parsing
//!
//! Parses the fuel-code reference CSV into the classification data used to
//! decode the fuel raster: a raw-code to short-model-code mapping and a
//! raw-code to display-color mapping.

pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::parse_lookup_table;
