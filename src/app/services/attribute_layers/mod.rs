//! Optional physical-attribute raster loading
//!
//! Loads each of the nine optional attribute rasters (terrain, curing,
//! canopy metrics, foliar moisture) into buffers aligned 1:1 with the fuel
//! grid cells. An absent raster leaves its buffer filled with the missing
//! sentinel; a present raster fills exactly one buffer and never more
//! entries than the cell count.

pub mod loader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::{AttributeKind, AttributeLayers, MISSING_VALUE};
