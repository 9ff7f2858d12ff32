//! Unit tests for the record_builder module


use crate::app::models::FuelGrid;
use crate::app::services::attribute_layers::{AttributeLayers, MISSING_VALUE};

/// Grid with the given model codes, raw codes derived where parseable
pub fn test_grid(model_codes: &[&str], raw_codes: &[i32]) -> FuelGrid {
    FuelGrid {
        raw_codes: raw_codes.to_vec(),
        model_codes: model_codes.iter().map(|s| s.to_string()).collect(),
        rows: 1,
        cols: model_codes.len(),
        cell_size: 100.0,
    }
}

/// Attribute layers with every entry missing
pub fn missing_layers(cell_count: usize) -> AttributeLayers {
    AttributeLayers {
        elevation: vec![MISSING_VALUE; cell_count],
        solar_azimuth: vec![MISSING_VALUE; cell_count],
        slope: vec![MISSING_VALUE; cell_count],
        curing: vec![MISSING_VALUE; cell_count],
        canopy_bulk_density: vec![MISSING_VALUE; cell_count],
        canopy_base_height: vec![MISSING_VALUE; cell_count],
        canopy_cover_fraction: vec![MISSING_VALUE; cell_count],
        conifer_yield: vec![MISSING_VALUE; cell_count],
        foliar_moisture: vec![MISSING_VALUE; cell_count],
    }
}
