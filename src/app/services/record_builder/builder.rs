//! Field-by-field derivation of the 24-field cell record

use super::fuel_tables;
use crate::app::models::{CellRecord, FieldValue, FuelGrid};
use crate::app::services::attribute_layers::AttributeLayers;
use crate::constants::{
    DEFAULT_GRASS_CURING, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, FIXED_OBSERVATION_TIME,
    GRASS_FUEL_CODES,
};

/// Build one record per grid cell, in row-major order
///
/// Caller guarantees the attribute buffers are aligned with the grid
/// (equal length), which [`AttributeLayers::load`] enforces.
pub fn build_records(grid: &FuelGrid, layers: &AttributeLayers) -> Vec<CellRecord> {
    (0..grid.cell_count())
        .map(|cell| build_record(grid, layers, cell))
        .collect()
}

fn build_record(grid: &FuelGrid, layers: &AttributeLayers, cell: usize) -> CellRecord {
    let model_code = &grid.model_codes[cell];

    CellRecord {
        fueltype: FieldValue::Text(model_code.clone()),
        lat: FieldValue::Float(DEFAULT_LATITUDE),
        lon: FieldValue::Float(DEFAULT_LONGITUDE),
        elev: measurement(layers.elevation[cell]),
        // Wind speed and azimuth are never computed by this subsystem
        ws: FieldValue::Blank,
        waz: FieldValue::Blank,
        ps: measurement(layers.slope[cell]),
        saz: measurement(layers.solar_azimuth[cell]),
        cur: curing(layers.curing[cell], model_code),
        cbd: measurement(layers.canopy_bulk_density[cell]),
        cbh: measurement(layers.canopy_base_height[cell]),
        ccf: measurement(layers.canopy_cover_fraction[cell]),
        ftype_n: FieldValue::Int(grid.raw_codes[cell]),
        fmc: measurement(layers.foliar_moisture[cell]),
        py: measurement(layers.conifer_yield[cell]),
        // Julian day bounds are never computed by this subsystem
        jd: FieldValue::Blank,
        jd_min: FieldValue::Blank,
        pc: fuel_tables::percent_conifer(model_code).map_or(FieldValue::Blank, FieldValue::Int),
        pdf: fuel_tables::percent_dead_fir(model_code).map_or(FieldValue::Blank, FieldValue::Int),
        time: FieldValue::Int(FIXED_OBSERVATION_TIME),
        // Fine fuel moisture code and buildup index are never computed here
        ffmc: FieldValue::Blank,
        bui: FieldValue::Blank,
        gfl: fuel_tables::surface_fuel_load(model_code).map_or(FieldValue::Blank, FieldValue::Float),
        pattern: FieldValue::Blank,
    }
}

/// Pass an attribute value through, converting the missing sentinel to blank
fn measurement(value: f32) -> FieldValue {
    if value.is_nan() {
        FieldValue::Blank
    } else {
        FieldValue::Float(value)
    }
}

/// Curing passes through when supplied; the open/grass fuel types default
/// to a fixed percentage when no curing data exists, everything else blanks
fn curing(value: f32, model_code: &str) -> FieldValue {
    if !value.is_nan() {
        return FieldValue::Float(value);
    }

    if GRASS_FUEL_CODES.contains(&model_code) {
        FieldValue::Int(DEFAULT_GRASS_CURING)
    } else {
        FieldValue::Blank
    }
}
