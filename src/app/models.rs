//! Core data models for the fuelgrid processor
//!
//! Defines the lookup-table, grid, and record types flowing between the
//! pipeline services. Every entity here is built once per invocation and
//! never mutated after construction.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    FBP_LOOKUP_FILENAME, KITRAL_LOOKUP_FILENAME, OUTPUT_COLUMNS, SPAIN_LOOKUP_FILENAME,
};
use crate::{Error, Result};

/// Simulator family selecting which fuel lookup table to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatorFamily {
    /// Canadian Fire Behaviour Prediction fuel models
    #[default]
    Fbp,
    /// Chilean Kitral fuel models
    Kitral,
    /// Spanish fuel models
    Spain,
}

impl SimulatorFamily {
    /// Lookup table filename for this simulator family
    pub fn lookup_filename(&self) -> &'static str {
        match self {
            SimulatorFamily::Fbp => FBP_LOOKUP_FILENAME,
            SimulatorFamily::Kitral => KITRAL_LOOKUP_FILENAME,
            SimulatorFamily::Spain => SPAIN_LOOKUP_FILENAME,
        }
    }
}

impl FromStr for SimulatorFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fbp" | "c" | "canada" => Ok(SimulatorFamily::Fbp),
            "kitral" | "k" => Ok(SimulatorFamily::Kitral),
            "spain" | "s" => Ok(SimulatorFamily::Spain),
            other => Err(Error::configuration(format!(
                "Unknown simulator family '{}'. Available families: fbp, kitral, spain",
                other
            ))),
        }
    }
}

impl fmt::Display for SimulatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorFamily::Fbp => write!(f, "fbp"),
            SimulatorFamily::Kitral => write!(f, "kitral"),
            SimulatorFamily::Spain => write!(f, "spain"),
        }
    }
}

/// Fuel classification data parsed from a lookup table
///
/// Maps raw fuel code strings to short model codes and 4-channel display
/// colors. The default value carries no classification data, causing every
/// grid cell to fall back to the non-fuel code.
#[derive(Debug, Clone, Default)]
pub struct FuelLookup {
    model_codes: HashMap<String, String>,
    colors: HashMap<String, [f32; 4]>,
}

impl FuelLookup {
    /// Register a fuel code entry. A repeated code overwrites the earlier
    /// entry, so the last occurrence in the source table wins.
    pub fn insert(&mut self, raw_code: String, model_code: String, color: [f32; 4]) {
        self.model_codes.insert(raw_code.clone(), model_code);
        self.colors.insert(raw_code, color);
    }

    /// Short model code for a raw fuel code, if classified
    pub fn model_code(&self, raw_code: &str) -> Option<&str> {
        self.model_codes.get(raw_code).map(String::as_str)
    }

    /// Display color for a raw fuel code, if classified
    pub fn color(&self, raw_code: &str) -> Option<&[f32; 4]> {
        self.colors.get(raw_code)
    }

    /// Number of classified fuel codes
    pub fn len(&self) -> usize {
        self.model_codes.len()
    }

    /// True when no classification data is available
    pub fn is_empty(&self) -> bool {
        self.model_codes.is_empty()
    }
}

/// Immutable row-major raster of classified fuel cells
///
/// Invariant: `raw_codes` and `model_codes` have equal length and describe
/// the same cells; unrecognized raster tokens are normalized to raw code 0
/// and the non-fuel model code.
#[derive(Debug, Clone)]
pub struct FuelGrid {
    /// Integer fuel code per cell, row-major
    pub raw_codes: Vec<i32>,
    /// Short model code per cell, row-major
    pub model_codes: Vec<String>,
    /// Number of data rows in the source raster
    pub rows: usize,
    /// Maximum row width observed across all rows
    pub cols: usize,
    /// Map units per cell edge
    pub cell_size: f32,
}

impl FuelGrid {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.model_codes.len()
    }
}

/// One value of a cell record field
///
/// Blank is distinct from the missing-numeric sentinel: NaN buffer entries
/// are converted to Blank at record-build time, and Blank serializes to an
/// empty field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f32),
    Int(i32),
    Blank,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Blank => Ok(()),
        }
    }
}

/// One normalized per-cell attribute record with the fixed 24-field schema
///
/// Transient: constructed only to be immediately serialized.
#[derive(Debug, Clone)]
pub struct CellRecord {
    pub fueltype: FieldValue,
    pub lat: FieldValue,
    pub lon: FieldValue,
    pub elev: FieldValue,
    pub ws: FieldValue,
    pub waz: FieldValue,
    pub ps: FieldValue,
    pub saz: FieldValue,
    pub cur: FieldValue,
    pub cbd: FieldValue,
    pub cbh: FieldValue,
    pub ccf: FieldValue,
    pub ftype_n: FieldValue,
    pub fmc: FieldValue,
    pub py: FieldValue,
    pub jd: FieldValue,
    pub jd_min: FieldValue,
    pub pc: FieldValue,
    pub pdf: FieldValue,
    pub time: FieldValue,
    pub ffmc: FieldValue,
    pub bui: FieldValue,
    pub gfl: FieldValue,
    pub pattern: FieldValue,
}

impl CellRecord {
    /// Field references in output column order (matching [`OUTPUT_COLUMNS`])
    pub fn fields(&self) -> [&FieldValue; 24] {
        [
            &self.fueltype,
            &self.lat,
            &self.lon,
            &self.elev,
            &self.ws,
            &self.waz,
            &self.ps,
            &self.saz,
            &self.cur,
            &self.cbd,
            &self.cbh,
            &self.ccf,
            &self.ftype_n,
            &self.fmc,
            &self.py,
            &self.jd,
            &self.jd_min,
            &self.pc,
            &self.pdf,
            &self.time,
            &self.ffmc,
            &self.bui,
            &self.gfl,
            &self.pattern,
        ]
    }

    /// Field value by output column name, used by schema-order assertions
    pub fn field(&self, column: &str) -> Option<&FieldValue> {
        OUTPUT_COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|index| self.fields()[index])
    }
}
