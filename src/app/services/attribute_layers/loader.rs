//! Attribute raster loading into cell-aligned buffers

use std::path::Path;
use tracing::{debug, info};

use crate::app::services::raster::read_raster;
use crate::{Error, Result};

/// Missing-value sentinel for attribute buffers, distinct from zero
pub const MISSING_VALUE: f32 = f32::NAN;

/// The nine physical attributes, in their fixed load order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Elevation,
    SolarAzimuth,
    Slope,
    Curing,
    CanopyBulkDensity,
    CanopyBaseHeight,
    CanopyCoverFraction,
    ConiferYield,
    FoliarMoisture,
}

impl AttributeKind {
    /// All attributes in load order
    pub const ALL: [AttributeKind; 9] = [
        AttributeKind::Elevation,
        AttributeKind::SolarAzimuth,
        AttributeKind::Slope,
        AttributeKind::Curing,
        AttributeKind::CanopyBulkDensity,
        AttributeKind::CanopyBaseHeight,
        AttributeKind::CanopyCoverFraction,
        AttributeKind::ConiferYield,
        AttributeKind::FoliarMoisture,
    ];

    /// Expected raster filename within the input folder
    pub fn filename(&self) -> &'static str {
        match self {
            AttributeKind::Elevation => "elevation.asc",
            AttributeKind::SolarAzimuth => "saz.asc",
            AttributeKind::Slope => "slope.asc",
            AttributeKind::Curing => "cur.asc",
            AttributeKind::CanopyBulkDensity => "cbd.asc",
            AttributeKind::CanopyBaseHeight => "cbh.asc",
            AttributeKind::CanopyCoverFraction => "ccf.asc",
            AttributeKind::ConiferYield => "py.asc",
            AttributeKind::FoliarMoisture => "fmc.asc",
        }
    }

    /// Human-readable attribute name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::Elevation => "elevation",
            AttributeKind::SolarAzimuth => "solar azimuth",
            AttributeKind::Slope => "slope",
            AttributeKind::Curing => "curing",
            AttributeKind::CanopyBulkDensity => "canopy bulk density",
            AttributeKind::CanopyBaseHeight => "canopy base height",
            AttributeKind::CanopyCoverFraction => "canopy cover fraction",
            AttributeKind::ConiferYield => "percent conifer yield",
            AttributeKind::FoliarMoisture => "foliar moisture content",
        }
    }
}

/// The nine attribute buffers, each aligned 1:1 with grid cells
///
/// Invariant: every buffer's length equals the grid cell count. Entries
/// holding [`MISSING_VALUE`] denote "no data for this cell".
#[derive(Debug, Clone)]
pub struct AttributeLayers {
    pub elevation: Vec<f32>,
    pub solar_azimuth: Vec<f32>,
    pub slope: Vec<f32>,
    pub curing: Vec<f32>,
    pub canopy_bulk_density: Vec<f32>,
    pub canopy_base_height: Vec<f32>,
    pub canopy_cover_fraction: Vec<f32>,
    pub conifer_yield: Vec<f32>,
    pub foliar_moisture: Vec<f32>,
}

impl AttributeLayers {
    /// Load all nine attribute rasters from the input folder
    ///
    /// Each present source file populates exactly the one buffer belonging
    /// to its attribute; absent files leave sentinel-filled buffers.
    pub fn load(folder: &Path, cell_count: usize) -> Result<Self> {
        Ok(AttributeLayers {
            elevation: load_layer(folder, AttributeKind::Elevation, cell_count)?,
            solar_azimuth: load_layer(folder, AttributeKind::SolarAzimuth, cell_count)?,
            slope: load_layer(folder, AttributeKind::Slope, cell_count)?,
            curing: load_layer(folder, AttributeKind::Curing, cell_count)?,
            canopy_bulk_density: load_layer(folder, AttributeKind::CanopyBulkDensity, cell_count)?,
            canopy_base_height: load_layer(folder, AttributeKind::CanopyBaseHeight, cell_count)?,
            canopy_cover_fraction: load_layer(
                folder,
                AttributeKind::CanopyCoverFraction,
                cell_count,
            )?,
            conifer_yield: load_layer(folder, AttributeKind::ConiferYield, cell_count)?,
            foliar_moisture: load_layer(folder, AttributeKind::FoliarMoisture, cell_count)?,
        })
    }

    /// Buffer belonging to an attribute, by kind
    pub fn layer(&self, kind: AttributeKind) -> &[f32] {
        match kind {
            AttributeKind::Elevation => &self.elevation,
            AttributeKind::SolarAzimuth => &self.solar_azimuth,
            AttributeKind::Slope => &self.slope,
            AttributeKind::Curing => &self.curing,
            AttributeKind::CanopyBulkDensity => &self.canopy_bulk_density,
            AttributeKind::CanopyBaseHeight => &self.canopy_base_height,
            AttributeKind::CanopyCoverFraction => &self.canopy_cover_fraction,
            AttributeKind::ConiferYield => &self.conifer_yield,
            AttributeKind::FoliarMoisture => &self.foliar_moisture,
        }
    }
}

/// Load one attribute raster into a pre-sized buffer
///
/// The buffer is filled with the missing sentinel up front; data tokens are
/// read row by row and loading stops as soon as the buffer is full, even if
/// the source has more rows. Short sources leave the sentinel tail in place.
fn load_layer(folder: &Path, kind: AttributeKind, cell_count: usize) -> Result<Vec<f32>> {
    let path = folder.join(kind.filename());
    let mut buffer = vec![MISSING_VALUE; cell_count];

    if !path.exists() {
        debug!(
            "No {} raster at {}, filling with missing values",
            kind.name(),
            path.display()
        );
        return Ok(buffer);
    }

    info!("Loading {} raster: {}", kind.name(), path.display());
    let (_header, data_lines) = read_raster(&path)?;

    let mut index = 0;
    'rows: for line in &data_lines {
        for token in line.split_whitespace() {
            if index == cell_count {
                break 'rows;
            }

            buffer[index] = token
                .parse::<f32>()
                .map_err(|_| Error::value_parse(path.display().to_string(), token))?;
            index += 1;
        }
    }

    debug!(
        "Loaded {} of {} {} values",
        index,
        cell_count,
        kind.name()
    );

    Ok(buffer)
}
