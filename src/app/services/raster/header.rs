//! Raster file reading and header validation
//!
//! Every landscape raster carries a fixed 6-line header. Only line 5 is
//! validated: it must hold exactly two whitespace-separated fields, the
//! first literally `cellsize` and the second the cell edge length in map
//! units. All other header content is ignored.

use std::path::Path;

use crate::constants::{CELL_SIZE_KEYWORD, CELL_SIZE_LINE_INDEX, RASTER_HEADER_LINES};
use crate::{Error, Result};

/// Validated metadata extracted from a raster header
#[derive(Debug, Clone, Copy)]
pub struct RasterHeader {
    /// Map units per cell edge
    pub cell_size: f32,
}

impl RasterHeader {
    /// Validate the cell-size line of a raster header
    ///
    /// `lines` must contain at least the full 6-line header; anything less
    /// is reported as a malformed header for the file at `path`.
    pub fn parse(path: &Path, lines: &[&str]) -> Result<Self> {
        if lines.len() < RASTER_HEADER_LINES {
            return Err(Error::malformed_raster_header(
                path.display().to_string(),
                format!("<file has only {} lines>", lines.len()),
            ));
        }

        let line = lines[CELL_SIZE_LINE_INDEX];
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != 2 || fields[0] != CELL_SIZE_KEYWORD {
            return Err(Error::malformed_raster_header(
                path.display().to_string(),
                line,
            ));
        }

        let cell_size = fields[1].parse::<f32>().map_err(|_| {
            Error::malformed_raster_header(path.display().to_string(), line)
        })?;

        Ok(RasterHeader { cell_size })
    }
}

/// Read a raster file, validate its header, and return the header plus the
/// data lines (line 7 onward)
pub fn read_raster(path: &Path) -> Result<(RasterHeader, Vec<String>)> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read raster file {}", path.display()), e))?;

    let lines: Vec<&str> = content.lines().collect();
    let header = RasterHeader::parse(path, &lines)?;

    let data_lines = lines[RASTER_HEADER_LINES..]
        .iter()
        .map(|s| s.to_string())
        .collect();

    Ok((header, data_lines))
}
