//! Unit tests for the raster module


use std::path::PathBuf;
use tempfile::TempDir;

/// Write an ESRI-ASCII style raster with a standard 6-line header
pub fn write_raster_file(dir: &TempDir, name: &str, cell_size: &str, data: &str) -> PathBuf {
    let path = dir.path().join(name);
    let content = format!(
        "ncols 3\nnrows 1\nxllcorner 0.0\nyllcorner 0.0\ncellsize {}\nNODATA_value -9999\n{}",
        cell_size, data
    );
    std::fs::write(&path, content).unwrap();
    path
}
