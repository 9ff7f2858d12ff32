//! Integration tests for the full data-generation pipeline
//!
//! Each test lays out a landscape folder on disk, runs the pipeline end to
//! end, and inspects the generated `Data.csv`.

use std::path::Path;

use tempfile::TempDir;

use fuelgrid_processor::{Error, SimulatorFamily, generate_dataset};

const LOOKUP_HEADER: &str = "grid_value,export_value,descriptive_name,fuel_type,r,g,b\n";

fn write_lookup(dir: &TempDir, filename: &str, rows: &str) {
    std::fs::write(
        dir.path().join(filename),
        format!("{}{}", LOOKUP_HEADER, rows),
    )
    .unwrap();
}

fn write_raster(dir: &TempDir, name: &str, data: &str) {
    let content = format!(
        "ncols 3\nnrows 1\nxllcorner 0.0\nyllcorner 0.0\ncellsize 100\nNODATA_value -9999\n{}",
        data
    );
    std::fs::write(dir.path().join(name), content).unwrap();
}

fn read_data_rows(folder: &Path) -> Vec<Vec<String>> {
    let content = std::fs::read_to_string(folder.join("Data.csv")).unwrap();
    content
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn test_classified_landscape_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_lookup(&dir, "fbp_lookup_table.csv", "1,1,conifer,C2 Conifer,0,255,0\n");
    write_raster(&dir, "fuels.asc", "1 1 0\n");
    write_raster(&dir, "elevation.asc", "100 200 300\n");

    let stats = generate_dataset(dir.path(), SimulatorFamily::Fbp).unwrap();

    assert_eq!(stats.cells, 3);
    assert_eq!(stats.rows, 1);
    assert_eq!(stats.cols, 3);
    assert_eq!(stats.cell_size, 100.0);
    assert_eq!(stats.fuel_codes_loaded, 1);
    assert_eq!(stats.output_path, dir.path().join("Data.csv"));

    let rows = read_data_rows(dir.path());
    assert_eq!(rows.len(), 4, "header plus one line per cell");

    // Header carries the full schema plus the trailing separator
    assert_eq!(rows[0][0], "fueltype");
    assert_eq!(rows[0][23], "pattern");
    assert_eq!(rows[0].len(), 25);
    assert_eq!(rows[0][24], "");

    // Classified cells carry the short model code, the unrecognized
    // token falls back to non-fuel
    assert_eq!(rows[1][0], "C2");
    assert_eq!(rows[2][0], "C2");
    assert_eq!(rows[3][0], "NF");

    // Raw integer codes pass through; unrecognized becomes zero
    assert_eq!(rows[1][12], "1");
    assert_eq!(rows[3][12], "0");

    // Elevation pass-through and the fixed observation constants
    assert_eq!(rows[1][3], "100");
    assert_eq!(rows[2][3], "200");
    assert_eq!(rows[3][3], "300");
    let lat: f32 = rows[1][1].parse().unwrap();
    let lon: f32 = rows[1][2].parse().unwrap();
    assert!((lat - 51.621244).abs() < 1e-4);
    assert!((lon + 115.608378).abs() < 1e-4);
    assert_eq!(rows[1][19], "20");

    // Surface fuel load from the static table; non-fuel stays blank
    assert_eq!(rows[1][22], "0.8");
    assert_eq!(rows[3][22], "");

    // Every data line ends with the trailing separator too
    for row in &rows[1..] {
        assert_eq!(row.len(), 25);
        assert_eq!(row[24], "");
    }
}

#[test]
fn test_absent_attribute_rasters_yield_blank_columns() {
    let dir = TempDir::new().unwrap();
    write_lookup(&dir, "fbp_lookup_table.csv", "1,1,conifer,C2 Conifer,0,255,0\n");
    write_raster(&dir, "fuels.asc", "1 1 1\n");

    generate_dataset(dir.path(), SimulatorFamily::Fbp).unwrap();

    let rows = read_data_rows(dir.path());
    for row in &rows[1..] {
        assert_eq!(row[3], "", "elev must be blank without elevation.asc");
        assert_eq!(row[7], "", "saz must be blank without saz.asc");
    }
}

#[test]
fn test_grass_curing_defaults_without_curing_raster() {
    let dir = TempDir::new().unwrap();
    write_lookup(
        &dir,
        "fbp_lookup_table.csv",
        "1,1,conifer,C2 Conifer,0,255,0\n2,2,grass,O1a Matted Grass,255,255,0\n",
    );
    write_raster(&dir, "fuels.asc", "2 2 1\n");

    generate_dataset(dir.path(), SimulatorFamily::Fbp).unwrap();

    let rows = read_data_rows(dir.path());
    assert_eq!(rows[1][0], "O1a");
    assert_eq!(rows[1][8], "60");
    assert_eq!(rows[2][8], "60");
    assert_eq!(rows[3][0], "C2");
    assert_eq!(rows[3][8], "");
}

#[test]
fn test_supplied_curing_raster_overrides_default() {
    let dir = TempDir::new().unwrap();
    write_lookup(
        &dir,
        "fbp_lookup_table.csv",
        "2,2,grass,O1a Matted Grass,255,255,0\n",
    );
    write_raster(&dir, "fuels.asc", "2 2 2\n");
    write_raster(&dir, "cur.asc", "45 80 95\n");

    generate_dataset(dir.path(), SimulatorFamily::Fbp).unwrap();

    let rows = read_data_rows(dir.path());
    assert_eq!(rows[1][8], "45");
    assert_eq!(rows[2][8], "80");
    assert_eq!(rows[3][8], "95");
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_lookup(&dir, "fbp_lookup_table.csv", "1,1,conifer,C2 Conifer,0,255,0\n");
    write_raster(&dir, "fuels.asc", "1 0 1\n");
    write_raster(&dir, "slope.asc", "5 10 15\n");

    generate_dataset(dir.path(), SimulatorFamily::Fbp).unwrap();
    let first = std::fs::read(dir.path().join("Data.csv")).unwrap();

    generate_dataset(dir.path(), SimulatorFamily::Fbp).unwrap();
    let second = std::fs::read(dir.path().join("Data.csv")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_lookup_table_classifies_everything_as_non_fuel() {
    let dir = TempDir::new().unwrap();
    write_raster(&dir, "fuels.asc", "1 2 3\n");

    let stats = generate_dataset(dir.path(), SimulatorFamily::Fbp).unwrap();

    assert_eq!(stats.fuel_codes_loaded, 0);
    let rows = read_data_rows(dir.path());
    for row in &rows[1..] {
        assert_eq!(row[0], "NF");
        assert_eq!(row[12], "0");
    }
}

#[test]
fn test_simulator_family_selects_its_lookup_table() {
    let dir = TempDir::new().unwrap();
    write_lookup(&dir, "kitral_lookup_table.csv", "1,1,pasto,PCH1 Pastizal,0,255,0\n");
    write_raster(&dir, "fuels.asc", "1 1 1\n");

    let stats = generate_dataset(dir.path(), SimulatorFamily::Kitral).unwrap();

    assert_eq!(stats.fuel_codes_loaded, 1);
    let rows = read_data_rows(dir.path());
    assert_eq!(rows[1][0], "PCH");
}

#[test]
fn test_malformed_fuels_header_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    write_lookup(&dir, "fbp_lookup_table.csv", "1,1,conifer,C2 Conifer,0,255,0\n");
    std::fs::write(
        dir.path().join("fuels.asc"),
        "ncols 3\nnrows 1\nxllcorner 0.0\nyllcorner 0.0\ncellwidth 100\nNODATA_value -9999\n1 1 1\n",
    )
    .unwrap();

    let result = generate_dataset(dir.path(), SimulatorFamily::Fbp);

    assert!(matches!(result, Err(Error::MalformedRasterHeader { .. })));
    assert!(!dir.path().join("Data.csv").exists());
}

#[test]
fn test_missing_fuels_raster_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    write_lookup(&dir, "fbp_lookup_table.csv", "1,1,conifer,C2 Conifer,0,255,0\n");

    assert!(matches!(
        generate_dataset(dir.path(), SimulatorFamily::Fbp),
        Err(Error::Io { .. })
    ));
}
