//! Command-line argument definitions for the fuelgrid processor
//!
//! This module defines the thin CLI interface using the clap derive API:
//! the input folder, the simulator-family selector, and verbosity control.

use crate::app::models::SimulatorFamily;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the fuelgrid landscape data generator
///
/// Converts a folder of wildfire landscape rasters plus a fuel lookup table
/// into the normalized per-cell attribute dataset (`Data.csv`) consumed by
/// a downstream fire-spread model.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fuelgrid-processor",
    version,
    about = "Generate a per-cell fuel attribute dataset from landscape rasters",
    long_about = "Reads a fuel-code lookup table and a set of gridded landscape rasters \
                  (fuel type, elevation, slope, aspect, curing, canopy metrics, foliar \
                  moisture) from an input folder and writes one normalized 24-column \
                  Data.csv record per grid cell into the same folder."
)]
pub struct Args {
    /// Input folder containing the lookup table and landscape rasters
    ///
    /// Must contain a `fuels.asc` raster and the lookup table for the
    /// selected simulator family. The nine attribute rasters (elevation.asc,
    /// saz.asc, slope.asc, cur.asc, cbd.asc, cbh.asc, ccf.asc, py.asc,
    /// fmc.asc) are each independently optional.
    #[arg(value_name = "FOLDER", help = "Input folder with lookup table and rasters")]
    pub input_folder: PathBuf,

    /// Simulator family selecting the lookup table filename
    ///
    /// fbp reads fbp_lookup_table.csv, kitral reads kitral_lookup_table.csv,
    /// spain reads spain_lookup_table.csv. The single-letter selectors k and
    /// s are accepted as shorthand.
    #[arg(
        short = 's',
        long = "simulator",
        value_name = "FAMILY",
        default_value = "fbp",
        help = "Simulator family: fbp, kitral, or spain"
    )]
    pub simulator: SimulatorFamily,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_folder.exists() {
            return Err(Error::configuration(format!(
                "Input folder does not exist: {}",
                self.input_folder.display()
            )));
        }

        if !self.input_folder.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_folder.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_args(folder: PathBuf) -> Args {
        Args {
            input_folder: folder,
            simulator: SimulatorFamily::Fbp,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = test_args(temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());

        // Nonexistent input folder
        let args = test_args(PathBuf::from("/nonexistent/path"));
        assert!(args.validate().is_err());

        // Input path is a file, not a directory
        let file_path = temp_dir.path().join("fuels.asc");
        std::fs::write(&file_path, "x").unwrap();
        let args = test_args(file_path);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_simulator_parsing_from_cli() {
        let args = Args::try_parse_from(["fuelgrid-processor", "/tmp", "-s", "k"]).unwrap();
        assert_eq!(args.simulator, SimulatorFamily::Kitral);

        let args = Args::try_parse_from(["fuelgrid-processor", "/tmp"]).unwrap();
        assert_eq!(args.simulator, SimulatorFamily::Fbp);

        // Unknown selector is rejected at parse time
        assert!(Args::try_parse_from(["fuelgrid-processor", "/tmp", "-s", "x"]).is_err());
    }

    #[test]
    fn test_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = test_args(temp_dir.path().to_path_buf());

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
