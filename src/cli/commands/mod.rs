//! Command implementations for the fuelgrid processor CLI
//!
//! This module contains the command execution logic, logging setup, and
//! operator reporting for the CLI interface.

pub mod generate;
pub mod shared;

use crate::Result;
use crate::app::pipeline::GenerationStats;
use crate::cli::args::Args;

/// Main command runner for the fuelgrid processor
///
/// The tool has a single purpose, so this dispatches straight into the
/// generation workflow.
pub fn run(args: Args) -> Result<GenerationStats> {
    generate::run_generate(args)
}
