//! Generate command implementation for the fuelgrid processor CLI
//!
//! Runs the complete data-generation workflow: logging setup, argument
//! validation, pipeline execution, and the final operator report.

use super::shared::setup_logging;
use crate::Result;
use crate::app::pipeline::{GenerationStats, generate_dataset};
use crate::cli::args::Args;
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Generate command runner
///
/// 1. Set up logging and validate arguments
/// 2. Run the sequential generation pipeline
/// 3. Report the outcome to the operator
pub fn run_generate(args: Args) -> Result<GenerationStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting fuelgrid processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let stats = generate_dataset(&args.input_folder, args.simulator)?;

    generate_final_report(&args, &stats, start_time.elapsed());
    Ok(stats)
}

/// Print the success summary, unless running in quiet mode
fn generate_final_report(args: &Args, stats: &GenerationStats, elapsed: Duration) {
    if args.quiet {
        return;
    }

    println!();
    println!("{}", "Data file generated successfully".green().bold());
    println!("  Output:     {}", stats.output_path.display());
    println!(
        "  Cells:      {} ({} rows x {} cols)",
        stats.cells, stats.rows, stats.cols
    );
    println!("  Cell size:  {}", stats.cell_size);
    println!("  Fuel codes: {}", stats.fuel_codes_loaded);
    println!("  Elapsed:    {:.2}s", elapsed.as_secs_f64());
}
