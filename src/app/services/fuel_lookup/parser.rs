//! Lookup table row normalization and model-code derivation
//!
//! The reference table is a header-plus-data CSV. Each data row carries the
//! raw fuel code at column 0, the free-text model descriptor at column 3,
//! and the three 0-255 color channels at columns 4-6.

use std::path::Path;
use tracing::{info, warn};

use crate::app::models::FuelLookup;
use crate::constants::{COLOR_CHANNEL_MAX, NON_FUEL_CODE};
use crate::{Error, Result};

/// Minimum column count for a usable lookup row (code, descriptor, colors)
const MIN_LOOKUP_COLUMNS: usize = 7;

/// Parse a fuel lookup table CSV into classification mappings
///
/// A missing or unreadable file yields [`Error::MissingLookupTable`]; the
/// caller decides whether to abort or proceed with no classification data.
/// Malformed data rows are skipped with a warning. Duplicate fuel codes keep
/// the last occurrence.
pub fn parse_lookup_table(path: &Path) -> Result<FuelLookup> {
    info!("Parsing fuel lookup table: {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|_| Error::missing_lookup_table(path.display().to_string()))?;

    let mut lookup = FuelLookup::default();

    // First line is the column header
    for (line_index, line) in content.lines().enumerate().skip(1) {
        let row = normalize_row(line);
        let columns: Vec<&str> = row.split(',').collect();

        if columns.len() < MIN_LOOKUP_COLUMNS {
            warn!(
                "Skipping lookup row {}: expected at least {} columns, found {}",
                line_index + 1,
                MIN_LOOKUP_COLUMNS,
                columns.len()
            );
            continue;
        }

        let Some(color) = parse_color(&columns[4..7]) else {
            warn!(
                "Skipping lookup row {}: non-numeric color channel",
                line_index + 1
            );
            continue;
        };

        let model_code = derive_model_code(columns[3]);
        lookup.insert(columns[0].to_string(), model_code, color);
    }

    info!("Loaded {} fuel codes from lookup table", lookup.len());
    Ok(lookup)
}

/// Normalize a raw table row before tokenization
///
/// Strips hyphens and embedded newlines, then rewrites every occurrence of
/// the literal "No" to "NF" until none remain. The rewrite also hits "No"
/// inside unrelated descriptor text; known caveat of the table format.
fn normalize_row(line: &str) -> String {
    let mut row: String = line
        .chars()
        .filter(|c| *c != '-' && *c != '\n' && *c != '\r')
        .collect();

    while let Some(position) = row.find("No") {
        row.replace_range(position..position + 2, "NF");
    }

    row
}

/// Derive the short model code from a normalized descriptor
///
/// First matching rule wins: descriptors starting with "FM1" keep their
/// first 4 characters, non-fuel descriptors ("Non" or the normalized "NFn")
/// map to the non-fuel code, everything else keeps its first 3 characters.
/// Trailing whitespace is dropped so two-character codes ("C2 Conifer")
/// match the reference tables keyed by bare model codes.
fn derive_model_code(descriptor: &str) -> String {
    let code: String = if descriptor.starts_with("FM1") {
        descriptor.chars().take(4).collect()
    } else if descriptor.starts_with("Non") || descriptor.starts_with("NFn") {
        return NON_FUEL_CODE.to_string();
    } else {
        descriptor.chars().take(3).collect()
    };

    code.trim_end().to_string()
}

/// Parse three 0-255 channel columns into a normalized RGBA color
fn parse_color(channels: &[&str]) -> Option<[f32; 4]> {
    let red = channels[0].trim().parse::<f32>().ok()?;
    let green = channels[1].trim().parse::<f32>().ok()?;
    let blue = channels[2].trim().parse::<f32>().ok()?;

    Some([
        red / COLOR_CHANNEL_MAX,
        green / COLOR_CHANNEL_MAX,
        blue / COLOR_CHANNEL_MAX,
        1.0,
    ])
}
