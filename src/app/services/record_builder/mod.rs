//! Per-cell record assembly
//!
//! Combines the classified fuel grid, the nine attribute buffers, and the
//! embedded static reference tables into one fixed-schema 24-field record
//! per cell. Pure structural derivation: no fire-physics arithmetic, and no
//! input is mutated.
//!
//! ## Architecture
//!
//! - [`fuel_tables`] - Init-once static reference tables keyed by model code
//! - [`builder`] - Field-by-field record derivation

pub mod builder;
pub mod fuel_tables;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::build_records;
