//! CSV serialization of the generated record set
//!
//! Writes the per-cell records to a fixed-named `Data.csv` inside the input
//! folder, creating or overwriting it. Every line, header included, carries
//! one trailing field separator.

pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use writer::write_dataset;
