//! Unit tests for the dataset_writer module
