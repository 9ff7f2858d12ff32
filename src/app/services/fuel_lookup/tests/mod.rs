//! Unit tests for the fuel_lookup module
