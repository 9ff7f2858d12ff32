//! Unit tests for the attribute_layers module
