//! Cross-layer integration tests for turnscan
//!
//! Tests that load realistic definition files and parse complete messages.

mod turn_scan;
