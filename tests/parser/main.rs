//! Integration tests for Layer 1: Parser
//!
//! Tests for header decoding, value coercion, the definition loader, rule
//! matching and fact assembly.

mod coercion;
mod header;
mod loader;
