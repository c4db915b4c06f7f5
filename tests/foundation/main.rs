//! Integration tests for Layer 0: Foundation
//!
//! Tests for the fact model, object kinds, name resolution, diagnostics and errors.

mod errors;
mod facts;
mod names;
