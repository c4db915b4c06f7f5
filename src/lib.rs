//! turnscan - rule-driven fact extraction from game host turn messages
//!
//! This crate re-exports all layers of the turnscan system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: turnscan_runtime    - CLI, message files, log setup
//! Layer 1: turnscan_parser     - Rule loader, matcher, value coercion, assembly
//! Layer 0: turnscan_foundation - Fact model, attributes, diagnostics, names, Error
//! ```

pub use turnscan_foundation as foundation;
pub use turnscan_parser as parser;
pub use turnscan_runtime as runtime;
