//! Integration tests for Layer 2: Runtime
//!
//! Tests for argument parsing and complete scans over files.

mod scan;
