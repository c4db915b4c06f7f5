//! Pattern-rule engine for host turn messages.
//!
//! This crate turns the free-text messages a game host sends each turn into
//! typed facts, driven by rules loaded from a definition file.
//!
//! # Architecture
//!
//! ```text
//! "(-s0042)<<< Ship Report >>>\nShip 42 at (1200,1300)"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LINES / HEADER  │  → ["(-s0042)...", "Ship 42 at (1200,1300)"], kind 's', id 42
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MATCHER         │  → rule "ship position" matched: ["42", "1200", "1300"]
//! │ (per rule)      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ASSEMBLER       │  → Ship #42 { X: 1200, Y: 1300 } (merged with earlier matches)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lines`] - Message splitting and header decoding
//! - [`keyword`] - Abbreviated keyword matching for the definition vocabulary
//! - [`rule`] - Compiled pattern rules and their instructions
//! - [`loader`] - Definition file reader
//! - [`coerce`] - Typed conversion of captured values
//! - [`matcher`] - Runs one rule against one message
//! - [`assembler`] - Builds and merges facts from match results
//! - [`catalog`] - The ordered rule set and its entry points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod catalog;
pub mod coerce;
pub mod keyword;
pub mod lines;
pub mod loader;
pub mod matcher;
pub mod rule;

pub use catalog::RuleCatalog;
pub use coerce::{coerce, parse_fixed_point_100, parse_integer_value};
pub use keyword::KeywordMatching;
pub use lines::{HeaderField, MessageHeader, decode_header, split_message};
pub use loader::{LoaderConfig, load_rules};
pub use matcher::{PreparedMessage, match_prepared, match_rule};
pub use rule::{Instruction, Pattern, PatternRule, Scope, TypeTag, VariableDecl};
