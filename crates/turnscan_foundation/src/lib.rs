//! Fact model, diagnostics, name resolution, and error types for turnscan.
//!
//! This crate provides:
//! - [`MessageInformation`] - One fact extracted from a host message
//! - [`MessageValue`] - The values a fact carries (strings, integers, config, scores, alliances)
//! - [`ObjectKind`] - The entity kinds a pattern rule can target
//! - [`NameResolver`] - Race/hull name lookup collaborator ([`TableResolver`] is an in-memory one)
//! - [`DiagnosticsSink`] - Where load-time and match-time problems are reported
//! - [`Error`] - Hard failures (unreadable rule resources)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribute;
pub mod diagnostics;
pub mod error;
pub mod info;
pub mod kind;
pub mod names;
pub mod value;

pub use attribute::{IntegerAttribute, StringAttribute};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticsSink, NullSink, Severity, TracingSink};
pub use error::{Error, ErrorContext, ErrorKind};
pub use info::MessageInformation;
pub use kind::{IdPolicy, ObjectKind};
pub use names::{NameKind, NameResolver, RaceNames, TableResolver};
pub use value::{AllianceOffer, MessageValue, Offer, OfferVector};

/// Number of player slots in a game; rows, scores and offers are indexed `1..=MAX_PLAYERS`.
pub const MAX_PLAYERS: usize = 11;

/// Result type for turnscan operations.
pub type Result<T> = std::result::Result<T, Error>;
