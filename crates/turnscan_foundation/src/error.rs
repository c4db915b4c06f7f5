//! Error types for turnscan.
//!
//! Almost everything that goes wrong while loading rules or matching messages
//! is reported through a [`DiagnosticsSink`](crate::DiagnosticsSink) and does
//! not interrupt processing. The types here cover the hard failures: a rule
//! resource that cannot be opened or read.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for turnscan operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a rule resource that could not be opened.
    #[must_use]
    pub fn resource_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::new(ErrorKind::ResourceUnavailable {
            path: path.into(),
            source,
        })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The rule resource could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    ResourceUnavailable {
        /// Path of the resource.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading from an already opened resource failed.
    #[error("read error: {0}")]
    Io(std::io::Error),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Resource name (usually a file name).
    pub source: Option<String>,
    /// Line number in the resource (1-based).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resource name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}
