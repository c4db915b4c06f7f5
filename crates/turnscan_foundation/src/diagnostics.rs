//! Diagnostics reporting.
//!
//! Rule loading and message parsing never stop on a malformed rule or an
//! unusable match. They describe the problem as a [`Diagnostic`] and hand it to
//! a [`DiagnosticsSink`], then carry on.

use std::fmt;

// =============================================================================
// Severity
// =============================================================================

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Very detailed tracing.
    Trace,
    /// Debugging information.
    Debug,
    /// Informational message.
    Info,
    /// Something suspicious that was tolerated.
    Warn,
    /// Something was dropped or ignored.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A single reported problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Where it happened: `file:line` while loading, the rule name while parsing.
    pub source: String,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(severity: Severity, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            source: source.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_empty() {
            write!(f, "{}: {}", self.severity, self.message)
        } else {
            write!(f, "{}: {}: {}", self.severity, self.source, self.message)
        }
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiver for diagnostics. Reporting is fire-and-forget.
pub trait DiagnosticsSink {
    /// Records a diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Records an error.
    fn error(&mut self, source: &str, message: &str) {
        self.report(Diagnostic::new(Severity::Error, source, message));
    }

    /// Records a warning.
    fn warn(&mut self, source: &str, message: &str) {
        self.report(Diagnostic::new(Severity::Warn, source, message));
    }

    /// Records an informational message.
    fn info(&mut self, source: &str, message: &str) {
        self.report(Diagnostic::new(Severity::Info, source, message));
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to the `tracing` subscriber, under the `turnscan` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&mut self, d: Diagnostic) {
        let (source, message) = (d.source.as_str(), d.message.as_str());
        match d.severity {
            Severity::Trace => tracing::trace!(target: "turnscan", source, "{message}"),
            Severity::Debug => tracing::debug!(target: "turnscan", source, "{message}"),
            Severity::Info => tracing::info!(target: "turnscan", source, "{message}"),
            Severity::Warn => tracing::warn!(target: "turnscan", source, "{message}"),
            Severity::Error => tracing::error!(target: "turnscan", source, "{message}"),
        }
    }
}

/// Keeps every diagnostic in memory, oldest first.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    records: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of diagnostics recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over all diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Returns diagnostics of exactly the given severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.records
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.by_severity(Severity::Error).len()
    }

    /// Returns true if any diagnostic message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.records.iter().any(|d| d.message.contains(needle))
    }

    /// Removes all diagnostics.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Consumes the sink, returning the diagnostics.
    #[must_use]
    pub fn into_records(self) -> Vec<Diagnostic> {
        self.records
    }
}

impl DiagnosticsSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }
}
