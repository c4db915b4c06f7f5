//! The rule catalog: an ordered list of pattern rules applied to messages.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use turnscan_foundation::{DiagnosticsSink, Error, MessageInformation, NameResolver, Result};

use crate::assembler::assemble;
use crate::loader::{LoaderConfig, read_rules_into};
use crate::matcher::{PreparedMessage, match_prepared};
use crate::rule::PatternRule;

/// An ordered set of pattern rules.
///
/// Loading needs exclusive access; parsing only reads the rules, so a loaded
/// catalog can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct RuleCatalog {
    rules: Vec<PatternRule>,
    config: LoaderConfig,
}

impl RuleCatalog {
    /// Creates an empty catalog with default loader settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with the given loader settings.
    #[must_use]
    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Appends the rules defined in `reader`.
    ///
    /// Definition problems are reported to `sink`; the affected rule or
    /// instruction is skipped and loading continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails. Rules completed before the failure
    /// are kept; the rule being read when it happened is dropped.
    pub fn load(
        &mut self,
        reader: impl BufRead,
        source_name: &str,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<()> {
        let before = self.rules.len();
        let result = read_rules_into(reader, source_name, &self.config, sink, &mut self.rules);
        tracing::debug!(
            source = source_name,
            added = self.rules.len() - before,
            total = self.rules.len(),
            "loaded rule definitions"
        );
        result
    }

    /// Appends rules from a string.
    pub fn load_str(&mut self, text: &str, source_name: &str, sink: &mut dyn DiagnosticsSink) {
        // Reading from memory cannot fail.
        let _ = self.load(text.as_bytes(), source_name, sink);
    }

    /// Appends rules from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ResourceUnavailable`](turnscan_foundation::ErrorKind)
    /// if the file cannot be opened, or an I/O error if reading fails.
    pub fn load_file(&mut self, path: impl AsRef<Path>, sink: &mut dyn DiagnosticsSink) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::resource_unavailable(path, e))?;
        self.load(BufReader::new(file), &path.display().to_string(), sink)
    }

    /// Removes all rules.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Loaded rules in order.
    #[must_use]
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Number of loaded rules.
    #[must_use]
    pub fn num_templates(&self) -> usize {
        self.rules.len()
    }

    /// Loader settings used by [`load`](Self::load).
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Extracts facts from one message.
    ///
    /// Rules are tried in load order. Every match is assembled into the
    /// result; a matching rule without the continue flag ends the search.
    pub fn parse_message(
        &self,
        text: &str,
        resolver: &dyn NameResolver,
        turn: i32,
        sink: &mut dyn DiagnosticsSink,
    ) -> Vec<MessageInformation> {
        let message = PreparedMessage::new(text);
        let mut output = Vec::new();
        for rule in &self.rules {
            let Some(values) = match_prepared(rule, &message, resolver) else {
                continue;
            };
            tracing::debug!(rule = rule.name(), kind = %rule.kind(), "rule matched");
            assemble(rule, &values, turn, resolver, &mut output, sink);
            if !rule.continue_flag() {
                break;
            }
        }
        output
    }
}
