//! Scanning message files with a loaded rule catalog.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use turnscan_foundation::{Error, MessageInformation, TableResolver, TracingSink};
use turnscan_parser::{LoaderConfig, RuleCatalog};

use crate::cli::{CliConfig, CliError};

/// Counts reported after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Messages examined.
    pub messages: usize,
    /// Facts produced.
    pub facts: usize,
}

/// Splits a file into messages at lines starting with `---`.
///
/// Blank messages are dropped.
#[must_use]
pub fn split_messages(text: &str) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.starts_with("---") {
            push_message(&mut messages, std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    push_message(&mut messages, current);
    messages
}

fn push_message(messages: &mut Vec<String>, message: String) {
    if !message.trim().is_empty() {
        messages.push(message);
    }
}

/// Builds the name resolver for a run.
///
/// # Errors
///
/// Returns an error if the race file cannot be read.
pub fn build_resolver(config: &CliConfig) -> Result<TableResolver, Error> {
    let mut resolver = TableResolver::standard().with_player(config.player);
    if let Some(path) = &config.races {
        let text = read_file(path)?;
        let accepted = resolver.load_race_list(&text);
        tracing::info!(path = %path.display(), accepted, "loaded race names");
    }
    Ok(resolver)
}

/// Loads every rule file named in `config`.
///
/// # Errors
///
/// Returns an error if a rule file cannot be read.
pub fn build_catalog(config: &CliConfig) -> Result<RuleCatalog, Error> {
    let loader = LoaderConfig::new().with_keyword_matching(config.keyword_matching());
    let mut catalog = RuleCatalog::with_config(loader);
    for path in &config.rules {
        catalog.load_file(path, &mut TracingSink)?;
    }
    tracing::info!(rules = catalog.num_templates(), "rule catalog ready");
    Ok(catalog)
}

/// Runs a scan, writing facts to `out`.
///
/// Facts are printed in their display form, or as one JSON object per line
/// when [`CliConfig::json`] is set.
///
/// # Errors
///
/// Returns an error if rules or input cannot be read, or writing fails.
pub fn run(config: &CliConfig, out: &mut dyn Write) -> Result<ScanSummary, CliError> {
    let resolver = build_resolver(config)?;
    let catalog = build_catalog(config)?;

    if config.dump_rules {
        for rule in catalog.rules() {
            writeln!(out, "{rule}").map_err(Error::from)?;
        }
        writeln!(out).map_err(Error::from)?;
    }

    let inputs = if config.files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(Error::from)?;
        vec![("<stdin>".to_string(), text)]
    } else {
        config
            .files
            .iter()
            .map(|path| Ok((path.display().to_string(), read_file(path)?)))
            .collect::<Result<Vec<_>, Error>>()?
    };

    let mut summary = ScanSummary::default();
    for (name, text) in &inputs {
        for message in split_messages(text) {
            summary.messages += 1;
            let facts = catalog.parse_message(&message, &resolver, config.turn, &mut TracingSink);
            tracing::debug!(source = %name, message = summary.messages, facts = facts.len(), "scanned message");
            for fact in facts {
                summary.facts += 1;
                write_fact(out, &fact, config.json)?;
            }
        }
    }
    Ok(summary)
}

fn write_fact(out: &mut dyn Write, fact: &MessageInformation, json: bool) -> Result<(), Error> {
    if json {
        serde_json::to_writer(&mut *out, fact).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{fact}")?;
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::resource_unavailable(path, e))
}
