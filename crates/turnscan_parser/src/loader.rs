//! Rule definition loader.
//!
//! Definition files are line oriented. A line whose first delimiter is a comma
//! starts a new rule (`Ship,ship position`); a line whose first delimiter is
//! `=` adds to the current rule (`parse=+1,Ship $ at ($,$)`). Blank lines and
//! lines starting with `;` are ignored.
//!
//! Structural problems are reported to the diagnostics sink and loading goes
//! on. Only read failures abort.

use std::io::BufRead;

use turnscan_foundation::{DiagnosticsSink, Error, ErrorContext, ObjectKind, Result};

use crate::keyword::KeywordMatching;
use crate::rule::{Instruction, Pattern, PatternRule, Scope, TypeTag, VariableDecl};

/// Loader settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    keyword_matching: KeywordMatching,
}

impl LoaderConfig {
    /// Default settings: abbreviated keywords.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: sets how keywords are matched.
    #[must_use]
    pub fn with_keyword_matching(mut self, matching: KeywordMatching) -> Self {
        self.keyword_matching = matching;
        self
    }

    /// How keywords are matched.
    #[must_use]
    pub fn keyword_matching(&self) -> KeywordMatching {
        self.keyword_matching
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Kind,
    SubId,
    BigId,
    Check,
    Fail,
    Find,
    Parse,
    Array,
    Values,
    Assign,
    Continue,
}

const COMMANDS: &[(&str, Command)] = &[
    ("Kind", Command::Kind),
    ("SUbid", Command::SubId),
    ("BIgid", Command::BigId),
    ("CHeck", Command::Check),
    ("FAil", Command::Fail),
    ("FInd", Command::Find),
    ("PArse", Command::Parse),
    ("ARray", Command::Array),
    ("VAlues", Command::Values),
    ("ASsign", Command::Assign),
    ("COntinue", Command::Continue),
];

const YES_NO: &[(&str, bool)] = &[("Yes", true), ("No", false)];

/// Reads rule definitions from `reader`.
///
/// `source_name` prefixes diagnostics as `name:line`.
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn load_rules(
    reader: impl BufRead,
    source_name: &str,
    config: &LoaderConfig,
    sink: &mut dyn DiagnosticsSink,
) -> Result<Vec<PatternRule>> {
    let mut rules = Vec::new();
    read_rules_into(reader, source_name, config, sink, &mut rules)?;
    Ok(rules)
}

/// Appends the rules defined in `reader` to `rules`.
///
/// If reading fails, the rules completed before the failure are still
/// appended; the rule being read at that point is dropped.
pub(crate) fn read_rules_into(
    reader: impl BufRead,
    source_name: &str,
    config: &LoaderConfig,
    sink: &mut dyn DiagnosticsSink,
    rules: &mut Vec<PatternRule>,
) -> Result<()> {
    let mut loader = RuleLoader::new(source_name, config, sink);
    for (index, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => loader.line(index + 1, &line),
            Err(e) => {
                rules.extend(loader.completed());
                return Err(Error::from(e).with_context(
                    ErrorContext::new()
                        .with_source(source_name)
                        .with_line(index + 1),
                ));
            }
        }
    }
    rules.extend(loader.finish());
    Ok(())
}

// =============================================================================
// Loader State
// =============================================================================

enum Current {
    /// Before the first rule header.
    Nothing,
    /// Inside a rule being built.
    Rule(PatternRule),
    /// Inside a rule with an unknown kind; assignments are ignored.
    Skipping,
}

struct RuleLoader<'a> {
    source_name: &'a str,
    matching: KeywordMatching,
    kinds: Vec<(&'static str, ObjectKind)>,
    sink: &'a mut dyn DiagnosticsSink,
    current: Current,
    rules: Vec<PatternRule>,
    location: String,
}

impl<'a> RuleLoader<'a> {
    fn new(source_name: &'a str, config: &LoaderConfig, sink: &'a mut dyn DiagnosticsSink) -> Self {
        Self {
            source_name,
            matching: config.keyword_matching(),
            kinds: ObjectKind::ALL.iter().map(|k| (k.keyword(), *k)).collect(),
            sink,
            current: Current::Nothing,
            rules: Vec::new(),
            location: String::new(),
        }
    }

    fn error(&mut self, message: &str) {
        self.sink.error(&self.location, message);
    }

    fn line(&mut self, number: usize, raw: &str) {
        let text = raw.trim();
        if text.is_empty() || text.starts_with(';') {
            return;
        }
        self.location = format!("{}:{number}", self.source_name);

        match text.find(['=', ',']) {
            Some(pos) if text[pos..].starts_with(',') => {
                self.header(&text[..pos], &text[pos + 1..]);
            }
            Some(pos) => self.assignment(&text[..pos], &text[pos + 1..]),
            None => self.error("missing delimiter"),
        }
    }

    fn header(&mut self, kind: &str, name: &str) {
        self.finish_rule();
        self.current = match self.matching.lookup(kind, &self.kinds) {
            Some(kind) => Current::Rule(PatternRule::new(kind, name.trim())),
            None => {
                self.error(&format!("unknown kind {:?}", kind.trim()));
                Current::Skipping
            }
        };
    }

    fn assignment(&mut self, key: &str, value: &str) {
        let value = value.trim();
        let Some(command) = self.matching.lookup(key, COMMANDS) else {
            if !matches!(self.current, Current::Skipping) {
                self.error(&format!("unknown keyword {:?}", key.trim()));
            }
            return;
        };

        let result = match command {
            Command::Kind => single_char(value).map(Instruction::MatchKind).map(Some),
            Command::SubId => single_char(value).map(Instruction::MatchSubId).map(Some),
            Command::BigId => value
                .parse()
                .map(|n| Some(Instruction::MatchBigId(n)))
                .map_err(|_| format!("invalid big Id {value:?}")),
            Command::Check => text_instruction(value).map(|(scope, text)| Some(Instruction::Check { scope, text })),
            Command::Fail => text_instruction(value).map(|(scope, text)| Some(Instruction::Fail { scope, text })),
            Command::Find => text_instruction(value).map(|(scope, text)| Some(Instruction::Find { scope, text })),
            Command::Parse => {
                let (scope, text) = parse_scope(value);
                Ok(Some(Instruction::Parse {
                    scope,
                    pattern: Pattern::new(text),
                }))
            }
            Command::Array => {
                let (scope, text) = parse_scope(value);
                if text.contains('$') {
                    Ok(Some(Instruction::Array {
                        scope,
                        pattern: Pattern::new(text),
                    }))
                } else {
                    Err("array pattern needs a row index wildcard".to_string())
                }
            }
            Command::Values => Ok(Some(Instruction::Value(
                value.split(',').map(|v| v.trim().to_string()).collect(),
            ))),
            Command::Assign | Command::Continue => Ok(None),
        };

        let rule = match &mut self.current {
            Current::Rule(rule) => rule,
            Current::Skipping => return,
            Current::Nothing => {
                self.error("assignment outside of a rule");
                return;
            }
        };

        let mut problems = Vec::new();
        match (command, result) {
            (_, Err(message)) => problems.push(message),
            (_, Ok(Some(instruction))) => rule.add_instruction(instruction),
            (Command::Assign, Ok(None)) => {
                for item in value.split(',') {
                    let (decl, problem) = parse_variable(item);
                    rule.add_variable(decl);
                    problems.extend(problem);
                }
            }
            (_, Ok(None)) => match self.matching.lookup(value, YES_NO) {
                Some(flag) => rule.set_continue(flag),
                None => problems.push(format!("expected yes or no, got {value:?}")),
            },
        }
        for message in problems {
            self.error(&message);
        }
    }

    fn finish_rule(&mut self) {
        let Current::Rule(rule) = std::mem::replace(&mut self.current, Current::Nothing) else {
            return;
        };

        let produced = rule.num_wildcards();
        let declared = rule.variables().len();
        if produced != declared {
            self.error(&format!(
                "rule {:?} produces {produced} values but declares {declared} variables",
                rule.name()
            ));
        }
        if rule.num_restrictions() == 0 {
            self.error(&format!("rule {:?} does not look at the message text", rule.name()));
        }

        tracing::debug!(rule = rule.name(), kind = %rule.kind(), "loaded rule");
        self.rules.push(rule);
    }

    fn completed(self) -> Vec<PatternRule> {
        self.rules
    }

    fn finish(mut self) -> Vec<PatternRule> {
        self.finish_rule();
        self.rules
    }
}

// =============================================================================
// Value Syntax
// =============================================================================

fn single_char(value: &str) -> std::result::Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {value:?}")),
    }
}

fn text_instruction(value: &str) -> std::result::Result<(Scope, String), String> {
    let (scope, text) = parse_scope(value);
    if text.is_empty() {
        Err("missing text".to_string())
    } else {
        Ok((scope, text.to_string()))
    }
}

/// Splits an optional `+N,`, `-N,` or `=N,` prefix off `value`.
///
/// Anything else is literal text searched everywhere.
#[must_use]
pub fn parse_scope(value: &str) -> (Scope, &str) {
    let Some(comma) = value.find(',') else {
        return (Scope::Any, value);
    };
    let (prefix, rest) = (&value[..comma], &value[comma + 1..]);
    let digits = prefix.get(1..).unwrap_or("");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return (Scope::Any, value);
    }

    let scope = match prefix.as_bytes()[0] {
        b'+' => digits.parse().ok().map(Scope::Relative),
        b'-' => digits.parse::<i32>().ok().map(|n| Scope::Relative(-n)),
        b'=' => digits.parse().ok().map(Scope::Fixed),
        _ => None,
    };
    match scope {
        Some(scope) => (scope, rest),
        None => (Scope::Any, value),
    }
}

/// Parses `NAME` or `NAME:TYPE`; an unknown type falls back to plain.
fn parse_variable(item: &str) -> (VariableDecl, Option<String>) {
    let Some((name, type_text)) = item.split_once(':') else {
        return (VariableDecl::plain(item), None);
    };
    let type_text = type_text.trim();
    let upper = type_text.to_ascii_uppercase();
    let tag = match upper.as_str() {
        "X100" => Some(TypeTag::FixedPoint100),
        "RACE" => Some(TypeTag::RaceLong),
        "RACE.SHORT" => Some(TypeTag::RaceShort),
        "RACE.ADJ" => Some(TypeTag::RaceAdjective),
        "RACE.ALLIES" => Some(TypeTag::RaceAdjectivePlusAlliance),
        "HULL" => Some(TypeTag::HullName),
        _ if upper.starts_with("ENUM(") && upper.ends_with(')') => {
            let inner = &type_text[5..type_text.len() - 1];
            Some(TypeTag::Enum(inner.split('|').map(|s| s.trim().to_string()).collect()))
        }
        _ => None,
    };
    match tag {
        Some(tag) => (VariableDecl::new(name, tag), None),
        None => (
            VariableDecl::plain(name),
            Some(format!("unknown type {type_text:?} for {}", name.trim())),
        ),
    }
}
