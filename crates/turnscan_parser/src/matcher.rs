//! Pattern rule matching.
//!
//! [`match_rule`] runs one rule against the lines of one message. Header
//! filters are checked first; then the remaining instructions run in order,
//! sharing an anchor line, a cursor into the declared variables and an output
//! buffer of raw strings. The first failing instruction rejects the whole rule.
//!
//! The anchor moves to the line hit by a `Check`/`Find` with [`Scope::Any`],
//! and to the line matched by any `Parse` (the last row for `Array`).
//! [`Scope::Relative`] offsets count from it.
//!
//! Literal comparisons ignore ASCII case. Literals pass through
//! [`NameResolver::expand_race_names`] before they are compared.

use turnscan_foundation::{MAX_PLAYERS, NameKind, NameResolver};

use crate::coerce::{coerce, parse_integer_value};
use crate::lines::{MessageHeader, split_message};
use crate::rule::{Instruction, Pattern, PatternRule, Scope, TypeTag};

static PLAIN: TypeTag = TypeTag::Plain;

/// A message split into lines, with the per-message work done once.
///
/// [`RuleCatalog::parse_message`](crate::RuleCatalog::parse_message) prepares
/// each message once and tries every rule against it.
#[derive(Clone, Debug)]
pub struct PreparedMessage {
    lines: Vec<String>,
    lowered: Vec<String>,
    header: MessageHeader,
}

impl PreparedMessage {
    /// Splits and prepares a message.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::from_lines(split_message(text))
    }

    /// Prepares already split lines.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lowered: lines.iter().map(|l| l.to_ascii_lowercase()).collect(),
            header: MessageHeader::decode(&lines),
            lines,
        }
    }

    /// The message lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The decoded header.
    #[must_use]
    pub fn header(&self) -> MessageHeader {
        self.header
    }

    fn accepts(&self, filter: &Instruction) -> bool {
        match filter {
            Instruction::MatchKind(c) => self.header.kind == *c,
            Instruction::MatchSubId(c) => self.header.sub_id == *c,
            Instruction::MatchBigId(n) => self.header.big_id == i32::from(*n),
            _ => true,
        }
    }
}

/// Matches `rule` against a message.
///
/// Returns one string per declared variable (empty where nothing was
/// produced), or `None` if the rule does not match.
#[must_use]
pub fn match_rule(
    rule: &PatternRule,
    lines: &[String],
    resolver: &dyn NameResolver,
) -> Option<Vec<String>> {
    match_prepared(rule, &PreparedMessage::from_lines(lines.to_vec()), resolver)
}

/// Matches `rule` against a prepared message.
///
/// Same result as [`match_rule`].
#[must_use]
pub fn match_prepared(
    rule: &PatternRule,
    message: &PreparedMessage,
    resolver: &dyn NameResolver,
) -> Option<Vec<String>> {
    let (filters, body): (Vec<&Instruction>, Vec<&Instruction>) = rule
        .instructions()
        .iter()
        .partition(|i| i.is_header_filter());
    if !filters.into_iter().all(|f| message.accepts(f)) {
        return None;
    }

    let mut state = MatchState::new(rule, message, resolver);
    for instruction in body {
        if !state.execute(instruction) {
            return None;
        }
    }
    Some(state.output)
}

// =============================================================================
// Match State
// =============================================================================

struct MatchState<'a> {
    rule: &'a PatternRule,
    lines: &'a [String],
    lowered: &'a [String],
    resolver: &'a dyn NameResolver,
    anchor: usize,
    cursor: usize,
    output: Vec<String>,
}

impl<'a> MatchState<'a> {
    fn new(rule: &'a PatternRule, message: &'a PreparedMessage, resolver: &'a dyn NameResolver) -> Self {
        Self {
            rule,
            lines: &message.lines,
            lowered: &message.lowered,
            resolver,
            anchor: 0,
            cursor: 0,
            output: vec![String::new(); rule.variables().len()],
        }
    }

    /// Runs one instruction; false means the rule fails.
    fn execute(&mut self, instruction: &Instruction) -> bool {
        match instruction {
            // Checked once up front by `match_prepared`.
            Instruction::MatchKind(_) | Instruction::MatchSubId(_) | Instruction::MatchBigId(_) => {
                true
            }
            Instruction::Check { scope, text } => {
                let needle = self.literal(text);
                match scope {
                    Scope::Any => match self.first_line_containing(&needle) {
                        Some(line) => {
                            self.anchor = line;
                            true
                        }
                        None => false,
                    },
                    _ => self
                        .addressed_line(*scope)
                        .is_some_and(|line| self.lowered[line].contains(&needle)),
                }
            }
            Instruction::Fail { scope, text } => {
                let needle = self.literal(text);
                match scope {
                    Scope::Any => self.first_line_containing(&needle).is_none(),
                    _ => !self
                        .addressed_line(*scope)
                        .is_some_and(|line| self.lowered[line].contains(&needle)),
                }
            }
            Instruction::Find { scope, text } => {
                let needle = self.literal(text);
                let found = match scope {
                    Scope::Any => match self.first_line_containing(&needle) {
                        Some(line) => {
                            self.anchor = line;
                            true
                        }
                        None => false,
                    },
                    _ => self
                        .addressed_line(*scope)
                        .is_some_and(|line| self.lowered[line].contains(&needle)),
                };
                self.store_raw(if found { "1" } else { "0" }.to_string());
                true
            }
            Instruction::Parse { scope, pattern } => {
                let segments = self.segments(pattern);
                let hit = match scope {
                    Scope::Any => (0..self.lines.len())
                        .find_map(|line| self.match_line(line, &segments).map(|c| (line, c))),
                    _ => self
                        .addressed_line(*scope)
                        .and_then(|line| self.match_line(line, &segments).map(|c| (line, c))),
                };
                let Some((line, captures)) = hit else {
                    return false;
                };
                self.anchor = line;
                for value in captures {
                    self.store(&value);
                }
                true
            }
            Instruction::Array { scope, pattern } => self.execute_array(*scope, pattern),
            Instruction::Value(values) => {
                for value in values {
                    self.store(value);
                }
                true
            }
        }
    }

    fn execute_array(&mut self, scope: Scope, pattern: &Pattern) -> bool {
        let segments = self.segments(pattern);
        let columns = pattern.num_wildcards().saturating_sub(1);
        let mut table = vec![vec![String::new(); MAX_PLAYERS]; columns];

        let rows: Vec<(usize, Vec<String>)> = match scope {
            Scope::Any => (0..self.lines.len())
                .filter_map(|line| self.match_line(line, &segments).map(|c| (line, c)))
                .collect(),
            _ => {
                let Some(start) = self.addressed_line(scope) else {
                    return false;
                };
                (start..self.lines.len())
                    .map_while(|line| self.match_line(line, &segments).map(|c| (line, c)))
                    .collect()
            }
        };
        let Some((last_line, _)) = rows.last() else {
            return false;
        };
        self.anchor = *last_line;

        for (_, captures) in rows {
            let Some((index, cells)) = captures.split_first() else {
                continue;
            };
            let Some(slot) = self.row_index(index) else {
                continue;
            };
            for (column, cell) in cells.iter().enumerate().take(columns) {
                let type_tag = self.type_tag(self.cursor + column);
                table[column][slot] = coerce(type_tag, cell, self.resolver);
            }
        }

        for column in table {
            self.store_raw(column.join(","));
        }
        true
    }

    /// Converts an Array row index to a 0-based slot.
    fn row_index(&self, text: &str) -> Option<usize> {
        let mut index = parse_integer_value(text);
        if index < 0 {
            index = [
                NameKind::LongRaceName,
                NameKind::ShortRaceName,
                NameKind::AdjectiveRaceName,
            ]
            .into_iter()
            .map(|kind| self.resolver.parse_name(kind, text))
            .find(|&n| n != 0)
            .unwrap_or(0);
        }
        usize::try_from(index)
            .ok()
            .filter(|i| (1..=MAX_PLAYERS).contains(i))
            .map(|i| i - 1)
    }

    // -------------------------------------------------------------------------
    // Line addressing and text search
    // -------------------------------------------------------------------------

    fn addressed_line(&self, scope: Scope) -> Option<usize> {
        let line = match scope {
            Scope::Any => Some(self.anchor),
            Scope::Relative(offset) => {
                let target = i64::try_from(self.anchor).ok()? + i64::from(offset);
                usize::try_from(target).ok()
            }
            Scope::Fixed(n) => n.checked_sub(1),
        }?;
        (line < self.lines.len()).then_some(line)
    }

    fn first_line_containing(&self, needle: &str) -> Option<usize> {
        self.lowered.iter().position(|l| l.contains(needle))
    }

    fn literal(&self, text: &str) -> String {
        self.resolver.expand_race_names(text).to_ascii_lowercase()
    }

    fn segments(&self, pattern: &Pattern) -> Vec<String> {
        pattern.segments().iter().map(|s| self.literal(s)).collect()
    }

    /// Matches pattern segments against one line, returning trimmed captures.
    ///
    /// Each separator is searched for after the previous one, so a capture
    /// ends at the first occurrence of the following literal.
    fn match_line(&self, line: usize, segments: &[String]) -> Option<Vec<String>> {
        let lower = &self.lowered[line];
        let original = &self.lines[line];
        let (first, rest) = segments.split_first()?;
        let start = lower.find(first.as_str())?;
        capture_from(lower, original, start + first.len(), rest)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    fn type_tag(&self, index: usize) -> &'a TypeTag {
        self.rule
            .variables()
            .get(index)
            .map_or(&PLAIN, |v| &v.type_tag)
    }

    /// Stores a value after coercing it for the current variable.
    fn store(&mut self, value: &str) {
        let type_tag = self.type_tag(self.cursor);
        let coerced = coerce(type_tag, value, self.resolver);
        self.store_raw(coerced);
    }

    /// Stores a value as-is. Values beyond the declared variables are dropped.
    fn store_raw(&mut self, value: String) {
        if let Some(slot) = self.output.get_mut(self.cursor) {
            *slot = value;
        }
        self.cursor += 1;
    }
}

fn capture_from(lower: &str, original: &str, mut pos: usize, separators: &[String]) -> Option<Vec<String>> {
    let mut captures = Vec::with_capacity(separators.len());
    for (i, sep) in separators.iter().enumerate() {
        let is_last = i + 1 == separators.len();
        if sep.is_empty() {
            if is_last {
                captures.push(original.get(pos..)?.trim().to_string());
                pos = original.len();
            } else {
                captures.push(String::new());
            }
        } else {
            let at = pos + lower.get(pos..)?.find(sep.as_str())?;
            captures.push(original.get(pos..at)?.trim().to_string());
            pos = at + sep.len();
        }
    }
    Some(captures)
}
