//! Pattern rule model.
//!
//! A [`PatternRule`] is built once by the loader and never changes afterwards.
//! Its instructions run in order against a message; the values they capture
//! fill the rule's declared variables in order.

use std::fmt;

use turnscan_foundation::ObjectKind;

// =============================================================================
// Scope
// =============================================================================

/// Which lines an instruction looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Every line; the first hit becomes the anchor.
    Any,
    /// The line at this offset from the anchor.
    Relative(i32),
    /// This absolute line (1-based).
    Fixed(usize),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => Ok(()),
            Self::Relative(n) => write!(f, "{n:+},"),
            Self::Fixed(n) => write!(f, "={n},"),
        }
    }
}

// =============================================================================
// Patterns
// =============================================================================

/// A `Parse`/`Array` pattern: literal segments separated by `$` wildcards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<String>,
}

impl Pattern {
    /// Splits pattern text at `$`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            segments: text.split('$').map(String::from).collect(),
        }
    }

    /// Literal segments; always one more than the number of wildcards.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of `$` wildcards.
    #[must_use]
    pub fn num_wildcards(&self) -> usize {
        self.segments.len() - 1
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("$"))
    }
}

// =============================================================================
// Instructions
// =============================================================================

/// One step of a pattern rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Header kind must equal this character.
    MatchKind(char),
    /// Header sub-id must equal this character.
    MatchSubId(char),
    /// Header big Id must equal this number.
    MatchBigId(u16),
    /// Text must be present.
    Check {
        /// Lines to search.
        scope: Scope,
        /// Literal text.
        text: String,
    },
    /// Text must be absent.
    Fail {
        /// Lines to search.
        scope: Scope,
        /// Literal text.
        text: String,
    },
    /// Produces `"1"` if the text is present, `"0"` otherwise.
    Find {
        /// Lines to search.
        scope: Scope,
        /// Literal text.
        text: String,
    },
    /// Captures one value per wildcard from one line.
    Parse {
        /// Lines to search.
        scope: Scope,
        /// Pattern.
        pattern: Pattern,
    },
    /// Captures a table; the first wildcard is the row index.
    Array {
        /// Where the table starts.
        scope: Scope,
        /// Row pattern.
        pattern: Pattern,
    },
    /// Produces constant values.
    Value(Vec<String>),
}

impl Instruction {
    /// Number of variables this instruction fills.
    #[must_use]
    pub fn num_outputs(&self) -> usize {
        match self {
            Self::MatchKind(_)
            | Self::MatchSubId(_)
            | Self::MatchBigId(_)
            | Self::Check { .. }
            | Self::Fail { .. } => 0,
            Self::Find { .. } => 1,
            Self::Parse { pattern, .. } => pattern.num_wildcards(),
            Self::Array { pattern, .. } => pattern.num_wildcards().saturating_sub(1),
            Self::Value(values) => values.len(),
        }
    }

    /// True for instructions that look at message text.
    #[must_use]
    pub fn is_restriction(&self) -> bool {
        matches!(
            self,
            Self::Check { .. }
                | Self::Fail { .. }
                | Self::Find { .. }
                | Self::Parse { .. }
                | Self::Array { .. }
        )
    }

    /// True for header filters.
    #[must_use]
    pub fn is_header_filter(&self) -> bool {
        matches!(
            self,
            Self::MatchKind(_) | Self::MatchSubId(_) | Self::MatchBigId(_)
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchKind(c) => write!(f, "kind={c}"),
            Self::MatchSubId(c) => write!(f, "subid={c}"),
            Self::MatchBigId(n) => write!(f, "bigid={n}"),
            Self::Check { scope, text } => write!(f, "check={scope}{text}"),
            Self::Fail { scope, text } => write!(f, "fail={scope}{text}"),
            Self::Find { scope, text } => write!(f, "find={scope}{text}"),
            Self::Parse { scope, pattern } => write!(f, "parse={scope}{pattern}"),
            Self::Array { scope, pattern } => write!(f, "array={scope}{pattern}"),
            Self::Value(values) => write!(f, "values={}", values.join(",")),
        }
    }
}

// =============================================================================
// Variables
// =============================================================================

/// How a captured value is converted before it is stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TypeTag {
    /// Stored verbatim.
    #[default]
    Plain,
    /// Decimal number scaled by 100.
    FixedPoint100,
    /// Index into a list of alternatives.
    Enum(Vec<String>),
    /// Long race name.
    RaceLong,
    /// Short race name.
    RaceShort,
    /// Race adjective.
    RaceAdjective,
    /// Race adjective followed by `+`/`!` alliance markers.
    RaceAdjectivePlusAlliance,
    /// Hull name.
    HullName,
}

/// A declared output variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDecl {
    /// Uppercased name; `_` or empty for ignored values.
    pub name: String,
    /// Conversion applied to captured values.
    pub type_tag: TypeTag,
}

impl VariableDecl {
    /// Declares a variable; the name is uppercased.
    #[must_use]
    pub fn new(name: &str, type_tag: TypeTag) -> Self {
        Self {
            name: name.trim().to_ascii_uppercase(),
            type_tag,
        }
    }

    /// Declares an untyped variable.
    #[must_use]
    pub fn plain(name: &str) -> Self {
        Self::new(name, TypeTag::Plain)
    }

    /// True if the variable's value is discarded.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.name.is_empty() || self.name == "_"
    }
}

// =============================================================================
// Pattern Rule
// =============================================================================

/// A compiled pattern rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternRule {
    kind: ObjectKind,
    name: String,
    instructions: Vec<Instruction>,
    variables: Vec<VariableDecl>,
    continue_flag: bool,
}

impl PatternRule {
    /// Creates an empty rule.
    #[must_use]
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            instructions: Vec::new(),
            variables: Vec::new(),
            continue_flag: false,
        }
    }

    /// Builder: appends an instruction.
    #[must_use]
    pub fn with_instruction(mut self, instruction: Instruction) -> Self {
        self.add_instruction(instruction);
        self
    }

    /// Builder: appends a variable.
    #[must_use]
    pub fn with_variable(mut self, variable: VariableDecl) -> Self {
        self.add_variable(variable);
        self
    }

    /// Builder: sets the continue flag.
    #[must_use]
    pub fn with_continue(mut self, flag: bool) -> Self {
        self.continue_flag = flag;
        self
    }

    /// Appends an instruction.
    pub fn add_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Appends a variable.
    pub fn add_variable(&mut self, variable: VariableDecl) {
        self.variables.push(variable);
    }

    /// Sets the continue flag.
    pub fn set_continue(&mut self, flag: bool) {
        self.continue_flag = flag;
    }

    /// Target object kind.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instructions in order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Declared variables in order.
    #[must_use]
    pub fn variables(&self) -> &[VariableDecl] {
        &self.variables
    }

    /// Whether later rules are still tried after this one matches.
    #[must_use]
    pub fn continue_flag(&self) -> bool {
        self.continue_flag
    }

    /// Number of instructions that look at message text.
    #[must_use]
    pub fn num_restrictions(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_restriction()).count()
    }

    /// Total number of values the instructions produce.
    #[must_use]
    pub fn num_wildcards(&self) -> usize {
        self.instructions.iter().map(Instruction::num_outputs).sum()
    }

    /// Position of the variable with the given name.
    #[must_use]
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name == name)
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.kind.keyword(), self.name)?;
        for i in &self.instructions {
            write!(f, "\n  {i}")?;
        }
        if !self.variables.is_empty() {
            let names: Vec<&str> = self.variables.iter().map(|v| v.name.as_str()).collect();
            write!(f, "\n  assign={}", names.join(","))?;
        }
        if self.continue_flag {
            write!(f, "\n  continue=yes")?;
        }
        Ok(())
    }
}
