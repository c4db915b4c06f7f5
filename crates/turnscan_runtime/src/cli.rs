//! Command-line arguments.

use std::path::PathBuf;

use thiserror::Error;
use turnscan_parser::KeywordMatching;

use crate::tracing_setup::Verbosity;

/// Errors from argument parsing or scanning.
#[derive(Debug, Error)]
pub enum CliError {
    /// An option was given without its value.
    #[error("{0} requires a value")]
    MissingValue(String),
    /// An option value could not be parsed.
    #[error("invalid {option} value: {value}")]
    InvalidValue {
        /// The option.
        option: String,
        /// The rejected value.
        value: String,
    },
    /// An unrecognized option.
    #[error("unknown option: {0}")]
    UnknownOption(String),
    /// No rule definition file was given.
    #[error("no rule definitions given (use -r RULES)")]
    MissingRules,
    /// Loading rules or reading input failed.
    #[error(transparent)]
    Scan(#[from] turnscan_foundation::Error),
}

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Rule definition files, loaded in order.
    pub rules: Vec<PathBuf>,
    /// Message files; standard input if empty.
    pub files: Vec<PathBuf>,
    /// Race name list replacing the built-in names.
    pub races: Option<PathBuf>,
    /// Turn number stamped on every fact.
    pub turn: i32,
    /// Viewing player.
    pub player: i32,
    /// Require full keywords in rule definitions.
    pub exact_keywords: bool,
    /// Print the loaded rules before scanning.
    pub dump_rules: bool,
    /// Print facts as JSON, one object per line.
    pub json: bool,
    /// Log verbosity.
    pub verbosity: Verbosity,
    /// Disable colored log output.
    pub no_color: bool,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl CliConfig {
    /// Keyword matching mode requested on the command line.
    #[must_use]
    pub fn keyword_matching(&self) -> KeywordMatching {
        if self.exact_keywords {
            KeywordMatching::Exact
        } else {
            KeywordMatching::Abbreviated
        }
    }
}

/// Parses arguments, excluding the program name.
///
/// # Errors
///
/// Returns an error for unknown options, missing or malformed values, and a
/// missing rule file (unless help or version was requested).
pub fn parse_args<I, S>(args: I) -> Result<CliConfig, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = CliConfig::default();
    let (mut verbose, mut quiet) = (false, false);
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => verbose = true,
            "-q" | "--quiet" => quiet = true,
            "--no-color" => config.no_color = true,
            "--exact" => config.exact_keywords = true,
            "--dump-rules" => config.dump_rules = true,
            "--json" => config.json = true,
            "-r" | "--rules" => config.rules.push(PathBuf::from(value(&mut args, &arg)?)),
            "--races" => config.races = Some(PathBuf::from(value(&mut args, &arg)?)),
            "-t" | "--turn" => config.turn = number(&mut args, &arg)?,
            "-p" | "--player" => config.player = number(&mut args, &arg)?,
            other if other.starts_with('-') => {
                return Err(CliError::UnknownOption(other.to_string()));
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    config.verbosity = Verbosity::from_flags(verbose, quiet);
    if config.rules.is_empty() && !config.show_help && !config.show_version {
        return Err(CliError::MissingRules);
    }
    Ok(config)
}

fn value(args: &mut impl Iterator<Item = String>, option: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::MissingValue(option.to_string()))
}

fn number(args: &mut impl Iterator<Item = String>, option: &str) -> Result<i32, CliError> {
    let text = value(args, option)?;
    text.parse().map_err(|_| CliError::InvalidValue {
        option: option.to_string(),
        value: text,
    })
}

/// Usage text.
#[must_use]
pub fn help_text() -> String {
    "\
turnscan - extract facts from host turn messages

USAGE:
    turnscan -r RULES [OPTIONS] [FILES...]

ARGUMENTS:
    [FILES...]         Message files; messages are separated by lines
                       starting with ---. Reads standard input if omitted.

OPTIONS:
    -r, --rules FILE   Rule definitions (repeatable, loaded in order)
    -t, --turn N       Turn number for the extracted facts
    -p, --player N     Viewing player number
        --races FILE   Race names as lines of number,long,short,adjective
        --exact        Require full keywords in rule definitions
        --dump-rules   Print the loaded rules before scanning
        --json         Print facts as JSON lines
    -v, --verbose      Debug logging (every matched rule)
    -q, --quiet        Only log errors
        --no-color     Disable colored log output
    -h, --help         Print help information
    -V, --version      Print version information

ENVIRONMENT:
    TURNSCAN_LOG, RUST_LOG   Log filter directives, e.g. turnscan=debug
"
    .to_string()
}
