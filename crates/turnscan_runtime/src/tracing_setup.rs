//! Tracing subscriber initialization for the `turnscan` binary.
//!
//! Log level selection, highest priority first:
//!
//! 1. `TURNSCAN_LOG` (directives such as `turnscan=debug,warn`)
//! 2. `RUST_LOG`
//! 3. `--verbose` (debug) / `--quiet` (error)
//! 4. `warn`

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding project-specific log directives.
pub const LOG_ENV: &str = "TURNSCAN_LOG";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: only errors.
    Quiet,
    /// Warnings and above.
    #[default]
    Normal,
    /// `--verbose`: debug output, including every matched rule.
    Verbose,
}

impl Verbosity {
    /// Determines verbosity from flags; verbose wins if both are set.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Default level when no environment directives are set.
    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber writing to stderr.
///
/// Returns false if a subscriber was already installed.
pub fn init_subscriber(verbosity: Verbosity, no_color: bool) -> bool {
    let filter = build_env_filter(verbosity);
    let use_ansi = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(verbosity == Verbosity::Verbose)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    let from_env = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok());
    if let Some(filter) = from_env {
        return filter;
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = verbosity.default_level();
    EnvFilter::try_new(level.as_str()).unwrap_or_else(|_| EnvFilter::new("warn"))
}
