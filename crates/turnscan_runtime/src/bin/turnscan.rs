//! turnscan CLI entry point.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use turnscan_runtime::{CliError, help_text, init_subscriber, parse_args, run};

fn main() -> ExitCode {
    match main_inner() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn main_inner() -> Result<(), CliError> {
    let config = parse_args(env::args().skip(1))?;

    if config.show_help {
        print!("{}", help_text());
        return Ok(());
    }
    if config.show_version {
        println!("turnscan {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let _ = init_subscriber(config.verbosity, config.no_color);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run(&config, &mut out)?;
    out.flush().map_err(turnscan_foundation::Error::from)?;

    tracing::info!(
        messages = summary.messages,
        facts = summary.facts,
        "scan complete"
    );
    Ok(())
}
