//! Roadnet - route, tree and tour algorithms over a road network
//!
//! Loads a road snapshot (or the built-in sample network) and answers
//! traversal, shortest path, spanning tree, tour, cycle and sorting queries.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use roadnet_core::error::RoadnetError;
use roadnet_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !is_informational(&err) && json_errors_requested() => {
            return report(&usage_error(&err), OutputFormat::Json, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print `err` on stderr in the requested format and pick the exit code
fn report(err: &RoadnetError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    ExitCode::from(err.exit_code() as u8)
}

fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn usage_error(err: &clap::Error) -> RoadnetError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => RoadnetError::UsageError(err.to_string()),
        _ => RoadnetError::Other(err.to_string()),
    }
}

/// `--format json` on the raw command line; parsing may fail before `Cli` exists
fn json_errors_requested() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
