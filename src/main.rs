//! Grafo - spanning trees over a weighted undirected graph
//!
//! Builds a graph (the sample graph or `--edge` flags), runs BFS, DFS,
//! Kruskal or Prim over it and prints the resulting edge list.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use grafo_core::error::{ExitCode as GrafoExitCode, GrafoError};
use grafo_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(GrafoExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: GrafoExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Print a command failure the way the chosen format expects
fn report(cli: &Cli, err: &GrafoError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
}

/// Argument errors happen before `Cli.format` exists, so a JSON request is
/// read from the raw arguments. Help and version always go through clap.
fn parse_failure(err: clap::Error) -> ExitCode {
    let wants_json = json_requested(std::env::args().skip(1));
    if !wants_json || matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let grafo_error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => GrafoError::UsageError(err.to_string()),
        _ => GrafoError::Other(err.to_string()),
    };
    eprintln!("{}", grafo_error.to_json());
    exit_with(grafo_error.exit_code())
}

/// `--format json` or `--format=json` anywhere in `args`
fn json_requested<I: IntoIterator<Item = String>>(args: I) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}
