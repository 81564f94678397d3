//! wgraph - minimum spanning trees and shortest paths
//!
//! Runs Prim's and Kruskal's algorithms and Dijkstra's algorithm over a
//! fixed, labeled reference graph.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use wgraph_core::error::{ExitCode as GraphExitCode, GraphError};
use wgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout and are left to clap
        Err(err) if err.use_stderr() && cli::wants_json(env::args().skip(1)) => {
            return exit_with(&cli::parse_error(&err), OutputFormat::Json);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) if cli.quiet && cli.format == OutputFormat::Human => {
            ExitCode::from(e.exit_code() as u8)
        }
        Err(e) => exit_with(&e, cli.format),
    }
}

/// Report `err` on stderr in the requested format and pick its exit code
fn exit_with(err: &GraphError, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human => eprintln!("error: {}", err),
    }
    ExitCode::from(err.exit_code() as u8)
}
