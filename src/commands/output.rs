//! Shared printing helpers for command output

use crate::cli::Cli;
use wgraph_core::error::Result;

/// Print a titled block of lines. The title is dropped with `--quiet`.
pub fn print_section(cli: &Cli, title: &str, lines: &[String]) {
    if !cli.quiet {
        println!("{}", title);
    }
    for line in lines {
        println!("{}", line);
    }
}

/// Print a JSON value, pretty-printed
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
