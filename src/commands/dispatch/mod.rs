//! Command dispatch logic for wgraph

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use wgraph_core::config::EngineConfig;
use wgraph_core::error::Result;
use wgraph_core::fixture::reference_graph;

mod command;
mod macros;

pub use command::{Command, CommandContext, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EngineConfig::load(cli.config.as_deref())?;
    trace_command!(cli, start, "load_config");

    let (graph, labels) = reference_graph()?;
    trace_command!(cli, start, "build_graph");

    let ctx = CommandContext::new(cli, start, config, graph, labels);

    // Execute command
    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };
    trace_command!(ctx.cli, ctx.start, "execute_command");
    result
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Demo => commands::demo::execute(ctx),
            Commands::Mst { strategy, root } => {
                commands::mst::execute(ctx, *strategy, root.as_deref())
            }
            Commands::Paths { source, routes } => {
                commands::paths::execute(ctx, source.as_deref(), *routes)
            }
        }
    }
}
