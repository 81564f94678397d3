//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use crate::commands;
use wgraph_core::config::EngineConfig;
use wgraph_core::error::Result;
use wgraph_core::graph::{AdjacencyStore, VertexLabels};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    pub config: EngineConfig,
    pub graph: AdjacencyStore,
    pub labels: VertexLabels,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        start: Instant,
        config: EngineConfig,
        graph: AdjacencyStore,
        labels: VertexLabels,
    ) -> Self {
        Self {
            cli,
            start,
            config,
            graph,
            labels,
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Runs the full demo when no subcommand is provided
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        commands::demo::execute(ctx)
    }
}
