//! CLI argument parsing for wgraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_format, parse_strategy};
pub use parse::{parse_error, wants_json};
pub use wgraph_core::format::OutputFormat;
use wgraph_core::graph::MstStrategy;

/// wgraph - minimum spanning trees and shortest paths on the reference graph
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress section headers
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `wgraph_core=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: $WGRAPH_CONFIG_DIR/config.toml)
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run Prim, Kruskal and Dijkstra (the default when no command is given)
    Demo,

    /// Print a minimum spanning tree
    Mst {
        /// Algorithm: prim or kruskal (default from config)
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<MstStrategy>,

        /// Vertex label Prim grows from (default from config)
        #[arg(long)]
        root: Option<String>,
    },

    /// Print shortest-path distances from a source vertex
    Paths {
        /// Source vertex label (default from config)
        #[arg(long, short)]
        source: Option<String>,

        /// Also print the route to each vertex
        #[arg(long)]
        routes: bool,
    },
}
