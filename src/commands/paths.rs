//! `wgraph paths` command

use wgraph_core::error::Result;
use wgraph_core::format::{distance_lines, format_route, paths_json, routes_json, OutputFormat};
use wgraph_core::graph::{compute_shortest_paths, ShortestPaths};

use super::dispatch::CommandContext;
use super::output::{print_json, print_section};

pub const HEADING: &str = "Dijkstra's:";

/// Execute the paths command
pub fn execute(ctx: &CommandContext, source: Option<&str>, routes: bool) -> Result<()> {
    let paths = shortest_paths(ctx, source)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            let mut lines = distance_lines(&paths, &ctx.labels);
            if routes {
                for (vertex, line) in lines.iter_mut().enumerate() {
                    if let Some(route) = paths.path_to(vertex) {
                        line.push_str(&format!(" [{}]", format_route(&route, &ctx.labels)));
                    }
                }
            }
            print_section(ctx.cli, HEADING, &lines);
            Ok(())
        }
        OutputFormat::Json => {
            let mut json = paths_json(&paths, &ctx.labels);
            if routes {
                json["routes"] = routes_json(&paths, &ctx.labels);
            }
            print_json(&json)
        }
    }
}

/// Run Dijkstra from `source`, or from the configured source label
pub fn shortest_paths(ctx: &CommandContext, source: Option<&str>) -> Result<ShortestPaths> {
    let label = source.unwrap_or(&ctx.config.paths.source);
    let source = ctx.labels.parse(label)?;
    tracing::debug!(source = label, "computing shortest paths");
    compute_shortest_paths(&ctx.graph, source)
}
