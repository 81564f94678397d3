//! Default command: both spanning trees, then shortest paths

use wgraph_core::error::Result;
use wgraph_core::format::{distance_lines, paths_json, tree_json, tree_lines, OutputFormat};
use wgraph_core::graph::MstStrategy;

use super::dispatch::CommandContext;
use super::output::{print_json, print_section};
use super::{mst, paths};

/// Execute the demo command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let prim = mst::build_tree(ctx, MstStrategy::Prim, None)?;
    let kruskal = mst::build_tree(ctx, MstStrategy::Kruskal, None)?;
    let shortest = paths::shortest_paths(ctx, None)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            print_section(
                ctx.cli,
                mst::heading(MstStrategy::Prim),
                &tree_lines(&prim, &ctx.labels),
            );
            if !ctx.cli.quiet {
                println!();
            }
            print_section(
                ctx.cli,
                mst::heading(MstStrategy::Kruskal),
                &tree_lines(&kruskal, &ctx.labels),
            );
            if !ctx.cli.quiet {
                println!();
            }
            print_section(
                ctx.cli,
                paths::HEADING,
                &distance_lines(&shortest, &ctx.labels),
            );
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "prim": tree_json(&prim, &ctx.labels)?,
            "kruskal": tree_json(&kruskal, &ctx.labels)?,
            "dijkstra": paths_json(&shortest, &ctx.labels),
        })),
    }
}
