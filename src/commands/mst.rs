//! `wgraph mst` command

use wgraph_core::error::{GraphError, Result};
use wgraph_core::format::{tree_json, tree_lines, OutputFormat};
use wgraph_core::graph::{kruskal_mst, prim_mst_from, MstStrategy, SpanningTree};

use super::dispatch::CommandContext;
use super::output::{print_json, print_section};

/// Execute the mst command
pub fn execute(
    ctx: &CommandContext,
    strategy: Option<MstStrategy>,
    root: Option<&str>,
) -> Result<()> {
    let strategy = strategy.unwrap_or(ctx.config.mst.strategy);
    let tree = build_tree(ctx, strategy, root)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            print_section(ctx.cli, heading(strategy), &tree_lines(&tree, &ctx.labels));
            Ok(())
        }
        OutputFormat::Json => print_json(&tree_json(&tree, &ctx.labels)?),
    }
}

/// Compute a spanning tree with the given strategy.
///
/// `root` overrides the configured Prim root and is rejected for Kruskal,
/// which has no root.
pub fn build_tree(
    ctx: &CommandContext,
    strategy: MstStrategy,
    root: Option<&str>,
) -> Result<SpanningTree> {
    match strategy {
        MstStrategy::Prim => {
            let label = root.unwrap_or(&ctx.config.mst.root);
            let root = ctx.labels.parse(label)?;
            prim_mst_from(&ctx.graph, root)
        }
        MstStrategy::Kruskal => {
            if root.is_some() {
                return Err(GraphError::UsageError(
                    "--root only applies to the prim strategy".to_string(),
                ));
            }
            kruskal_mst(&ctx.graph)
        }
    }
}

pub fn heading(strategy: MstStrategy) -> &'static str {
    match strategy {
        MstStrategy::Prim => "Prim's:",
        MstStrategy::Kruskal => "Kruskal's:",
    }
}
