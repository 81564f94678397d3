//! Entry points that pick an algorithm for the caller

use std::time::Instant;

use crate::error::Result;
use crate::graph::adjacency::AdjacencyStore;
use crate::graph::algos::{dijkstra, kruskal_mst, prim_mst};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{MstStrategy, ShortestPaths, SpanningTree, Vertex};
use crate::trace_time;

/// Build a minimum spanning tree with the given strategy.
///
/// Prim grows from vertex 0 and leaves other components out; Kruskal
/// returns a forest covering every component.
pub fn compute_mst(provider: &dyn GraphProvider, strategy: MstStrategy) -> Result<SpanningTree> {
    let start = Instant::now();
    let tree = match strategy {
        MstStrategy::Prim => prim_mst(provider)?,
        MstStrategy::Kruskal => kruskal_mst(provider)?,
    };
    trace_time!(start, "compute_mst", edges = tree.len());
    Ok(tree)
}

/// Shortest-path distances from `source` to every vertex
pub fn compute_shortest_paths(
    provider: &dyn GraphProvider,
    source: Vertex,
) -> Result<ShortestPaths> {
    let start = Instant::now();
    let paths = dijkstra(provider, source)?;
    trace_time!(start, "compute_shortest_paths", source = source);
    Ok(paths)
}

impl AdjacencyStore {
    pub fn compute_mst(&self, strategy: MstStrategy) -> Result<SpanningTree> {
        compute_mst(self, strategy)
    }

    pub fn compute_shortest_paths(&self, source: Vertex) -> Result<ShortestPaths> {
        compute_shortest_paths(self, source)
    }
}
