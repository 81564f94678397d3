use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, MstStrategy, SpanningTree};
use crate::graph::union_find::UnionFind;
use crate::log_traversal_metrics;
use crate::logging::TraversalMetrics;

/// Gather every directed record, vertex by vertex. Both `u -> v` and
/// `v -> u` of an undirected edge are kept.
fn collect_edges(provider: &dyn GraphProvider) -> Vec<Edge> {
    (0..provider.vertex_count())
        .flat_map(|v| provider.edges_from(v).iter().copied())
        .collect()
}

/// Kruskal's minimum spanning forest.
///
/// All records are stable-sorted by weight and accepted whenever their
/// endpoints lie in different components. The reverse copy of an accepted
/// edge is then rejected by the same check. On a disconnected graph the
/// result is one tree per component.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn kruskal_mst(provider: &dyn GraphProvider) -> Result<SpanningTree> {
    let vertex_count = provider.vertex_count();
    let mut edges = collect_edges(provider);
    // Stable: equal weights keep collection order
    edges.sort_by_key(|e| e.weight);

    let mut components = UnionFind::new(vertex_count);
    let mut tree = SpanningTree::new(MstStrategy::Kruskal, vertex_count);
    let mut metrics = TraversalMetrics::new();

    for edge in edges {
        if components.union(edge.from, edge.to) {
            tracing::trace!(from = edge.from, to = edge.to, weight = edge.weight, "accept");
            metrics.record_accept();
            tree.edges.push(edge);
        } else {
            metrics.record_reject();
        }
    }

    log_traversal_metrics!(&metrics, "kruskal");
    Ok(tree)
}
