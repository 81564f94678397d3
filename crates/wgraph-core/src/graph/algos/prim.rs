use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::algos::shared::LazyQueue;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, MstStrategy, SpanningTree, Vertex};
use crate::log_traversal_metrics;
use crate::logging::TraversalMetrics;

/// State tracked during a Prim run
struct PrimState {
    visited: Vec<bool>,
    queue: LazyQueue<Edge>,
    tree: SpanningTree,
    metrics: TraversalMetrics,
}

impl PrimState {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            queue: LazyQueue::new(),
            tree: SpanningTree::new(MstStrategy::Prim, vertex_count),
            metrics: TraversalMetrics::new(),
        }
    }

    /// Mark `vertex` visited and queue its edges toward unvisited vertices
    fn visit(&mut self, provider: &dyn GraphProvider, vertex: Vertex) {
        self.visited[vertex] = true;
        for edge in provider.edges_from(vertex) {
            if !self.visited[edge.to] {
                self.queue.push(edge.weight, *edge, &mut self.metrics);
            }
        }
    }
}

/// Prim's minimum spanning tree grown from vertex 0.
///
/// On a disconnected graph only vertex 0's component is covered.
pub fn prim_mst(provider: &dyn GraphProvider) -> Result<SpanningTree> {
    if provider.vertex_count() == 0 {
        return Ok(SpanningTree::new(MstStrategy::Prim, 0));
    }
    prim_mst_from(provider, 0)
}

/// Lazy Prim from an explicit root.
///
/// Candidate edges wait in a min-heap keyed by weight (ties pop in
/// insertion order). An edge whose far end is already in the tree is
/// discarded when popped. The result holds `V-1` edges for a connected
/// graph; otherwise it spans only the root's component.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn prim_mst_from(provider: &dyn GraphProvider, root: Vertex) -> Result<SpanningTree> {
    ensure_vertex!(root, provider.vertex_count());

    let mut state = PrimState::new(provider.vertex_count());
    state.visit(provider, root);

    while let Some((_, edge)) = state.queue.pop() {
        if state.visited[edge.to] {
            state.metrics.record_stale_pop();
            continue;
        }

        tracing::trace!(from = edge.from, to = edge.to, weight = edge.weight, "accept");
        state.metrics.record_accept();
        state.tree.edges.push(edge);
        state.visit(provider, edge.to);
    }

    if !state.tree.is_spanning() {
        tracing::debug!(
            covered = state.tree.len() + 1,
            vertices = provider.vertex_count(),
            "graph is disconnected; tree covers the root component only"
        );
    }

    log_traversal_metrics!(&state.metrics, "prim");
    Ok(state.tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::fixture::reference_graph;
    use crate::graph::AdjacencyStore;

    #[test]
    fn test_prim_reference_graph_order() {
        let (graph, _) = reference_graph().unwrap();
        let tree = prim_mst(&graph).unwrap();

        // a->f, f->g, g->c, g->b, g->e, e->d
        assert_eq!(
            tree.edges,
            vec![
                Edge::new(0, 5, 10),
                Edge::new(5, 6, 11),
                Edge::new(6, 2, 3),
                Edge::new(6, 1, 6),
                Edge::new(6, 4, 8),
                Edge::new(4, 3, 1),
            ]
        );
        assert_eq!(tree.total_weight().unwrap(), 39);
        assert!(tree.is_spanning());
    }

    #[test]
    fn test_prim_equal_weights_follow_insertion_order() {
        let mut graph = AdjacencyStore::new(4);
        graph.add_weighted_edge(0, 3, 2).unwrap();
        graph.add_weighted_edge(0, 1, 2).unwrap();
        graph.add_weighted_edge(0, 2, 2).unwrap();

        let tree = prim_mst(&graph).unwrap();
        let order: Vec<Vertex> = tree.edges.iter().map(|e| e.to).collect();

        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_prim_single_vertex() {
        let graph = AdjacencyStore::new(1);
        let tree = prim_mst(&graph).unwrap();

        assert!(tree.is_empty());
        assert_eq!(tree.strategy, MstStrategy::Prim);
    }

    #[test]
    fn test_prim_empty_graph() {
        let graph = AdjacencyStore::new(0);
        assert!(prim_mst(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_prim_disconnected_covers_root_component_only() {
        let mut graph = AdjacencyStore::new(5);
        graph.add_weighted_edge(0, 1, 4).unwrap();
        graph.add_weighted_edge(1, 2, 1).unwrap();
        graph.add_weighted_edge(3, 4, 2).unwrap();

        let tree = prim_mst(&graph).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight().unwrap(), 5);
        assert!(tree.edges.iter().all(|e| e.from < 3 && e.to < 3));
        assert!(!tree.is_spanning());
    }

    #[test]
    fn test_prim_from_other_root() {
        let (graph, _) = reference_graph().unwrap();
        let tree = prim_mst_from(&graph, 3).unwrap();

        assert_eq!(tree.edges[0], Edge::new(3, 4, 1));
        assert_eq!(tree.total_weight().unwrap(), 39);
    }

    #[test]
    fn test_prim_root_out_of_range() {
        let graph = AdjacencyStore::new(2);
        assert!(matches!(
            prim_mst_from(&graph, 2),
            Err(GraphError::VertexOutOfRange { vertex: 2, .. })
        ));
    }

    #[test]
    fn test_prim_ignores_self_loops_and_keeps_cheapest_parallel_edge() {
        let mut graph = AdjacencyStore::new(2);
        graph.add_weighted_edge(0, 0, 0).unwrap();
        graph.add_weighted_edge(0, 1, 7).unwrap();
        graph.add_weighted_edge(1, 0, 3).unwrap();

        let tree = prim_mst(&graph).unwrap();

        assert_eq!(tree.edges, vec![Edge::new(0, 1, 3)]);
    }
}
