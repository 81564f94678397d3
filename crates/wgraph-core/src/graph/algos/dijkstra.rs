use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::LazyQueue;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{ShortestPaths, Vertex, Weight};
use crate::log_traversal_metrics;
use crate::logging::TraversalMetrics;

/// State tracked during Dijkstra traversal
struct DijkstraState {
    finalized: Vec<bool>,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<Vertex>>,
    queue: LazyQueue<Vertex>,
    metrics: TraversalMetrics,
}

impl DijkstraState {
    fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(0);
        Self {
            finalized: vec![false; vertex_count],
            distances,
            predecessors: vec![None; vertex_count],
            queue: LazyQueue::new(),
            metrics: TraversalMetrics::new(),
        }
    }
}

/// Relax the edge `u -> v` of weight `w`:
/// `distance[v] = min(distance[v], distance[u] + w)`.
///
/// Returns true if `distance[v]` improved. Nothing changes when `u` is
/// unreachable. A sum that does not fit a `Weight` is `WeightOverflow`.
pub fn relax(
    distances: &mut [Option<Weight>],
    u: Vertex,
    v: Vertex,
    w: Weight,
) -> Result<bool> {
    let Some(du) = distances[u] else {
        return Ok(false);
    };
    let candidate = du
        .checked_add(w)
        .ok_or_else(|| GraphError::WeightOverflow(format!("distance to vertex {v}")))?;

    match distances[v] {
        Some(dv) if dv <= candidate => Ok(false),
        _ => {
            distances[v] = Some(candidate);
            Ok(true)
        }
    }
}

/// Single-source shortest paths over non-negative weights.
///
/// Entries wait in a min-heap keyed by tentative distance. A popped entry
/// for an already finalized vertex is stale and skipped, so no
/// decrease-key is needed. Vertices never finalized stay unreachable.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn dijkstra(provider: &dyn GraphProvider, source: Vertex) -> Result<ShortestPaths> {
    ensure_vertex!(source, provider.vertex_count());

    let mut state = DijkstraState::new(provider.vertex_count(), source);
    state.queue.push(0, source, &mut state.metrics);

    while let Some((distance, u)) = state.queue.pop() {
        if state.finalized[u] {
            state.metrics.record_stale_pop();
            continue;
        }
        state.finalized[u] = true;
        state.metrics.record_accept();
        tracing::trace!(vertex = u, distance, "finalize");

        for edge in provider.edges_from(u) {
            let v = edge.to;
            if state.finalized[v] {
                continue;
            }
            if relax(&mut state.distances, u, v, edge.weight)? {
                state.predecessors[v] = Some(u);
                state.metrics.record_relaxation();
                if let Some(dv) = state.distances[v] {
                    state.queue.push(dv, v, &mut state.metrics);
                }
            }
        }
    }

    log_traversal_metrics!(&state.metrics, "dijkstra");
    Ok(ShortestPaths {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}

#[cfg(test)]
mod tests;
