use crate::graph::types::{Edge, Vertex};

/// Trait for providing read-only weighted adjacency to the algorithms
pub trait GraphProvider {
    /// Number of vertices; valid indices are `0..vertex_count()`
    fn vertex_count(&self) -> usize;

    /// Outgoing records of `vertex` in insertion order.
    ///
    /// Callers pass only in-range vertices.
    fn edges_from(&self, vertex: Vertex) -> &[Edge];
}
