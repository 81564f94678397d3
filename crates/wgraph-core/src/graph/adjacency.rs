//! Undirected weighted adjacency lists

use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, Vertex, Weight};

/// Per-vertex outgoing edge lists, kept in insertion order.
///
/// Built once by repeated [`add_weighted_edge`](Self::add_weighted_edge)
/// calls and then only read. There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyStore {
    adj: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl AdjacencyStore {
    /// Create a store with vertices `0..vertex_count` and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges inserted (each one is stored twice)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Append a new isolated vertex and return its index
    pub fn add_vertex(&mut self) -> Vertex {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Insert the undirected edge `u - v` with weight `w`.
    ///
    /// Stores `u -> v` in `u`'s list and `v -> u` in `v`'s list. Parallel
    /// edges and self-loops are accepted as-is. Fails without modifying the
    /// store if an endpoint is out of range or `w` is negative.
    pub fn add_weighted_edge(&mut self, u: Vertex, v: Vertex, w: Weight) -> Result<()> {
        let count = self.vertex_count();
        ensure_vertex!(u, count);
        ensure_vertex!(v, count);
        if w < 0 {
            return Err(GraphError::NegativeWeight {
                from: u,
                to: v,
                weight: w,
            });
        }

        let edge = Edge::new(u, v, w);
        self.adj[u].push(edge);
        self.adj[v].push(edge.reversed());
        self.edge_count += 1;

        tracing::trace!(from = u, to = v, weight = w, "add_weighted_edge");
        Ok(())
    }

    /// Outgoing edges of `u` in insertion order. The iterator is `Clone`,
    /// so it can be restarted.
    ///
    /// # Panics
    /// If `u` is out of range.
    pub fn neighbors(&self, u: Vertex) -> impl Iterator<Item = &Edge> + Clone + '_ {
        self.adj[u].iter()
    }

    /// Every directed adjacency record, vertex by vertex in insertion order.
    /// Each undirected edge appears twice.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adj.iter().flatten()
    }
}

impl GraphProvider for AdjacencyStore {
    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn edges_from(&self, vertex: Vertex) -> &[Edge] {
        &self.adj[vertex]
    }
}
