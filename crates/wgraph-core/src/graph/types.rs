use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::union_find::UnionFind;

/// Dense, zero-based vertex index
pub type Vertex = usize;

/// Edge weight. Must be non-negative.
pub type Weight = i64;

/// A directed adjacency record `from -> to` carrying the weight of its
/// undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// The same undirected edge seen from the other endpoint
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

/// Algorithm used to build a minimum spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstStrategy {
    /// Lazy Prim growing from a single root
    #[default]
    Prim,
    /// Kruskal over all edges sorted by weight
    Kruskal,
}

impl std::str::FromStr for MstStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prim" => Ok(MstStrategy::Prim),
            "kruskal" => Ok(MstStrategy::Kruskal),
            other => Err(GraphError::UnknownStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for MstStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MstStrategy::Prim => write!(f, "prim"),
            MstStrategy::Kruskal => write!(f, "kruskal"),
        }
    }
}

/// Minimum spanning tree (or forest, for Kruskal on a disconnected graph)
///
/// Edges are kept in the order the builder accepted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub strategy: MstStrategy,
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn new(strategy: MstStrategy, vertex_count: usize) -> Self {
        Self {
            strategy,
            vertex_count,
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        }
    }

    /// Sum of the edge weights. `WeightOverflow` if it does not fit a
    /// `Weight`.
    pub fn total_weight(&self) -> Result<Weight> {
        self.edges.iter().try_fold(0 as Weight, |total, edge| {
            total
                .checked_add(edge.weight)
                .ok_or_else(|| GraphError::WeightOverflow("spanning tree total".to_string()))
        })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the edges connect every vertex, i.e. there are exactly
    /// `V-1` of them and they form a single tree
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1) && self.component_count() <= 1
    }

    /// Number of connected components the tree edges induce over all
    /// `vertex_count` vertices (isolated vertices count as one each)
    pub fn component_count(&self) -> usize {
        let mut components = UnionFind::new(self.vertex_count);
        for edge in &self.edges {
            components.union(edge.from, edge.to);
        }
        components.component_count()
    }
}

/// Shortest-path distances from a single source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: Vertex,
    /// `None` marks a vertex never reached from the source
    pub distances: Vec<Option<Weight>>,
    /// Vertex that last improved each distance; `None` for the source and
    /// unreachable vertices
    pub predecessors: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    pub fn distance(&self, vertex: Vertex) -> Option<Weight> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// `(vertex, distance)` pairs in vertex order
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Option<Weight>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Vertices on a shortest path from the source to `target`, both ends
    /// included. `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}
