//! Weighted undirected graphs and the algorithms that run over them
//!
//! Provides:
//! - `AdjacencyStore` for building a graph edge by edge
//! - Prim and Kruskal minimum spanning trees
//! - Dijkstra single-source shortest paths
//! - Graph provider trait the algorithms read through

pub mod adjacency;
pub mod algos;
pub mod engine;
pub mod labels;
pub mod traversal;
pub mod types;
pub mod union_find;

pub use adjacency::AdjacencyStore;
pub use algos::{dijkstra, kruskal_mst, prim_mst, prim_mst_from, relax};
pub use engine::{compute_mst, compute_shortest_paths};
pub use labels::VertexLabels;
pub use traversal::GraphProvider;
pub use types::{Edge, MstStrategy, ShortestPaths, SpanningTree, Vertex, Weight};
pub use union_find::UnionFind;
