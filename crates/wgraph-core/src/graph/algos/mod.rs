//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `prim`: Lazy Prim minimum spanning tree
//! - `kruskal`: Kruskal minimum spanning forest
//! - `dijkstra`: Single-source shortest paths
//! - `shared`: Lazy-deletion priority queue used by Prim and Dijkstra

pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use dijkstra::{dijkstra, relax};
pub use kruskal::kruskal_mst;
pub use prim::{prim_mst, prim_mst_from};
pub use shared::{HeapEntry, LazyQueue};
