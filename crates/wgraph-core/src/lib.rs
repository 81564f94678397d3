//! wgraph Core Library
//!
//! Graph engine for weighted undirected graphs: Prim and Kruskal minimum
//! spanning trees and Dijkstra shortest paths over a shared adjacency
//! store.

pub mod config;
pub mod error;
pub mod fixture;
pub mod format;
pub mod graph;
pub mod logging;
