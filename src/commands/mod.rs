//! CLI commands for wgraph

pub mod demo;
pub mod dispatch;
pub mod mst;
pub mod output;
pub mod paths;
