//! Configuration type definitions

use crate::graph::MstStrategy;
use serde::{Deserialize, Serialize};

/// Label of the default Prim root and shortest-path source
pub const DEFAULT_VERTEX_LABEL: &str = "a";

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Spanning tree settings
    #[serde(default)]
    pub mst: MstConfig,

    /// Shortest-path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Configuration for minimum spanning tree runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstConfig {
    /// Algorithm used when none is given on the command line
    #[serde(default)]
    pub strategy: MstStrategy,

    /// Vertex label Prim grows from
    #[serde(default = "default_vertex_label")]
    pub root: String,
}

/// Configuration for shortest-path runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Source vertex label used when none is given on the command line
    #[serde(default = "default_vertex_label")]
    pub source: String,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            strategy: MstStrategy::default(),
            root: default_vertex_label(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_vertex_label(),
        }
    }
}

fn default_vertex_label() -> String {
    DEFAULT_VERTEX_LABEL.to_string()
}
