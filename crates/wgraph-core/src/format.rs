//! Output format handling for wgraph
//!
//! Supports two output formats:
//! - human: one line per tree edge (`a -> f (10)`) or per distance
//!   (`a -> c = 24`)
//! - json: stable, machine-readable JSON with vertices shown as labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, ShortestPaths, SpanningTree, Vertex, VertexLabels, Weight};

/// Output format for wgraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// `a -> f (10)`
pub fn format_edge_line(edge: &Edge, labels: &VertexLabels) -> String {
    format!(
        "{} -> {} ({})",
        labels.display(edge.from),
        labels.display(edge.to),
        edge.weight
    )
}

/// `a -> c = 24`, or `a -> x = unreachable`
pub fn format_distance_line(
    source: Vertex,
    vertex: Vertex,
    distance: Option<Weight>,
    labels: &VertexLabels,
) -> String {
    let distance = distance
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unreachable".to_string());
    format!(
        "{} -> {} = {}",
        labels.display(source),
        labels.display(vertex),
        distance
    )
}

/// Human lines for a spanning tree, in acceptance order
pub fn tree_lines(tree: &SpanningTree, labels: &VertexLabels) -> Vec<String> {
    tree.edges
        .iter()
        .map(|edge| format_edge_line(edge, labels))
        .collect()
}

/// Human lines for a distance vector, in vertex order
pub fn distance_lines(paths: &ShortestPaths, labels: &VertexLabels) -> Vec<String> {
    paths
        .iter()
        .map(|(vertex, distance)| format_distance_line(paths.source, vertex, distance, labels))
        .collect()
}

/// `a f e d`
pub fn format_route(route: &[Vertex], labels: &VertexLabels) -> String {
    route
        .iter()
        .map(|&vertex| labels.display(vertex))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn tree_json(tree: &SpanningTree, labels: &VertexLabels) -> Result<Value> {
    let edges: Vec<Value> = tree
        .edges
        .iter()
        .map(|edge| {
            serde_json::json!({
                "from": labels.display(edge.from),
                "to": labels.display(edge.to),
                "weight": edge.weight,
            })
        })
        .collect();

    Ok(serde_json::json!({
        "strategy": tree.strategy,
        "total_weight": tree.total_weight()?,
        "spanning": tree.is_spanning(),
        "edges": edges,
    }))
}

pub fn paths_json(paths: &ShortestPaths, labels: &VertexLabels) -> Value {
    let distances: Vec<Value> = paths
        .iter()
        .map(|(vertex, distance)| {
            serde_json::json!({
                "vertex": labels.display(vertex),
                "distance": distance,
            })
        })
        .collect();

    serde_json::json!({
        "source": labels.display(paths.source),
        "distances": distances,
    })
}

/// Routes from the source, one entry per vertex; `null` when unreachable
pub fn routes_json(paths: &ShortestPaths, labels: &VertexLabels) -> Value {
    let routes: Vec<Value> = (0..paths.len())
        .map(|vertex| {
            let route = paths.path_to(vertex).map(|route| {
                route
                    .into_iter()
                    .map(|v| labels.display(v))
                    .collect::<Vec<_>>()
            });
            serde_json::json!({
                "vertex": labels.display(vertex),
                "route": route,
            })
        })
        .collect();
    Value::Array(routes)
}
