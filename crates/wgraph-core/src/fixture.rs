//! Built-in reference graph
//!
//! Seven vertices `a..g`, ten edges:
//!
//! ```text
//! ab 15  af 10  bc 14  bg 6  cg 3
//! cd 9   de 1   eg 8   ef 19 fg 11
//! ```
//!
//! Its minimum spanning tree is {de 1, cg 3, bg 6, eg 8, af 10, fg 11}
//! (total 39) and the distances from `a` are
//! a=0 b=15 c=24 d=30 e=29 f=10 g=21.

use crate::error::Result;
use crate::graph::{AdjacencyStore, VertexLabels, Weight};

const REFERENCE_EDGES: [(char, char, Weight); 10] = [
    ('a', 'b', 15),
    ('a', 'f', 10),
    ('b', 'c', 14),
    ('b', 'g', 6),
    ('c', 'g', 3),
    ('c', 'd', 9),
    ('d', 'e', 1),
    ('e', 'g', 8),
    ('e', 'f', 19),
    ('f', 'g', 11),
];

const REFERENCE_VERTICES: usize = 7;

/// The reference graph and its `a..g` labels
pub fn reference_graph() -> Result<(AdjacencyStore, VertexLabels)> {
    let labels = VertexLabels::alphabetic(REFERENCE_VERTICES);
    let mut graph = AdjacencyStore::new(REFERENCE_VERTICES);

    for (from, to, weight) in REFERENCE_EDGES {
        graph.add_weighted_edge(labels.index_of(from)?, labels.index_of(to)?, weight)?;
    }

    Ok((graph, labels))
}
