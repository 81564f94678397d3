use super::*;
use crate::error::GraphError;
use crate::fixture::reference_graph;
use crate::graph::AdjacencyStore;

/// Test relax only ever lowers a distance
#[test]
fn test_relax_takes_minimum() {
    let mut distances = vec![Some(0), Some(10), None];

    assert!(relax(&mut distances, 0, 1, 4).unwrap());
    assert_eq!(distances[1], Some(4));

    assert!(!relax(&mut distances, 0, 1, 4).unwrap());
    assert!(!relax(&mut distances, 0, 1, 9).unwrap());
    assert_eq!(distances[1], Some(4));

    assert!(relax(&mut distances, 1, 2, 3).unwrap());
    assert_eq!(distances[2], Some(7));
}

/// Test relax from an unreachable vertex is a no-op
#[test]
fn test_relax_from_unreachable() {
    let mut distances = vec![None, Some(5)];
    assert!(!relax(&mut distances, 0, 1, 1).unwrap());
    assert_eq!(distances, vec![None, Some(5)]);
}

/// Test relax reports an overflowing sum instead of dropping it
#[test]
fn test_relax_overflow_is_an_error() {
    let mut distances = vec![Some(Weight::MAX), None];

    let err = relax(&mut distances, 0, 1, 1).unwrap_err();

    assert!(matches!(err, GraphError::WeightOverflow(_)));
    assert_eq!(distances[1], None);
}

/// Test a path whose length does not fit a weight is an error, not
/// an unreachable vertex
#[test]
fn test_dijkstra_overflowing_path_is_an_error() {
    let mut graph = AdjacencyStore::new(3);
    graph.add_weighted_edge(0, 1, Weight::MAX).unwrap();
    graph.add_weighted_edge(1, 2, 1).unwrap();

    assert!(matches!(
        dijkstra(&graph, 0),
        Err(GraphError::WeightOverflow(_))
    ));
}

/// Test distances on the 7-vertex reference graph from `a`
#[test]
fn test_dijkstra_reference_graph() {
    let (graph, labels) = reference_graph().unwrap();
    let source = labels.index_of('a').unwrap();

    let paths = dijkstra(&graph, source).unwrap();

    assert_eq!(
        paths.distances,
        vec![
            Some(0),  // a
            Some(15), // b
            Some(24), // c
            Some(30), // d
            Some(29), // e
            Some(10), // f
            Some(21), // g
        ]
    );
}

/// Test the predecessor chain reconstructs a shortest route
#[test]
fn test_dijkstra_path_to() {
    let (graph, labels) = reference_graph().unwrap();
    let paths = dijkstra(&graph, 0).unwrap();

    let d = labels.index_of('d').unwrap();
    let route: Vec<char> = paths
        .path_to(d)
        .unwrap()
        .into_iter()
        .filter_map(|v| labels.label_of(v))
        .collect();

    // a-f-e-d (10 + 19 + 1). a-f-g-e-d ties at 30 but e is first
    // reached through f and an equal distance never replaces it.
    assert_eq!(route, vec!['a', 'f', 'e', 'd']);
}

/// Test single vertex graph yields only the source at distance 0
#[test]
fn test_dijkstra_single_vertex() {
    let graph = AdjacencyStore::new(1);
    let paths = dijkstra(&graph, 0).unwrap();

    assert_eq!(paths.distances, vec![Some(0)]);
    assert_eq!(paths.path_to(0), Some(vec![0]));
}

/// Test vertices outside the source's component stay unreachable
#[test]
fn test_dijkstra_disconnected() {
    let mut graph = AdjacencyStore::new(4);
    graph.add_weighted_edge(0, 1, 3).unwrap();
    graph.add_weighted_edge(2, 3, 1).unwrap();

    let paths = dijkstra(&graph, 1).unwrap();

    assert_eq!(paths.distances, vec![Some(3), Some(0), None, None]);
    assert!(!paths.is_reachable(2));
    assert_eq!(paths.path_to(3), None);
}

/// Test a longer route with smaller total wins over a direct heavy edge
#[test]
fn test_dijkstra_prefers_cheaper_indirect_route() {
    let mut graph = AdjacencyStore::new(3);
    graph.add_weighted_edge(0, 2, 10).unwrap();
    graph.add_weighted_edge(0, 1, 2).unwrap();
    graph.add_weighted_edge(1, 2, 3).unwrap();

    let paths = dijkstra(&graph, 0).unwrap();

    assert_eq!(paths.distance(2), Some(5));
    assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
}

/// Test zero-weight edges and self-loops
#[test]
fn test_dijkstra_zero_weights_and_self_loops() {
    let mut graph = AdjacencyStore::new(3);
    graph.add_weighted_edge(0, 0, 0).unwrap();
    graph.add_weighted_edge(0, 1, 0).unwrap();
    graph.add_weighted_edge(1, 2, 0).unwrap();

    let paths = dijkstra(&graph, 2).unwrap();

    assert_eq!(paths.distances, vec![Some(0), Some(0), Some(0)]);
}

/// Test out-of-range source is rejected
#[test]
fn test_dijkstra_source_out_of_range() {
    let graph = AdjacencyStore::new(3);
    let err = dijkstra(&graph, 3).unwrap_err();

    assert!(matches!(
        err,
        GraphError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3
        }
    ));
}

/// Test repeated runs give identical results
#[test]
fn test_dijkstra_is_deterministic() {
    let (graph, _) = reference_graph().unwrap();
    let first = dijkstra(&graph, 4).unwrap();
    let second = dijkstra(&graph, 4).unwrap();

    assert_eq!(first, second);
}
