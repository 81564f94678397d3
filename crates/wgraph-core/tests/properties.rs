//! Property tests for the graph engine

use proptest::prelude::*;
use wgraph_core::graph::{
    compute_mst, compute_shortest_paths, AdjacencyStore, MstStrategy, UnionFind, Weight,
};

/// A connected graph: a random spanning tree plus random extra edges
/// (parallel edges and self-loops included)
fn connected_graph() -> impl Strategy<Value = AdjacencyStore> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((any::<usize>(), 0i64..50), n - 1),
            prop::collection::vec((0..n, 0..n, 0i64..50), 0..20),
        )
            .prop_map(|(n, tree, extra)| {
                let mut graph = AdjacencyStore::new(n);
                for (i, (pick, w)) in tree.into_iter().enumerate() {
                    let v = i + 1;
                    graph.add_weighted_edge(pick % v, v, w).unwrap();
                }
                for (u, v, w) in extra {
                    graph.add_weighted_edge(u, v, w).unwrap();
                }
                graph
            })
    })
}

/// Any graph, possibly disconnected
fn any_graph() -> impl Strategy<Value = AdjacencyStore> {
    (1usize..10).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0i64..30), 0..15).prop_map(move |edges| {
            let mut graph = AdjacencyStore::new(n);
            for (u, v, w) in edges {
                graph.add_weighted_edge(u, v, w).unwrap();
            }
            graph
        })
    })
}

/// All-pairs distances by Floyd-Warshall, for cross-checking
fn floyd_warshall(graph: &AdjacencyStore) -> Vec<Vec<Option<Weight>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = Some(0);
    }
    for edge in graph.edges() {
        let current = dist[edge.from][edge.to];
        if current.is_none_or(|d| edge.weight < d) {
            dist[edge.from][edge.to] = Some(edge.weight);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn prop_prim_and_kruskal_weigh_the_same(graph in connected_graph()) {
        let prim = compute_mst(&graph, MstStrategy::Prim).unwrap();
        let kruskal = compute_mst(&graph, MstStrategy::Kruskal).unwrap();

        prop_assert_eq!(prim.total_weight().unwrap(), kruskal.total_weight().unwrap());
    }

    #[test]
    fn prop_mst_is_a_spanning_tree(graph in connected_graph()) {
        for strategy in [MstStrategy::Prim, MstStrategy::Kruskal] {
            let tree = compute_mst(&graph, strategy).unwrap();
            prop_assert_eq!(tree.len(), graph.vertex_count() - 1);

            // No cycle: every edge must join two different components
            let mut components = UnionFind::new(graph.vertex_count());
            for edge in &tree.edges {
                prop_assert!(components.union(edge.from, edge.to));
            }
            prop_assert_eq!(components.component_count(), 1);
        }
    }

    #[test]
    fn prop_kruskal_forest_matches_component_count(graph in any_graph()) {
        let tree = compute_mst(&graph, MstStrategy::Kruskal).unwrap();

        let mut components = UnionFind::new(graph.vertex_count());
        for edge in graph.edges() {
            components.union(edge.from, edge.to);
        }

        prop_assert_eq!(tree.component_count(), components.component_count());
        prop_assert_eq!(tree.len(), graph.vertex_count() - components.component_count());
    }

    #[test]
    fn prop_prim_covers_exactly_the_root_component(graph in any_graph()) {
        let tree = compute_mst(&graph, MstStrategy::Prim).unwrap();
        let paths = compute_shortest_paths(&graph, 0).unwrap();

        let reachable = paths.iter().filter(|(_, d)| d.is_some()).count();
        prop_assert_eq!(tree.len(), reachable - 1);
    }

    #[test]
    fn prop_dijkstra_source_is_zero(graph in any_graph(), pick in any::<usize>()) {
        let source = pick % graph.vertex_count();
        let paths = compute_shortest_paths(&graph, source).unwrap();

        prop_assert_eq!(paths.distance(source), Some(0));
    }

    #[test]
    fn prop_dijkstra_satisfies_edge_inequality(graph in any_graph()) {
        let paths = compute_shortest_paths(&graph, 0).unwrap();

        for edge in graph.edges() {
            if let Some(du) = paths.distance(edge.from) {
                let dv = paths.distance(edge.to);
                prop_assert!(dv.is_some_and(|dv| dv <= du + edge.weight));
            }
        }
    }

    #[test]
    fn prop_dijkstra_matches_floyd_warshall(graph in any_graph()) {
        let all_pairs = floyd_warshall(&graph);

        for source in 0..graph.vertex_count() {
            let paths = compute_shortest_paths(&graph, source).unwrap();
            prop_assert_eq!(&paths.distances, &all_pairs[source]);
        }
    }

    #[test]
    fn prop_results_are_deterministic(graph in any_graph()) {
        for strategy in [MstStrategy::Prim, MstStrategy::Kruskal] {
            prop_assert_eq!(
                compute_mst(&graph, strategy).unwrap(),
                compute_mst(&graph, strategy).unwrap()
            );
        }
        prop_assert_eq!(
            compute_shortest_paths(&graph, 0).unwrap(),
            compute_shortest_paths(&graph, 0).unwrap()
        );
    }
}
