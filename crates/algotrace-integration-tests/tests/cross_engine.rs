//! Engines that answer the same question must agree, and every trace must
//! replay forward without undoing progress.

use algotrace_engines::{
    bellman_ford, bfs, bubble_sort, dfs, dijkstra, floyd_warshall_graph, heap_sort,
    insertion_sort, knapsack, kruskal, merge_sort, prim, quick_sort, radix_sort, selection_sort,
    EventKind, Item, SortOutcome,
};
use algotrace_integration_tests::{connected_graph, is_forest};
use algotrace_model::{Distance, NodeId};
use proptest::prelude::*;

fn comparison_sorts() -> Vec<(&'static str, fn(&[i64]) -> SortOutcome)> {
    vec![
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
        ("selection", selection_sort),
        ("heap", heap_sort),
        ("quick", quick_sort),
        ("merge", merge_sort),
    ]
}

proptest! {
    #[test]
    fn dijkstra_matches_floyd_warshall_row(spec in connected_graph(7, true, 0..20)) {
        let graph = spec.graph().unwrap();
        let single = dijkstra(&graph, NodeId(0)).unwrap().result;
        let all = floyd_warshall_graph(&graph).unwrap().result;

        prop_assert_eq!(&single.distances[..], all.row(NodeId(0)));
    }

    #[test]
    fn bellman_ford_matches_dijkstra_without_negative_weights(
        spec in connected_graph(7, false, 0..20)
    ) {
        let graph = spec.graph().unwrap();
        let expected = dijkstra(&graph, NodeId(0)).unwrap().result;
        let result = bellman_ford(&graph, NodeId(0)).unwrap().result;

        prop_assert!(!result.has_negative_cycle());
        prop_assert_eq!(result.paths.distances, expected.distances);
    }

    #[test]
    fn bellman_ford_and_floyd_warshall_agree_on_signed_graphs(
        spec in connected_graph(6, true, -5..20)
    ) {
        let graph = spec.graph().unwrap();
        let single = bellman_ford(&graph, NodeId(0)).unwrap().result;
        let all = floyd_warshall_graph(&graph).unwrap().result;

        // Every node is reachable from 0, so both see the same cycles.
        prop_assert_eq!(single.has_negative_cycle(), all.has_negative_cycle());
        if !single.has_negative_cycle() {
            prop_assert_eq!(&single.paths.distances[..], all.row(NodeId(0)));
        }
    }

    #[test]
    fn bfs_depth_is_hop_distance(spec in connected_graph(8, false, 1..2)) {
        let graph = spec.unit_weights().graph().unwrap();
        let walk = bfs(&graph, NodeId(0)).unwrap().result;
        let hops = dijkstra(&graph, NodeId(0)).unwrap().result;

        for node in graph.nodes() {
            let depth = walk.depth[node.index()].map(|d| Distance::Finite(d as i64));
            prop_assert_eq!(depth, Some(hops.distance(node)));
        }
    }

    #[test]
    fn traversals_reach_every_node_once(spec in connected_graph(8, true, 0..5)) {
        let graph = spec.graph().unwrap();
        for outcome in [bfs(&graph, NodeId(0)).unwrap(), dfs(&graph, NodeId(0)).unwrap()] {
            let mut order: Vec<usize> = outcome.result.order.iter().map(|n| n.index()).collect();
            prop_assert_eq!(outcome.result.tree_edges.len(), graph.node_count() - 1);
            order.sort_unstable();
            prop_assert_eq!(order, (0..graph.node_count()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn floyd_warshall_trace_has_one_frame_per_triple(spec in connected_graph(6, true, -3..10)) {
        let graph = spec.graph().unwrap();
        let n = graph.node_count();
        let trace = floyd_warshall_graph(&graph).unwrap().trace;

        prop_assert_eq!(trace.len(), n * n * n + 2);
        prop_assert_eq!(trace.count(EventKind::Init), 1);
        prop_assert_eq!(trace.count(EventKind::Complete), 1);
    }

    #[test]
    fn spanning_trees_agree(spec in connected_graph(8, false, 0..30)) {
        let graph = spec.graph().unwrap();
        let by_kruskal = kruskal(&graph).unwrap().result;
        let by_prim = prim(&graph, NodeId(0)).unwrap().result;
        let n = graph.node_count();

        prop_assert_eq!(by_kruskal.len(), n - 1);
        prop_assert_eq!(by_prim.len(), n - 1);
        prop_assert!(is_forest(n, by_kruskal.edges.iter().map(|e| (e.from.index(), e.to.index()))));
        prop_assert!(is_forest(n, by_prim.edges.iter().map(|e| (e.from.index(), e.to.index()))));
        prop_assert_eq!(by_kruskal.total_weight, by_prim.total_weight);
    }

    #[test]
    fn shortest_path_distances_never_increase(spec in connected_graph(6, true, -4..15)) {
        let graph = spec.graph().unwrap();

        let bf = bellman_ford(&graph, NodeId(0)).unwrap().trace;
        for pair in bf.as_slice().windows(2) {
            for (before, after) in pair[0].state.distances.iter().zip(&pair[1].state.distances) {
                prop_assert!(after <= before);
            }
        }

        let fw = floyd_warshall_graph(&graph).unwrap().trace;
        for pair in fw.as_slice().windows(2) {
            for (before, after) in pair[0].state.matrix.cells().iter().zip(pair[1].state.matrix.cells()) {
                prop_assert!(after <= before);
            }
        }
    }

    #[test]
    fn dijkstra_distances_never_increase(spec in connected_graph(7, false, 0..15)) {
        let graph = spec.graph().unwrap();
        let trace = dijkstra(&graph, NodeId(0)).unwrap().trace;

        for pair in trace.as_slice().windows(2) {
            for (before, after) in pair[0].state.distances.iter().zip(&pair[1].state.distances) {
                prop_assert!(after <= before);
            }
        }
    }

    #[test]
    fn knapsack_cells_are_written_once(
        items in prop::collection::vec((0i64..6, 0i64..10), 0..5),
        capacity in 0i64..8,
    ) {
        let items: Vec<Item> = items.into_iter().map(Item::from).collect();
        let (result, trace) = knapsack(&items, capacity).unwrap().into_parts();
        let last = result.table.cells();

        for pair in trace.as_slice().windows(2) {
            let cells = pair[0].state.table.cells().iter().zip(pair[1].state.table.cells());
            for ((before, after), finished) in cells.zip(last) {
                prop_assert!(before == after || (*before == 0 && after == finished));
            }
        }
        let chosen: i64 = result.selected.iter().map(|&i| items[i].value).sum();
        prop_assert_eq!(chosen, result.best_value());
        prop_assert!(result.total_weight <= capacity);
    }

    #[test]
    fn sorting_twice_moves_nothing(input in prop::collection::vec(-40i64..40, 0..20)) {
        for (name, sort) in comparison_sorts() {
            if name == "heap" {
                continue;
            }
            let sorted = sort(&input).result;
            let again = sort(&sorted).trace;
            prop_assert_eq!(again.count(EventKind::Swap), 0, "{}", name);
            prop_assert_eq!(again.count(EventKind::Update), 0, "{}", name);
        }
    }

    #[test]
    fn in_place_sorts_only_permute(input in prop::collection::vec(-40i64..40, 0..16)) {
        let mut expected = input.clone();
        expected.sort_unstable();
        for (name, sort) in comparison_sorts() {
            if name == "merge" {
                continue;
            }
            for snapshot in &sort(&input).trace {
                let mut values = snapshot.state.values.clone();
                values.sort_unstable();
                prop_assert_eq!(&values, &expected, "{}", name);
            }
        }
    }
}

#[test]
fn every_sort_orders_the_reference_input() {
    for (name, sort) in comparison_sorts() {
        assert_eq!(sort(&[5, 3, 1, 4, 2]).result, vec![1, 2, 3, 4, 5], "{name}");
    }
    assert_eq!(radix_sort(&[5, 3, 1, 4, 2]).unwrap().result, vec![1, 2, 3, 4, 5]);
}

#[test]
fn knapsack_reference_instance() {
    let items: Vec<Item> = [(1, 1), (3, 4), (4, 5), (5, 7)].into_iter().map(Item::from).collect();
    let result = knapsack(&items, 7).unwrap().result;

    assert_eq!(result.best_value(), 9);
    assert_eq!(result.selected, vec![1, 2]);
    assert_eq!(result.total_weight, 7);
}

#[test]
fn knapsack_small_instance() {
    let items: Vec<Item> = [(2, 3), (3, 4), (4, 5), (5, 6)].into_iter().map(Item::from).collect();
    let (result, trace) = knapsack(&items, 5).unwrap().into_parts();

    assert_eq!(result.table[(4, 5)], 7);
    assert_eq!(result.selected, vec![0, 1]);
    assert_eq!(trace.last().map(|s| s.kind()), Some(EventKind::Complete));
}
