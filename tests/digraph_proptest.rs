//! Property tests: the container against a plain adjacency model, and
//! the algorithms against the orders they are obliged to produce.

use std::collections::BTreeSet;

use proptest::prelude::*;
use quiver::{has_cycle, topological_order, Digraph};

const VERTICES: usize = 12;

#[derive(Debug, Clone)]
enum Operation {
    AddEdge(usize, usize),
    RemoveEdge(usize, usize),
    QueryEdge(usize, usize),
}

/// Orients every generated pair low -> high, so the result is acyclic by
/// construction whatever the input.
fn ascending_edges(n: usize, raw: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut edges: Vec<(usize, usize)> = raw
        .iter()
        .map(|&(a, b)| (a % n, b % n))
        .filter(|&(a, b)| a != b)
        .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

proptest! {
    #[test]
    fn digraph_matches_adjacency_model(ops in proptest::collection::vec(
        prop_oneof![
            (0..VERTICES, 0..VERTICES).prop_map(|(s, t)| Operation::AddEdge(s, t)),
            (0..VERTICES, 0..VERTICES).prop_map(|(s, t)| Operation::RemoveEdge(s, t)),
            (0..VERTICES, 0..VERTICES).prop_map(|(s, t)| Operation::QueryEdge(s, t)),
        ],
        1..200
    )) {
        let mut model: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); VERTICES];
        let mut graph = Digraph::with_vertices(VERTICES);

        for op in ops {
            match op {
                Operation::AddEdge(s, t) => {
                    let expected = model[s].insert(t);
                    let (_, fresh) = graph.add_edge(graph.vertex(s), graph.vertex(t));
                    prop_assert_eq!(fresh, expected, "add_edge flag mismatch on {} -> {}", s, t);
                }
                Operation::RemoveEdge(s, t) => {
                    model[s].remove(&t);
                    graph.remove_edge(graph.vertex(s), graph.vertex(t));
                }
                Operation::QueryEdge(s, t) => {
                    let (_, present) = graph.edge(graph.vertex(s), graph.vertex(t));
                    prop_assert_eq!(present, model[s].contains(&t), "membership mismatch on {} -> {}", s, t);
                }
            }
        }

        // Final consistency: the edge walk and the counts agree with the model.
        let expected: Vec<(usize, usize)> = model
            .iter()
            .enumerate()
            .flat_map(|(s, row)| row.iter().map(move |&t| (s, t)))
            .collect();
        let walked: Vec<(usize, usize)> = graph
            .edges()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        prop_assert_eq!(walked, expected);
        prop_assert_eq!(graph.num_edges(), model.iter().map(BTreeSet::len).sum::<usize>());
        prop_assert_eq!(graph.num_vertices(), VERTICES);
    }

    #[test]
    fn generated_dags_sort_successors_first(
        n in 1usize..24,
        raw in proptest::collection::vec((0usize..64, 0usize..64), 0..120),
    ) {
        let edges = ascending_edges(n, &raw);
        let mut graph = Digraph::with_vertices(n);
        for &(s, t) in &edges {
            graph.add_edge(graph.vertex(s), graph.vertex(t));
        }

        let order = topological_order(&graph);

        // Every vertex exactly once.
        let mut seen: Vec<usize> = order.iter().map(|v| v.index()).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());

        // Every edge's target streams out before its source.
        for &(s, t) in &edges {
            let source_at = order.iter().position(|v| v.index() == s).unwrap();
            let target_at = order.iter().position(|v| v.index() == t).unwrap();
            prop_assert!(target_at < source_at, "edge {} -> {} out of order", s, t);
        }
    }

    #[test]
    fn generated_dags_never_report_cycles(
        n in 1usize..24,
        raw in proptest::collection::vec((0usize..64, 0usize..64), 0..120),
    ) {
        let mut graph = Digraph::with_vertices(n);
        for (s, t) in ascending_edges(n, &raw) {
            graph.add_edge(graph.vertex(s), graph.vertex(t));
        }
        prop_assert!(!has_cycle(&graph));
    }

    #[test]
    fn reachable_self_loops_are_detected(
        (n, k) in (2usize..20).prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        // A chain makes every vertex reachable from the first, so the
        // loop is always inside the search scope.
        let mut graph = Digraph::with_vertices(n);
        for i in 0..n - 1 {
            graph.add_edge(graph.vertex(i), graph.vertex(i + 1));
        }
        graph.add_edge(graph.vertex(k), graph.vertex(k));
        prop_assert!(has_cycle(&graph));
    }
}
