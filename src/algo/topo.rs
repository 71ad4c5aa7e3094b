//! Topological sorting by depth-first postorder.

use crate::graph::{GraphView, VertexId};

use super::color::{Color, ColorMap};
use super::cycle::is_acyclic;

/// Streams the vertices of an acyclic graph to `sink` in dependency-safe
/// order.
///
/// Every root is explored in ascending handle order with a two-state DFS,
/// and each vertex is handed to the sink exactly once, at the moment it
/// finishes. A vertex's successors are therefore always emitted before
/// the vertex itself; the overall stream is the reverse of the
/// conventional predecessor-first order. Feed the stream to a stack (or
/// reverse the collected vector) to get that convention back.
///
/// # Panics
/// The graph must be acyclic. Debug builds assert this up front with a
/// whole-graph sweep; release builds trust the caller, and a cyclic input
/// is not guaranteed to terminate. Cycles are never silently tolerated.
pub fn topological_sort<G, F>(graph: &G, mut sink: F)
where
    G: GraphView,
    F: FnMut(VertexId),
{
    debug_assert!(is_acyclic(graph), "topological sort requires an acyclic graph");
    #[cfg(feature = "tracing")]
    tracing::trace!(vertices = graph.num_vertices(), "topological sort");

    let mut colors = ColorMap::new(graph.num_vertices());
    for n in 0..graph.num_vertices() {
        let root = graph.vertex(n);
        if colors.get(root) == Color::White {
            emit_postorder(graph, root, &mut colors, &mut sink);
        }
    }
}

/// Collects the emission of [`topological_sort`] into a vector.
pub fn topological_order<G: GraphView>(graph: &G) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(graph.num_vertices());
    topological_sort(graph, |v| order.push(v));
    order
}

/// Two-state DFS from `root` (which must be white), emitting each vertex
/// as it finishes.
///
/// Only the white/black endpoints of the color range participate: with
/// cycles ruled out, a vertex on the current path cannot be re-reached,
/// so there is no grey state to distinguish.
fn emit_postorder<G, F>(graph: &G, root: VertexId, colors: &mut ColorMap, sink: &mut F)
where
    G: GraphView,
    F: FnMut(VertexId),
{
    let mut stack = vec![(root, graph.adjacent_vertices(root))];
    while let Some((vertex, mut successors)) = stack.pop() {
        if let Some(next) = successors.next() {
            stack.push((vertex, successors));
            if colors.get(next) == Color::White {
                stack.push((next, graph.adjacent_vertices(next)));
            }
        } else {
            colors.set(vertex, Color::Black);
            sink(vertex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Digraph;

    fn graph_with_edges(vertices: usize, edges: &[(usize, usize)]) -> Digraph {
        let mut graph = Digraph::with_vertices(vertices);
        for &(s, t) in edges {
            graph.add_edge(graph.vertex(s), graph.vertex(t));
        }
        graph
    }

    fn indices(order: &[VertexId]) -> Vec<usize> {
        order.iter().map(|v| v.index()).collect()
    }

    #[test]
    fn topological_sort_emits_successors_first() {
        let graph = graph_with_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = topological_order(&graph);
        assert_eq!(indices(&order), vec![3, 1, 2, 0]);
    }

    #[test]
    fn topological_sort_covers_all_roots_ascending() {
        // Two components; the walk restarts at the lowest unfinished root.
        let graph = graph_with_edges(4, &[(0, 1), (2, 3)]);
        let order = topological_order(&graph);
        assert_eq!(indices(&order), vec![1, 0, 3, 2]);
    }

    #[test]
    fn topological_sort_emits_each_vertex_exactly_once() {
        let graph = graph_with_edges(6, &[(0, 2), (1, 2), (2, 4), (3, 4), (5, 0)]);
        let order = topological_order(&graph);
        let mut seen = indices(&order);
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn topological_sort_respects_every_edge() {
        let graph = graph_with_edges(7, &[(0, 3), (1, 3), (2, 5), (3, 5), (3, 6), (4, 6)]);
        let order = topological_order(&graph);
        let position = |v: VertexId| order.iter().position(|&o| o == v).unwrap();
        for e in graph.edges() {
            // Successors stream out before their predecessors.
            assert!(position(e.target()) < position(e.source()), "edge {e} out of order");
        }
    }

    #[test]
    fn topological_sort_on_empty_graph_emits_nothing() {
        let mut emitted = 0;
        topological_sort(&Digraph::new(), |_| emitted += 1);
        assert_eq!(emitted, 0);
    }

    #[test]
    fn topological_sort_on_edgeless_graph_emits_roots_ascending() {
        let graph = Digraph::with_vertices(3);
        let order = topological_order(&graph);
        assert_eq!(indices(&order), vec![0, 1, 2]);
    }

    #[test]
    fn topological_order_matches_streamed_emission() {
        let graph = graph_with_edges(5, &[(0, 1), (1, 2), (0, 3), (3, 4)]);
        let mut streamed = Vec::new();
        topological_sort(&graph, |v| streamed.push(v));
        assert_eq!(streamed, topological_order(&graph));
    }

    #[test]
    fn topological_sort_survives_deep_chains() {
        let mut graph = Digraph::with_vertices(10_000);
        for n in 0..9_999 {
            graph.add_edge(graph.vertex(n), graph.vertex(n + 1));
        }
        let order = topological_order(&graph);
        assert_eq!(order.len(), 10_000);
        assert_eq!(order[0].index(), 9_999);
        assert_eq!(order[9_999].index(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "topological sort requires an acyclic graph")]
    fn topological_sort_rejects_cycles_in_debug_builds() {
        let graph = graph_with_edges(2, &[(0, 1), (1, 0)]);
        topological_sort(&graph, |_| {});
    }
}
