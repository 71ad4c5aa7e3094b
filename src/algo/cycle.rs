//! Cycle detection by three-color depth-first search.

use crate::graph::{GraphView, VertexId};

use super::color::{Color, ColorMap};

/// Whether a cycle is reachable from the first vertex.
///
/// Runs a three-color DFS from `vertex(0)` only: an edge into a vertex
/// that is still on the current search path witnesses a cycle. The empty
/// graph has no first vertex and reports `false`.
///
/// The single-root scope is part of the contract: a cycle confined to a
/// component unreachable from vertex 0 is not detected. Callers that need
/// a whole-graph verdict can run the search once per component root and
/// merge the answers.
///
/// Works on any [`GraphView`]; O(n + m) time, O(n) space, and an explicit
/// stack, so deep graphs cannot overflow the call stack.
pub fn has_cycle<G: GraphView>(graph: &G) -> bool {
    if graph.num_vertices() == 0 {
        return false;
    }
    let root = graph.vertex(0);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        root = root.index(),
        vertices = graph.num_vertices(),
        "searching for a cycle"
    );
    let mut colors = ColorMap::new(graph.num_vertices());
    cycle_reachable_from(graph, root, &mut colors)
}

/// Three-color DFS from `root`, which must still be white.
///
/// Colors persist across calls so repeated sweeps skip finished vertices.
/// An edge into a grey vertex closes a path back into the stack, which is
/// exactly a cycle.
pub(crate) fn cycle_reachable_from<G: GraphView>(
    graph: &G,
    root: VertexId,
    colors: &mut ColorMap,
) -> bool {
    let mut stack = vec![(root, graph.adjacent_vertices(root))];
    colors.set(root, Color::Grey);

    while let Some((vertex, mut successors)) = stack.pop() {
        if let Some(next) = successors.next() {
            stack.push((vertex, successors));
            match colors.get(next) {
                Color::Grey => return true,
                Color::Black => {}
                Color::White => {
                    colors.set(next, Color::Grey);
                    stack.push((next, graph.adjacent_vertices(next)));
                }
            }
        } else {
            colors.set(vertex, Color::Black);
        }
    }
    false
}

/// Whether no cycle exists anywhere in the graph.
///
/// Sweeps every root in ascending order, reusing colors across roots.
/// Backs the debug-build precondition of the topological sort; the public
/// single-root query is [`has_cycle`].
pub(crate) fn is_acyclic<G: GraphView>(graph: &G) -> bool {
    let mut colors = ColorMap::new(graph.num_vertices());
    for n in 0..graph.num_vertices() {
        let root = graph.vertex(n);
        if colors.get(root) == Color::White && cycle_reachable_from(graph, root, &mut colors) {
            return false;
        }
    }
    true
}
