//! The read-only capability trait the algorithm layer is generic over.

use super::descriptor::VertexId;
use super::digraph::Digraph;
use super::iter::{Neighbors, Vertices};

/// Read-only access to a directed graph over dense vertex handles.
///
/// This is the complete surface the traversal algorithms require: a vertex
/// count, insertion-order handle lookup, and ascending walks over all
/// vertices and over one vertex's successors. Any representation that can
/// answer these four queries can run the algorithms; the crate's own
/// [`Digraph`] is the default implementation.
///
/// Implementations must uphold the dense-handle contract: handles cover
/// exactly the indices `0..num_vertices()`, and both walks yield in
/// ascending handle order. Implementations outside this crate mint their
/// handles with [`VertexId::from_index`].
pub trait GraphView {
    /// Ascending walk over all vertex handles.
    type Vertices<'a>: Iterator<Item = VertexId>
    where
        Self: 'a;

    /// Ascending walk over the successors of one vertex.
    type Neighbors<'a>: Iterator<Item = VertexId>
    where
        Self: 'a;

    /// Number of vertices.
    fn num_vertices(&self) -> usize;

    /// Handle of the `n`-th inserted vertex.
    ///
    /// # Panics
    /// Implementations panic if `n >= num_vertices()`.
    fn vertex(&self, n: usize) -> VertexId;

    /// Walks all vertex handles in ascending order.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Walks the successors of `v` in ascending order.
    ///
    /// # Panics
    /// Implementations panic if `v` is not a vertex of the graph.
    fn adjacent_vertices(&self, v: VertexId) -> Self::Neighbors<'_>;
}

impl GraphView for Digraph {
    type Vertices<'a> = Vertices;
    type Neighbors<'a> = Neighbors<'a>;

    fn num_vertices(&self) -> usize {
        Digraph::num_vertices(self)
    }

    fn vertex(&self, n: usize) -> VertexId {
        Digraph::vertex(self, n)
    }

    fn vertices(&self) -> Vertices {
        Digraph::vertices(self)
    }

    fn adjacent_vertices(&self, v: VertexId) -> Neighbors<'_> {
        Digraph::adjacent_vertices(self, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sums out-degrees through the trait alone.
    fn edge_total<G: GraphView>(graph: &G) -> usize {
        graph
            .vertices()
            .map(|v| graph.adjacent_vertices(v).count())
            .sum()
    }

    #[test]
    fn digraph_answers_through_the_trait() {
        let mut graph = Digraph::with_vertices(3);
        graph.add_edge(graph.vertex(0), graph.vertex(1));
        graph.add_edge(graph.vertex(1), graph.vertex(2));

        assert_eq!(edge_total(&graph), graph.num_edges());
        assert_eq!(GraphView::num_vertices(&graph), 3);
        assert_eq!(GraphView::vertex(&graph, 2), graph.vertex(2));
    }

    #[test]
    fn trait_walks_match_inherent_walks() {
        let mut graph = Digraph::with_vertices(4);
        graph.add_edge(graph.vertex(2), graph.vertex(0));
        graph.add_edge(graph.vertex(2), graph.vertex(3));

        let through_trait: Vec<_> = GraphView::vertices(&graph).collect();
        let inherent: Vec<_> = graph.vertices().collect();
        assert_eq!(through_trait, inherent);

        let through_trait: Vec<_> =
            GraphView::adjacent_vertices(&graph, graph.vertex(2)).collect();
        let inherent: Vec<_> = graph.adjacent_vertices(graph.vertex(2)).collect();
        assert_eq!(through_trait, inherent);
    }
}
