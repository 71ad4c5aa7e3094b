//! Lazy walks over vertices, edges, and successors.
//!
//! All three iterators yield in ascending handle order and are fused. A
//! fresh walk is always one method call away on the graph, and every walk
//! is `Clone`, forking an independent continuation at the current
//! position; together those stand in for the begin/end iterator pairs of
//! classic graph interfaces. The other classic caveat, mutation
//! invalidating an in-flight walk, is a compile error here rather than a
//! runtime hazard, because the borrowing walks hold a shared borrow of
//! the graph.

use std::collections::btree_set;
use std::iter::{Copied, FusedIterator};

use super::descriptor::{EdgeId, VertexId};
use super::digraph::Digraph;

/// Ascending walk over all vertex handles of a graph.
///
/// Holds no borrow; the walk is a pair of index cursors describing the
/// handle range at the time it was created.
#[derive(Debug, Clone)]
pub struct Vertices {
    next: u32,
    end: u32,
}

impl Vertices {
    pub(crate) const fn new(end: u32) -> Self {
        Self { next: 0, end }
    }
}

impl Iterator for Vertices {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.next == self.end {
            return None;
        }
        let v = VertexId::new(self.next);
        self.next += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Vertices {}
impl FusedIterator for Vertices {}

/// Walk over all edges of a graph, grouped by ascending source with
/// targets ascending within each group.
///
/// Vertices without successors are skipped outright, so a graph with no
/// edges is exhausted immediately; no sentinel slot is needed behind the
/// last vertex.
#[derive(Debug, Clone)]
pub struct Edges<'g> {
    graph: &'g Digraph,
    source: u32,
    targets: Option<btree_set::Iter<'g, VertexId>>,
}

impl<'g> Edges<'g> {
    pub(crate) const fn new(graph: &'g Digraph) -> Self {
        Self {
            graph,
            source: 0,
            targets: None,
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        loop {
            if let Some(targets) = self.targets.as_mut() {
                if let Some(&target) = targets.next() {
                    return Some(EdgeId::new(VertexId::new(self.source), target));
                }
                // Current group exhausted, move to the next source.
                self.targets = None;
                self.source += 1;
            } else if (self.source as usize) < self.graph.num_vertices() {
                self.targets = Some(self.graph.successor_set(self.source).iter());
            } else {
                return None;
            }
        }
    }
}

impl FusedIterator for Edges<'_> {}

/// Ascending walk over the successors of a single vertex.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    targets: Copied<btree_set::Iter<'g, VertexId>>,
}

impl<'g> Neighbors<'g> {
    pub(crate) fn new(targets: btree_set::Iter<'g, VertexId>) -> Self {
        Self {
            targets: targets.copied(),
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.targets.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
impl FusedIterator for Neighbors<'_> {}
