//! Opaque handle types for vertices and edges.
//!
//! A [`VertexId`] is a dense index: handles are issued sequentially from
//! zero and never recycled, so the handle of the `n`-th inserted vertex is
//! exactly `n`. An [`EdgeId`] is the ordered (source, target) pair of
//! handles; two descriptors are equal precisely when both endpoints match.

use std::fmt;

/// Opaque handle of a vertex.
///
/// Handles are `Copy`, totally ordered by insertion order, and display as
/// their bare index. A handle is only meaningful for the graph that issued
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Mints the handle with the given dense index.
    ///
    /// Needed by alternate `GraphView` implementations, which answer
    /// `vertex(n)` with a handle of their own minting; handles and dense
    /// indices are interchangeable by contract.
    ///
    /// # Panics
    /// Panics if `index` exceeds the handle capacity.
    pub fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index).expect("vertex index exceeds handle capacity");
        Self(raw)
    }

    /// The dense index this handle was issued as.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque descriptor of a directed edge.
///
/// A descriptor carries no identity beyond its endpoints: the same
/// (source, target) pair always compares equal, whether it came from
/// `add_edge`, an `edge` query, or the edge walk. The derived ordering is
/// lexicographic by source then target, matching the order the edge walk
/// yields in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    source: VertexId,
    target: VertexId,
}

impl EdgeId {
    pub(crate) const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// The vertex this edge leaves.
    pub const fn source(self) -> VertexId {
        self.source
    }

    /// The vertex this edge enters.
    pub const fn target(self) -> VertexId {
        self.target
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
