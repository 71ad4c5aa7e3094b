//! The adjacency-set directed graph.
//!
//! This representation prioritizes **set semantics** (parallel edges
//! collapse into one) and **ordered iteration** over raw edge-insertion
//! speed:
//! - each vertex owns a `BTreeSet` of successor handles
//! - handles are dense indices issued in insertion order, never recycled
//! - every walk over the structure yields in ascending handle order
//!
//! The handle counter and the adjacency table are tied by a representation
//! invariant (one successor set per issued handle, every stored target an
//! issued handle) that debug builds re-check after construction and after
//! every mutation.

use std::collections::BTreeSet;

use super::descriptor::{EdgeId, VertexId};
use super::iter::{Edges, Neighbors, Vertices};

/// A directed graph over dense vertex handles with ordered adjacency sets.
///
/// Two graphs compare equal when they have the same vertex count and the
/// same edge set. Cloning yields a fully independent graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | appends one empty successor set |
/// | `add_edge` | \(O(\log d)\) | `BTreeSet` insert, `d` = out-degree |
/// | `remove_edge` | \(O(\log d)\) | silent no-op when the edge is absent |
/// | `edge` | \(O(\log d)\) | membership query, never mutates |
/// | `num_vertices` | \(O(1)\) | |
/// | `num_edges` | \(O(n)\) | recomputed sum of out-degrees, see below |
/// | `out_degree` | \(O(1)\) | `BTreeSet::len` |
///
/// `num_edges` deliberately trades query cost for a bookkeeping-free
/// mutation path: there is no running edge counter to keep in sync, at the
/// price of an \(O(n)\) sweep per call. Callers that poll the edge count in
/// a hot loop should cache it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    /// Slot `i` holds the successor set of the vertex with index `i`.
    adjacency: Vec<BTreeSet<VertexId>>,
    /// Count of handles issued so far.
    created: u32,
}

impl Digraph {
    /// Creates an empty graph with no vertices and no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` isolated vertices, handles `0..n`.
    ///
    /// # Panics
    /// Panics if `n` exceeds the handle capacity of the graph.
    pub fn with_vertices(n: usize) -> Self {
        let created = u32::try_from(n).expect("vertex count exceeds handle capacity");
        let graph = Self {
            adjacency: vec![BTreeSet::new(); n],
            created,
        };
        debug_assert!(graph.valid(), "handle counter and adjacency table out of sync");
        graph
    }

    /// Adds a vertex and returns its handle.
    ///
    /// Handles are issued densely in insertion order; the first vertex is
    /// handle 0. Aborts on handle-space exhaustion.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.created);
        self.created = self.created.checked_add(1).expect("vertex handle space exhausted");
        self.adjacency.push(BTreeSet::new());
        debug_assert!(self.valid(), "handle counter and adjacency table out of sync");
        id
    }

    /// Adds the directed edge `source -> target`.
    ///
    /// Returns the edge descriptor plus `true` if the edge was newly
    /// inserted, or `false` if it was already present (the graph is
    /// unchanged in that case). Self-loops are permitted.
    ///
    /// # Panics
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> (EdgeId, bool) {
        assert!(source.index() < self.adjacency.len(), "source vertex {source} out of bounds");
        assert!(target.index() < self.adjacency.len(), "target vertex {target} out of bounds");
        let inserted = self.adjacency[source.index()].insert(target);
        debug_assert!(self.valid(), "handle counter and adjacency table out of sync");
        (EdgeId::new(source, target), inserted)
    }

    /// Removes the directed edge `source -> target` if it is present.
    ///
    /// Removing an absent edge is a silent no-op. The endpoints themselves
    /// always remain vertices of the graph.
    ///
    /// # Panics
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) {
        assert!(source.index() < self.adjacency.len(), "source vertex {source} out of bounds");
        assert!(target.index() < self.adjacency.len(), "target vertex {target} out of bounds");
        self.adjacency[source.index()].remove(&target);
        debug_assert!(self.valid(), "handle counter and adjacency table out of sync");
    }

    /// Queries the directed edge `source -> target`.
    ///
    /// Returns the descriptor the edge would have plus `true` if the edge
    /// is present. Never mutates the graph.
    ///
    /// # Panics
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn edge(&self, source: VertexId, target: VertexId) -> (EdgeId, bool) {
        assert!(source.index() < self.adjacency.len(), "source vertex {source} out of bounds");
        assert!(target.index() < self.adjacency.len(), "target vertex {target} out of bounds");
        let present = self.adjacency[source.index()].contains(&target);
        (EdgeId::new(source, target), present)
    }

    /// The handle of the `n`-th inserted vertex.
    ///
    /// Handles are dense, so this is the identity on the index; it exists
    /// so callers can go from insertion order back to a handle without
    /// recording handles themselves.
    ///
    /// # Panics
    /// Panics if `n >= num_vertices()`.
    pub fn vertex(&self, n: usize) -> VertexId {
        let count = self.adjacency.len();
        assert!(n < count, "vertex index {n} out of bounds for {count} vertices");
        VertexId::new(n as u32)
    }

    /// The vertex the edge leaves.
    pub const fn source(&self, e: EdgeId) -> VertexId {
        e.source()
    }

    /// The vertex the edge enters.
    pub const fn target(&self, e: EdgeId) -> VertexId {
        e.target()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    ///
    /// Recomputed on every call by summing out-degrees; see the type-level
    /// table for the trade-off.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    /// Number of successors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this graph.
    pub fn out_degree(&self, v: VertexId) -> usize {
        assert!(v.index() < self.adjacency.len(), "vertex {v} out of bounds");
        self.adjacency[v.index()].len()
    }

    /// Whether `v` is a handle this graph has issued.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.adjacency.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Lazy ascending walk over all vertex handles.
    ///
    /// The iterator is exact-size. Calling this method again restarts the
    /// walk; cloning an in-flight walk forks an independent continuation.
    pub fn vertices(&self) -> Vertices {
        Vertices::new(self.created)
    }

    /// Lazy walk over all edges, grouped by ascending source with targets
    /// ascending within each group.
    ///
    /// Immediately exhausted on a graph with no edges.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self)
    }

    /// Lazy ascending walk over the successors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this graph.
    pub fn adjacent_vertices(&self, v: VertexId) -> Neighbors<'_> {
        assert!(v.index() < self.adjacency.len(), "vertex {v} out of bounds");
        Neighbors::new(self.adjacency[v.index()].iter())
    }

    /// The successor set of the vertex with the given dense index.
    ///
    /// Internal accessor for the edge walk, which advances source by raw
    /// index.
    pub(crate) fn successor_set(&self, index: u32) -> &BTreeSet<VertexId> {
        &self.adjacency[index as usize]
    }

    /// Representation invariant: one successor set per issued handle, and
    /// every stored target is an issued handle.
    fn valid(&self) -> bool {
        self.created as usize == self.adjacency.len()
            && self
                .adjacency
                .iter()
                .flatten()
                .all(|target| target.index() < self.adjacency.len())
    }
}
