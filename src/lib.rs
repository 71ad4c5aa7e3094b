//! # `quiver` - Directed Graphs with Dense Handles
//!
//! A minimal directed-graph ADT built on dense integer vertex handles and
//! ordered per-vertex successor sets, with classical DFS algorithms that
//! run against a narrow read-only capability trait instead of the concrete
//! container.
//!
//! ## Design
//!
//! - **Dense handles**: vertices are identified by opaque [`VertexId`]
//!   handles issued sequentially from zero and never recycled, so a handle
//!   doubles as a slot index into the adjacency table.
//! - **Ordered adjacency**: each vertex owns a `BTreeSet` of successors.
//!   Parallel edges collapse into one, and every iterator in the crate
//!   yields in ascending handle order for free.
//! - **Capability trait**: the algorithms require only the four read
//!   operations of [`GraphView`] (vertex count, handle lookup, vertex walk,
//!   successor walk), so alternate representations plug in without boxing.
//! - **Fail-fast contracts**: out-of-range handles panic with the offending
//!   value in the message; expected negatives (absent edge, duplicate edge)
//!   are ordinary return values, never panics and never `Result`s.
//!
//! ## Algorithms
//!
//! - [`has_cycle`]: three-color depth-first search started from the first
//!   vertex only. Cycles unreachable from vertex 0 are out of scope by
//!   contract; the function documents and tests that boundary rather than
//!   hiding it.
//! - [`topological_sort`]: depth-first postorder over every root in
//!   ascending order, streaming each finished vertex to a caller-supplied
//!   sink. Successors are emitted before their predecessors. Requires an
//!   acyclic graph; debug builds verify the precondition.
//!
//! Both traversals drive an explicit stack, so graphs thousands of vertices
//! deep cannot overflow the call stack.
//!
//! ## Example
//!
//! ```rust
//! use quiver::{has_cycle, topological_order, Digraph};
//!
//! let mut graph = Digraph::new();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//!
//! graph.add_edge(a, b);
//! graph.add_edge(a, c);
//! graph.add_edge(b, c);
//!
//! assert!(!has_cycle(&graph));
//! assert_eq!(topological_order(&graph), vec![c, b, a]);
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (off by default): emits `trace!`-level events from the
//!   algorithm entry points via the [`tracing`](https://docs.rs/tracing)
//!   crate. The core container never logs.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algo;
pub mod graph;

pub use algo::{has_cycle, topological_order, topological_sort};
pub use graph::{Digraph, EdgeId, Edges, GraphView, Neighbors, VertexId, Vertices};

// Compile-time layout claims for the handle types.
const _: () = {
    use core::mem;

    // Handles are bare indices; an edge descriptor is exactly two of them.
    assert!(mem::size_of::<VertexId>() == 4);
    assert!(mem::size_of::<EdgeId>() == 8);
    assert!(mem::align_of::<EdgeId>() == mem::align_of::<VertexId>());

    // The vertex walk borrows nothing; its state is a pair of cursors.
    assert!(mem::size_of::<Vertices>() == 8);
};
