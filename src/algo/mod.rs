//! The algorithm layer: classical DFS traversals over any `GraphView`.
//!
//! Both entry points are free functions generic over the capability trait,
//! so they run unchanged against the crate's own container or any other
//! representation that can answer the four read queries.
//!
//! - [`has_cycle`]: three-color DFS scoped to the first vertex
//! - [`topological_sort`] / [`topological_order`]: postorder emission over
//!   all roots, successors before predecessors

pub mod cycle;
pub mod topo;

pub(crate) mod color;

pub use cycle::has_cycle;
pub use topo::{topological_order, topological_sort};
