//! The graph layer: the concrete container, its handle types, its lazy
//! iterators, and the read-only capability trait the algorithm layer is
//! generic over.
//!
//! Modules:
//! - `descriptor`: opaque vertex and edge handles
//! - `digraph`: the adjacency-set container
//! - `iter`: lazy ascending walks over vertices, edges, and successors
//! - `view`: the capability trait alternate representations implement

pub mod descriptor;
pub mod digraph;
pub mod iter;
pub mod view;

// Re-export the full public surface of the layer.
pub use descriptor::{EdgeId, VertexId};
pub use digraph::Digraph;
pub use iter::{Edges, Neighbors, Vertices};
pub use view::GraphView;
