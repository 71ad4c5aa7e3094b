//! Traversal coloring for the DFS algorithms.
//!
//! Keeps the visit-state logic of the traversals in one place: the cycle
//! search needs the full three-color discipline, the topological sort only
//! the white/black endpoints of it.

use crate::graph::VertexId;

/// Visit state of one vertex during a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Not yet reached.
    White,
    /// On the current search path.
    Grey,
    /// Fully explored.
    Black,
}

/// Per-vertex colors over dense handles.
#[derive(Debug)]
pub(crate) struct ColorMap {
    colors: Vec<Color>,
}

impl ColorMap {
    /// All vertices start white.
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            colors: vec![Color::White; vertex_count],
        }
    }

    pub(crate) fn get(&self, v: VertexId) -> Color {
        self.colors[v.index()]
    }

    pub(crate) fn set(&mut self, v: VertexId, color: Color) {
        self.colors[v.index()] = color;
    }
}
