use std::{fmt, iter::once};

use crate::edge::DirectedEdge;

/// A walk through an edge-weighted digraph, represented as its starting
/// vertex and the edges followed from there.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    source: usize,
    edges: Vec<DirectedEdge>,
}

impl Path {
    /// Creates an empty path at the given vertex.
    pub fn new(source: usize) -> Self {
        Self {
            source,
            edges: Vec::new(),
        }
    }

    pub fn from_edges(source: usize, edges: impl IntoIterator<Item = DirectedEdge>) -> Self {
        let mut path = Self::new(source);
        path.extend(edges);
        path
    }

    /// Returns the first vertex in the path.
    pub fn first_vertex(&self) -> usize {
        self.source
    }

    /// Returns the last vertex in the path.
    pub fn last_vertex(&self) -> usize {
        self.edges.last().map_or(self.source, DirectedEdge::to)
    }

    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    /// Returns an iterator over the vertices in the path, starting with the
    /// source.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        once(self.source).chain(self.edges.iter().map(DirectedEdge::to))
    }

    /// Sum of the edge weights.
    pub fn weight(&self) -> f64 {
        self.edges.iter().map(DirectedEdge::weight).sum()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Adds an edge to the end of the path. Panics if the edge does not start
    /// at the current last vertex.
    pub fn push(&mut self, edge: DirectedEdge) {
        assert_eq!(
            edge.from(),
            self.last_vertex(),
            "Edge {edge} does not continue the path"
        );
        self.edges.push(edge);
    }
}

impl Extend<DirectedEdge> for Path {
    fn extend<T: IntoIterator<Item = DirectedEdge>>(&mut self, iter: T) {
        for edge in iter {
            self.push(edge);
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a DirectedEdge;
    type IntoIter = std::slice::Iter<'a, DirectedEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, "   ")?;
            }
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}
