use crate::error::{GraphError, Result};

/// Fixed-size array of adjacency lists plus an edge counter, shared by the
/// four graph containers.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AdjacencyLists<T> {
    lists: Vec<Vec<T>>,
    num_edges: usize,
}

impl<T> AdjacencyLists<T> {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            lists: std::iter::repeat_with(Vec::new).take(num_vertices).collect(),
            num_edges: 0,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn validate(&self, v: usize) -> Result<()> {
        if v < self.lists.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.lists.len(),
            })
        }
    }

    pub fn get(&self, v: usize) -> &[T] {
        &self.lists[v]
    }

    /// Appends `item` to the list of `v` without touching the edge count.
    pub fn push(&mut self, v: usize, item: T) {
        self.lists[v].push(item);
    }

    pub fn count_edge(&mut self) {
        self.num_edges += 1;
    }

    pub fn lists(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.lists.iter().map(Vec::as_slice).enumerate()
    }
}
