//! Vertex-indexed graph containers.
//!
//! Vertices are the dense integers `0..V`, fixed when the graph is created.
//! Edges can only be added, never removed, so `E` grows monotonically.  All
//! four containers permit parallel edges and self-loops, and iterate each
//! adjacency list in insertion order.
//!
//! This module provides:
//!
//! - [`Adjacency`] trait: read-only access shared by every container, with
//!   bounds-checked vertex access and depth-first / breadth-first traversal
//! - [`GraphDirected`] and [`GraphUndirected`]: extension traits implemented
//!   automatically according to the container's [`Directedness`], exposing
//!   the analyses that only make sense for that flavour
//! - [`Graph`], [`Digraph`]: unweighted undirected and directed graphs
//! - [`EdgeWeightedGraph`], [`EdgeWeightedDigraph`]: their weighted
//!   counterparts, whose adjacency entries are [`Edge`] and [`DirectedEdge`]
//!   values
//! - [`SymbolGraph`], [`SymbolDigraph`]: unweighted graphs whose vertices
//!   are named by strings
//!
//! Every container can be built from a vertex count, parsed from a textual
//! edge list (see [`FromStr`](std::str::FromStr) and [`ReadEdgeList`]), or
//! deep-copied with [`Clone`], which preserves adjacency order.

mod adjacency;
mod directed;
mod edge_list;
mod edge_weighted;
mod edge_weighted_directed;
mod symbol;
mod undirected;

pub use directed::Digraph;
pub use edge_list::ReadEdgeList;
pub use edge_weighted::EdgeWeightedGraph;
pub use edge_weighted_directed::EdgeWeightedDigraph;
pub use symbol::{LinkGraph, SymbolDigraph, SymbolGraph};
pub use undirected::Graph;

use crate::{
    components::{ConnectedComponents, StrongComponents},
    cycle::DirectedCycle,
    directedness::{Directed, Directedness, Undirected},
    edge::{DirectedEdge, Edge},
    error::{GraphError, Result},
    order::{DepthFirstOrder, Topological},
    search::{BfsIterator, DfsIterator},
};

/// An entry in an adjacency list that leads from a known vertex to a
/// neighbouring one.
pub trait Neighbor: Clone {
    /// Returns the vertex reached by following this entry from `from`.
    fn neighbor(&self, from: usize) -> usize;
}

impl Neighbor for usize {
    fn neighbor(&self, _from: usize) -> usize {
        *self
    }
}

impl Neighbor for Edge {
    fn neighbor(&self, from: usize) -> usize {
        self.other(from)
    }
}

impl Neighbor for DirectedEdge {
    fn neighbor(&self, _from: usize) -> usize {
        self.to()
    }
}

/// Read-only access to a vertex-indexed adjacency structure.
///
/// Methods taking a vertex argument return [`GraphError::VertexOutOfRange`]
/// for vertices outside `0..V`, except [`Self::arcs`], which is the
/// unchecked accessor used inside algorithms that only ever visit valid
/// vertices.
pub trait Adjacency {
    type Directedness: Directedness;
    type Arc: Neighbor;

    /// Number of vertices, `V`.
    fn num_vertices(&self) -> usize;

    /// Number of edges, `E`.
    fn num_edges(&self) -> usize;

    /// Gets the adjacency list of `v`.  Panics if `v` is out of range.
    fn arcs(&self, v: usize) -> &[Self::Arc];

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        Self::Directedness::is_directed()
    }

    /// Checks that `v` names a vertex of this graph.
    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v < self.num_vertices() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.num_vertices(),
            })
        }
    }

    /// Gets the adjacency list of `v`.
    fn adj(&self, v: usize) -> Result<&[Self::Arc]> {
        self.validate_vertex(v)?;
        Ok(self.arcs(v))
    }

    /// Gets an iterator over the vertices adjacent to `v`, once per edge, so
    /// parallel edges yield repeated vertices.
    fn neighbors(&self, v: usize) -> Result<impl Iterator<Item = usize> + '_> {
        Ok(self.adj(v)?.iter().map(move |arc| arc.neighbor(v)))
    }

    /// Number of entries in the adjacency list of `v`.  A self-loop in an
    /// undirected graph counts twice.
    fn degree(&self, v: usize) -> Result<usize> {
        Ok(self.adj(v)?.len())
    }

    /// Performs a depth-first search starting from the given vertex.
    fn dfs(&self, start: usize) -> Result<DfsIterator<'_, Self>>
    where
        Self: Sized,
    {
        self.dfs_multi(vec![start])
    }

    /// Performs a depth-first search starting from the given vertices.
    fn dfs_multi(&self, start: Vec<usize>) -> Result<DfsIterator<'_, Self>>
    where
        Self: Sized,
    {
        DfsIterator::new(self, start)
    }

    /// Performs a breadth-first search starting from the given vertex.
    fn bfs(&self, start: usize) -> Result<BfsIterator<'_, Self>>
    where
        Self: Sized,
    {
        self.bfs_multi(vec![start])
    }

    /// Performs a breadth-first search starting from the given vertices.
    fn bfs_multi(&self, start: Vec<usize>) -> Result<BfsIterator<'_, Self>>
    where
        Self: Sized,
    {
        BfsIterator::new(self, start)
    }
}

/// A trait which is automatically implemented for directed graphs, providing
/// methods specific to directed graphs.
pub trait GraphDirected: Adjacency<Directedness = Directed> + Sized {
    /// Searches for a directed cycle.
    fn directed_cycle(&self) -> DirectedCycle<Self::Arc> {
        DirectedCycle::new(self)
    }

    /// Computes preorder, postorder and reverse postorder of a depth-first
    /// search over every vertex.
    fn depth_first_order(&self) -> DepthFirstOrder {
        DepthFirstOrder::new(self)
    }

    /// Computes a topological order, if the graph is acyclic.
    fn topological(&self) -> Topological {
        Topological::new(self)
    }

    /// Partitions the graph into strongly connected components.
    fn strong_components(&self) -> StrongComponents {
        StrongComponents::new(self)
    }

    /// Returns the reverse of this graph's vertex links as an unweighted
    /// digraph.
    fn reverse_links(&self) -> Digraph {
        let mut reverse = Digraph::new(self.num_vertices());
        for v in 0..self.num_vertices() {
            for arc in self.arcs(v) {
                reverse.push_edge(arc.neighbor(v), v);
            }
        }
        reverse
    }
}

impl<G> GraphDirected for G where G: Adjacency<Directedness = Directed> {}

/// A trait which is automatically implemented for undirected graphs,
/// providing methods specific to undirected graphs.
pub trait GraphUndirected: Adjacency<Directedness = Undirected> + Sized {
    /// Partitions the graph into connected components.
    fn connected_components(&self) -> ConnectedComponents {
        ConnectedComponents::new(self)
    }
}

impl<G> GraphUndirected for G where G: Adjacency<Directedness = Undirected> {}
