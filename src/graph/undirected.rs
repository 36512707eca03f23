use std::{fmt, str::FromStr};

use crate::{
    directedness::Undirected,
    error::{ParseError, Result},
    graph::{Adjacency, ReadEdgeList, adjacency::AdjacencyLists, edge_list::EdgeListReader},
};

/// An unweighted undirected graph.  Each edge `v-w` is stored in the
/// adjacency lists of both endpoints, so a self-loop appears twice in the
/// list of its vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    adj: AdjacencyLists<usize>,
}

impl Graph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: AdjacencyLists::new(num_vertices),
        }
    }

    /// Adds the undirected edge `v-w`.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.adj.validate(v)?;
        self.adj.validate(w)?;
        self.adj.push(v, w);
        self.adj.push(w, v);
        self.adj.count_edge();
        Ok(())
    }

    /// Gets every edge once as a `(v, w)` pair with `v <= w`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.num_edges());
        for (v, list) in self.adj.lists() {
            let mut self_loops = 0;
            for &w in list {
                if w > v {
                    edges.push((v, w));
                } else if w == v {
                    if self_loops % 2 == 0 {
                        edges.push((v, v));
                    }
                    self_loops += 1;
                }
            }
        }
        edges
    }
}

impl Adjacency for Graph {
    type Directedness = Undirected;
    type Arc = usize;

    fn num_vertices(&self) -> usize {
        self.adj.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.adj.num_edges()
    }

    fn arcs(&self, v: usize) -> &[usize] {
        self.adj.get(v)
    }
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut reader = EdgeListReader::new(s);
        let mut graph = Graph::new(reader.vertex_count()?);
        for _ in 0..reader.edge_count()? {
            let v = reader.vertex()?;
            let w = reader.vertex()?;
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }
}

impl ReadEdgeList for Graph {}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges ", self.num_vertices(), self.num_edges())?;
        for (v, list) in self.adj.lists() {
            write!(f, "{v}: ")?;
            for w in list {
                write!(f, "{w} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
