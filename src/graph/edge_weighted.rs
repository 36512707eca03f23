use std::{fmt, str::FromStr};

use crate::{
    directedness::Undirected,
    edge::Edge,
    error::{ParseError, Result},
    graph::{Adjacency, ReadEdgeList, adjacency::AdjacencyLists, edge_list::EdgeListReader},
};

/// An undirected graph whose adjacency lists hold [`Edge`] values.  Every
/// edge is stored at both endpoints but reported once by [`Self::edges`].
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeWeightedGraph {
    adj: AdjacencyLists<Edge>,
}

impl EdgeWeightedGraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: AdjacencyLists::new(num_vertices),
        }
    }

    /// Adds an undirected edge.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let (v, w) = edge.endpoints();
        self.adj.validate(v)?;
        self.adj.validate(w)?;
        self.adj.push(v, edge);
        self.adj.push(w, edge);
        self.adj.count_edge();
        Ok(())
    }

    /// Gets every edge exactly once.  A self-loop, which is stored twice in
    /// the list of its vertex, is reported once per pair of stored copies.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.num_edges());
        for (v, list) in self.adj.lists() {
            let mut self_loops = 0;
            for edge in list {
                let w = edge.other(v);
                if w > v {
                    edges.push(*edge);
                } else if w == v {
                    if self_loops % 2 == 0 {
                        edges.push(*edge);
                    }
                    self_loops += 1;
                }
            }
        }
        edges
    }
}

impl Adjacency for EdgeWeightedGraph {
    type Directedness = Undirected;
    type Arc = Edge;

    fn num_vertices(&self) -> usize {
        self.adj.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.adj.num_edges()
    }

    fn arcs(&self, v: usize) -> &[Edge] {
        self.adj.get(v)
    }
}

impl FromStr for EdgeWeightedGraph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut reader = EdgeListReader::new(s);
        let mut graph = EdgeWeightedGraph::new(reader.vertex_count()?);
        for _ in 0..reader.edge_count()? {
            let v = reader.vertex()?;
            let w = reader.vertex()?;
            let weight = reader.weight()?;
            graph.add_edge(Edge::new(v, w, weight)?)?;
        }
        Ok(graph)
    }
}

impl ReadEdgeList for EdgeWeightedGraph {}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.num_vertices(), self.num_edges())?;
        for (v, list) in self.adj.lists() {
            write!(f, "{v}: ")?;
            for edge in list {
                write!(f, "{edge}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
