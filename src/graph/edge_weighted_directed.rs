use std::{fmt, str::FromStr};

use crate::{
    directedness::Directed,
    edge::DirectedEdge,
    error::{ParseError, Result},
    graph::{Adjacency, ReadEdgeList, adjacency::AdjacencyLists, edge_list::EdgeListReader},
};

/// A directed graph whose adjacency lists hold [`DirectedEdge`] values.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeWeightedDigraph {
    adj: AdjacencyLists<DirectedEdge>,
}

impl EdgeWeightedDigraph {
    /// Creates a digraph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: AdjacencyLists::new(num_vertices),
        }
    }

    /// Adds a directed edge.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        self.adj.validate(edge.from())?;
        self.adj.validate(edge.to())?;
        self.push_edge(edge);
        Ok(())
    }

    /// Adds an edge whose endpoints are already known to be in range.
    pub(crate) fn push_edge(&mut self, edge: DirectedEdge) {
        self.adj.push(edge.from(), edge);
        self.adj.count_edge();
    }

    /// Gets an iterator over every edge, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.adj.lists().flat_map(|(_, list)| list.iter().copied())
    }

    /// Number of edges leaving `v`.
    pub fn outdegree(&self, v: usize) -> Result<usize> {
        self.degree(v)
    }

    /// Returns a copy of this digraph with every edge reversed.
    pub fn reverse(&self) -> EdgeWeightedDigraph {
        let mut reverse = EdgeWeightedDigraph::new(self.num_vertices());
        for edge in self.edges() {
            reverse.push_edge(edge.reversed());
        }
        reverse
    }
}

impl Adjacency for EdgeWeightedDigraph {
    type Directedness = Directed;
    type Arc = DirectedEdge;

    fn num_vertices(&self) -> usize {
        self.adj.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.adj.num_edges()
    }

    fn arcs(&self, v: usize) -> &[DirectedEdge] {
        self.adj.get(v)
    }
}

impl FromStr for EdgeWeightedDigraph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut reader = EdgeListReader::new(s);
        let mut graph = EdgeWeightedDigraph::new(reader.vertex_count()?);
        for _ in 0..reader.edge_count()? {
            let v = reader.vertex()?;
            let w = reader.vertex()?;
            let weight = reader.weight()?;
            graph.add_edge(DirectedEdge::new(v, w, weight)?)?;
        }
        Ok(graph)
    }
}

impl ReadEdgeList for EdgeWeightedDigraph {}

impl fmt::Display for EdgeWeightedDigraph {
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
