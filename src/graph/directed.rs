use std::{fmt, str::FromStr};

use crate::{
    directedness::Directed,
    error::{ParseError, Result},
    graph::{Adjacency, ReadEdgeList, adjacency::AdjacencyLists, edge_list::EdgeListReader},
};

/// An unweighted directed graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Digraph {
    adj: AdjacencyLists<usize>,
}

impl Digraph {
    /// Creates a digraph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: AdjacencyLists::new(num_vertices),
        }
    }

    /// Adds the directed edge `v->w`.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.adj.validate(v)?;
        self.adj.validate(w)?;
        self.push_edge(v, w);
        Ok(())
    }

    /// Adds `v->w` for vertices already known to be in range.
    pub(crate) fn push_edge(&mut self, v: usize, w: usize) {
        self.adj.push(v, w);
        self.adj.count_edge();
    }

    /// Gets every edge as a `(from, to)` pair, grouped by source vertex.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.adj
            .lists()
            .flat_map(|(v, list)| list.iter().map(move |&w| (v, w)))
            .collect()
    }

    /// Number of edges leaving `v`.
    pub fn outdegree(&self, v: usize) -> Result<usize> {
        self.degree(v)
    }

    /// Returns a copy of this digraph with every edge reversed.
    pub fn reverse(&self) -> Digraph {
        let mut reverse = Digraph::new(self.num_vertices());
        for (v, list) in self.adj.lists() {
            for &w in list {
                reverse.push_edge(w, v);
            }
        }
        reverse
    }
}

impl Adjacency for Digraph {
    type Directedness = Directed;
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

impl FromStr for Digraph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut reader = EdgeListReader::new(s);
        let mut graph = Digraph::new(reader.vertex_count()?);
        for _ in 0..reader.edge_count()? {
            let v = reader.vertex()?;
            let w = reader.vertex()?;
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }
}

impl ReadEdgeList for Digraph {}

impl fmt::Display for Digraph {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_one_way() {
        let mut graph = Digraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.adj(0).unwrap(), &[1]);
        assert!(graph.adj(1).unwrap().contains(&2));
        assert!(graph.adj(2).unwrap().is_empty());
        assert_eq!(graph.outdegree(1).unwrap(), 1);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_reverse() {
        let graph: Digraph = "3 3  0 1  0 2  2 1".parse().unwrap();
        let reverse = graph.reverse();
        assert_eq!(reverse.num_edges(), 3);
        assert_eq!(reverse.adj(1).unwrap(), &[0, 2]);
        assert_eq!(reverse.adj(2).unwrap(), &[0]);
        assert!(reverse.adj(0).unwrap().is_empty());
        assert_eq!(reverse.reverse(), graph);
    }

    #[test]
    fn test_edges_listed_by_source() {
        let graph: Digraph = "3 3  2 0  0 1  0 2".parse().unwrap();
        assert_eq!(graph.edges(), vec![(0, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn test_negative_vertex_count_is_rejected() {
        assert!("-1 0".parse::<Digraph>().is_err());
    }
}
