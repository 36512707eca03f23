//! Graphs whose vertices are named by strings.
//!
//! The input is line oriented: each line holds a vertex name followed by the
//! names of its neighbours, separated by a delimiter.  Names are assigned
//! indices in order of first appearance, then every line adds one edge from
//! its first name to each of the others.  Blank lines and empty names are
//! skipped.

use std::{collections::HashMap, io::Read};

use crate::{
    error::{GraphError, ParseError, Result},
    graph::{Adjacency, Digraph, Graph},
};

/// An unweighted graph that can be built edge by edge.
pub trait LinkGraph: Adjacency<Arc = usize> + Sized {
    fn with_vertices(num_vertices: usize) -> Self;

    fn add_link(&mut self, v: usize, w: usize) -> Result<()>;
}

impl LinkGraph for Graph {
    fn with_vertices(num_vertices: usize) -> Self {
        Graph::new(num_vertices)
    }

    fn add_link(&mut self, v: usize, w: usize) -> Result<()> {
        self.add_edge(v, w)
    }
}

impl LinkGraph for Digraph {
    fn with_vertices(num_vertices: usize) -> Self {
        Digraph::new(num_vertices)
    }

    fn add_link(&mut self, v: usize, w: usize) -> Result<()> {
        self.add_edge(v, w)
    }
}

/// A graph paired with a two-way mapping between vertex names and indices.
#[derive(Clone, Debug)]
pub struct SymbolGraph<G = Graph> {
    index: HashMap<String, usize>,
    names: Vec<String>,
    graph: G,
}

/// A [`SymbolGraph`] over a directed graph.
pub type SymbolDigraph = SymbolGraph<Digraph>;

impl<G: LinkGraph> SymbolGraph<G> {
    pub fn parse(input: &str, delimiter: &str) -> Result<Self> {
        let records: Vec<Vec<&str>> = input
            .lines()
            .map(|line| line.split(delimiter).filter(|name| !name.is_empty()).collect())
            .filter(|names: &Vec<&str>| !names.is_empty())
            .collect();

        let mut index = HashMap::new();
        let mut names = Vec::new();
        for &name in records.iter().flatten() {
            if !index.contains_key(name) {
                index.insert(name.to_string(), names.len());
                names.push(name.to_string());
            }
        }

        let mut graph = G::with_vertices(names.len());
        for record in &records {
            let v = index[record[0]];
            for &name in &record[1..] {
                graph.add_link(v, index[name])?;
            }
        }
        Ok(Self {
            index,
            names,
            graph,
        })
    }

    pub fn from_reader<R: Read>(mut reader: R, delimiter: &str) -> Result<Self, ParseError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(Self::parse(&input, delimiter)?)
    }
}

impl<G> SymbolGraph<G> {
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Index of the vertex called `name`.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of vertex `v`.
    pub fn name(&self, v: usize) -> Result<&str> {
        self.names
            .get(v)
            .map(String::as_str)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.names.len(),
            })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}
