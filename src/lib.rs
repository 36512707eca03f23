//! Classical graph algorithms over vertex-indexed graphs.
//!
//! Graphs have a fixed vertex set `0..V` and grow by adding edges.  Each
//! algorithm takes a graph by reference, runs to completion in its
//! constructor, and then answers queries from the arrays it computed.
//!
//! - [`graph`]: the four graph containers and edge-list ingestion
//! - [`pq`], [`union_find`]: indexed binary heaps and weighted quick-union
//! - [`cycle`], [`order`], [`components`], [`search`]: traversal-based
//!   analyses
//! - [`sp`]: Dijkstra, Bellman-Ford, and acyclic shortest/longest paths
//! - [`mst`]: lazy Prim, eager Prim, and Kruskal spanning forests

pub mod components;
pub mod cycle;
pub mod directedness;
pub mod edge;
pub mod error;
pub mod graph;
pub mod mst;
pub mod order;
pub mod path;
pub mod pq;
pub mod prelude;
pub mod search;
pub mod sp;
pub mod tracing_support;
pub mod union_find;

#[cfg(test)]
mod test_support;

pub use error::{GraphError, ParseError, Result};
pub use graph::{
    Adjacency, Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph, GraphDirected,
    GraphUndirected,
};
