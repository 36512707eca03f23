pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::edge::{DirectedEdge, Edge};
pub use crate::error::{GraphError, ParseError};
pub use crate::graph::{
    Adjacency, Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph, GraphDirected,
    GraphUndirected, ReadEdgeList, SymbolDigraph, SymbolGraph,
};
pub use crate::mst::SpanningForest;
pub use crate::sp::ShortestPaths;
