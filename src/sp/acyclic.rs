use crate::{
    error::{GraphError, Result},
    graph::{Adjacency, EdgeWeightedDigraph, GraphDirected},
    sp::{Objective, PathTree, ShortestPaths},
    tracing_support::{debug, info_span},
};

/// Shortest or longest paths in an edge-weighted DAG, found by relaxing
/// every edge once in topological order.  Negative weights are allowed.
#[derive(Clone, Debug)]
pub struct AcyclicSp {
    tree: PathTree,
}

impl AcyclicSp {
    /// Computes paths from `source` under the given objective.  Fails with
    /// [`GraphError::NotAcyclic`] if the graph has a directed cycle.
    pub fn new(graph: &EdgeWeightedDigraph, source: usize, objective: Objective) -> Result<Self> {
        let _span = info_span!("acyclic_sp", source).entered();
        graph.validate_vertex(source)?;
        let topological = graph.topological();
        let Some(order) = topological.order() else {
            debug!("rejecting cyclic digraph");
            return Err(GraphError::NotAcyclic);
        };
        let mut tree = PathTree::new(graph.num_vertices(), source, objective);
        for &v in order {
            for &edge in graph.arcs(v) {
                tree.relax(edge);
            }
        }
        Ok(Self { tree })
    }

    pub fn shortest(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        Self::new(graph, source, Objective::Shortest)
    }

    pub fn longest(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        Self::new(graph, source, Objective::Longest)
    }
}

impl ShortestPaths for AcyclicSp {
    fn tree(&self) -> Result<&PathTree> {
        Ok(&self.tree)
    }
}
