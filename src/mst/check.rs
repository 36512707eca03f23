use thiserror::Error;

use crate::{
    edge::Edge,
    error::GraphError,
    graph::{Adjacency, EdgeWeightedGraph},
    mst::SpanningForest,
    tracing_support::{TimingScope, info_span, set_timing_scope},
    union_find::UnionFind,
};

const TOLERANCE: f64 = 1e-9;

/// A violated spanning-forest condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpanningForestError {
    #[error("reported weight {reported} differs from edge total {total}")]
    WeightMismatch { reported: f64, total: f64 },

    #[error("edge {0} closes a cycle in the forest")]
    NotForest(Edge),

    #[error("graph edge {0} joins two different trees")]
    NotSpanning(Edge),

    #[error("edge {crossing} crosses the cut of tree edge {tree_edge} with smaller weight")]
    CutViolation { tree_edge: Edge, crossing: Edge },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Verifies that `forest` is a minimum spanning forest of `graph`: its
/// weight matches its edges, it is acyclic, it spans every component, and
/// each tree edge is a lightest edge across the cut it defines.
pub fn check_spanning_forest(
    graph: &EdgeWeightedGraph,
    forest: &impl SpanningForest,
) -> Result<(), SpanningForestError> {
    let _scope = set_timing_scope(TimingScope::Verify);
    let _span = info_span!("check_spanning_forest").entered();

    let total: f64 = forest.edges().iter().map(Edge::weight).sum();
    let reported = forest.weight();
    if (total - reported).abs() > TOLERANCE {
        return Err(SpanningForestError::WeightMismatch { reported, total });
    }

    let n = graph.num_vertices();
    let mut trees = UnionFind::new(n);
    for &edge in forest.edges() {
        let (v, w) = edge.endpoints();
        if !trees.union(v, w)? {
            return Err(SpanningForestError::NotForest(edge));
        }
    }

    let graph_edges = graph.edges();
    for &edge in &graph_edges {
        let (v, w) = edge.endpoints();
        if !trees.connected(v, w)? {
            return Err(SpanningForestError::NotSpanning(edge));
        }
    }

    for (i, &tree_edge) in forest.edges().iter().enumerate() {
        let mut cut = UnionFind::new(n);
        for (j, &other) in forest.edges().iter().enumerate() {
            if i != j {
                let (v, w) = other.endpoints();
                cut.union(v, w)?;
            }
        }
        for &crossing in &graph_edges {
            let (v, w) = crossing.endpoints();
            if !cut.connected(v, w)? && crossing.weight() < tree_edge.weight() {
                return Err(SpanningForestError::CutViolation {
                    tree_edge,
                    crossing,
                });
            }
        }
    }
    Ok(())
}
