use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    edge::{ByWeight, Edge},
    error::Result,
    graph::{Adjacency, EdgeWeightedGraph},
    mst::SpanningForest,
    tracing_support::info_span,
    union_find::UnionFind,
};

/// Kruskal's algorithm: accept edges in increasing order of weight whenever
/// they join two different components.
#[derive(Clone, Debug)]
pub struct KruskalMst {
    edges: Vec<Edge>,
}

impl KruskalMst {
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let _span = info_span!("kruskal").entered();
        let n = graph.num_vertices();
        let mut heap: BinaryHeap<_> = graph
            .edges()
            .into_iter()
            .map(|e| Reverse(ByWeight(e)))
            .collect();
        let mut components = UnionFind::new(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        while edges.len() < n.saturating_sub(1) {
            let Some(Reverse(ByWeight(edge))) = heap.pop() else {
                break;
            };
            let (v, w) = edge.endpoints();
            if components.union(v, w)? {
                edges.push(edge);
            }
        }
        Ok(Self { edges })
    }
}

impl SpanningForest for KruskalMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_close;

    #[test]
    fn test_accepts_in_weight_order() {
        let graph: EdgeWeightedGraph =
            "4 5  0 1 3.0  1 2 1.0  2 3 2.0  3 0 4.0  0 2 5.0".parse().unwrap();
        let mst = KruskalMst::new(&graph).unwrap();
        let weights: Vec<_> = mst.edges().iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0]);
        assert_close(mst.weight(), 6.0);
    }

    #[test]
    fn test_forest_exhausts_edges() {
        let graph: EdgeWeightedGraph = "4 1  2 3 0.5".parse().unwrap();
        let mst = KruskalMst::new(&graph).unwrap();
        assert_eq!(mst.edges().len(), 1);
    }

    #[test]
    fn test_weight_is_repeatable() {
        let graph: EdgeWeightedGraph = "3 2  0 1 0.25  1 2 0.5".parse().unwrap();
        let mst = KruskalMst::new(&graph).unwrap();
        assert_eq!(mst.weight(), mst.weight());
        assert_eq!(mst.edges(), mst.edges());
    }
}
