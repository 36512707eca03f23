use bitvec::vec::BitVec;

use crate::{
    edge::Edge,
    error::Result,
    graph::{Adjacency, EdgeWeightedGraph},
    mst::SpanningForest,
    pq::IndexMinPq,
    tracing_support::info_span,
};

/// The eager version of Prim's algorithm.  For each vertex outside the tree
/// only its lightest edge into the tree is kept, on an indexed min-heap, so
/// the heap never holds more than `V` entries.
#[derive(Clone, Debug)]
pub struct PrimMst {
    edges: Vec<Edge>,
}

impl PrimMst {
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let _span = info_span!("prim").entered();
        let n = graph.num_vertices();
        let mut edge_to: Vec<Option<Edge>> = vec![None; n];
        let mut dist_to = vec![f64::INFINITY; n];
        let mut marked: BitVec = BitVec::repeat(false, n);
        let mut pq = IndexMinPq::with_capacity(n);

        for s in 0..n {
            if marked[s] {
                continue;
            }
            dist_to[s] = 0.0;
            pq.insert(s, 0.0)?;
            while !pq.is_empty() {
                let v = pq.del_min()?;
                marked.set(v, true);
                for &edge in graph.arcs(v) {
                    let w = edge.other(v);
                    let improves = edge_to[w].is_none() || edge.weight() < dist_to[w];
                    if marked[w] || !improves {
                        continue;
                    }
                    dist_to[w] = edge.weight();
                    edge_to[w] = Some(edge);
                    if pq.contains(w)? {
                        pq.decrease_key(w, edge.weight())?;
                    } else {
                        pq.insert(w, edge.weight())?;
                    }
                }
            }
        }
        Ok(Self {
            edges: edge_to.into_iter().flatten().collect(),
        })
    }
}

impl SpanningForest for PrimMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
