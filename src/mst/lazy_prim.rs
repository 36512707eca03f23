use std::{cmp::Reverse, collections::BinaryHeap};

use bitvec::vec::BitVec;

use crate::{
    edge::{ByWeight, Edge},
    error::Result,
    graph::{Adjacency, EdgeWeightedGraph},
    mst::SpanningForest,
    tracing_support::{debug, info_span},
};

/// The lazy version of Prim's algorithm.  The heap holds every edge that
/// crossed the cut when it was pushed; edges whose endpoints have both since
/// joined the tree are discarded as they surface.
#[derive(Clone, Debug)]
pub struct LazyPrimMst {
    edges: Vec<Edge>,
}

impl LazyPrimMst {
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let _span = info_span!("lazy_prim").entered();
        let mut search = Search {
            graph,
            marked: BitVec::repeat(false, graph.num_vertices()),
            heap: BinaryHeap::new(),
            edges: Vec::new(),
            stale: 0,
        };
        for s in 0..graph.num_vertices() {
            if !search.marked[s] {
                search.grow_from(s);
            }
        }
        debug!(stale = search.stale, "discarded ineligible edges");
        Ok(Self {
            edges: search.edges,
        })
    }
}

struct Search<'g> {
    graph: &'g EdgeWeightedGraph,
    marked: BitVec,
    heap: BinaryHeap<Reverse<ByWeight<Edge>>>,
    edges: Vec<Edge>,
    stale: usize,
}

impl Search<'_> {
    fn grow_from(&mut self, s: usize) {
        self.scan(s);
        while let Some(Reverse(ByWeight(edge))) = self.heap.pop() {
            let (v, w) = edge.endpoints();
            if self.marked[v] && self.marked[w] {
                self.stale += 1;
                continue;
            }
            self.edges.push(edge);
            if !self.marked[v] {
                self.scan(v);
            }
            if !self.marked[w] {
                self.scan(w);
            }
        }
    }

    /// Adds `v` to the tree and pushes its edges to unmarked vertices.
    fn scan(&mut self, v: usize) {
        self.marked.set(v, true);
        for &edge in self.graph.arcs(v) {
            if !self.marked[edge.other(v)] {
                self.heap.push(Reverse(ByWeight(edge)));
            }
        }
    }
}

impl SpanningForest for LazyPrimMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
