use std::{collections::VecDeque, num::NonZeroUsize};

use bitvec::vec::BitVec;

use crate::{
    cycle::Cycle,
    edge::DirectedEdge,
    error::{GraphError, Result},
    graph::{Adjacency, EdgeWeightedDigraph, GraphDirected},
    sp::{Objective, OptimalityError, PathTree, ShortestPaths},
    tracing_support::{debug, info_span, trace},
};

/// Finds a cycle among the parent edges of a partial shortest-path tree.
/// While Bellman-Ford runs, any such cycle has negative total weight.
pub fn negative_cycle_in(predecessors: &EdgeWeightedDigraph) -> Option<Cycle<DirectedEdge>> {
    predecessors.directed_cycle().cycle().cloned()
}

/// The queue-based Bellman-Ford algorithm.
///
/// Accepts any edge weights.  Every `check_interval` relaxation attempts the
/// parent edges are searched for a cycle; finding one means a negative cycle
/// is reachable from the source, and the computation stops.  After that the
/// distance queries fail with [`GraphError::NegativeCycle`], while
/// [`Self::negative_cycle`] reports the cycle.
#[derive(Clone, Debug)]
pub struct BellmanFordSp {
    tree: PathTree,
    cycle: Option<Cycle<DirectedEdge>>,
}

impl BellmanFordSp {
    /// Computes shortest paths from `source`, checking for a negative cycle
    /// every `V` relaxation attempts.
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        let interval = NonZeroUsize::new(graph.num_vertices()).unwrap_or(NonZeroUsize::MIN);
        Self::with_check_interval(graph, source, interval)
    }

    /// Computes shortest paths from `source`, checking for a negative cycle
    /// every `check_interval` relaxation attempts.
    pub fn with_check_interval(
        graph: &EdgeWeightedDigraph,
        source: usize,
        check_interval: NonZeroUsize,
    ) -> Result<Self> {
        let _span = info_span!("bellman_ford", source).entered();
        graph.validate_vertex(source)?;

        let n = graph.num_vertices();
        let mut tree = PathTree::new(n, source, Objective::Shortest);
        let mut on_queue: BitVec = BitVec::repeat(false, n);
        let mut queue = VecDeque::from([source]);
        on_queue.set(source, true);
        let mut attempts = 0usize;

        while let Some(v) = queue.pop_front() {
            on_queue.set(v, false);
            for &edge in graph.arcs(v) {
                let w = edge.to();
                if tree.relax(edge) && !on_queue[w] {
                    queue.push_back(w);
                    on_queue.set(w, true);
                }
                attempts += 1;
                if attempts % check_interval.get() != 0 {
                    continue;
                }
                trace!(attempts, "checking parent edges for a cycle");
                if let Some(cycle) = negative_cycle_in(&tree.predecessor_digraph()) {
                    debug!(
                        weight = cycle.weight(),
                        length = cycle.len(),
                        "found negative cycle"
                    );
                    return Ok(Self {
                        tree,
                        cycle: Some(cycle),
                    });
                }
            }
        }
        Ok(Self { tree, cycle: None })
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Gets the edges of the negative cycle found, in traversal order.
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_ref().map(Cycle::arcs)
    }

    /// Gets the negative cycle found, with its vertex sequence.
    pub fn cycle(&self) -> Option<&Cycle<DirectedEdge>> {
        self.cycle.as_ref()
    }

    /// Verifies the result: a reported cycle must have negative weight,
    /// otherwise the path tree must satisfy the optimality conditions.
    pub fn check(&self, graph: &EdgeWeightedDigraph) -> std::result::Result<(), OptimalityError> {
        match &self.cycle {
            Some(cycle) if cycle.weight() >= 0.0 => {
                Err(OptimalityError::CycleNotNegative(cycle.weight()))
            }
            Some(_) => Ok(()),
            None => self.tree.check_optimality(graph),
        }
    }
}

impl ShortestPaths for BellmanFordSp {
    fn tree(&self) -> Result<&PathTree> {
        if self.cycle.is_some() {
            return Err(GraphError::NegativeCycle);
        }
        Ok(&self.tree)
    }
}
