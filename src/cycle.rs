//! Directed-cycle detection.
//!
//! [`DirectedCycle`] runs a depth-first search over every vertex, tracking
//! which vertices are on the current search path.  An edge into a vertex that
//! is still on the path closes a cycle, which is rebuilt from the
//! predecessor entries and the search stops.  The search keeps an explicit
//! work stack, so its depth is bounded by the heap rather than the call
//! stack.

use bitvec::vec::BitVec;

use crate::{
    edge::DirectedEdge,
    graph::{GraphDirected, Neighbor},
    tracing_support::{debug, info_span},
};

/// A closed walk through a directed graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle<A> {
    vertices: Vec<usize>,
    arcs: Vec<A>,
}

impl<A> Cycle<A> {
    /// Gets the vertices of the cycle in traversal order.  The first vertex
    /// is repeated at the end.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Gets the adjacency entries followed by the cycle, in traversal order.
    pub fn arcs(&self) -> &[A] {
        &self.arcs
    }

    /// Number of edges in the cycle.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

impl Cycle<DirectedEdge> {
    /// Total weight of the cycle's edges.
    pub fn weight(&self) -> f64 {
        self.arcs.iter().map(DirectedEdge::weight).sum()
    }
}

/// The result of searching a directed graph for a cycle.
#[derive(Clone, Debug)]
pub struct DirectedCycle<A> {
    cycle: Option<Cycle<A>>,
}

impl<A: Neighbor> DirectedCycle<A> {
    pub fn new<G>(graph: &G) -> Self
    where
        G: GraphDirected<Arc = A>,
    {
        let _span = info_span!("directed_cycle").entered();
        let n = graph.num_vertices();
        let mut marked: BitVec = BitVec::repeat(false, n);
        let mut on_stack: BitVec = BitVec::repeat(false, n);
        let mut edge_to: Vec<Option<(usize, A)>> = vec![None; n];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for s in 0..n {
            if marked[s] {
                continue;
            }
            marked.set(s, true);
            on_stack.set(s, true);
            stack.push((s, 0));
            while let Some((v, next)) = stack.pop() {
                let Some(arc) = graph.arcs(v).get(next) else {
                    on_stack.set(v, false);
                    continue;
                };
                stack.push((v, next + 1));
                let w = arc.neighbor(v);
                if !marked[w] {
                    edge_to[w] = Some((v, arc.clone()));
                    marked.set(w, true);
                    on_stack.set(w, true);
                    stack.push((w, 0));
                } else if on_stack[w] {
                    let cycle = Self::trace_back(&edge_to, v, w, arc.clone());
                    debug!(length = cycle.len(), start = w, "found directed cycle");
                    return Self { cycle: Some(cycle) };
                }
            }
        }
        Self { cycle: None }
    }

    /// Walks predecessor entries from `v` back to `w`, given the arc `v->w`
    /// that closed the cycle.
    fn trace_back(edge_to: &[Option<(usize, A)>], v: usize, w: usize, closing: A) -> Cycle<A> {
        let mut arcs = vec![closing];
        let mut vertices = vec![w, v];
        let mut x = v;
        while x != w {
            let Some((tail, arc)) = &edge_to[x] else {
                break;
            };
            arcs.push(arc.clone());
            vertices.push(*tail);
            x = *tail;
        }
        arcs.reverse();
        vertices.reverse();
        Cycle { vertices, arcs }
    }
}

impl<A> DirectedCycle<A> {
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Gets the cycle found, if any.
    pub fn cycle(&self) -> Option<&Cycle<A>> {
        self.cycle.as_ref()
    }
}
