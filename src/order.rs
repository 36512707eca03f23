use bitvec::vec::BitVec;

use crate::{
    error::{GraphError, Result},
    graph::{GraphDirected, Neighbor},
    tracing_support::{debug, info_span},
};

/// Preorder, postorder and reverse postorder of a depth-first search that
/// starts from every unvisited vertex in increasing order.
#[derive(Clone, Debug)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    pub fn new<G: GraphDirected>(graph: &G) -> Self {
        let n = graph.num_vertices();
        let mut order = Self {
            pre: vec![0; n],
            post: vec![0; n],
            preorder: Vec::with_capacity(n),
            postorder: Vec::with_capacity(n),
        };
        let mut marked: BitVec = BitVec::repeat(false, n);
        let mut stack: Vec<(usize, usize)> = Vec::new();
        for s in 0..n {
            if marked[s] {
                continue;
            }
            marked.set(s, true);
            order.visit(s);
            stack.push((s, 0));
            while let Some((v, next)) = stack.pop() {
                let Some(arc) = graph.arcs(v).get(next) else {
                    order.finish(v);
                    continue;
                };
                stack.push((v, next + 1));
                let w = arc.neighbor(v);
                if !marked[w] {
                    marked.set(w, true);
                    order.visit(w);
                    stack.push((w, 0));
                }
            }
        }
        order
    }

    fn visit(&mut self, v: usize) {
        self.pre[v] = self.preorder.len();
        self.preorder.push(v);
    }

    fn finish(&mut self, v: usize) {
        self.post[v] = self.postorder.len();
        self.postorder.push(v);
    }

    fn validate(&self, v: usize) -> Result<()> {
        if v < self.pre.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.pre.len(),
            })
        }
    }

    /// Preorder number of `v`.
    pub fn pre(&self, v: usize) -> Result<usize> {
        self.validate(v)?;
        Ok(self.pre[v])
    }

    /// Postorder number of `v`.
    pub fn post(&self, v: usize) -> Result<usize> {
        self.validate(v)?;
        Ok(self.post[v])
    }

    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    pub fn reverse_postorder(&self) -> impl Iterator<Item = usize> + '_ {
        self.postorder.iter().rev().copied()
    }
}

/// A topological order of a directed graph, present only when the graph is
/// acyclic.
#[derive(Clone, Debug)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<usize>,
    num_vertices: usize,
}

impl Topological {
    pub fn new<G: GraphDirected>(graph: &G) -> Self {
        let _span = info_span!("topological").entered();
        let num_vertices = graph.num_vertices();
        if graph.directed_cycle().has_cycle() {
            debug!("graph has a cycle; no topological order");
            return Self {
                order: None,
                rank: Vec::new(),
                num_vertices,
            };
        }
        let order: Vec<usize> = graph.depth_first_order().reverse_postorder().collect();
        let mut rank = vec![0; order.len()];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = i;
        }
        Self {
            order: Some(order),
            rank,
            num_vertices,
        }
    }

    /// Returns true if the graph is acyclic.
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Gets the vertices in topological order, or `None` if the graph has a
    /// cycle.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Position of `v` in the order, or `None` if the graph has a cycle.
    pub fn rank(&self, v: usize) -> Result<Option<usize>> {
        if v >= self.num_vertices {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.num_vertices,
            });
        }
        Ok(self.order.as_ref().map(|_| self.rank[v]))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        graph::{Adjacency, Digraph, EdgeWeightedDigraph},
        test_support::ArbDag,
    };

    #[test]
    fn test_depth_first_order() {
        let graph: Digraph = "4 3  0 1  1 2  0 3".parse().unwrap();
        let order = graph.depth_first_order();
        assert_eq!(order.preorder(), &[0, 1, 2, 3]);
        assert_eq!(order.postorder(), &[2, 1, 3, 0]);
        assert_eq!(order.reverse_postorder().collect::<Vec<_>>(), vec![0, 3, 1, 2]);
        assert_eq!(order.pre(3).unwrap(), 3);
        assert_eq!(order.post(0).unwrap(), 3);
        assert!(order.post(4).is_err());
    }

    #[test]
    fn test_restarts_from_unvisited_vertices() {
        let graph: Digraph = "3 1  2 0".parse().unwrap();
        let order = graph.depth_first_order();
        assert_eq!(order.preorder(), &[0, 1, 2]);
        assert_eq!(order.postorder(), &[0, 1, 2]);
    }

    #[test]
    fn test_topological_order_of_dag() {
        let graph: EdgeWeightedDigraph = "3 2  2 1 0.5  1 0 0.5".parse().unwrap();
        let topo = graph.topological();
        assert!(topo.has_order());
        assert_eq!(topo.order(), Some(&[2, 1, 0][..]));
        assert_eq!(topo.rank(2).unwrap(), Some(0));
    }

    #[test]
    fn test_cyclic_graph_has_no_order() {
        let graph: Digraph = "3 3  0 1  1 2  2 0".parse().unwrap();
        let topo = graph.topological();
        assert!(!topo.has_order());
        assert_eq!(topo.order(), None);
        assert_eq!(topo.rank(0).unwrap(), None);
        assert!(matches!(
            topo.rank(99),
            Err(GraphError::VertexOutOfRange {
                vertex: 99,
                num_vertices: 3
            })
        ));
    }

    #[quickcheck]
    fn prop_every_edge_points_forward(dag: ArbDag) -> bool {
        let graph = &dag.0;
        let topo = graph.topological();
        let Some(order) = topo.order() else {
            return false;
        };
        let mut rank = vec![0; order.len()];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = i;
        }
        graph.edges().all(|e| rank[e.from()] < rank[e.to()])
            && order.len() == graph.num_vertices()
    }
}
