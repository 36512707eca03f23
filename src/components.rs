//! Connectivity partitions.

use crate::{
    error::{GraphError, Result},
    graph::{Adjacency, GraphDirected, GraphUndirected, Neighbor},
};

/// Labels each vertex with the component reached by a search from the lowest
/// unlabelled vertex, following arcs from `order` in turn.
fn label_components<G: Adjacency>(graph: &G, order: impl Iterator<Item = usize>) -> Labels {
    let n = graph.num_vertices();
    let mut id: Vec<Option<usize>> = vec![None; n];
    let mut size = Vec::new();
    let mut stack = Vec::new();
    for s in order {
        if id[s].is_some() {
            continue;
        }
        let component = size.len();
        size.push(0);
        id[s] = Some(component);
        stack.push(s);
        while let Some(v) = stack.pop() {
            size[component] += 1;
            for arc in graph.arcs(v) {
                let w = arc.neighbor(v);
                if id[w].is_none() {
                    id[w] = Some(component);
                    stack.push(w);
                }
            }
        }
    }
    Labels {
        id: id.into_iter().map(|c| c.unwrap_or_default()).collect(),
        size,
    }
}

#[derive(Clone, Debug)]
struct Labels {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl Labels {
    fn id(&self, v: usize) -> Result<usize> {
        self.id.get(v).copied().ok_or(GraphError::VertexOutOfRange {
            vertex: v,
            num_vertices: self.id.len(),
        })
    }
}

/// Connected components of an undirected graph.
#[derive(Clone, Debug)]
pub struct ConnectedComponents {
    labels: Labels,
}

impl ConnectedComponents {
    pub fn new<G: GraphUndirected>(graph: &G) -> Self {
        Self {
            labels: label_components(graph, 0..graph.num_vertices()),
        }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.labels.size.len()
    }

    /// Component identifier of `v`, in `0..count()`.
    pub fn id(&self, v: usize) -> Result<usize> {
        self.labels.id(v)
    }

    /// Number of vertices in the component containing `v`.
    pub fn size(&self, v: usize) -> Result<usize> {
        Ok(self.labels.size[self.id(v)?])
    }

    pub fn connected(&self, v: usize, w: usize) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }
}

/// Strongly connected components of a directed graph, computed with the
/// Kosaraju-Sharir algorithm: a depth-first order of the reversed graph
/// fixes the order in which searches of the original graph are started.
#[derive(Clone, Debug)]
pub struct StrongComponents {
    labels: Labels,
}

impl StrongComponents {
    pub fn new<G: GraphDirected>(graph: &G) -> Self {
        let order = graph.reverse_links().depth_first_order();
        Self {
            labels: label_components(graph, order.reverse_postorder()),
        }
    }

    pub fn count(&self) -> usize {
        self.labels.size.len()
    }

    pub fn id(&self, v: usize) -> Result<usize> {
        self.labels.id(v)
    }

    /// Returns true if `v` and `w` can each reach the other.
    pub fn strongly_connected(&self, v: usize, w: usize) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Digraph, EdgeWeightedGraph, Graph};

    #[test]
    fn test_connected_components() {
        let graph: Graph = "7 4  0 1  1 2  3 4  5 5".parse().unwrap();
        let cc = graph.connected_components();
        assert_eq!(cc.count(), 4);
        assert!(cc.connected(0, 2).unwrap());
        assert!(!cc.connected(2, 3).unwrap());
        assert_eq!(cc.size(1).unwrap(), 3);
        assert_eq!(cc.size(6).unwrap(), 1);
        assert_eq!(cc.id(3).unwrap(), 1);
        assert!(cc.id(7).is_err());
    }

    #[test]
    fn test_weighted_components() {
        let graph: EdgeWeightedGraph = "4 2  0 3 1.0  2 1 0.5".parse().unwrap();
        let cc = graph.connected_components();
        assert_eq!(cc.count(), 2);
        assert!(cc.connected(3, 0).unwrap());
    }

    #[test]
    fn test_strong_components() {
        let graph: Digraph = "6 7  0 1  1 2  2 0  2 3  3 4  4 3  5 4".parse().unwrap();
        let scc = graph.strong_components();
        assert_eq!(scc.count(), 3);
        assert!(scc.strongly_connected(0, 2).unwrap());
        assert!(scc.strongly_connected(3, 4).unwrap());
        assert!(!scc.strongly_connected(2, 3).unwrap());
        assert!(!scc.strongly_connected(5, 4).unwrap());
    }

    #[test]
    fn test_dag_has_singleton_components() {
        let graph: Digraph = "4 3  0 1  1 2  2 3".parse().unwrap();
        assert_eq!(graph.strong_components().count(), 4);
    }
}
