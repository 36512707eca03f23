use crate::{
    error::{GraphError, Result},
    graph::{Adjacency, EdgeWeightedDigraph},
    path::Path,
    pq::IndexMinPq,
    sp::{Objective, PathTree, ShortestPaths},
    tracing_support::info_span,
};

/// Dijkstra's algorithm.  Requires every edge weight to be non-negative.
#[derive(Clone, Debug)]
pub struct DijkstraSp {
    tree: PathTree,
}

impl DijkstraSp {
    /// Computes shortest paths from `source`.  Fails with
    /// [`GraphError::NegativeWeight`] if any edge in the graph, reachable or
    /// not, has a negative weight.
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        let _span = info_span!("dijkstra", source).entered();
        if let Some(edge) = graph.edges().find(|e| e.weight() < 0.0) {
            return Err(GraphError::NegativeWeight(edge));
        }
        graph.validate_vertex(source)?;

        let n = graph.num_vertices();
        let mut tree = PathTree::new(n, source, Objective::Shortest);
        let mut pq = IndexMinPq::with_capacity(n);
        pq.insert(source, 0.0)?;
        while !pq.is_empty() {
            let v = pq.del_min()?;
            for &edge in graph.arcs(v) {
                if !tree.relax(edge) {
                    continue;
                }
                let w = edge.to();
                let dist = tree.raw_dist(w);
                if pq.contains(w)? {
                    pq.decrease_key(w, dist)?;
                } else {
                    pq.insert(w, dist)?;
                }
            }
        }
        debug_assert_eq!(tree.check_optimality(graph), Ok(()));
        Ok(Self { tree })
    }
}

impl ShortestPaths for DijkstraSp {
    fn tree(&self) -> Result<&PathTree> {
        Ok(&self.tree)
    }
}

/// Shortest paths between every pair of vertices, computed by running
/// [`DijkstraSp`] from each vertex.
#[derive(Clone, Debug)]
pub struct DijkstraAllPairsSp {
    all: Vec<DijkstraSp>,
}

impl DijkstraAllPairsSp {
    pub fn new(graph: &EdgeWeightedDigraph) -> Result<Self> {
        let _span = info_span!("dijkstra_all_pairs").entered();
        let all = (0..graph.num_vertices())
            .map(|s| DijkstraSp::new(graph, s))
            .collect::<Result<_>>()?;
        Ok(Self { all })
    }

    fn from_source(&self, s: usize) -> Result<&DijkstraSp> {
        self.all.get(s).ok_or(GraphError::VertexOutOfRange {
            vertex: s,
            num_vertices: self.all.len(),
        })
    }

    pub fn dist(&self, s: usize, t: usize) -> Result<f64> {
        self.from_source(s)?.dist_to(t)
    }

    pub fn has_path(&self, s: usize, t: usize) -> Result<bool> {
        self.from_source(s)?.has_path_to(t)
    }

    pub fn path(&self, s: usize, t: usize) -> Result<Option<Path>> {
        self.from_source(s)?.path_to(t)
    }
}
