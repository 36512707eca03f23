use thiserror::Error;

use crate::{
    edge::DirectedEdge,
    error::{GraphError, Result},
    graph::{Adjacency, EdgeWeightedDigraph},
    path::Path,
    tracing_support::{TimingScope, info_span, set_timing_scope},
};

/// Absolute slack allowed when comparing recomputed distances.
const TOLERANCE: f64 = 1e-9;

/// Whether a path tree tracks minimum or maximum total weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Objective {
    Shortest,
    Longest,
}

impl Objective {
    /// Distance of a vertex no path reaches.
    pub fn unreached(self) -> f64 {
        match self {
            Objective::Shortest => f64::INFINITY,
            Objective::Longest => f64::NEG_INFINITY,
        }
    }

    /// Returns true if `candidate` is strictly better than `current`.
    pub fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Objective::Shortest => candidate < current,
            Objective::Longest => candidate > current,
        }
    }
}

/// A violated optimality condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimalityError {
    #[error("tree covers {actual} vertices but the graph has {expected}")]
    VertexCountMismatch { expected: usize, actual: usize },

    #[error("distance to the source is {0}, not 0")]
    SourceDistance(f64),

    #[error("the source has parent edge {0}")]
    SourceHasParent(DirectedEdge),

    #[error("vertex {0} has a parent edge exactly when it is unreached")]
    InconsistentReach(usize),

    #[error("edge {0} is not relaxed")]
    NotRelaxed(DirectedEdge),

    #[error("tree edge {0} is not tight")]
    NotTight(DirectedEdge),

    #[error("cycle reported as negative has weight {0}")]
    CycleNotNegative(f64),
}

/// Per-vertex distances and parent edges computed by a single-source path
/// algorithm.
///
/// `edge_to[v]` is the last edge on the best known path to `v`, and `None`
/// for the source and for unreached vertices.  The distance of an unreached
/// vertex is [`Objective::unreached`].
#[derive(Clone, Debug)]
pub struct PathTree {
    source: usize,
    objective: Objective,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl PathTree {
    pub(crate) fn new(num_vertices: usize, source: usize, objective: Objective) -> Self {
        let mut dist_to = vec![objective.unreached(); num_vertices];
        dist_to[source] = 0.0;
        Self {
            source,
            objective,
            dist_to,
            edge_to: vec![None; num_vertices],
        }
    }

    /// Relaxes `edge`, returning true if it improved the distance to its
    /// head.
    pub(crate) fn relax(&mut self, edge: DirectedEdge) -> bool {
        let (v, w) = (edge.from(), edge.to());
        let candidate = self.dist_to[v] + edge.weight();
        if self.objective.improves(candidate, self.dist_to[w]) {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(edge);
            true
        } else {
            false
        }
    }

    pub(crate) fn raw_dist(&self, v: usize) -> f64 {
        self.dist_to[v]
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn num_vertices(&self) -> usize {
        self.dist_to.len()
    }

    fn validate(&self, v: usize) -> Result<()> {
        if v < self.dist_to.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.dist_to.len(),
            })
        }
    }

    /// Weight of the best path to `v`, or the unreached sentinel.
    pub fn dist_to(&self, v: usize) -> Result<f64> {
        self.validate(v)?;
        Ok(self.dist_to[v])
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        Ok(self.dist_to(v)? != self.objective.unreached())
    }

    /// Last edge on the best path to `v`.
    pub fn edge_to(&self, v: usize) -> Result<Option<DirectedEdge>> {
        self.validate(v)?;
        Ok(self.edge_to[v])
    }

    /// Best path from the source to `v`, or `None` if `v` is unreached.
    pub fn path_to(&self, v: usize) -> Result<Option<Path>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        let mut edges = Vec::new();
        let mut x = v;
        while x != self.source {
            let Some(edge) = self.edge_to[x] else {
                break;
            };
            edges.push(edge);
            x = edge.from();
        }
        Ok(Some(Path::from_edges(self.source, edges.into_iter().rev())))
    }

    /// Builds a digraph holding exactly the parent edges.
    pub fn predecessor_digraph(&self) -> EdgeWeightedDigraph {
        let mut graph = EdgeWeightedDigraph::new(self.num_vertices());
        for edge in self.edge_to.iter().flatten() {
            graph.push_edge(*edge);
        }
        graph
    }

    /// Verifies the optimality conditions against `graph`: the source has
    /// distance 0 and no parent, parents exist exactly for reached vertices,
    /// every edge is relaxed, and every parent edge is tight.
    pub fn check_optimality(
        &self,
        graph: &EdgeWeightedDigraph,
    ) -> std::result::Result<(), OptimalityError> {
        let _scope = set_timing_scope(TimingScope::Verify);
        let _span = info_span!("check_optimality").entered();

        if graph.num_vertices() != self.num_vertices() {
            return Err(OptimalityError::VertexCountMismatch {
                expected: graph.num_vertices(),
                actual: self.num_vertices(),
            });
        }
        let s = self.source;
        if self.dist_to[s] != 0.0 {
            return Err(OptimalityError::SourceDistance(self.dist_to[s]));
        }
        if let Some(edge) = self.edge_to[s] {
            return Err(OptimalityError::SourceHasParent(edge));
        }
        let unreached = self.objective.unreached();
        for v in (0..self.num_vertices()).filter(|&v| v != s) {
            if (self.edge_to[v].is_none()) != (self.dist_to[v] == unreached) {
                return Err(OptimalityError::InconsistentReach(v));
            }
        }
        for edge in graph.edges() {
            let candidate = self.dist_to[edge.from()] + edge.weight();
            let current = self.dist_to[edge.to()];
            let slack = match self.objective {
                Objective::Shortest => current - candidate,
                Objective::Longest => candidate - current,
            };
            if slack > TOLERANCE {
                return Err(OptimalityError::NotRelaxed(edge));
            }
        }
        for edge in self.edge_to.iter().flatten() {
            let candidate = self.dist_to[edge.from()] + edge.weight();
            if (candidate - self.dist_to[edge.to()]).abs() > TOLERANCE {
                return Err(OptimalityError::NotTight(*edge));
            }
        }
        Ok(())
    }
}
