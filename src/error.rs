//! Error types shared by the graph containers and the algorithms built on
//! them.

use thiserror::Error;

use crate::edge::DirectedEdge;
use crate::pq::PqError;

/// Failures raised by graph construction, vertex validation, and algorithm
/// preconditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("site {site} is out of range for a union-find over {len} sites")]
    SiteOutOfRange { site: usize, len: usize },

    #[error("number of vertices must be nonnegative, got {0}")]
    NegativeVertexCount(i64),

    #[error("number of edges must be nonnegative, got {0}")]
    NegativeEdgeCount(i64),

    #[error("vertex name must be a nonnegative integer, got {0}")]
    NegativeVertex(i64),

    #[error("edge weight is NaN")]
    NanWeight,

    #[error("edge {0} has negative weight")]
    NegativeWeight(DirectedEdge),

    #[error("digraph is not acyclic")]
    NotAcyclic,

    #[error("negative cost cycle exists")]
    NegativeCycle,

    #[error(transparent)]
    Queue(#[from] PqError),
}

/// Failures raised while ingesting a textual edge list.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input ended while reading {0}")]
    MissingToken(&'static str),

    #[error("expected an integer, found {token:?}")]
    InvalidInteger { token: String },

    #[error("expected a floating-point weight, found {token:?}")]
    InvalidWeight { token: String },

    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
