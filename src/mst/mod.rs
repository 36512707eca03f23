//! Minimum spanning forests of edge-weighted undirected graphs.
//!
//! All three engines restart from every vertex not yet in the forest, so a
//! disconnected graph yields one tree per component.  When edge weights tie,
//! each engine returns *a* minimum spanning forest; the edge sets may differ
//! between engines but the total weight does not.

mod check;
mod kruskal;
mod lazy_prim;
mod prim;

pub use check::{SpanningForestError, check_spanning_forest};
pub use kruskal::KruskalMst;
pub use lazy_prim::LazyPrimMst;
pub use prim::PrimMst;

use crate::edge::Edge;

/// Query interface shared by the spanning-forest engines.
pub trait SpanningForest {
    /// Gets the edges accepted into the forest.
    fn edges(&self) -> &[Edge];

    /// Sum of the forest's edge weights.
    fn weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }
}
