//! Single-source shortest paths in edge-weighted digraphs.
//!
//! Every engine relaxes edges into a [`PathTree`]; they differ in the order
//! vertices are processed and in the weights they accept:
//!
//! - [`DijkstraSp`]: non-negative weights, indexed min-heap keyed by distance
//! - [`AcyclicSp`]: any weights on an acyclic digraph, topological order;
//!   also computes longest paths
//! - [`BellmanFordSp`]: any weights, FIFO queue, with periodic detection of
//!   negative cycles reachable from the source
//!
//! Results are read through the [`ShortestPaths`] trait.

mod acyclic;
mod bellman_ford;
mod dijkstra;
mod tree;

pub use acyclic::AcyclicSp;
pub use bellman_ford::{BellmanFordSp, negative_cycle_in};
pub use dijkstra::{DijkstraAllPairsSp, DijkstraSp};
pub use tree::{Objective, OptimalityError, PathTree};

use crate::{error::Result, path::Path};

/// Query interface shared by the shortest-path engines.
pub trait ShortestPaths {
    /// Gets the computed path tree.  Fails if the engine found no well
    /// defined distances.
    fn tree(&self) -> Result<&PathTree>;

    /// Distance from the source to `v`.  Unreached vertices report the
    /// objective's sentinel (`+inf` for shortest paths, `-inf` for longest).
    fn dist_to(&self, v: usize) -> Result<f64> {
        self.tree()?.dist_to(v)
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.tree()?.has_path_to(v)
    }

    /// Edges of the best path from the source to `v`, or `None` if `v` is
    /// unreached.
    fn path_to(&self, v: usize) -> Result<Option<Path>> {
        self.tree()?.path_to(v)
    }
}
