//! Weighted edge values stored in the adjacency lists of
//! [`EdgeWeightedGraph`](crate::graph::EdgeWeightedGraph) and
//! [`EdgeWeightedDigraph`](crate::graph::EdgeWeightedDigraph).
//!
//! Both edge types are small immutable `Copy` values.  Equality compares all
//! three fields; ordering by weight alone is provided separately through
//! [`ByWeight`], so that heaps can order edges without making two distinct
//! edges of equal weight compare as equal.

use std::{cmp::Ordering, fmt};

use crate::error::{GraphError, Result};

/// Implemented by edge values that carry a weight.
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// An undirected weighted edge `v-w`.  Neither endpoint is privileged; use
/// [`Edge::either`] and [`Edge::other`] to walk it from a known endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `v` and `w`.  Fails if `weight` is NaN.
    pub fn new(v: usize, w: usize, weight: f64) -> Result<Self> {
        if weight.is_nan() {
            return Err(GraphError::NanWeight);
        }
        Ok(Self { v, w, weight })
    }

    /// Returns one of the endpoints.
    pub fn either(&self) -> usize {
        self.v
    }

    /// Given one endpoint, returns the other one.  For a self-loop both
    /// endpoints are the same vertex.
    ///
    /// Panics if `vertex` is not an endpoint of this edge.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else if vertex == self.w {
            self.v
        } else {
            panic!("Illegal endpoint: {vertex} is not an endpoint of {self}");
        }
    }

    /// Returns both endpoints as `(either, other)`.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Compares two edges by weight only.
    pub fn compare_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl Weighted for Edge {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// A directed weighted edge `from->to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    /// Creates an edge from `from` to `to`.  Fails if `weight` is NaN.
    pub fn new(from: usize, to: usize, weight: f64) -> Result<Self> {
        if weight.is_nan() {
            return Err(GraphError::NanWeight);
        }
        Ok(Self { from, to, weight })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl Weighted for DirectedEdge {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:5.2}", self.from, self.to, self.weight)
    }
}

/// Orders a weighted value by its weight alone, using the IEEE total order.
///
/// Wrap edges in `Reverse(ByWeight(e))` to get a min-heap out of
/// [`std::collections::BinaryHeap`].
#[derive(Clone, Copy, Debug)]
pub struct ByWeight<E>(pub E);

impl<E: Weighted> PartialEq for ByWeight<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E: Weighted> Eq for ByWeight<E> {}

impl<E: Weighted> PartialOrd for ByWeight<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Weighted> Ord for ByWeight<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.weight().total_cmp(&other.0.weight())
    }
}

#[cfg(test)]
mod tests {
    use std::{cmp::Reverse, collections::BinaryHeap};

    use super::*;

    #[test]
    fn test_nan_weight_is_rejected() {
        assert_eq!(Edge::new(0, 1, f64::NAN), Err(GraphError::NanWeight));
        assert_eq!(DirectedEdge::new(0, 1, f64::NAN), Err(GraphError::NanWeight));
    }

    #[test]
    fn test_either_and_other() {
        let e = Edge::new(12, 23, 2.75).unwrap();
        let v = e.either();
        assert_eq!(v, 12);
        assert_eq!(e.other(v), 23);
        assert_eq!(e.other(23), 12);
    }

    #[test]
    fn test_self_loop_other() {
        let e = Edge::new(4, 4, 1.0).unwrap();
        assert_eq!(e.other(4), 4);
    }

    #[test]
    #[should_panic(expected = "Illegal endpoint")]
    fn test_other_panics_on_non_endpoint() {
        let e = Edge::new(1, 2, 0.5).unwrap();
        e.other(3);
    }

    #[test]
    fn test_display() {
        let e = Edge::new(12, 23, 2.75).unwrap();
        assert_eq!(e.to_string(), "12-23 2.75000");
        let d = DirectedEdge::new(0, 7, 0.16).unwrap();
        assert_eq!(d.to_string(), "0->7  0.16");
    }

    #[test]
    fn test_reversed() {
        let d = DirectedEdge::new(2, 5, -1.5).unwrap();
        let r = d.reversed();
        assert_eq!((r.from(), r.to(), r.weight()), (5, 2, -1.5));
    }

    #[test]
    fn test_by_weight_min_heap() {
        let mut heap = BinaryHeap::new();
        for (v, w, weight) in [(0, 1, 0.5), (1, 2, 0.1), (2, 3, 0.3)] {
            heap.push(Reverse(ByWeight(Edge::new(v, w, weight).unwrap())));
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|Reverse(ByWeight(e))| e.weight())
            .collect();
        assert_eq!(order, vec![0.1, 0.3, 0.5]);
    }

    #[test]
    fn test_equal_weights_do_not_make_equal_edges() {
        let a = Edge::new(0, 1, 0.5).unwrap();
        let b = Edge::new(2, 3, 0.5).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.compare_weight(&b), Ordering::Equal);
    }
}
