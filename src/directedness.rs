/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// to provide compile-time specialization of graph behavior: algorithms that
/// only make sense for one flavour are exposed through
/// [`GraphDirected`](crate::graph::GraphDirected) and
/// [`GraphUndirected`](crate::graph::GraphUndirected), which are implemented
/// automatically based on this marker.
pub trait Directedness: Sized {
    fn is_directed() -> bool;
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }
}
