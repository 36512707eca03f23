//! Random graph generators and assertions shared by the unit tests.

use quickcheck::{Arbitrary, Gen};

use crate::{
    edge::{DirectedEdge, Edge},
    graph::{EdgeWeightedDigraph, EdgeWeightedGraph},
};

const MAX_VERTICES: usize = 12;
const MAX_EDGES: usize = 40;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Picks a weight in `lo..=hi` quarters.  Quarters are exact in binary, so
/// sums computed in different orders compare equal.
fn quarter_weight(g: &mut Gen, lo: i32, hi: i32) -> f64 {
    let span = (hi - lo + 1) as u32;
    let steps = u32::arbitrary(g) % span;
    f64::from(lo + steps as i32) / 4.0
}

/// Picks `(num_vertices, endpoint pairs)` with some forced parallel edges and
/// self-loops.
fn arbitrary_links(g: &mut Gen) -> (usize, Vec<(usize, usize)>) {
    let num_vertices = usize::arbitrary(g) % MAX_VERTICES;
    let num_edges = usize::arbitrary(g) % MAX_EDGES;
    let num_extra_parallel_edges = usize::arbitrary(g) % 5;
    let num_extra_self_loops = usize::arbitrary(g) % 3;
    let mut links = Vec::new();
    if num_vertices == 0 {
        return (0, links);
    }
    for i in 0..num_edges {
        let v = usize::arbitrary(g) % num_vertices;
        let w = usize::arbitrary(g) % num_vertices;
        links.push((v, w));
        if i < num_extra_parallel_edges {
            links.push((v, w));
        }
        if i < num_extra_self_loops {
            links.push((v, v));
        }
    }
    (num_vertices, links)
}

fn digraph_with_weights(
    g: &mut Gen,
    links: &[(usize, usize)],
    num_vertices: usize,
    lo: i32,
    hi: i32,
) -> EdgeWeightedDigraph {
    let mut graph = EdgeWeightedDigraph::new(num_vertices);
    for &(v, w) in links {
        let edge = DirectedEdge::new(v, w, quarter_weight(g, lo, hi)).unwrap();
        graph.add_edge(edge).unwrap();
    }
    graph
}

/// A digraph with weights of either sign; may contain negative cycles.
#[derive(Clone, Debug)]
pub struct ArbDigraph(pub EdgeWeightedDigraph);

impl Arbitrary for ArbDigraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let (n, links) = arbitrary_links(g);
        ArbDigraph(digraph_with_weights(g, &links, n, -8, 40))
    }
}

/// A digraph whose weights are all non-negative.
#[derive(Clone, Debug)]
pub struct ArbNonNegativeDigraph(pub EdgeWeightedDigraph);

impl Arbitrary for ArbNonNegativeDigraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let (n, links) = arbitrary_links(g);
        ArbNonNegativeDigraph(digraph_with_weights(g, &links, n, 0, 40))
    }
}

/// An acyclic digraph with weights of either sign.  Every edge points from a
/// lower to a higher vertex id; self-loops are dropped.
#[derive(Clone, Debug)]
pub struct ArbDag(pub EdgeWeightedDigraph);

impl Arbitrary for ArbDag {
    fn arbitrary(g: &mut Gen) -> Self {
        let (n, links) = arbitrary_links(g);
        let forward: Vec<_> = links
            .into_iter()
            .filter(|(v, w)| v != w)
            .map(|(v, w)| (v.min(w), v.max(w)))
            .collect();
        ArbDag(digraph_with_weights(g, &forward, n, -40, 40))
    }
}

/// An undirected graph with weights of either sign, often disconnected.
#[derive(Clone, Debug)]
pub struct ArbEdgeWeightedGraph(pub EdgeWeightedGraph);

impl Arbitrary for ArbEdgeWeightedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let (n, links) = arbitrary_links(g);
        let mut graph = EdgeWeightedGraph::new(n);
        for (v, w) in links {
            let edge = Edge::new(v, w, quarter_weight(g, -20, 40)).unwrap();
            graph.add_edge(edge).unwrap();
        }
        ArbEdgeWeightedGraph(graph)
    }
}
