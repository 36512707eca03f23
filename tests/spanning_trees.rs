mod common;

use common::{assert_close, hundredths, load};
use graphalgs::{
    mst::{KruskalMst, LazyPrimMst, PrimMst, SpanningForestError, check_spanning_forest},
    prelude::*,
};
use pathfinding::prelude::kruskal;

fn sorted_endpoints(forest: &impl SpanningForest) -> Vec<(usize, usize)> {
    let mut endpoints: Vec<_> = forest
        .edges()
        .iter()
        .map(|e| {
            let (v, w) = e.endpoints();
            (v.min(w), v.max(w))
        })
        .collect();
    endpoints.sort();
    endpoints
}

const TINY_EWG_MST: [(usize, usize); 7] = [(0, 2), (0, 7), (1, 7), (2, 3), (2, 6), (4, 5), (5, 7)];

#[test]
fn test_lazy_prim_tiny_ewg() {
    let graph: EdgeWeightedGraph = load("tinyEWG.txt");
    let mst = LazyPrimMst::new(&graph).unwrap();
    assert_close(mst.weight(), 1.81);
    assert_eq!(sorted_endpoints(&mst), TINY_EWG_MST);
    check_spanning_forest(&graph, &mst).unwrap();
}

#[test]
fn test_prim_tiny_ewg() {
    let graph: EdgeWeightedGraph = load("tinyEWG.txt");
    let mst = PrimMst::new(&graph).unwrap();
    assert_close(mst.weight(), 1.81);
    assert_eq!(sorted_endpoints(&mst), TINY_EWG_MST);
    check_spanning_forest(&graph, &mst).unwrap();
}

#[test]
fn test_kruskal_tiny_ewg() {
    let graph: EdgeWeightedGraph = load("tinyEWG.txt");
    let mst = KruskalMst::new(&graph).unwrap();
    assert_close(mst.weight(), 1.81);
    assert_eq!(sorted_endpoints(&mst), TINY_EWG_MST);
    let weights: Vec<_> = mst.edges().iter().map(Edge::weight).collect();
    assert!(weights.windows(2).all(|pair| pair[0] <= pair[1]));
    check_spanning_forest(&graph, &mst).unwrap();
}

#[test]
fn test_weight_agrees_with_pathfinding() {
    let graph: EdgeWeightedGraph = load("tinyEWG.txt");
    let links: Vec<_> = graph
        .edges()
        .into_iter()
        .map(|e| {
            let (v, w) = e.endpoints();
            (v, w, hundredths(e.weight()))
        })
        .collect();
    let expected: i64 = kruskal(&links).map(|(_, _, weight)| weight).sum();
    assert_eq!(expected, 181);
    assert_eq!(hundredths(KruskalMst::new(&graph).unwrap().weight()), expected);
}

#[test]
fn test_disconnected_graph_gives_forest() {
    let tiny: EdgeWeightedGraph = load("tinyEWG.txt");
    let mut graph = EdgeWeightedGraph::new(tiny.num_vertices() + 3);
    for edge in tiny.edges() {
        graph.add_edge(edge).unwrap();
    }
    graph.add_edge(Edge::new(8, 9, 0.5).unwrap()).unwrap();
    graph.add_edge(Edge::new(9, 8, 0.25).unwrap()).unwrap();

    let forests: [Box<dyn SpanningForest>; 3] = [
        Box::new(LazyPrimMst::new(&graph).unwrap()),
        Box::new(PrimMst::new(&graph).unwrap()),
        Box::new(KruskalMst::new(&graph).unwrap()),
    ];
    for forest in &forests {
        // V - (number of components) = 11 - 3
        assert_eq!(forest.edges().len(), 8);
        assert_close(forest.weight(), 1.81 + 0.25);
    }
}

#[test]
fn test_check_rejects_non_minimal_forest() {
    struct Fixed(Vec<Edge>);

    impl SpanningForest for Fixed {
        fn edges(&self) -> &[Edge] {
            &self.0
        }
    }

    let graph: EdgeWeightedGraph = load("tinyEWG.txt");
    let mut edges = KruskalMst::new(&graph).unwrap().edges().to_vec();
    // Swap 0-7 (0.16) for 0-4 (0.38), which reconnects the same cut.
    edges.retain(|e| e.endpoints() != (0, 7) && e.endpoints() != (7, 0));
    edges.push(Edge::new(0, 4, 0.38).unwrap());
    assert!(matches!(
        check_spanning_forest(&graph, &Fixed(edges)),
        Err(SpanningForestError::CutViolation { .. })
    ));
}
