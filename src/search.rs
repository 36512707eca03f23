use std::collections::VecDeque;

use bitvec::vec::BitVec;

use crate::{
    error::{GraphError, Result},
    graph::{Adjacency, Neighbor},
};

/// Breadth-first traversal yielding each reachable vertex once, nearest
/// first.
pub struct BfsIterator<'g, G: Adjacency> {
    graph: &'g G,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Adjacency,
{
    pub fn new(graph: &'g G, start: Vec<usize>) -> Result<Self> {
        for &v in &start {
            graph.validate_vertex(v)?;
        }
        Ok(Self {
            graph,
            visited: BitVec::repeat(false, graph.num_vertices()),
            queue: start.into(),
        })
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Adjacency,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.queue.pop_front() {
            if self.visited[v] {
                continue;
            }
            self.visited.set(v, true);
            for arc in self.graph.arcs(v) {
                let w = arc.neighbor(v);
                if !self.visited[w] {
                    self.queue.push_back(w);
                }
            }
            return Some(v);
        }
        None
    }
}

/// Depth-first traversal yielding vertices in preorder.  Neighbours are
/// explored in adjacency-list order.
pub struct DfsIterator<'g, G: Adjacency> {
    graph: &'g G,
    visited: BitVec,
    stack: Vec<usize>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Adjacency,
{
    pub fn new(graph: &'g G, start: Vec<usize>) -> Result<Self> {
        for &v in &start {
            graph.validate_vertex(v)?;
        }
        let mut stack = start;
        stack.reverse();
        Ok(Self {
            graph,
            visited: BitVec::repeat(false, graph.num_vertices()),
            stack,
        })
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Adjacency,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.stack.pop() {
            if self.visited[v] {
                continue;
            }
            self.visited.set(v, true);
            let successors = self.graph.arcs(v).iter().rev().map(|arc| arc.neighbor(v));
            self.stack.extend(successors.filter(|&w| !self.visited[w]));
            return Some(v);
        }
        None
    }
}

/// Shortest paths by edge count from one or more source vertices.
#[derive(Clone, Debug)]
pub struct BreadthFirstPaths {
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    pub fn new<G: Adjacency>(graph: &G, source: usize) -> Result<Self> {
        Self::multi(graph, [source])
    }

    /// Computes distances to the nearest of several sources.
    pub fn multi<G: Adjacency>(
        graph: &G,
        sources: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let n = graph.num_vertices();
        let mut edge_to = vec![None; n];
        let mut dist_to = vec![None; n];
        let mut queue = VecDeque::new();
        for s in sources {
            graph.validate_vertex(s)?;
            if dist_to[s].is_none() {
                dist_to[s] = Some(0);
                queue.push_back(s);
            }
        }
        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            for arc in graph.arcs(v) {
                let w = arc.neighbor(v);
                if dist_to[w].is_none() {
                    edge_to[w] = Some(v);
                    dist_to[w] = Some(next);
                    queue.push_back(w);
                }
            }
        }
        Ok(Self { edge_to, dist_to })
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

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate(v)?;
        Ok(self.dist_to[v].is_some())
    }

    /// Number of edges on a shortest path to `v`, or `None` if unreachable.
    pub fn dist_to(&self, v: usize) -> Result<Option<usize>> {
        self.validate(v)?;
        Ok(self.dist_to[v])
    }

    /// Vertices on a shortest path from the nearest source to `v`, source
    /// first.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        let mut path = vec![v];
        let mut x = v;
        while let Some(prev) = self.edge_to[x] {
            path.push(prev);
            x = prev;
        }
        path.reverse();
        Ok(Some(path))
    }
}

/// The set of vertices reachable from one or more sources.
#[derive(Clone, Debug)]
pub struct DepthFirstSearch {
    marked: BitVec,
    count: usize,
}

impl DepthFirstSearch {
    pub fn new<G: Adjacency>(graph: &G, source: usize) -> Result<Self> {
        Self::multi(graph, [source])
    }

    pub fn multi<G: Adjacency>(
        graph: &G,
        sources: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut marked: BitVec = BitVec::repeat(false, graph.num_vertices());
        let mut count = 0;
        for v in graph.dfs_multi(sources.into_iter().collect())? {
            marked.set(v, true);
            count += 1;
        }
        Ok(Self { marked, count })
    }

    /// Returns true if `v` is reachable from a source.
    pub fn marked(&self, v: usize) -> Result<bool> {
        if v >= self.marked.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.marked.len(),
            });
        }
        Ok(self.marked[v])
    }

    /// Number of reachable vertices, sources included.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Paths from a single source along the tree of a depth-first search.
/// These are not in general shortest paths.
#[derive(Clone, Debug)]
pub struct DepthFirstPaths {
    source: usize,
    edge_to: Vec<Option<usize>>,
    marked: BitVec,
}

impl DepthFirstPaths {
    pub fn new<G: Adjacency>(graph: &G, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;
        let n = graph.num_vertices();
        let mut edge_to = vec![None; n];
        let mut marked: BitVec = BitVec::repeat(false, n);
        marked.set(source, true);
        let mut stack = vec![(source, 0)];
        while let Some((v, next)) = stack.pop() {
            let Some(arc) = graph.arcs(v).get(next) else {
                continue;
            };
            stack.push((v, next + 1));
            let w = arc.neighbor(v);
            if !marked[w] {
                marked.set(w, true);
                edge_to[w] = Some(v);
                stack.push((w, 0));
            }
        }
        Ok(Self {
            source,
            edge_to,
            marked,
        })
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        if v >= self.marked.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.marked.len(),
            });
        }
        Ok(self.marked[v])
    }

    /// Vertices on the search-tree path from the source to `v`, source
    /// first.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        let mut path = vec![v];
        let mut x = v;
        while x != self.source {
            let Some(prev) = self.edge_to[x] else {
                break;
            };
            path.push(prev);
            x = prev;
        }
        path.reverse();
        Ok(Some(path))
    }
}
