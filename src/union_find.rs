//! Weighted quick-union over a fixed number of sites.
//!
//! `union` hangs the root of the smaller tree under the root of the larger
//! one, which keeps every tree's height at most `log2(n)`.  `find` does not
//! compress paths, so it takes `&self` and its cost is bounded by the tree
//! height rather than by an amortized argument.

use crate::error::{GraphError, Result};

/// Disjoint sets over the sites `0..n`.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the tree containing `p`.
    pub fn find(&self, p: usize) -> Result<usize> {
        self.validate(p)?;
        let mut p = p;
        while p != self.parent[p] {
            p = self.parent[p];
        }
        Ok(p)
    }

    /// Returns true if `p` and `q` are in the same component.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Number of sites in the component containing `p`.
    pub fn component_size(&self, p: usize) -> Result<usize> {
        Ok(self.size[self.find(p)?])
    }

    /// Merges the components containing `p` and `q`.  Returns false if they
    /// were already the same component.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(true)
    }

    fn validate(&self, p: usize) -> Result<()> {
        if p < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::SiteOutOfRange {
                site: p,
                len: self.parent.len(),
            })
        }
    }
}
