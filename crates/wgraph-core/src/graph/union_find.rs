//! Disjoint-set forest over dense vertex indices.
//!
//! Plain parent links: no rank/size heuristic and no path compression, so
//! `find` never needs `&mut self`. Roots satisfy `parent[x] == x`.

use crate::graph::types::Vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<Vertex>,
}

impl UnionFind {
    /// Every vertex in `0..n` starts as its own singleton component
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s component.
    ///
    /// # Panics
    /// If `x` is out of range.
    pub fn find(&self, x: Vertex) -> Vertex {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Merge the components of `x` and `y`. `y`'s root is attached under
    /// `x`'s root. Returns false if they were already one component.
    pub fn union(&mut self, x: Vertex, y: Vertex) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_y] = root_x;
        true
    }

    pub fn connected(&self, x: Vertex, y: Vertex) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(x, &p)| x == p)
            .count()
    }
}
