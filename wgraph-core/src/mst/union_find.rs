//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! The structure is created fresh for every spanning-forest computation with
//! each vertex in its own singleton set, and dropped when the computation
//! returns. `find` applies full path compression and `union` attaches the
//! lower-rank root beneath the higher-rank one.

use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of disjoint sets currently tracked.
    pub(crate) const fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of `node`, re-pointing every visited node at it.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a root. On a rank tie the root
    /// of `left` becomes the parent.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }

    pub(crate) fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    match left_rank.cmp(&right_rank) {
        Ordering::Less => (right_root, left_root),
        Ordering::Greater | Ordering::Equal => (left_root, right_root),
    }
}
