// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Disjoint-set forest used by Kruskal's algorithm

/// Union-find over node positions with path compression and union by rank
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Every element in its own set
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing `node`
    pub fn find(&mut self, mut node: usize) -> usize {
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

    /// Merge the sets containing `left` and `right`
    ///
    /// Returns `false` when they were already in the same set. On equal rank
    /// the left root becomes the parent.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }
        let (left_rank, right_rank) = (self.rank[left], self.rank[right]);
        if left_rank > right_rank {
            self.parent[right] = left;
        } else if left_rank < right_rank {
            self.parent[left] = right;
        } else {
            self.parent[right] = left;
            self.rank[left] = left_rank.saturating_add(1);
        }
        true
    }

    /// Number of disjoint sets
    pub fn count(&mut self) -> usize {
        (0..self.parent.len()).filter(|&i| self.find(i) == i).count()
    }
}
