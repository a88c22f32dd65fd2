//! Union-find (disjoint set union) used for cycle detection during Kruskal.
//!
//! Unions are by rank and lookups compress the traversed path in two passes,
//! so deep chains never recurse.

/// Disjoint-set forest over the vertex indices `[0, len)`.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    ///
    /// # Examples
    /// ```
    /// use mstrepair_core::UnionFind;
    ///
    /// let mut sets = UnionFind::new(3);
    /// assert!(sets.union(0, 1));
    /// assert!(!sets.union(1, 0));
    /// assert_eq!(sets.components(), 2);
    /// ```
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set, pointing every node on the
    /// path directly at it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
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

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root. On a tie
    /// the root of `left` becomes the parent and its rank grows by one.
    /// Returns `false` when both were already in the same set.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }
}
