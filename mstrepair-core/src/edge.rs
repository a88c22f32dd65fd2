//! Weighted undirected edges.

use std::fmt;

/// A weighted undirected edge between two vertex indices.
///
/// Equality is structural: two edges compare equal when their endpoints (in
/// the stored order) and weights match. Parallel edges with identical
/// endpoints and weight are therefore interchangeable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
}

impl Edge {
    /// Creates an edge from `source` to `target` carrying `weight`.
    ///
    /// # Examples
    /// ```
    /// use mstrepair_core::Edge;
    ///
    /// let edge = Edge::new(1, 2, 7);
    /// assert_eq!(edge.endpoints(), (1, 2));
    /// assert_eq!(edge.to_string(), "1 - 2 (weight: 7)");
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (usize, usize) { (self.source, self.target) }

    /// Returns `true` when both endpoints refer to the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` does not
    /// touch this edge.
    ///
    /// # Examples
    /// ```
    /// use mstrepair_core::Edge;
    ///
    /// let edge = Edge::new(3, 5, 1);
    /// assert_eq!(edge.other_endpoint(3), Some(5));
    /// assert_eq!(edge.other_endpoint(5), Some(3));
    /// assert_eq!(edge.other_endpoint(4), None);
    /// ```
    #[must_use]
    pub const fn other_endpoint(&self, vertex: usize) -> Option<usize> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Returns `true` when the edge joins `left` and `right` in either order.
    #[must_use]
    pub const fn connects(&self, left: usize, right: usize) -> bool {
        (self.source == left && self.target == right)
            || (self.source == right && self.target == left)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (weight: {})",
            self.source, self.target, self.weight
        )
    }
}

/// Sums edge weights, saturating at the bounds of `i64`.
pub(crate) fn sum_weights<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> i64 {
    edges
        .into_iter()
        .fold(0_i64, |total, edge| total.saturating_add(edge.weight))
}
