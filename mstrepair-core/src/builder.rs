//! Builder utilities for configuring [`Graph`] construction.
//!
//! Exposes the self-loop policy and a consuming builder that validates every
//! queued edge before handing back the graph.

use crate::{Result, graph::Graph};

/// Policy applied when an edge joins a vertex to itself.
///
/// # Examples
/// ```
/// use mstrepair_core::SelfLoopPolicy;
///
/// assert_eq!(SelfLoopPolicy::default(), SelfLoopPolicy::Accept);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelfLoopPolicy {
    /// Store self-loops. MST construction and repair never select them.
    #[default]
    Accept,
    /// Fail insertion with [`crate::GraphError::SelfLoop`].
    Reject,
}

/// Configures and validates [`Graph`] instances before construction.
///
/// # Examples
/// ```
/// use mstrepair_core::{GraphBuilder, GraphError, SelfLoopPolicy};
///
/// let graph = GraphBuilder::new(2)
///     .with_edge(0, 1, 4)
///     .build()
///     .expect("edge is in range");
/// assert_eq!(graph.edge_count(), 1);
///
/// let err = GraphBuilder::new(2)
///     .with_self_loop_policy(SelfLoopPolicy::Reject)
///     .with_edge(1, 1, 4)
///     .build()
///     .expect_err("self-loops are rejected");
/// assert_eq!(err, GraphError::SelfLoop { vertex: 1 });
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertex_count: usize,
    self_loop_policy: SelfLoopPolicy,
    edges: Vec<(usize, usize, i64)>,
}

impl GraphBuilder {
    /// Creates a builder for `vertex_count` vertices with default settings.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            self_loop_policy: SelfLoopPolicy::Accept,
            edges: Vec::new(),
        }
    }

    /// Overrides the self-loop policy.
    #[must_use]
    pub const fn with_self_loop_policy(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loop_policy = policy;
        self
    }

    /// Returns the configured self-loop policy.
    #[must_use]
    pub const fn self_loop_policy(&self) -> SelfLoopPolicy {
        self.self_loop_policy
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Queues an edge for insertion at build time.
    #[must_use]
    pub fn with_edge(mut self, source: usize, target: usize, weight: i64) -> Self {
        self.edges.push((source, target, weight));
        self
    }

    /// Queues every `(source, target, weight)` triple in order.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (usize, usize, i64)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Validates the configuration and returns a [`Graph`].
    ///
    /// Edges are inserted in the order they were queued.
    ///
    /// # Errors
    /// Returns the first [`crate::GraphError`] raised by
    /// [`Graph::add_edge`] for a queued edge.
    pub fn build(self) -> Result<Graph> {
        let mut graph = Graph::with_policy(self.vertex_count, self.self_loop_policy);
        for (source, target, weight) in self.edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }
}
