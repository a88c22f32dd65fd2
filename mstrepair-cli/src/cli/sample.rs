//! Built-in graph used by the `demo` command.

use mstrepair_core::{Graph, GraphError, SelfLoopPolicy};

/// Number of vertices in the demo graph.
pub const SAMPLE_VERTEX_COUNT: usize = 6;

/// Edges of the demo graph as `(source, target, weight)` in insertion order.
pub const SAMPLE_EDGES: [(usize, usize, i64); 9] = [
    (0, 1, 4),
    (0, 2, 3),
    (1, 2, 1),
    (1, 3, 2),
    (2, 3, 4),
    (2, 4, 5),
    (3, 4, 7),
    (3, 5, 3),
    (4, 5, 2),
];

/// Builds the six-vertex demo graph under `policy`.
///
/// # Errors
/// Never fails for the built-in edges; the [`GraphError`] is propagated from
/// the builder.
pub fn sample_graph(policy: SelfLoopPolicy) -> Result<Graph, GraphError> {
    Graph::builder(SAMPLE_VERTEX_COUNT)
        .with_self_loop_policy(policy)
        .with_edges(SAMPLE_EDGES)
        .build()
}
