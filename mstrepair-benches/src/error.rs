//! Benchmark setup error type.

use mstrepair_core::GraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated graph rejected an edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The upper weight bound was below one.
    #[error("maximum edge weight must be at least 1, got {value}")]
    InvalidMaxWeight {
        /// The rejected bound.
        value: i64,
    },
    /// The spanning tree had no edge to remove.
    #[error("spanning tree over {vertex_count} vertices has no edges")]
    EmptyTree {
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}
