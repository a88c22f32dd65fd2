//! Cross-algorithm and oracle equivalence.
//!
//! Kruskal must match the naive oracle's total weight on every input, and
//! Prim must match Kruskal whenever the input is connected.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::oracle::minimum_forest;
use super::types::GraphFixture;

/// Runs the weight equivalence property for the given fixture.
pub(super) fn run_weight_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = minimum_forest(fixture.vertex_count, graph.edges(), |_| true);

    let kruskal = graph.kruskal_mst();
    if kruskal.total_weight() != oracle.total_weight || kruskal.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "kruskal weight {} over {} edges, oracle {} over {} ({})",
            kruskal.total_weight(),
            kruskal.len(),
            oracle.total_weight,
            oracle.edge_count,
            fixture.describe(),
        )));
    }

    if oracle.component_count == 1 {
        let prim = graph.prim_mst();
        if prim.total_weight() != kruskal.total_weight() {
            return Err(TestCaseError::fail(format!(
                "prim weight {} differs from kruskal weight {} ({})",
                prim.total_weight(),
                kruskal.total_weight(),
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
