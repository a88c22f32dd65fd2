//! Structural invariants of the forests produced by Kruskal and Prim.
//!
//! - **Acyclicity**: no selected edge closes a cycle.
//! - **Edge count**: Kruskal selects `V - C` edges for `C` input components.
//! - **Prim reach**: Prim spans exactly the component of vertex `0`.
//! - **Self-loops**: never selected.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, SpanningForest};

use super::helpers::first_cycle_edge;
use super::oracle::component_labels;
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let labels = component_labels(fixture.vertex_count, graph.edges());
    let input_components = count_distinct(&labels);

    let kruskal = graph.kruskal_mst();
    validate_forest("kruskal", fixture, &kruskal)?;
    if kruskal.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "kruskal left {} components, input has {input_components} ({})",
            kruskal.component_count(),
            fixture.describe(),
        )));
    }

    let prim = graph.prim_mst();
    validate_forest("prim", fixture, &prim)?;
    let reach = labels.iter().filter(|&&label| label == 0).count();
    if prim.len() != reach - 1 {
        return Err(TestCaseError::fail(format!(
            "prim selected {} edges, component of vertex 0 has {reach} vertices ({})",
            prim.len(),
            fixture.describe(),
        )));
    }

    let spans = input_components == 1;
    if kruskal.is_spanning_tree() != spans || prim.is_spanning_tree() != spans {
        return Err(TestCaseError::fail(format!(
            "spanning-tree verdicts disagree with connectivity={spans} ({})",
            fixture.describe(),
        )));
    }

    Ok(())
}

fn validate_forest(
    algorithm: &str,
    fixture: &GraphFixture,
    forest: &SpanningForest,
) -> TestCaseResult {
    if let Some(index) = first_cycle_edge(fixture.vertex_count, forest.edges()) {
        return Err(TestCaseError::fail(format!(
            "{algorithm}: edge {index} closes a cycle ({})",
            fixture.describe(),
        )));
    }
    if forest.edges().iter().any(Edge::is_self_loop) {
        return Err(TestCaseError::fail(format!(
            "{algorithm}: selected a self-loop ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

fn count_distinct(labels: &[usize]) -> usize {
    labels
        .iter()
        .enumerate()
        .filter(|&(vertex, &label)| vertex == label)
        .count()
}
