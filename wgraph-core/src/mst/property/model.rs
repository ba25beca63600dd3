//! Property 1: adjacency lists agree with an ordered-map model.
//!
//! Replays each fixture's mutation script against both the graph and a
//! `BTreeMap` keyed by canonical vertex pair, then verifies:
//!
//! - **Edge set**: canonical edges and weights match the model exactly.
//! - **Edge count**: `edge_count()` equals the model size.
//! - **Symmetry**: `edge_weight(u, v) == edge_weight(v, u)` for all pairs.
//! - **Degree**: each vertex's degree equals its model incidence.

use std::collections::BTreeMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::types::{EdgeOp, GraphFixture};

/// Canonical `(min, max)` pair to weight.
pub(super) type EdgeModel = BTreeMap<(usize, usize), f64>;

/// Applies the fixture's script to an ordered map with upsert semantics.
pub(super) fn build_model(fixture: &GraphFixture) -> EdgeModel {
    let mut model = EdgeModel::new();
    for op in &fixture.ops {
        match *op {
            EdgeOp::Insert {
                source,
                target,
                weight,
            } if source != target => {
                model.insert(canonical(source, target), weight);
            }
            EdgeOp::Insert { .. } => {}
            EdgeOp::Erase { source, target } => {
                model.remove(&canonical(source, target));
            }
        }
    }
    model
}

/// Runs the model agreement property for the given fixture.
pub(super) fn run_model_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture
        .build()
        .map_err(|e| TestCaseError::fail(format!("script replay failed: {e}")))?;
    let model = build_model(fixture);

    let actual: EdgeModel = graph
        .edges()
        .map(|edge| ((edge.source(), edge.target()), edge.weight()))
        .collect();
    if actual != model {
        return Err(TestCaseError::fail(format!(
            "edge set mismatch (distribution={:?}): graph={actual:?}, model={model:?}",
            fixture.distribution,
        )));
    }

    if graph.edge_count() != model.len() {
        return Err(TestCaseError::fail(format!(
            "edge_count {} but model holds {} edges",
            graph.edge_count(),
            model.len(),
        )));
    }

    let mut degrees = vec![0_usize; fixture.vertex_count];
    for &(source, target) in model.keys() {
        degrees[source] += 1;
        degrees[target] += 1;
    }
    for (vertex, &expected) in degrees.iter().enumerate() {
        let degree = graph
            .degree(vertex)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        if degree != expected {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex}: degree {degree}, model expects {expected}",
            )));
        }
    }

    for source in 0..fixture.vertex_count {
        for target in 0..fixture.vertex_count {
            let forward = graph.edge_weight(source, target);
            let backward = graph.edge_weight(target, source);
            if forward != backward {
                return Err(TestCaseError::fail(format!(
                    "asymmetric edge {source}-{target}: {forward:?} vs {backward:?}",
                )));
            }
        }
    }

    Ok(())
}

fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
