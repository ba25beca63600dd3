//! Shared test utilities for `wgraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use wgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::WeightedGraph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `WGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(source, target, weight)` triples, panicking on
/// invalid input.
pub(crate) fn graph_from(vertex_count: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(vertex_count);
    for &(source, target, weight) in edges {
        graph
            .insert_edge(source, target, weight)
            .expect("fixture edges must reference valid vertices");
    }
    graph
}

/// Asserts two weights agree within floating-point accumulation error.
#[track_caller]
pub(crate) fn assert_weight_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "weight {actual} differs from expected {expected}",
    );
}
