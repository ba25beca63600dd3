//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use crate::WeightedGraph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edges and weights are produced, stressing different aspects
/// of the adjacency bookkeeping and Kruskal selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph with approximately `1.5n` to `2n` edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
    /// Random interleaving of inserts, weight updates and erasures.
    Churn,
}

/// A single mutation applied to a fixture graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum EdgeOp {
    /// Upsert the edge `(source, target)` with `weight`.
    Insert {
        source: usize,
        target: usize,
        weight: f64,
    },
    /// Erase the edge `(source, target)` if present.
    Erase { source: usize, target: usize },
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, the mutation script, and the weight
/// distribution used during generation, providing full context for failure
/// diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Mutations applied in order to an empty graph.
    pub ops: Vec<EdgeOp>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Replays the mutation script against a fresh graph.
    ///
    /// Generators only emit in-range vertex ids, so every call succeeds.
    pub(super) fn build(&self) -> Result<WeightedGraph, crate::GraphError> {
        let mut graph = WeightedGraph::new(self.vertex_count);
        for op in &self.ops {
            match *op {
                EdgeOp::Insert {
                    source,
                    target,
                    weight,
                } => {
                    graph.insert_edge(source, target, weight)?;
                }
                EdgeOp::Erase { source, target } => {
                    graph.erase_edge(source, target)?;
                }
            }
        }
        Ok(graph)
    }
}
