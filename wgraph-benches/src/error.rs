//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` so benchmark bodies only
//! panic once, at the Criterion boundary.

use wgraph_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building the synthetic graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A synthetic graph needs at least two vertices to carry edges.
    #[error("synthetic graphs need at least 2 vertices, got {vertex_count}")]
    TooFewVertices {
        /// Requested vertex count.
        vertex_count: usize,
    },
}
