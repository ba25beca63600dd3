//! Seeded synthetic graphs for benchmarks.
//!
//! Every graph contains a random spanning tree, so it is connected, plus a
//! configurable number of random extra edges. Extra edges may repeat a pair,
//! which exercises the weight-update path when the list is replayed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wgraph_core::WeightedGraph;

use crate::error::BenchSetupError;
use crate::params::GraphBenchParams;

const MIN_WEIGHT: f64 = 0.1;
const MAX_WEIGHT: f64 = 100.0;

/// An edge as `(source, target, weight)`.
pub type EdgeTriple = (usize, usize, f64);

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Vertex count and edge density.
    pub params: GraphBenchParams,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Generates the edge list for `config`.
///
/// # Errors
/// Returns [`BenchSetupError::TooFewVertices`] when fewer than two vertices
/// are requested.
///
/// # Examples
/// ```
/// use wgraph_benches::params::GraphBenchParams;
/// use wgraph_benches::synthetic::{SyntheticGraphConfig, edge_list};
///
/// let config = SyntheticGraphConfig {
///     params: GraphBenchParams { vertex_count: 10, extra_edges_per_vertex: 2 },
///     seed: 7,
/// };
/// let edges = edge_list(&config)?;
/// assert!(edges.len() >= 9);
/// # Ok::<(), wgraph_benches::error::BenchSetupError>(())
/// ```
pub fn edge_list(config: &SyntheticGraphConfig) -> Result<Vec<EdgeTriple>, BenchSetupError> {
    let GraphBenchParams {
        vertex_count,
        extra_edges_per_vertex,
    } = config.params;
    if vertex_count < 2 {
        return Err(BenchSetupError::TooFewVertices { vertex_count });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let extra_count = vertex_count.saturating_mul(extra_edges_per_vertex);
    let mut edges = Vec::with_capacity(vertex_count.saturating_add(extra_count));

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push((parent, vertex, rng.gen_range(MIN_WEIGHT..MAX_WEIGHT)));
    }
    for _ in 0..extra_count {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            edges.push((source, target, rng.gen_range(MIN_WEIGHT..MAX_WEIGHT)));
        }
    }
    Ok(edges)
}

/// Builds a graph with `vertex_count` vertices from `edges`.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] if an edge references a vertex outside
/// the graph.
pub fn build_graph(
    vertex_count: usize,
    edges: &[EdgeTriple],
) -> Result<WeightedGraph, BenchSetupError> {
    let mut graph = WeightedGraph::new(vertex_count);
    for &(source, target, weight) in edges {
        graph.insert_edge(source, target, weight)?;
    }
    Ok(graph)
}

/// Generates and builds the graph described by `config`.
///
/// # Errors
/// Propagates failures from [`edge_list`] and [`build_graph`].
pub fn generate(config: &SyntheticGraphConfig) -> Result<WeightedGraph, BenchSetupError> {
    let edges = edge_list(config)?;
    build_graph(config.params.vertex_count, &edges)
}
