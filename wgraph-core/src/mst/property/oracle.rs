//! Prim oracle for MST property verification.
//!
//! A dense-matrix Prim's algorithm that shares no code with the Kruskal
//! implementation. It grows one tree per component, so on disconnected input
//! it yields the minimum spanning forest.

use super::model::EdgeModel;

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleMstResult {
    /// Total weight of the MST/forest.
    pub total_weight: f64,
    /// Number of edges in the MST/forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over `edges` with Prim's algorithm.
pub(super) fn prim_forest(vertex_count: usize, edges: &EdgeModel) -> OracleMstResult {
    let mut matrix = vec![vec![None::<f64>; vertex_count]; vertex_count];
    for (&(source, target), &weight) in edges {
        matrix[source][target] = Some(weight);
        matrix[target][source] = Some(weight);
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best: Vec<Option<f64>> = vec![None; vertex_count];
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for _ in 0..vertex_count {
        let next = closest_fringe_vertex(&in_tree, &best)
            .or_else(|| in_tree.iter().position(|&visited| !visited));
        let Some(vertex) = next else {
            break;
        };

        match best[vertex] {
            Some(weight) => {
                total_weight += weight;
                edge_count += 1;
            }
            None => component_count += 1,
        }
        in_tree[vertex] = true;

        for (other, weight) in matrix[vertex].iter().enumerate() {
            let Some(weight) = *weight else {
                continue;
            };
            if in_tree[other] {
                continue;
            }
            if best[other].is_none_or(|current| weight < current) {
                best[other] = Some(weight);
            }
        }
    }

    OracleMstResult {
        total_weight,
        edge_count,
        component_count,
    }
}

fn closest_fringe_vertex(in_tree: &[bool], best: &[Option<f64>]) -> Option<usize> {
    best.iter()
        .enumerate()
        .filter(|(vertex, _)| !in_tree[*vertex])
        .filter_map(|(vertex, weight)| weight.map(|w| (vertex, w)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(vertex, _)| vertex)
}
