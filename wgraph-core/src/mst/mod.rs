//! Minimum spanning tree (MST) construction.
//!
//! Kruskal's algorithm over the candidate pool harvested from a
//! [`crate::WeightedGraph`]. Every undirected edge reaches the pool once per
//! endpoint; the duplicate copy is discarded by the union-find cycle check
//! rather than filtered up front.

pub(crate) mod union_find;

use std::cmp::Ordering;

use tracing::debug;

use self::union_find::DisjointSet;

/// A single undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: f64,
}

impl MstEdge {
    /// Builds a canonical edge, ordering the endpoints so `source <= target`.
    pub(crate) const fn canonical(left: usize, right: usize, weight: f64) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl Eq for MstEdge {}

impl Ord for MstEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_weights(self.weight, other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

/// Orders weights ascending with every NaN, whatever its sign bit, after all
/// numbers, so a NaN edge is only taken when nothing else joins its
/// endpoints.
fn compare_weights(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (false, false) => left.total_cmp(&right),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

impl PartialOrd for MstEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the graph is connected the forest is a minimum spanning tree. For a
/// disconnected graph the total is the weight of the forest, not of a tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<MstEdge>,
    total_weight: f64,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    ///
    /// A graph with no vertices has no components and is not a tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Runs Kruskal's algorithm over `candidates`.
///
/// Candidates must reference vertices below `vertex_count`. Selection stops
/// after `vertex_count - 1` acceptances or once the pool is exhausted.
pub(crate) fn kruskal(
    vertex_count: usize,
    candidates: impl IntoIterator<Item = MstEdge>,
) -> MinimumSpanningForest {
    let mut pool: Vec<MstEdge> = candidates.into_iter().collect();
    pool.sort();

    let target_edges = vertex_count.saturating_sub(1);
    let mut union_find = DisjointSet::new(vertex_count);
    let mut edges = Vec::with_capacity(target_edges);
    let mut total_weight = 0.0;
    let mut rejected = 0_usize;

    for edge in &pool {
        if edges.len() >= target_edges {
            break;
        }
        if union_find.connected(edge.source, edge.target) {
            rejected = rejected.saturating_add(1);
            continue;
        }
        union_find.union(edge.source, edge.target);
        total_weight += edge.weight;
        edges.push(*edge);
    }

    debug!(
        candidates = pool.len(),
        accepted = edges.len(),
        rejected,
        total_weight,
        components = union_find.components(),
        "kruskal selection completed"
    );

    MinimumSpanningForest {
        edges,
        total_weight,
        component_count: union_find.components(),
    }
}
