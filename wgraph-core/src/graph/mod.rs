//! Undirected weighted graph stored as per-vertex adjacency lists.
//!
//! Each undirected edge is mirrored into the incident list of both endpoints.
//! Every mutation goes through `&mut self` and updates both lists before it
//! returns, so the two copies of an edge always agree on weight.

use tracing::{Span, field, instrument, trace};

use crate::error::{GraphError, Result};
use crate::mst::{self, MinimumSpanningForest, MstEdge};

/// An entry in a vertex's incident-edge list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRecord {
    neighbour: usize,
    weight: f64,
}

impl EdgeRecord {
    /// Returns the vertex at the other end of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn neighbour(&self) -> usize { self.neighbour }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// Outcome of [`WeightedGraph::insert_edge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeInsertion {
    /// A new edge was added to both endpoints.
    Inserted,
    /// The edge already existed; its weight was overwritten on both sides.
    Updated,
    /// Source and target were the same vertex; the graph is unchanged.
    SelfLoopRejected,
}

impl EdgeInsertion {
    /// Returns `true` unless the insertion was rejected as a self-loop.
    #[must_use]
    pub const fn succeeded(self) -> bool {
        !matches!(self, Self::SelfLoopRejected)
    }
}

/// Outcome of [`WeightedGraph::erase_edge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeRemoval {
    /// The edge existed and was removed from both endpoints.
    Removed,
    /// No edge joined the two vertices.
    Absent,
}

impl EdgeRemoval {
    /// Erasure is idempotent; both outcomes count as success.
    #[must_use]
    pub const fn succeeded(self) -> bool {
        true
    }
}

/// An undirected weighted graph over a fixed vertex set `0..vertex_count`.
///
/// # Examples
/// ```
/// use wgraph_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.insert_edge(0, 1, 1.5)?;
/// graph.insert_edge(1, 2, 2.5)?;
/// graph.insert_edge(0, 2, 9.0)?;
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.minimum_spanning_tree(), 4.0);
/// # Ok::<(), wgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<EdgeRecord>>,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the number of vertices fixed at construction.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of this graph.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.incident(vertex)?.len())
    }

    /// Returns the number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        entries / 2
    }

    /// Returns the incident-edge records of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of this graph.
    pub fn neighbours(&self, vertex: usize) -> Result<&[EdgeRecord]> {
        self.incident(vertex).map(Vec::as_slice)
    }

    /// Returns the weight of the edge joining `source` and `target`, if any.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either id is not a
    /// vertex of this graph.
    pub fn edge_weight(&self, source: usize, target: usize) -> Result<Option<f64>> {
        self.check_vertex(target)?;
        Ok(self
            .incident(source)?
            .iter()
            .find(|record| record.neighbour == target)
            .map(EdgeRecord::weight))
    }

    /// Iterates over every undirected edge once, in canonical
    /// `source < target` form, ordered by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = MstEdge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, records)| {
                records
                    .iter()
                    .filter(move |record| source < record.neighbour)
                    .map(move |record| MstEdge::canonical(source, record.neighbour, record.weight))
            })
    }

    /// Inserts an edge or overwrites the weight of an existing one.
    ///
    /// Self-loops are rejected without modifying the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either id is not a
    /// vertex of this graph. The graph is left unchanged.
    pub fn insert_edge(
        &mut self,
        source: usize,
        target: usize,
        weight: f64,
    ) -> Result<EdgeInsertion> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if source == target {
            trace!(vertex = source, "self-loop rejected");
            return Ok(EdgeInsertion::SelfLoopRejected);
        }

        let outcome = if self.set_weight(source, target, weight) {
            self.set_weight(target, source, weight);
            EdgeInsertion::Updated
        } else {
            self.push_record(source, target, weight);
            self.push_record(target, source, weight);
            EdgeInsertion::Inserted
        };
        trace!(source, target, weight, outcome = ?outcome, "edge upserted");
        Ok(outcome)
    }

    /// Removes the edge joining `source` and `target` if present.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either id is not a
    /// vertex of this graph. The graph is left unchanged.
    pub fn erase_edge(&mut self, source: usize, target: usize) -> Result<EdgeRemoval> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let forward = self.remove_record(source, target);
        let backward = self.remove_record(target, source);
        let outcome = if forward || backward {
            EdgeRemoval::Removed
        } else {
            EdgeRemoval::Absent
        };
        trace!(source, target, outcome = ?outcome, "edge erased");
        Ok(outcome)
    }

    /// Removes every edge. The vertex count is unchanged.
    pub fn clear_edges(&mut self) {
        for records in &mut self.adjacency {
            records.clear();
        }
    }

    /// Returns the total weight of a minimum spanning tree.
    ///
    /// For a disconnected graph this is the weight of the minimum spanning
    /// forest; use [`Self::minimum_spanning_forest`] to detect that case.
    #[must_use]
    pub fn minimum_spanning_tree(&self) -> f64 {
        self.minimum_spanning_forest().total_weight()
    }

    /// Computes a minimum spanning forest with Kruskal's algorithm.
    ///
    /// The graph itself is not modified.
    #[must_use]
    #[instrument(
        name = "graph.minimum_spanning_forest",
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = field::Empty),
    )]
    pub fn minimum_spanning_forest(&self) -> MinimumSpanningForest {
        Span::current().record("edge_count", self.edge_count());
        let candidates = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, records)| {
                records
                    .iter()
                    .map(move |record| MstEdge::canonical(source, record.neighbour, record.weight))
            });
        mst::kruskal(self.vertex_count(), candidates)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        self.incident(vertex).map(|_| ())
    }

    fn incident(&self, vertex: usize) -> Result<&Vec<EdgeRecord>> {
        self.adjacency
            .get(vertex)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }

    // Callers validate both ids before touching the adjacency lists.
    fn set_weight(&mut self, from: usize, to: usize, weight: f64) -> bool {
        match self.adjacency[from]
            .iter_mut()
            .find(|record| record.neighbour == to)
        {
            Some(record) => {
                record.weight = weight;
                true
            }
            None => false,
        }
    }

    fn push_record(&mut self, from: usize, to: usize, weight: f64) {
        self.adjacency[from].push(EdgeRecord {
            neighbour: to,
            weight,
        });
    }

    fn remove_record(&mut self, from: usize, to: usize) -> bool {
        let records = &mut self.adjacency[from];
        match records.iter().position(|record| record.neighbour == to) {
            Some(index) => {
                records.remove(index);
                true
            }
            None => false,
        }
    }
}
