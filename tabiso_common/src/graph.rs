//! Immutable weighted adjacency graphs.
//!
//! Both sides of a match are represented by the same [`Graph`] type: the
//! hand-drawn graph keyed by string labels and the distance table keyed by
//! [`TableId`]. Construction validates symmetry, loops and weights once so
//! that the matching engine can rely on them without re-checking.

use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::trace;

use crate::error::MalformedGraph;
use crate::vertex::{TableId, Vertex};

/// Positive edge weight. Unweighted graphs use weight 1 everywhere.
pub type Weight = u64;

/// A finite, symmetric, loop-free weighted graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<V: Vertex> {
    /// Vertex -> (neighbor -> weight). Every vertex has an entry.
    adjacency: BTreeMap<V, BTreeMap<V, Weight>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<V: Vertex> Graph<V> {
    /// Builds a graph from a full adjacency mapping.
    ///
    /// Every vertex must be a key (isolated vertices map to an empty
    /// neighbor map) and every edge must be listed in both directions with
    /// the same weight.
    pub fn from_adjacency(adjacency: BTreeMap<V, BTreeMap<V, i64>>) -> Result<Self, MalformedGraph> {
        for (vertex, neighbors) in &adjacency {
            for (neighbor, &weight) in neighbors {
                if neighbor == vertex {
                    return Err(MalformedGraph::SelfLoop(vertex.to_string()));
                }
                if weight <= 0 {
                    return Err(MalformedGraph::NonPositiveWeight {
                        from: vertex.to_string(),
                        to: neighbor.to_string(),
                        weight,
                    });
                }
                let Some(back) = adjacency.get(neighbor) else {
                    return Err(MalformedGraph::UnknownNeighbor {
                        vertex: vertex.to_string(),
                        neighbor: neighbor.to_string(),
                    });
                };
                let reverse = back.get(vertex).copied();
                if reverse != Some(weight) {
                    return Err(MalformedGraph::Asymmetric {
                        from: vertex.to_string(),
                        to: neighbor.to_string(),
                        forward: weight,
                        reverse,
                    });
                }
            }
        }

        let adjacency = adjacency
            .into_iter()
            .map(|(vertex, neighbors)| {
                let neighbors = neighbors
                    .into_iter()
                    .map(|(n, w)| (n, w.unsigned_abs()))
                    .collect();
                (vertex, neighbors)
            })
            .collect();

        Ok(Self { adjacency })
    }

    /// Returns a builder for incremental construction.
    #[must_use]
    pub fn builder() -> GraphBuilder<V> {
        GraphBuilder::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns true if `vertex` belongs to the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Iterates the vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Neighbor -> weight mapping of `vertex`.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> Option<&BTreeMap<V, Weight>> {
        self.adjacency.get(vertex)
    }

    /// Number of neighbors of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(BTreeMap::len)
    }

    /// Weight of the edge `u`-`v`, if present.
    #[must_use]
    pub fn weight(&self, u: &V, v: &V) -> Option<Weight> {
        self.adjacency.get(u).and_then(|n| n.get(v)).copied()
    }

    /// Iterates every undirected edge once, as `(smaller, larger, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .filter(move |(v, _)| u < *v)
                .map(move |(v, &w)| (u, v, w))
        })
    }

    /// Total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// All edge weights, ascending, one entry per undirected edge.
    #[must_use]
    pub fn sorted_weights(&self) -> Vec<Weight> {
        self.edges().map(|(_, _, w)| w).sorted_unstable().collect()
    }

    /// All vertex degrees, ascending.
    #[must_use]
    pub fn sorted_degrees(&self) -> Vec<usize> {
        self.adjacency
            .values()
            .map(BTreeMap::len)
            .sorted_unstable()
            .collect()
    }

    /// Returns true if any edge carries a weight other than 1.
    #[must_use]
    pub fn has_nontrivial_weights(&self) -> bool {
        self.edges().any(|(_, _, w)| w > 1)
    }
}

impl Graph<TableId> {
    /// Builds a table graph from a square weight matrix.
    ///
    /// Row `i` becomes position `i + 1`. A zero cell means "no edge". The
    /// matrix must be symmetric with an empty diagonal.
    pub fn from_matrix(rows: &[Vec<i64>]) -> Result<Self, MalformedGraph> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().find_position(|row| row.len() != n) {
            return Err(MalformedGraph::NotSquare {
                row: i + 1,
                len: row.len(),
                expected: n,
            });
        }

        let mut adjacency: BTreeMap<TableId, BTreeMap<TableId, i64>> = (0..n)
            .map(|i| (TableId::from_row(i), BTreeMap::new()))
            .collect();

        for (i, row) in rows.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                if i == j {
                    return Err(MalformedGraph::SelfLoop(TableId::from_row(i).to_string()));
                }
                adjacency
                    .entry(TableId::from_row(i))
                    .or_default()
                    .insert(TableId::from_row(j), cell);
            }
        }

        trace!("matrix of size {} converted to adjacency", n);
        Self::from_adjacency(adjacency)
    }
}

/// Incremental construction of a [`Graph`] from vertices and edges.
///
/// Edges are recorded in both directions. Repeating an edge with the same
/// weight is a no-op.
#[derive(Clone, Debug)]
pub struct GraphBuilder<V: Vertex> {
    adjacency: BTreeMap<V, BTreeMap<V, i64>>,
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<V: Vertex> GraphBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a vertex, possibly isolated.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.adjacency.entry(vertex).or_default();
        self
    }

    /// Declares the undirected edge `u`-`v` with `weight`.
    pub fn edge(&mut self, u: V, v: V, weight: i64) -> Result<&mut Self, MalformedGraph> {
        if u == v {
            return Err(MalformedGraph::SelfLoop(u.to_string()));
        }
        if let Some(&first) = self.adjacency.get(&u).and_then(|n| n.get(&v)) {
            if first != weight {
                return Err(MalformedGraph::ConflictingWeight {
                    from: u.to_string(),
                    to: v.to_string(),
                    first,
                    second: weight,
                });
            }
            return Ok(self);
        }
        self.adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        Ok(self)
    }

    /// Number of vertices declared so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Validates and freezes the graph.
    pub fn build(self) -> Result<Graph<V>, MalformedGraph> {
        Graph::from_adjacency(self.adjacency)
    }
}
