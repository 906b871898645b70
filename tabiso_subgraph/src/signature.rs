//! Local vertex invariants used to prune impossible correspondences.
//!
//! Two vertices with different signatures can never be matched by an
//! isomorphism. Every component is a sorted multiset, so the value does not
//! depend on adjacency iteration order.

use itertools::Itertools;
use tabiso_common::{Graph, Vertex, Weight};

use crate::index::GraphIndex;

/// Invariant of a single vertex.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signature {
    /// Degree and sorted neighbor degrees.
    Unweighted {
        /// Number of neighbors.
        degree: usize,
        /// Degrees of the neighbors, ascending.
        neighbor_degrees: Vec<usize>,
    },
    /// Adds incident weights and weight/neighbor-degree pairs.
    Weighted {
        /// Number of neighbors.
        degree: usize,
        /// Degrees of the neighbors, ascending.
        neighbor_degrees: Vec<usize>,
        /// Weights of incident edges, ascending.
        weights: Vec<Weight>,
        /// `(edge weight, neighbor degree)` per incident edge, ascending.
        weighted_neighbor_degrees: Vec<(Weight, usize)>,
    },
}

impl Signature {
    /// Computes the signature of `vertex` in `graph`.
    ///
    /// Returns `None` if the vertex is not part of the graph.
    #[must_use]
    pub fn compute<V: Vertex>(graph: &Graph<V>, vertex: &V, weighted: bool) -> Option<Self> {
        let neighbors = graph.neighbors(vertex)?;
        let incident = neighbors
            .iter()
            .map(|(n, &w)| (w, graph.degree(n).unwrap_or_default()));
        Some(Self::from_incident(incident, weighted))
    }

    /// Number of neighbors the vertex has.
    #[must_use]
    pub const fn degree(&self) -> usize {
        match self {
            Self::Unweighted { degree, .. } | Self::Weighted { degree, .. } => *degree,
        }
    }

    fn from_incident(incident: impl Iterator<Item = (Weight, usize)>, weighted: bool) -> Self {
        let pairs: Vec<(Weight, usize)> = incident.sorted_unstable().collect();
        let degree = pairs.len();
        let neighbor_degrees: Vec<usize> = pairs.iter().map(|&(_, d)| d).sorted_unstable().collect();

        if !weighted {
            return Self::Unweighted {
                degree,
                neighbor_degrees,
            };
        }

        // pairs are ordered by weight first
        let weights = pairs.iter().map(|&(w, _)| w).collect();
        Self::Weighted {
            degree,
            neighbor_degrees,
            weights,
            weighted_neighbor_degrees: pairs,
        }
    }
}

/// Signatures of every node of `index`, by node id.
pub(crate) fn signatures<V: Vertex>(index: &GraphIndex<'_, V>, weighted: bool) -> Vec<Signature> {
    (0..index.len())
        .map(|id| {
            let incident = index
                .neighbors(id)
                .iter()
                .map(|&(n, w)| (w, index.degree(n)));
            Signature::from_incident(incident, weighted)
        })
        .collect()
}
