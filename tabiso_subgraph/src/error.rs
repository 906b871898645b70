use tabiso_common::{MalformedGraph, Weight};
use thiserror::Error;

/// Classified failures of a solve request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// An input graph violates the graph invariants.
    #[error(transparent)]
    MalformedGraph(#[from] MalformedGraph),

    /// The graph and the table have different vertex counts.
    #[error("dimensions do not match: graph has {source_count} vertices, table has {target_count}")]
    DimensionMismatch {
        /// Vertices in the graph.
        source_count: usize,
        /// Vertices in the table.
        target_count: usize,
    },

    /// The sorted degree sequences differ.
    #[error("vertex degrees do not match\n\ngraph degrees: {source_degrees:?}\ntable degrees: {target_degrees:?}")]
    DegreeMismatch {
        /// Sorted degrees of the graph.
        source_degrees: Vec<usize>,
        /// Sorted degrees of the table.
        target_degrees: Vec<usize>,
    },

    /// The sorted edge weights differ.
    #[error("edge weights do not match\n\ngraph weights: {source_weights:?}\ntable weights: {target_weights:?}")]
    WeightMismatch {
        /// Sorted weights of the graph.
        source_weights: Vec<Weight>,
        /// Sorted weights of the table.
        target_weights: Vec<Weight>,
    },

    /// Requested labels are not vertices of the graph.
    #[error("vertices {labels:?} are not in the graph")]
    UnknownVertex {
        /// The offending labels, sorted.
        labels: Vec<String>,
    },

    /// Structural checks passed but no bijection preserves the edges.
    #[error("the graph cannot be matched to the table")]
    NoIsomorphism,
}
