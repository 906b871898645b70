//! Cheap structural checks run before any search.

use tabiso_common::{Graph, Vertex};
use tracing::debug;

use crate::error::SolveError;

/// Returns true if both graphs have the same number of vertices.
#[must_use]
pub fn same_size<S: Vertex, T: Vertex>(source: &Graph<S>, target: &Graph<T>) -> bool {
    source.len() == target.len()
}

/// Returns true if the sorted degree sequences are equal.
#[must_use]
pub fn same_degree_multiset<S: Vertex, T: Vertex>(source: &Graph<S>, target: &Graph<T>) -> bool {
    source.sorted_degrees() == target.sorted_degrees()
}

/// Returns true if the sorted edge weight lists are equal.
#[must_use]
pub fn same_weight_multiset<S: Vertex, T: Vertex>(source: &Graph<S>, target: &Graph<T>) -> bool {
    source.sorted_weights() == target.sorted_weights()
}

/// Runs the size, degree and (when `weighted`) weight checks in that order.
pub fn validate<S: Vertex, T: Vertex>(
    source: &Graph<S>,
    target: &Graph<T>,
    weighted: bool,
) -> Result<(), SolveError> {
    if !same_size(source, target) {
        debug!(
            "size mismatch: {} vs {} vertices",
            source.len(),
            target.len()
        );
        return Err(SolveError::DimensionMismatch {
            source_count: source.len(),
            target_count: target.len(),
        });
    }

    if !same_degree_multiset(source, target) {
        debug!("degree multisets differ");
        return Err(SolveError::DegreeMismatch {
            source_degrees: source.sorted_degrees(),
            target_degrees: target.sorted_degrees(),
        });
    }

    if weighted && !same_weight_multiset(source, target) {
        debug!("weight multisets differ");
        return Err(SolveError::WeightMismatch {
            source_weights: source.sorted_weights(),
            target_weights: target.sorted_weights(),
        });
    }

    Ok(())
}
