use std::collections::BTreeSet;

use tabiso_common::{Graph, Vertex};

use crate::error::SolveError;
use crate::isomorphism::Isomorphism;

/// Fails with [`SolveError::UnknownVertex`] if any requested label is not a
/// vertex of `source`.
pub(crate) fn check_requested<S: Vertex>(
    source: &Graph<S>,
    requested: &BTreeSet<S>,
) -> Result<(), SolveError> {
    unknown_labels(requested, |v| source.contains(v))
}

fn unknown_labels<S: Vertex>(
    requested: &BTreeSet<S>,
    known: impl Fn(&S) -> bool,
) -> Result<(), SolveError> {
    let labels: Vec<String> = requested
        .iter()
        .filter(|v| !known(*v))
        .map(ToString::to_string)
        .collect();
    if labels.is_empty() {
        Ok(())
    } else {
        Err(SolveError::UnknownVertex { labels })
    }
}

/// Union, over every isomorphism, of the images of the requested labels.
pub(crate) fn images<S: Vertex, T: Vertex>(
    isomorphisms: &[Isomorphism<S, T>],
    requested: &BTreeSet<S>,
) -> Result<BTreeSet<T>, SolveError> {
    if let Some(first) = isomorphisms.first() {
        unknown_labels(requested, |v| first.contains(v))?;
    }

    let result: BTreeSet<T> = isomorphisms
        .iter()
        .flat_map(|iso| requested.iter().filter_map(|v| iso.get(v)))
        .cloned()
        .collect();

    debug_assert!(
        isomorphisms.is_empty() || requested.is_empty() || !result.is_empty(),
        "every isomorphism maps every source vertex"
    );
    Ok(result)
}
