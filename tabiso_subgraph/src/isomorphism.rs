//! Complete correspondences found by the search.

use std::collections::{BTreeMap, BTreeSet};

use tabiso_common::Vertex;

use crate::aggregate;
use crate::error::SolveError;
use crate::index::{GraphIndex, NodeId};
use crate::progress::SearchStats;

/// A bijection from source vertices to target vertices preserving every edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Isomorphism<S: Vertex, T: Vertex> {
    mapping: BTreeMap<S, T>,
}

impl<S: Vertex, T: Vertex> Isomorphism<S, T> {
    pub(crate) fn from_image(
        source: &GraphIndex<'_, S>,
        target: &GraphIndex<'_, T>,
        image: &[NodeId],
    ) -> Self {
        let mapping = image
            .iter()
            .enumerate()
            .map(|(s, &t)| (source.vertex(s).clone(), target.vertex(t).clone()))
            .collect();
        Self { mapping }
    }

    /// Image of `vertex`.
    #[must_use]
    pub fn get(&self, vertex: &S) -> Option<&T> {
        self.mapping.get(vertex)
    }

    /// Returns true if `vertex` is a source vertex of this mapping.
    #[must_use]
    pub fn contains(&self, vertex: &S) -> bool {
        self.mapping.contains_key(vertex)
    }

    /// Pairs in ascending source order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &T)> + '_ {
        self.mapping.iter()
    }

    /// Number of mapped vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Returns true for the mapping between two empty graphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// The underlying mapping.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<S, T> {
        &self.mapping
    }
}

/// Every isomorphism found by one search.
#[derive(Clone, Debug)]
pub struct IsomorphismSet<S: Vertex, T: Vertex> {
    /// The isomorphisms, ordered by their target images.
    pub items: Vec<Isomorphism<S, T>>,
    /// Work done while searching.
    pub stats: SearchStats,
}

impl<S: Vertex, T: Vertex> IsomorphismSet<S, T> {
    /// Number of isomorphisms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first isomorphism in image order.
    #[must_use]
    pub fn first(&self) -> Option<&Isomorphism<S, T>> {
        self.items.first()
    }

    /// Iterates the isomorphisms.
    pub fn iter(&self) -> impl Iterator<Item = &Isomorphism<S, T>> + '_ {
        self.items.iter()
    }

    /// Union of the images of `requested` across every isomorphism.
    pub fn images(&self, requested: &BTreeSet<S>) -> Result<BTreeSet<T>, SolveError> {
        aggregate::images(&self.items, requested)
    }
}

/// Checks that a complete image maps edges onto edges in both directions.
///
/// In unweighted mode only adjacency is compared.
pub(crate) fn preserves_edges<S: Vertex, T: Vertex>(
    source: &GraphIndex<'_, S>,
    target: &GraphIndex<'_, T>,
    image: &[NodeId],
    weighted: bool,
) -> bool {
    if source.edge_count() != target.edge_count() {
        return false;
    }

    let mut preimage = vec![0; image.len()];
    for (s, &t) in image.iter().enumerate() {
        preimage[t] = s;
    }

    let same = |a: Option<u64>, b: u64| a.is_some_and(|a| !weighted || a == b);

    let forward = source
        .edges()
        .all(|(a, b, w)| same(target.weight(image[a], image[b]), w));
    let reverse = target
        .edges()
        .all(|(x, y, w)| same(source.weight(preimage[x], preimage[y]), w));

    forward && reverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabiso_common::{Graph, TableId};

    #[test]
    fn edge_check_runs_both_directions() {
        let mut b = Graph::builder();
        b.edge("A", "B", 1).unwrap();
        b.vertex("C");
        let g = b.build().unwrap();
        let t = Graph::from_matrix(&[vec![0, 0, 1], vec![0, 0, 0], vec![1, 0, 0]]).unwrap();

        let gi = GraphIndex::build(&g);
        let ti = GraphIndex::build(&t);

        // A->1, B->3, C->2 keeps the single edge
        assert!(preserves_edges(&gi, &ti, &[0, 2, 1], true));
        // A->1, B->2, C->3 sends A-B onto a non-edge
        assert!(!preserves_edges(&gi, &ti, &[0, 1, 2], false));
    }

    #[test]
    fn weights_ignored_when_unweighted() {
        let mut b = Graph::builder();
        b.edge("A", "B", 4).unwrap();
        let g = b.build().unwrap();
        let t = Graph::from_matrix(&[vec![0, 9], vec![9, 0]]).unwrap();
        let gi = GraphIndex::build(&g);
        let ti = GraphIndex::build(&t);

        assert!(preserves_edges(&gi, &ti, &[0, 1], false));
        assert!(!preserves_edges(&gi, &ti, &[0, 1], true));
    }

    #[test]
    fn mapping_is_keyed_by_labels() {
        let mut b = Graph::builder();
        b.edge("A", "B", 1).unwrap();
        let g = b.build().unwrap();
        let t = Graph::from_matrix(&[vec![0, 1], vec![1, 0]]).unwrap();
        let iso = Isomorphism::from_image(&GraphIndex::build(&g), &GraphIndex::build(&t), &[1, 0]);

        assert_eq!(iso.get(&"A"), Some(&TableId::new(2)));
        assert_eq!(iso.get(&"B"), Some(&TableId::new(1)));
        assert!(iso.contains(&"A"));
        assert_eq!(iso.len(), 2);
    }
}
