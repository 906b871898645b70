use std::collections::HashMap;

use crate::index::NodeId;
use crate::signature::Signature;

/// Feasible target nodes for every source node, grouped by signature.
#[derive(Clone, Debug, Default)]
pub(crate) struct CandidateIndex {
    /// Source node id -> ascending target node ids.
    candidates: Vec<Vec<NodeId>>,
}

impl CandidateIndex {
    pub(crate) fn build(source: &[Signature], target: &[Signature]) -> Self {
        let mut by_signature: HashMap<&Signature, Vec<NodeId>> = HashMap::new();
        for (t, sig) in target.iter().enumerate() {
            by_signature.entry(sig).or_default().push(t);
        }

        let candidates = source
            .iter()
            .map(|sig| by_signature.get(sig).cloned().unwrap_or_default())
            .collect();

        Self { candidates }
    }

    pub(crate) fn for_source(&self, s: NodeId) -> &[NodeId] {
        &self.candidates[s]
    }

    pub(crate) fn len(&self) -> usize {
        self.candidates.len()
    }

    /// First source node with no candidate, if any.
    pub(crate) fn first_empty(&self) -> Option<NodeId> {
        self.candidates.iter().position(Vec::is_empty)
    }

    /// Sum of all candidate set sizes.
    pub(crate) fn total(&self) -> usize {
        self.candidates.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(degree: usize) -> Signature {
        Signature::Unweighted {
            degree,
            neighbor_degrees: vec![1; degree],
        }
    }

    #[test]
    fn groups_targets_by_signature() {
        let source = vec![sig(1), sig(2), sig(1)];
        let target = vec![sig(2), sig(1), sig(1)];
        let idx = CandidateIndex::build(&source, &target);

        assert_eq!(idx.len(), 3);
        assert_eq!(idx.for_source(0), &[1, 2]);
        assert_eq!(idx.for_source(1), &[0]);
        assert_eq!(idx.first_empty(), None);
        assert_eq!(idx.total(), 5);
    }

    #[test]
    fn reports_source_without_candidates() {
        let idx = CandidateIndex::build(&[sig(1), sig(3)], &[sig(1), sig(1)]);
        assert_eq!(idx.first_empty(), Some(1));
    }
}
