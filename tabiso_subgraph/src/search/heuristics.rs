use crate::candidates::CandidateIndex;
use crate::index::NodeId;

/// Most-constrained-first order: source nodes by ascending candidate count.
///
/// Ties keep ascending node order so the search is deterministic.
pub(crate) fn most_constrained_order(candidates: &CandidateIndex) -> Vec<NodeId> {
    let mut order: Vec<NodeId> = (0..candidates.len()).collect();
    order.sort_by_key(|&s| (candidates.for_source(s).len(), s));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Signature;

    fn sig(degree: usize) -> Signature {
        Signature::Unweighted {
            degree,
            neighbor_degrees: Vec::new(),
        }
    }

    #[test]
    fn rarest_signature_first() {
        // targets: three of degree 1, one of degree 2
        let target = vec![sig(1), sig(1), sig(2), sig(1)];
        let source = vec![sig(1), sig(2), sig(1), sig(1)];
        let idx = CandidateIndex::build(&source, &target);
        assert_eq!(most_constrained_order(&idx), vec![1, 0, 2, 3]);
    }
}
