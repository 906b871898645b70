//! Partial correspondence between source and target nodes.

use contracts::*;

use crate::index::NodeId;

/// Source -> target mapping under construction, plus the used target set.
#[derive(Clone, Debug)]
pub(crate) struct Assignment {
    /// Source node -> target node.
    source_to_target: Vec<Option<NodeId>>,
    /// Target node -> already taken.
    used: Vec<bool>,
    /// Number of mapped source nodes.
    assigned: usize,
}

impl Assignment {
    /// Creates an empty assignment between graphs of the given sizes.
    #[debug_ensures(ret.is_consistent())]
    pub(crate) fn new(source_len: usize, target_len: usize) -> Self {
        Self {
            source_to_target: vec![None; source_len],
            used: vec![false; target_len],
            assigned: 0,
        }
    }

    /// Checks that the mapping is injective and the bookkeeping agrees.
    pub(crate) fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.used.len()];
        let mut count = 0;
        for t in self.source_to_target.iter().flatten() {
            if seen[*t] {
                return false;
            }
            seen[*t] = true;
            count += 1;
        }
        count == self.assigned && seen == self.used
    }

    pub(crate) fn is_mapped(&self, s: NodeId) -> bool {
        self.source_to_target[s].is_some()
    }

    pub(crate) fn mapped_to(&self, s: NodeId) -> Option<NodeId> {
        self.source_to_target[s]
    }

    pub(crate) fn is_used(&self, t: NodeId) -> bool {
        self.used[t]
    }

    #[debug_requires(!self.is_mapped(s))]
    #[debug_requires(!self.is_used(t))]
    #[debug_ensures(self.is_mapped(s) && self.is_used(t))]
    pub(crate) fn map(&mut self, s: NodeId, t: NodeId) {
        self.source_to_target[s] = Some(t);
        self.used[t] = true;
        self.assigned += 1;
    }

    #[debug_requires(self.mapped_to(s) == Some(t))]
    #[debug_ensures(!self.is_mapped(s) && !self.is_used(t))]
    pub(crate) fn unmap(&mut self, s: NodeId, t: NodeId) {
        self.source_to_target[s] = None;
        self.used[t] = false;
        self.assigned -= 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.assigned
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.assigned == self.source_to_target.len()
    }

    /// Target node per source node, once every source node is mapped.
    pub(crate) fn image(&self) -> Option<Vec<NodeId>> {
        self.source_to_target.iter().copied().collect()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, quickcheck};

    const SIZE: usize = 8;

    #[derive(Clone, Debug)]
    struct ArbitraryAssignmentOp {
        source: NodeId,
        target: NodeId,
        is_remove: bool, // If true, we try to remove; if false, we assign
    }

    impl Arbitrary for ArbitraryAssignmentOp {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                source: usize::arbitrary(g) % SIZE,
                target: usize::arbitrary(g) % SIZE,
                is_remove: bool::arbitrary(g),
            }
        }
    }

    quickcheck! {
        fn prop_assignment_ops_maintain_consistency(ops: Vec<ArbitraryAssignmentOp>) -> bool {
            let mut st = Assignment::new(SIZE, SIZE);

            for op in ops {
                if op.is_remove {
                    if let Some(t) = st.mapped_to(op.source) {
                        st.unmap(op.source, t);
                    }
                } else if !st.is_mapped(op.source) && !st.is_used(op.target) {
                    st.map(op.source, op.target);
                }

                if !st.is_consistent() {
                    return false;
                }
            }
            true
        }

        fn prop_image_is_injective(ops: Vec<ArbitraryAssignmentOp>) -> bool {
            let mut st = Assignment::new(SIZE, SIZE);
            for op in ops {
                if !op.is_remove && !st.is_mapped(op.source) && !st.is_used(op.target) {
                    st.map(op.source, op.target);
                }
            }
            let mut targets: Vec<NodeId> = (0..SIZE).filter_map(|s| st.mapped_to(s)).collect();
            let before = targets.len();
            targets.sort_unstable();
            targets.dedup();
            targets.len() == before && before == st.len()
        }
    }
}
