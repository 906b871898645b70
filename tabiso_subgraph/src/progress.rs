use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every branch of one search.
#[derive(Debug, Default)]
pub(crate) struct Progress {
    tried: AtomicU64,
    rejected: AtomicU64,
    found: AtomicU64,
}

/// Summary of the work done by a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate targets considered for extension.
    pub candidates_tried: u64,
    /// Candidates rejected by neighbor consistency or the final edge check.
    pub candidates_rejected: u64,
    /// Complete isomorphisms recorded.
    pub isomorphisms_found: u64,
}

impl Progress {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn inc_tried(&self) {
        self.tried.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_found(&self) {
        self.found.fetch_add(1, Ordering::Relaxed);
    }

    /// Read a snapshot for reporting.
    pub(crate) fn snapshot(&self) -> SearchStats {
        SearchStats {
            candidates_tried: self.tried.load(Ordering::Relaxed),
            candidates_rejected: self.rejected.load(Ordering::Relaxed),
            isomorphisms_found: self.found.load(Ordering::Relaxed),
        }
    }
}
