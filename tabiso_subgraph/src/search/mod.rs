//! Backtracking enumeration of complete correspondences.
//!
//! Source nodes are bound in most-constrained-first order. Each binding is
//! checked against the already bound neighbors only; the pairwise edge
//! constraint is therefore tested exactly once, when its second endpoint is
//! bound. Complete assignments additionally pass a two-way edge check before
//! they are recorded.

use tabiso_common::{Enumeration, Vertex};
use tracing::trace;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::assignment::Assignment;
use crate::candidates::CandidateIndex;
use crate::index::{GraphIndex, NodeId};
use crate::isomorphism::preserves_edges;
use crate::progress::Progress;

pub mod heuristics;
pub(crate) use heuristics::most_constrained_order;

/// Everything the recursion reads but never changes.
pub(crate) struct SearchContext<'a, 'g, S: Vertex, T: Vertex> {
    pub(crate) source: &'a GraphIndex<'g, S>,
    pub(crate) target: &'a GraphIndex<'g, T>,
    pub(crate) candidates: &'a CandidateIndex,
    pub(crate) order: Vec<NodeId>,
    pub(crate) weighted: bool,
    pub(crate) enumeration: Enumeration,
    pub(crate) progress: &'a Progress,
}

impl<S: Vertex, T: Vertex> SearchContext<'_, '_, S, T> {
    fn new_assignment(&self) -> Assignment {
        Assignment::new(self.source.len(), self.target.len())
    }

    fn stop(&self, out: &[Vec<NodeId>]) -> bool {
        self.enumeration == Enumeration::First && !out.is_empty()
    }

    /// Binding `s -> t` agrees with every bound neighbor of `s`.
    fn consistent(&self, st: &Assignment, s: NodeId, t: NodeId) -> bool {
        self.source.neighbors(s).iter().all(|&(s2, w_s)| {
            let Some(t2) = st.mapped_to(s2) else {
                return true;
            };
            match self.target.weight(t, t2) {
                None => false,
                Some(w_t) => !self.weighted || w_t == w_s,
            }
        })
    }
}

/// Runs the search and returns the image of every isomorphism found, in
/// depth-first discovery order.
#[cfg(feature = "rayon")]
pub(crate) fn run<S: Vertex, T: Vertex>(
    ctx: &SearchContext<'_, '_, S, T>,
    parallel: bool,
) -> Vec<Vec<NodeId>> {
    if parallel {
        run_parallel(ctx)
    } else {
        run_sequential(ctx)
    }
}

/// Runs the search and returns the image of every isomorphism found, in
/// depth-first discovery order.
#[cfg(not(feature = "rayon"))]
pub(crate) fn run<S: Vertex, T: Vertex>(
    ctx: &SearchContext<'_, '_, S, T>,
    _parallel: bool,
) -> Vec<Vec<NodeId>> {
    run_sequential(ctx)
}

fn run_sequential<S: Vertex, T: Vertex>(ctx: &SearchContext<'_, '_, S, T>) -> Vec<Vec<NodeId>> {
    let mut st = ctx.new_assignment();
    let mut out = Vec::new();
    backtrack(ctx, 0, &mut st, &mut out);
    out
}

/// Splits on the candidates of the first node in the order. Branch results
/// are concatenated in candidate order, matching the sequential output.
#[cfg(feature = "rayon")]
fn run_parallel<S: Vertex, T: Vertex>(ctx: &SearchContext<'_, '_, S, T>) -> Vec<Vec<NodeId>> {
    let Some(&first) = ctx.order.first() else {
        return run_sequential(ctx);
    };

    let branches: Vec<Vec<Vec<NodeId>>> = ctx
        .candidates
        .for_source(first)
        .par_iter()
        .map(|&t| {
            let mut st = ctx.new_assignment();
            let mut out = Vec::new();
            ctx.progress.inc_tried();
            with_mapping(&mut st, first, t, |st_inner| {
                backtrack(ctx, 1, st_inner, &mut out);
            });
            out
        })
        .collect();

    let mut out: Vec<Vec<NodeId>> = branches.into_iter().flatten().collect();
    if ctx.enumeration == Enumeration::First {
        out.truncate(1);
    }
    out
}

pub(crate) fn backtrack<S: Vertex, T: Vertex>(
    ctx: &SearchContext<'_, '_, S, T>,
    depth: usize,
    st: &mut Assignment,
    out: &mut Vec<Vec<NodeId>>,
) {
    let Some(&s) = ctx.order.get(depth) else {
        record(ctx, st, out);
        return;
    };

    for &t in ctx.candidates.for_source(s) {
        if ctx.stop(out) {
            return;
        }
        if st.is_used(t) {
            continue;
        }
        ctx.progress.inc_tried();
        if !ctx.consistent(st, s, t) {
            ctx.progress.inc_rejected();
            trace!("depth {}: node {} -> {} rejected", depth, s, t);
            continue;
        }
        with_mapping(st, s, t, |st_inner| {
            backtrack(ctx, depth + 1, st_inner, out);
        });
    }
}

fn record<S: Vertex, T: Vertex>(
    ctx: &SearchContext<'_, '_, S, T>,
    st: &Assignment,
    out: &mut Vec<Vec<NodeId>>,
) {
    debug_assert!(st.is_complete());
    let Some(image) = st.image() else {
        return;
    };
    if preserves_edges(ctx.source, ctx.target, &image, ctx.weighted) {
        ctx.progress.inc_found();
        trace!("recorded isomorphism over {} nodes", st.len());
        out.push(image);
    } else {
        ctx.progress.inc_rejected();
        trace!("complete assignment {:?} failed the edge check", image);
    }
}

/// Scoped helper that maps `s -> t`, runs `f`, then unmaps.
fn with_mapping(st: &mut Assignment, s: NodeId, t: NodeId, f: impl FnOnce(&mut Assignment)) {
    st.map(s, t);
    f(st);
    st.unmap(s, t);
}
