//! Graph-to-table isomorphism matching.
//!
//! Given a graph with labelled vertices and a table whose rows and columns
//! are numbered positions, the engine finds every relabelling of the
//! positions that turns the table into the graph, then reports which
//! positions the requested labels can occupy.
//!
//! The pipeline runs strictly in order: structural validation, per-vertex
//! signatures, candidate sets, backtracking search, aggregation.
//!
//! ```ignore
//! use std::collections::BTreeSet;
//! use tabiso_common::parse::{parse_edges, parse_matrix};
//!
//! let graph = parse_edges("A-B 5\nB-C 7\nA-C 9", true)?;
//! let table = parse_matrix("0 7 9\n7 0 5\n9 5 0", true)?;
//! let requested: BTreeSet<String> = ["A".to_string()].into();
//! let positions = tabiso_subgraph::solve(&graph, &table, &requested, true)?;
//! ```

mod aggregate;
mod assignment;
mod candidates;
mod error;
mod index;
mod isomorphism;
mod progress;
mod search;
mod signature;
pub mod validate;

use std::collections::BTreeSet;

use tabiso_common::{Config, Graph, Vertex};
use tracing::{debug, info};

use crate::candidates::CandidateIndex;
use crate::index::GraphIndex;
use crate::progress::Progress;
use crate::search::{SearchContext, most_constrained_order};

pub use crate::error::SolveError;
pub use crate::isomorphism::{Isomorphism, IsomorphismSet};
pub use crate::progress::SearchStats;
pub use crate::signature::Signature;

/// Finds the table positions the requested graph vertices can occupy.
///
/// Searches exhaustively, comparing weights when `weighted` is set.
pub fn solve<S: Vertex, T: Vertex>(
    source: &Graph<S>,
    target: &Graph<T>,
    requested: &BTreeSet<S>,
    weighted: bool,
) -> Result<BTreeSet<T>, SolveError> {
    solve_with_config(source, target, requested, &Config::with_weights(weighted))
}

/// Like [`solve`] with explicit configuration.
pub fn solve_with_config<S: Vertex, T: Vertex>(
    source: &Graph<S>,
    target: &Graph<T>,
    requested: &BTreeSet<S>,
    config: &Config,
) -> Result<BTreeSet<T>, SolveError> {
    Matcher::new(source, target, config).solve(requested)
}

/// Entry point for isomorphism searches between a graph and a table.
///
/// Holds no state between calls; every method recomputes signatures and
/// candidates from the graphs it borrows.
pub struct Matcher<'s, 't, 'cfg, S: Vertex, T: Vertex> {
    /// The labelled graph.
    source: &'s Graph<S>,
    /// The positional table.
    target: &'t Graph<T>,
    /// Configuration settings for the matcher.
    config: &'cfg Config,
}

impl<'s, 't, 'cfg, S: Vertex, T: Vertex> Matcher<'s, 't, 'cfg, S, T> {
    /// Creates a matcher for one graph/table pair.
    #[must_use]
    pub const fn new(source: &'s Graph<S>, target: &'t Graph<T>, config: &'cfg Config) -> Self {
        Self {
            source,
            target,
            config,
        }
    }

    /// Whether this match compares edge weights.
    #[must_use]
    pub fn weighted(&self) -> bool {
        self.config.weight_mode.is_weighted(self.source)
    }

    /// Fails with [`SolveError::UnknownVertex`] if a requested label is not
    /// a vertex of the graph.
    pub fn check_requested(&self, requested: &BTreeSet<S>) -> Result<(), SolveError> {
        aggregate::check_requested(self.source, requested)
    }

    /// Images of the requested labels across every isomorphism.
    ///
    /// Unknown labels are reported before any structural check.
    pub fn solve(&self, requested: &BTreeSet<S>) -> Result<BTreeSet<T>, SolveError> {
        self.check_requested(requested)?;
        let isomorphisms = self.enumerate()?;
        let result = isomorphisms.images(requested)?;
        debug!("{} requested labels resolve to {} positions", requested.len(), result.len());
        Ok(result)
    }

    /// Enumerates the isomorphisms from the graph onto the table.
    pub fn enumerate(&self) -> Result<IsomorphismSet<S, T>, SolveError> {
        let weighted = self.weighted();
        validate::validate(self.source, self.target, weighted)?;

        let source_index = GraphIndex::build(self.source);
        let target_index = GraphIndex::build(self.target);

        let candidates = CandidateIndex::build(
            &signature::signatures(&source_index, weighted),
            &signature::signatures(&target_index, weighted),
        );
        if let Some(s) = candidates.first_empty() {
            debug!("vertex {} has no candidate position", source_index.vertex(s));
            return Err(SolveError::NoIsomorphism);
        }

        info!(
            "starting isomorphism search: {} vertices, {} candidates, weighted: {}",
            source_index.len(),
            candidates.total(),
            weighted
        );

        let progress = Progress::new();
        let ctx = SearchContext {
            source: &source_index,
            target: &target_index,
            candidates: &candidates,
            order: most_constrained_order(&candidates),
            weighted,
            enumeration: self.config.enumeration,
            progress: &progress,
        };
        let mut images = search::run(&ctx, self.config.parallel);
        images.sort_unstable();

        let stats = progress.snapshot();
        info!(
            "search complete: found {} isomorphisms ({} candidates tried, {} rejected)",
            images.len(),
            stats.candidates_tried,
            stats.candidates_rejected
        );

        if images.is_empty() {
            return Err(SolveError::NoIsomorphism);
        }

        let items = images
            .iter()
            .map(|image| Isomorphism::from_image(&source_index, &target_index, image))
            .collect();
        Ok(IsomorphismSet { items, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of_six() -> Graph<String> {
        let mut b = Graph::builder();
        for (u, v) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "F")] {
            b.edge(u.to_string(), v.to_string(), 1).unwrap();
        }
        b.build().unwrap()
    }

    fn square_and_edge() -> Graph<tabiso_common::TableId> {
        Graph::from_matrix(&[
            vec![0, 1, 0, 1, 0, 0],
            vec![1, 0, 1, 0, 0, 0],
            vec![0, 1, 0, 1, 0, 0],
            vec![1, 0, 1, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 1],
            vec![0, 0, 0, 0, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn vertex_without_candidates_ends_search_before_it_starts() {
        let graph = path_of_six();
        let table = square_and_edge();
        // same degree multiset, so validation passes
        validate::validate(&graph, &table, false).unwrap();

        let source_index = GraphIndex::build(&graph);
        let target_index = GraphIndex::build(&table);
        let candidates = CandidateIndex::build(
            &signature::signatures(&source_index, false),
            &signature::signatures(&target_index, false),
        );
        let empty = candidates.first_empty().unwrap();
        assert!(matches!(source_index.vertex(empty).as_str(), "A" | "F"));

        let config = Config::with_weights(false);
        let matcher = Matcher::new(&graph, &table, &config);
        assert_eq!(matcher.enumerate().unwrap_err(), SolveError::NoIsomorphism);
    }

    #[test]
    fn matcher_reports_weight_mode() {
        let graph = path_of_six();
        let table = square_and_edge();
        let config = Config::default();
        assert!(!Matcher::new(&graph, &table, &config).weighted());
    }
}
