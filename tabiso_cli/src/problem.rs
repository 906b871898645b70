use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fs;

use serde::Serialize;
use tabiso_common::parse::{parse_edges, parse_matrix, parse_targets};
use tabiso_common::{Config, Graph, ParseError, TableId, WeightMode};
use tabiso_subgraph::{Matcher, SolveError};
use tracing::{debug, info, warn};

use crate::args::Input;
use crate::exercise::Exercise;

/// One graph/table pair and the labels asked about.
#[derive(Debug)]
pub struct Problem {
    /// The labelled graph.
    pub graph: Graph<String>,
    /// The numbered table.
    pub table: Graph<TableId>,
    /// Labels asked about; `None` prints whole mappings.
    pub targets: Option<BTreeSet<String>>,
}

/// Everything one search produced, ready for printing.
#[derive(Debug, Serialize)]
pub struct Outcome {
    /// Whether weights were compared.
    pub weighted: bool,
    /// The requested labels, if any.
    pub targets: Option<Vec<String>>,
    /// Union of the positions the requested labels occupy.
    pub positions: Vec<u32>,
    /// Every isomorphism found, as label to position.
    pub mappings: Vec<BTreeMap<String, u32>>,
    /// Candidates the search considered.
    pub candidates_tried: u64,
}

impl Problem {
    /// Loads the inputs named on the command line.
    ///
    /// The edge list decides the weight mode when it is `Auto`; the table
    /// text is then read the same way.
    pub fn load(input: &Input, mode: WeightMode) -> Result<Self, Box<dyn Error>> {
        let targets = input.targets().map(parse_targets).transpose()?;

        let (graph, table) = match input {
            Input::Text { matrix, edges, .. } => {
                let graph = read_edges(&fs::read_to_string(edges)?, mode)?;
                let weighted = mode.is_weighted(&graph);
                debug!("reading table {} (weighted: {})", matrix.display(), weighted);
                let table = parse_matrix(&fs::read_to_string(matrix)?, weighted)?;
                (graph, table)
            }
            Input::Exercise { file, .. } => {
                let exercise = Exercise::load(file)?;
                (exercise.to_graph()?, exercise.to_table()?)
            }
        };

        info!(
            "loaded graph with {} vertices and table with {} positions",
            graph.len(),
            table.len()
        );
        Ok(Self {
            graph,
            table,
            targets,
        })
    }

    /// Runs the matcher.
    pub fn solve(&self, config: &Config) -> Result<Outcome, SolveError> {
        let matcher = Matcher::new(&self.graph, &self.table, config);
        if let Some(targets) = &self.targets {
            matcher.check_requested(targets)?;
        }

        let found = matcher.enumerate()?;
        let positions = match &self.targets {
            Some(targets) => found.images(targets)?.into_iter().map(u32::from).collect(),
            None => Vec::new(),
        };
        let mappings = found
            .iter()
            .map(|iso| {
                iso.iter()
                    .map(|(label, position)| (label.clone(), position.position()))
                    .collect()
            })
            .collect();

        Ok(Outcome {
            weighted: matcher.weighted(),
            targets: self.targets.as_ref().map(|t| t.iter().cloned().collect()),
            positions,
            mappings,
            candidates_tried: found.stats.candidates_tried,
        })
    }
}

/// Parses the edge list, falling back to the unweighted reading when the
/// mode is `Auto` and some line carries no weight.
fn read_edges(text: &str, mode: WeightMode) -> Result<Graph<String>, ParseError> {
    match mode {
        WeightMode::Weighted => parse_edges(text, true),
        WeightMode::Unweighted => parse_edges(text, false),
        WeightMode::Auto => match parse_edges(text, true) {
            Err(ParseError::BadEdge { line, .. }) => {
                warn!(
                    "edge list line {} has no weight, ignoring every edge weight",
                    line
                );
                parse_edges(text, false)
            }
            other => other,
        },
    }
}
