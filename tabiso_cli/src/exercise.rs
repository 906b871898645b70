//! Saved graph-editor exercises.
//!
//! An exercise file stores the drawn graph (nodes with screen positions,
//! edges with an optional weight string) next to the table the student was
//! given, with cells kept as the raw strings typed into the grid.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tabiso_common::parse::table_from_cells;
use tabiso_common::{Graph, MalformedGraph, ParseError, TableId};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading an exercise.
#[derive(Debug, Error)]
pub enum ExerciseError {
    /// The file could not be read.
    #[error("cannot read exercise: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid exercise document.
    #[error("invalid exercise JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An edge refers to a node id that is not in the node list.
    #[error("edge refers to unknown node id {id}")]
    UnknownNode {
        /// The missing id.
        id: u64,
    },
    /// An edge weight is a number too large to use.
    #[error("edge {u}-{v} has out-of-range weight '{text}'")]
    BadWeight {
        /// Node id of one endpoint.
        u: u64,
        /// Node id of the other endpoint.
        v: u64,
        /// The weight as typed.
        text: String,
    },
    /// The drawn graph is not a valid simple graph.
    #[error(transparent)]
    Malformed(#[from] MalformedGraph),
    /// The table could not be read.
    #[error(transparent)]
    Table(#[from] ParseError),
}

/// A saved exercise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// The drawn graph.
    #[serde(default)]
    pub graph: EditorGraph,
    /// Table cells, row by row.
    #[serde(default)]
    pub matrix: Vec<Vec<String>>,
}

/// The graph as laid out in the editor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorGraph {
    /// Drawn vertices.
    #[serde(default)]
    pub nodes: Vec<EditorNode>,
    /// Drawn edges, each listed once.
    #[serde(default)]
    pub edges: Vec<EditorEdge>,
    /// Counter the editor uses to name the next node.
    #[serde(default)]
    pub node_counter: u64,
}

/// A vertex on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorNode {
    /// Id edges refer to.
    pub id: u64,
    /// Label shown on the canvas.
    pub name: String,
    /// Canvas x coordinate.
    #[serde(default)]
    pub x: f64,
    /// Canvas y coordinate.
    #[serde(default)]
    pub y: f64,
}

/// An edge between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorEdge {
    /// One endpoint.
    pub u: u64,
    /// The other endpoint.
    pub v: u64,
    /// Weight as typed; anything but digits means an unweighted edge.
    #[serde(default)]
    pub w: String,
}

impl EditorEdge {
    /// The numeric weight, 1 when none was typed.
    pub fn weight(&self) -> Result<i64, ExerciseError> {
        let w = self.w.trim();
        if w.is_empty() || !w.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(1);
        }
        w.parse().map_err(|_| ExerciseError::BadWeight {
            u: self.u,
            v: self.v,
            text: w.to_string(),
        })
    }
}

impl Exercise {
    /// Reads an exercise from disk.
    pub fn load(path: &Path) -> Result<Self, ExerciseError> {
        let text = std::fs::read_to_string(path)?;
        let exercise = Self::from_json(&text)?;
        debug!(
            "loaded exercise {} with {} nodes and a {}-row table",
            path.display(),
            exercise.graph.nodes.len(),
            exercise.matrix.len()
        );
        Ok(exercise)
    }

    /// Parses an exercise document.
    pub fn from_json(text: &str) -> Result<Self, ExerciseError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The drawn graph, vertices named by their editor labels.
    pub fn to_graph(&self) -> Result<Graph<String>, ExerciseError> {
        let names: BTreeMap<u64, &str> = self
            .graph
            .nodes
            .iter()
            .map(|n| (n.id, n.name.as_str()))
            .collect();
        let name = |id: u64| {
            names
                .get(&id)
                .map(|s| (*s).to_string())
                .ok_or(ExerciseError::UnknownNode { id })
        };

        let mut builder = Graph::builder();
        for node in &self.graph.nodes {
            builder.vertex(node.name.clone());
        }
        for edge in &self.graph.edges {
            builder.edge(name(edge.u)?, name(edge.v)?, edge.weight()?)?;
        }
        Ok(builder.build()?)
    }

    /// The table, with every positive cell read as an edge weight.
    ///
    /// Whether weights count is left to the search configuration.
    pub fn to_table(&self) -> Result<Graph<TableId>, ExerciseError> {
        Ok(table_from_cells(&self.matrix, true)?)
    }
}
