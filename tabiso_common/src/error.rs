use thiserror::Error;

/// Reasons a graph or table cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGraph {
    /// `from -> to` exists with one weight but `to -> from` is missing or differs.
    #[error("edge {from}-{to} has weight {forward} but the reverse direction has {}", display_weight(.reverse))]
    Asymmetric {
        /// Vertex the forward edge starts from.
        from: String,
        /// Vertex the forward edge points to.
        to: String,
        /// Weight of the forward edge.
        forward: i64,
        /// Weight of the reverse edge, if any.
        reverse: Option<i64>,
    },

    /// A vertex lists itself as a neighbor.
    #[error("self-loop on vertex {0}")]
    SelfLoop(String),

    /// An edge weight is zero or negative.
    #[error("edge {from}-{to} has non-positive weight {weight}")]
    NonPositiveWeight {
        /// One endpoint.
        from: String,
        /// The other endpoint.
        to: String,
        /// The rejected weight.
        weight: i64,
    },

    /// A matrix row does not have as many entries as there are rows.
    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// 1-based index of the offending row.
        row: usize,
        /// Entries found in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// A neighbor is referenced that is not itself a vertex of the graph.
    #[error("vertex {vertex} lists unknown neighbor {neighbor}")]
    UnknownNeighbor {
        /// The vertex whose adjacency mentions the neighbor.
        vertex: String,
        /// The missing neighbor.
        neighbor: String,
    },

    /// The same undirected edge was declared twice with different weights.
    #[error("edge {from}-{to} declared with weights {first} and {second}")]
    ConflictingWeight {
        /// One endpoint.
        from: String,
        /// The other endpoint.
        to: String,
        /// Weight seen first.
        first: i64,
        /// Conflicting weight seen later.
        second: i64,
    },
}

fn display_weight(weight: &Option<i64>) -> String {
    weight.map_or_else(|| "no edge".to_string(), |w| w.to_string())
}

/// Errors produced while turning exercise text into graphs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The matrix text contains no rows.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// The edge list declares no vertices.
    #[error("graph is empty")]
    EmptyGraph,

    /// A line of the edge list could not be understood.
    #[error("invalid edge on line {line}: '{text}'")]
    BadEdge {
        /// 1-based line number.
        line: usize,
        /// The offending line as written.
        text: String,
    },

    /// A table cell is a number too large to be a weight.
    #[error("cell in row {row}, column {col} is out of range: '{text}'")]
    BadCell {
        /// 1-based row.
        row: usize,
        /// 1-based column.
        col: usize,
        /// The cell as written.
        text: String,
    },

    /// No requested vertex labels were given.
    #[error("no target vertices given")]
    NoTargets,

    /// The parsed structure violates the graph invariants.
    #[error(transparent)]
    Malformed(#[from] MalformedGraph),
}
