//! Parsers for the textual exercise formats.
//!
//! The matching engine never reads text; these helpers sit in front of it and
//! produce [`Graph`] values from the two inputs an exercise provides: a
//! square distance table and a line-based edge list.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::{MalformedGraph, ParseError};
use crate::graph::Graph;
use crate::vertex::TableId;

lazy_static! {
    static ref TARGET_SPLIT: Regex = Regex::new(r"[\s,;]+").unwrap();
    static ref EDGE_SPLIT: Regex = Regex::new(r"[\s-]+").unwrap();
    static ref EDGE_PUNCT: Regex = Regex::new(r"[;,]").unwrap();
}

/// Dash look-alikes accepted between vertex labels.
const DASHES: [char; 3] = ['\u{2014}', '\u{2013}', '\u{2212}'];

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Converts one table cell. Anything that is not a plain non-negative
/// integer counts as an empty cell.
///
/// Returns `None` for a run of digits that does not fit a weight.
#[must_use]
pub fn cell_value(cell: &str, weighted: bool) -> Option<i64> {
    let cell = cell.trim();
    let value = if is_number(cell) {
        cell.parse::<i64>().ok()?
    } else {
        0
    };
    Some(match (weighted, value) {
        (true, v) => v,
        (false, 1) => 1,
        (false, _) => 0,
    })
}

/// Builds a table graph from rows of cell strings.
///
/// Only the upper triangle is read; it is mirrored into the lower one so a
/// table filled in on one side is still symmetric.
pub fn table_from_cells<S: AsRef<str>>(
    rows: &[Vec<S>],
    weighted: bool,
) -> Result<Graph<TableId>, ParseError> {
    if rows.is_empty() {
        return Err(ParseError::EmptyMatrix);
    }
    let n = rows.len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(MalformedGraph::NotSquare {
            row: i + 1,
            len: row.len(),
            expected: n,
        }
        .into());
    }

    let mut matrix = vec![vec![0_i64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let cell = rows[i][j].as_ref();
            let value = cell_value(cell, weighted).ok_or_else(|| ParseError::BadCell {
                row: i + 1,
                col: j + 1,
                text: cell.trim().to_string(),
            })?;
            matrix[i][j] = value;
            matrix[j][i] = value;
        }
    }

    Ok(Graph::from_matrix(&matrix)?)
}

/// Parses a whitespace separated square table.
pub fn parse_matrix(text: &str, weighted: bool) -> Result<Graph<TableId>, ParseError> {
    let rows: Vec<Vec<&str>> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();
    debug!("parsed {} table rows", rows.len());
    table_from_cells(&rows, weighted)
}

/// Parses a line-based edge list such as `A-B 13` or `A B`.
///
/// Labels are upper-cased. A line holding a single label declares an
/// isolated vertex.
pub fn parse_edges(text: &str, weighted: bool) -> Result<Graph<String>, ParseError> {
    let mut builder = Graph::builder();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim().to_uppercase();
        if line.is_empty() {
            continue;
        }
        let line = line.replace(DASHES, "-");
        let line = EDGE_PUNCT.replace_all(&line, " ");
        let tokens: Vec<&str> = EDGE_SPLIT.split(&line).filter(|t| !t.is_empty()).collect();

        let bad_edge = || ParseError::BadEdge {
            line: index + 1,
            text: raw.trim().to_string(),
        };

        match tokens.as_slice() {
            [] => continue,
            [only] => {
                builder.vertex((*only).to_string());
            }
            [u, v, .., w] if weighted && is_number(w) => {
                let weight = w.parse::<i64>().map_err(|_| bad_edge())?;
                builder.edge((*u).to_string(), (*v).to_string(), weight)?;
            }
            [u, v, ..] if !weighted => {
                builder.edge((*u).to_string(), (*v).to_string(), 1)?;
            }
            _ => return Err(bad_edge()),
        }
    }

    if builder.is_empty() {
        return Err(ParseError::EmptyGraph);
    }
    debug!("parsed edge list with {} vertices", builder.len());
    Ok(builder.build()?)
}

/// Parses the requested vertex labels, e.g. `"a, c; d"`.
pub fn parse_targets(text: &str) -> Result<BTreeSet<String>, ParseError> {
    let targets: BTreeSet<String> = TARGET_SPLIT
        .split(text.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .collect();
    if targets.is_empty() {
        return Err(ParseError::NoTargets);
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("7", true, 7)]
    #[case("7", false, 0)]
    #[case("1", false, 1)]
    #[case("x", true, 0)]
    #[case("-3", true, 0)]
    #[case(" 12 ", true, 12)]
    #[case("", true, 0)]
    fn cell_values(#[case] cell: &str, #[case] weighted: bool, #[case] expected: i64) {
        assert_eq!(cell_value(cell, weighted), Some(expected));
    }

    #[test]
    fn oversized_cell_is_an_error() {
        assert_eq!(cell_value("99999999999999999999", true), None);
        assert_eq!(
            parse_matrix("0 99999999999999999999\n1 0", true),
            Err(ParseError::BadCell {
                row: 1,
                col: 2,
                text: "99999999999999999999".to_string()
            })
        );
    }

    #[test]
    fn matrix_mirrors_upper_triangle() {
        let g = parse_matrix("0 7 9\n- 0 5\n- - 0\n", true).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.weight(&TableId::new(3), &TableId::new(1)), Some(9));
        assert_eq!(g.weight(&TableId::new(3), &TableId::new(2)), Some(5));
    }

    #[test]
    fn matrix_skips_blank_lines() {
        let g = parse_matrix("\n0 1\n\n1 0\n\n", false).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn unweighted_matrix_keeps_only_ones() {
        let g = parse_matrix("0 1 3\n1 0 1\n3 1 0", false).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(&TableId::new(1), &TableId::new(3)), None);
    }

    #[test]
    fn matrix_errors() {
        assert_eq!(parse_matrix("  \n", true), Err(ParseError::EmptyMatrix));
        assert!(matches!(
            parse_matrix("0 1\n1", true),
            Err(ParseError::Malformed(MalformedGraph::NotSquare { .. }))
        ));
    }

    #[test]
    fn weighted_edges_accept_several_spellings() {
        let g = parse_edges("a-b 5\nB\u{2014}C 7\na c; 9\n", true).unwrap();
        let a = "A".to_string();
        let b = "B".to_string();
        let c = "C".to_string();
        assert_eq!(g.weight(&a, &b), Some(5));
        assert_eq!(g.weight(&b, &c), Some(7));
        assert_eq!(g.weight(&a, &c), Some(9));
    }

    #[test]
    fn unweighted_edges_and_isolated_vertices() {
        let g = parse_edges("A-B\nB C\nD\n", false).unwrap();
        assert_eq!(g.len(), 4);
        assert_eq!(g.degree(&"D".to_string()), Some(0));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let g = parse_edges("A-B 3\nB-A 3\n", true).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[rstest]
    #[case("A-B 3\nB-A 4", true)]
    #[case("A-A 3", true)]
    #[case("A-A", false)]
    fn malformed_edge_lists(#[case] text: &str, #[case] weighted: bool) {
        assert!(matches!(
            parse_edges(text, weighted),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn weighted_edge_without_weight_is_rejected() {
        assert_eq!(
            parse_edges("A-B 1\nA-C\n", true),
            Err(ParseError::BadEdge {
                line: 2,
                text: "A-C".to_string()
            })
        );
    }

    #[test]
    fn empty_edge_list_is_rejected() {
        assert_eq!(parse_edges("\n \n", false), Err(ParseError::EmptyGraph));
    }

    #[test]
    fn targets_are_split_and_uppercased() {
        let t = parse_targets(" a, c;d  b ").unwrap();
        assert_eq!(
            t.into_iter().collect::<Vec<_>>(),
            vec!["A", "B", "C", "D"]
        );
        assert_eq!(parse_targets(" ,; "), Err(ParseError::NoTargets));
    }
}
